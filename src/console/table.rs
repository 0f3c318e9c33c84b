//! Plain-text contact table.

use crate::models::Contact;
use std::io::{self, Write};

const HEADERS: [&str; 5] = ["Contact name", "Last name", "First name", "Phone", "Email"];

/// Write `contacts` as an aligned table sorted by display name.
pub fn write_table<W: Write>(out: &mut W, contacts: &[&Contact]) -> io::Result<()> {
    let mut rows: Vec<[String; 5]> = contacts
        .iter()
        .map(|c| {
            [
                c.display_name(),
                c.last_name.clone(),
                c.first_name.clone(),
                c.phone.clone(),
                c.email.clone(),
            ]
        })
        .collect();
    rows.sort_by(|a, b| a[0].cmp(&b[0]));

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}
