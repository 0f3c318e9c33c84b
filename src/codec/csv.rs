//! CSV reader and writer for the fixed contact schema.
//!
//! Quoting follows RFC 4180: fields containing a comma, a double quote or a
//! line break are wrapped in double quotes and inner quotes are doubled.

use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::path::Path;
use tracing::debug;

/// Header labels, in the order they are written.
pub const HEADERS: [&str; 4] = ["Last name", "First name", "Mobile", "Email"];

const LINE_TERMINATOR: &str = "\r\n";

/// Parse CSV text into contacts, one per data row, in file order.
///
/// The first non-blank row is the header and must contain every label of
/// [`HEADERS`]; extra columns are ignored. Blank lines are skipped. Field
/// values are taken verbatim, without validation.
///
/// # Errors
///
/// Returns `StoreError::MalformedSchema` when the header is missing a label,
/// when a row has a different number of fields than the header, or when a
/// quoted field is never closed.
pub fn parse(input: &str) -> StoreResult<Vec<Contact>> {
    let mut records = RecordReader::new(input)
        .read_all()?
        .into_iter()
        .filter(|(_, fields)| !(fields.len() == 1 && fields[0].is_empty()));

    let Some((header_line, mut header)) = records.next() else {
        return Err(StoreError::MalformedSchema {
            line: 1,
            reason: "missing header row".to_string(),
        });
    };

    if let Some(first) = header.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut columns = [0usize; 4];
    for (column, label) in columns.iter_mut().zip(HEADERS) {
        *column = header.iter().position(|h| h == label).ok_or_else(|| {
            StoreError::MalformedSchema {
                line: header_line,
                reason: format!("missing column '{}'", label),
            }
        })?;
    }
    let [last_name, first_name, phone, email] = columns;

    records
        .map(|(line, mut fields)| {
            if fields.len() != header.len() {
                return Err(StoreError::MalformedSchema {
                    line,
                    reason: format!(
                        "expected {} fields, found {}",
                        header.len(),
                        fields.len()
                    ),
                });
            }

            Ok(Contact {
                last_name: std::mem::take(&mut fields[last_name]),
                first_name: std::mem::take(&mut fields[first_name]),
                phone: std::mem::take(&mut fields[phone]),
                email: std::mem::take(&mut fields[email]),
            })
        })
        .collect()
}

/// Read and parse a CSV file. Any I/O failure, including a missing file, is
/// returned to the caller.
pub fn parse_file(path: &Path) -> StoreResult<Vec<Contact>> {
    let input = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let contacts = parse(&input)?;
    debug!(path = %path.display(), count = contacts.len(), "Parsed CSV file");
    Ok(contacts)
}

/// Render the header row followed by one row per contact.
pub fn serialize_all<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let mut out = String::new();
    write_row(&mut out, HEADERS);
    for contact in contacts {
        write_row(
            &mut out,
            [
                contact.last_name.as_str(),
                contact.first_name.as_str(),
                contact.phone.as_str(),
                contact.email.as_str(),
            ],
        );
    }
    out
}

/// Write contacts to `path`, replacing any existing file. Returns the number
/// of contact rows written.
pub fn write_file<'a>(
    path: &Path,
    contacts: impl IntoIterator<Item = &'a Contact>,
) -> StoreResult<usize> {
    let contacts: Vec<&Contact> = contacts.into_iter().collect();
    let text = serialize_all(contacts.iter().copied());
    std::fs::write(path, text).map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), count = contacts.len(), "Wrote CSV file");
    Ok(contacts.len())
}

fn write_row(out: &mut String, fields: [&str; 4]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push_str(LINE_TERMINATOR);
}

fn write_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Nothing read for the current field yet.
    Start,
    Unquoted,
    Quoted,
    /// A `"` was read inside a quoted field: either an escaped quote or the end.
    QuoteInQuoted,
}

/// Splits CSV text into records of fields, remembering the line each record
/// starts on.
struct RecordReader<'a> {
    input: &'a str,
    state: FieldState,
    field: String,
    record: Vec<String>,
    records: Vec<(usize, Vec<String>)>,
    line: usize,
    record_line: usize,
}

impl<'a> RecordReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            state: FieldState::Start,
            field: String::new(),
            record: Vec::new(),
            records: Vec::new(),
            line: 1,
            record_line: 1,
        }
    }

    fn read_all(mut self) -> StoreResult<Vec<(usize, Vec<String>)>> {
        let input = self.input;
        for c in input.chars() {
            match (self.state, c) {
                (FieldState::Quoted, '"') => self.state = FieldState::QuoteInQuoted,
                (FieldState::Quoted, c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    self.field.push(c);
                }
                (FieldState::QuoteInQuoted, '"') => {
                    self.field.push('"');
                    self.state = FieldState::Quoted;
                }
                (FieldState::Start, '"') => self.state = FieldState::Quoted,
                (_, ',') => self.end_field(),
                (_, '\n') => self.end_record(),
                (_, '\r') => {}
                (_, c) => {
                    self.field.push(c);
                    self.state = FieldState::Unquoted;
                }
            }
        }

        match self.state {
            FieldState::Quoted => {
                return Err(StoreError::MalformedSchema {
                    line: self.record_line,
                    reason: "unterminated quoted field".to_string(),
                })
            }
            FieldState::Start if self.record.is_empty() => {}
            _ => self.end_record(),
        }

        Ok(self.records)
    }

    fn end_field(&mut self) {
        self.record.push(std::mem::take(&mut self.field));
        self.state = FieldState::Start;
    }

    fn end_record(&mut self) {
        self.end_field();
        self.records
            .push((self.record_line, std::mem::take(&mut self.record)));
        self.line += 1;
        self.record_line = self.line;
    }
}
