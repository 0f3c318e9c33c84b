//! Interactive menu over a [`ContactStore`].
//!
//! The console reads answers line by line from any [`BufRead`] and writes
//! prompts to any [`Write`], so sessions can be scripted in tests. Invalid
//! phone or email input is re-prompted; store errors are reported and the
//! session goes on. End of input ends the session.

mod qr;
mod table;

pub use qr::render_qr;
pub use table::write_table;

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::error::{ConsoleError, ConsoleResult, StoreResult};
use crate::models::Contact;
use crate::store::ContactStore;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\
Contact book
  1) New contact
  2) List contacts
  3) Search contacts
  4) Delete contact
  5) Edit contact
  6) Import vCard
  7) Import CSV
  8) Export vCard
  9) Export CSV
 10) Show QR code
  0) Exit";

/// Interactive session state.
pub struct Console<R, W> {
    store: ContactStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over `store`.
    pub fn new(store: ContactStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// The store being edited.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// End the session and hand back the store.
    pub fn into_store(self) -> ContactStore {
        self.store
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(ConsoleError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and run one action. Returns `false` on exit.
    fn step(&mut self) -> ConsoleResult<bool> {
        writeln!(self.output, "\n{}", MENU)?;
        let choice = self.prompt("> ")?;

        match choice.trim() {
            "1" => self.new_contact()?,
            "2" => self.list_contacts()?,
            "3" => self.search_contacts()?,
            "4" => self.delete_contact()?,
            "5" => self.edit_contact()?,
            "6" => {
                let path = self.prompt("Path of the .vcf/.vcard file to import: ")?;
                let result = self.store.import_vcard(&path);
                self.report("Imported", result)?;
            }
            "7" => {
                let path = self.prompt("Path of the .csv file to import: ")?;
                let result = self.store.import_csv(&path);
                self.report("Imported", result)?;
            }
            "8" => {
                let path = self.prompt("Path of the .vcf/.vcard file to write: ")?;
                let result = self.store.export_vcard(&path);
                self.report("Exported", result)?;
            }
            "9" => {
                let path = self.prompt("Path of the .csv file to write: ")?;
                let result = self.store.export_csv(&path);
                self.report("Exported", result)?;
            }
            "10" => self.show_qr()?,
            "0" => return Ok(false),
            other => writeln!(self.output, "Unknown option '{}'.", other)?,
        }

        Ok(true)
    }

    fn new_contact(&mut self) -> ConsoleResult<()> {
        let last_name = self.prompt("Last name: ")?;
        let first_name = self.prompt("First name: ")?;
        let phone = self.prompt_validated("Phone: ", false, |s| {
            PhoneNumber::new(s).map(PhoneNumber::into_inner)
        })?;
        let email = self.prompt_validated("Email: ", false, |s| {
            EmailAddress::new(s).map(EmailAddress::into_inner)
        })?;

        let contact = Contact::new(last_name, first_name, phone, email);
        let name = contact.display_name();
        if self.store.insert_unique(contact) {
            writeln!(self.output, "Contact saved.")?;
        } else {
            writeln!(self.output, "A contact named '{}' already exists.", name)?;
        }
        Ok(())
    }

    fn list_contacts(&mut self) -> ConsoleResult<()> {
        let contacts: Vec<&Contact> = self.store.iter().collect();
        write_table(&mut self.output, &contacts)?;
        if contacts.is_empty() {
            writeln!(self.output, "\nNo contacts")?;
        }
        Ok(())
    }

    fn search_contacts(&mut self) -> ConsoleResult<()> {
        loop {
            let query = self.prompt("Search: ")?;
            write_table(&mut self.output, &self.store.search(&query))?;

            let again = self.prompt("Search again? (y/n): ")?;
            if !again.trim().eq_ignore_ascii_case("y") {
                return Ok(());
            }
        }
    }

    fn delete_contact(&mut self) -> ConsoleResult<()> {
        let key = self.prompt_existing_key("Name of the contact to delete: ")?;
        self.store.remove(&key);
        writeln!(self.output, "Contact deleted.")?;
        Ok(())
    }

    /// Edit a contact in place. Empty answers keep the current value.
    fn edit_contact(&mut self) -> ConsoleResult<()> {
        let key = self.prompt_existing_key("Name of the contact to edit: ")?;

        let last_name = self.prompt("Last name: ")?;
        let first_name = self.prompt("First name: ")?;
        let phone = self.prompt_validated("Phone: ", true, |s| {
            PhoneNumber::new(s).map(PhoneNumber::into_inner)
        })?;
        let email = self.prompt_validated("Email: ", true, |s| {
            EmailAddress::new(s).map(EmailAddress::into_inner)
        })?;

        let mut updated = self.store.get(&key).cloned().unwrap_or_default();
        for (field, answer) in [
            (&mut updated.last_name, last_name),
            (&mut updated.first_name, first_name),
            (&mut updated.phone, phone),
            (&mut updated.email, email),
        ] {
            if !answer.is_empty() {
                *field = answer;
            }
        }

        let new_key = updated.display_name();
        if self.store.update(&key, updated) {
            writeln!(self.output, "Contact saved.")?;
        } else {
            writeln!(
                self.output,
                "A contact named '{}' already exists, nothing changed.",
                new_key
            )?;
        }
        Ok(())
    }

    fn show_qr(&mut self) -> ConsoleResult<()> {
        let key = self.prompt_existing_key("Contact name: ")?;
        let Some(payload) = self.store.get(&key).map(Contact::to_vcard_text) else {
            return Ok(());
        };

        match render_qr(&payload) {
            Ok(art) => writeln!(self.output, "{}", art)?,
            Err(e) => {
                warn!(key = %key, error = %e, "QR encoding failed");
                writeln!(self.output, "Error: cannot encode '{}' as a QR code: {}", key, e)?;
            }
        }
        Ok(())
    }

    fn report(&mut self, verb: &str, result: StoreResult<usize>) -> ConsoleResult<()> {
        match result {
            Ok(count) => writeln!(self.output, "{} {} contacts.", verb, count)?,
            Err(e) => {
                warn!(error = %e, "{} failed", verb);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    /// Print `label` and read one line without its line terminator.
    fn prompt(&mut self, label: &str) -> ConsoleResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt until `validate` accepts the answer, or until an empty answer
    /// when `allow_empty` is set.
    fn prompt_validated(
        &mut self,
        label: &str,
        allow_empty: bool,
        validate: impl Fn(String) -> Result<String, ValidationError>,
    ) -> ConsoleResult<String> {
        loop {
            let answer = self.prompt(label)?;
            if allow_empty && answer.is_empty() {
                return Ok(answer);
            }
            match validate(answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}. Try again.", e)?,
            }
        }
    }

    /// Prompt until the answer names a stored contact.
    fn prompt_existing_key(&mut self, label: &str) -> ConsoleResult<String> {
        loop {
            let key = self.prompt(label)?;
            if self.store.contains_key(&key) {
                return Ok(key);
            }
            writeln!(self.output, "No contact named '{}'.", key)?;
        }
    }
}
