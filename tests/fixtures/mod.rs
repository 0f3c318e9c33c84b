//! Sample contacts and file contents shared by the integration tests.

use contact_book::{Contact, ContactStore};

/// The CSV example used throughout the docs.
#[allow(dead_code)]
pub const JUAN_CSV: &str = "Last name,First name,Mobile,Email\n\
                            Perez,Juan,1122334455,juan@example.com\n";

/// The vCard example used throughout the docs.
#[allow(dead_code)]
pub const JUAN_VCARD: &str = "BEGIN:VCARD\n\
                              VERSION:3.0\n\
                              FN:Juan Perez\n\
                              N:Perez;Juan;;;\n\
                              TEL;CELL;VOICE:+541122334455\n\
                              EMAIL:juan@example.com\n\
                              END:VCARD\n";

/// A contact as typed in interactively.
pub fn sample_contact(first_name: &str, last_name: &str, phone: &str) -> Contact {
    let email = format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    Contact::new(last_name, first_name, phone, email)
}

/// A store holding three unrelated contacts.
#[allow(dead_code)]
pub fn sample_store() -> ContactStore {
    let mut store = ContactStore::new();
    store.add(sample_contact("Juan", "Perez", "1122334455"));
    store.add(sample_contact("Ana", "Gomez", "3514445566"));
    store.add(sample_contact("Luis", "Fernandez", "2617778899"));
    store
}
