//! Display-name keyed contact store.

use crate::codec::{csv, vcard, ContactMap};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use std::path::Path;
use tracing::{debug, warn};

/// An insertion-ordered mapping from display name to [`Contact`].
///
/// There is at most one contact per display name. Two insertion paths keep
/// that invariant with different collision policies:
///
/// - [`insert_unique`](Self::insert_unique) (interactive input) refuses to
///   replace an existing entry;
/// - [`merge`](Self::merge) (bulk import) replaces it, last one wins. A
///   replaced entry keeps its original position.
///
/// # Example
///
/// ```
/// use contact_book::{Contact, ContactStore};
///
/// let mut store = ContactStore::new();
/// assert!(store.add(Contact::new("Perez", "Juan", "1122334455", "juan@example.com")));
/// assert!(!store.add(Contact::new("Perez", "Juan", "9999999999", "otro@example.com")));
/// assert_eq!(store.get("Juan Perez").unwrap().phone, "1122334455");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: ContactMap,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether a contact is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.contacts.contains_key(key)
    }

    /// Look up a contact by display name.
    pub fn get(&self, key: &str) -> Option<&Contact> {
        self.contacts.get(key)
    }

    /// Iterate over contacts in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Insert `contact` unless its display name is already taken.
    ///
    /// Returns `false` and leaves the store untouched on collision, even when
    /// phone or email differ. This is the only deduplication the store does.
    pub fn insert_unique(&mut self, contact: Contact) -> bool {
        let key = contact.display_name();
        if self.contacts.contains_key(&key) {
            debug!(key = %key, "Contact already exists, not inserting");
            return false;
        }

        self.contacts.insert(key, contact);
        true
    }

    /// Alias of [`insert_unique`](Self::insert_unique), the interactive add.
    pub fn add(&mut self, contact: Contact) -> bool {
        self.insert_unique(contact)
    }

    /// Insert `contact`, replacing any entry with the same display name.
    ///
    /// Returns the replaced contact, if any.
    pub fn merge(&mut self, contact: Contact) -> Option<Contact> {
        let key = contact.display_name();
        let previous = self.contacts.insert(key, contact);
        if let Some(ref old) = previous {
            warn!(key = %old.display_name(), "Import replaced an existing contact");
        }
        previous
    }

    /// Remove the contact stored under `key`; does nothing if absent.
    pub fn remove(&mut self, key: &str) {
        self.contacts.shift_remove(key);
    }

    /// Remove and return the contact stored under `key`.
    pub fn pop(&mut self, key: &str) -> Option<Contact> {
        self.contacts.shift_remove(key)
    }

    /// Remove and return the contact stored under `key`, or `default` if absent.
    pub fn pop_or(&mut self, key: &str, default: Contact) -> Contact {
        self.pop(key).unwrap_or(default)
    }

    /// Replace the contact stored under `key` with `contact`, keeping its
    /// position in store order. `contact` may carry a new display name.
    ///
    /// Returns `false` and leaves the store untouched when `key` is absent or
    /// when the new name belongs to another stored contact.
    pub fn update(&mut self, key: &str, contact: Contact) -> bool {
        let new_key = contact.display_name();
        if new_key != key && self.contacts.contains_key(&new_key) {
            debug!(key = %new_key, "Contact already exists, not renaming");
            return false;
        }

        let Some((index, _, _)) = self.contacts.shift_remove_full(key) else {
            return false;
        };
        self.contacts.shift_insert(index, new_key, contact);
        true
    }

    /// Find contacts whose `"<display name> <phone> <email>"` contains `query`.
    ///
    /// Matching is a literal, case-sensitive substring test, so an empty query
    /// returns every contact. Results are in store order.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|(key, contact)| {
                format!("{} {} {}", key, contact.phone, contact.email).contains(query)
            })
            .map(|(_, contact)| contact)
            .collect()
    }

    /// Merge contacts parsed from CSV text. Returns the number of data rows.
    ///
    /// Nothing is merged when the text is malformed.
    // NOTE: bulk import overwrites on name collision while interactive add
    // refuses to; flagged for product review, kept as is.
    pub fn import_csv_str(&mut self, input: &str) -> StoreResult<usize> {
        Ok(self.merge_all(csv::parse(input)?))
    }

    /// Merge contacts from a CSV file. A missing file is an error.
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let path = path.as_ref();
        let count = self.merge_all(csv::parse_file(path)?);
        debug!(path = %path.display(), count, "Imported CSV file");
        Ok(count)
    }

    /// Render the store as CSV text, header first.
    pub fn export_csv_string(&self) -> String {
        csv::serialize_all(self.iter())
    }

    /// Write the store to a CSV file, replacing it. Returns the number of rows.
    pub fn export_csv(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        csv::write_file(path.as_ref(), self.iter())
    }

    /// Merge contacts parsed from vCard text. Returns the number of distinct
    /// contacts parsed.
    pub fn import_vcard_str(&mut self, input: &str) -> usize {
        self.merge_all(vcard::parse(input).into_values())
    }

    /// Merge contacts from a vCard file. A missing file imports nothing.
    pub fn import_vcard(&mut self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let path = path.as_ref();
        let count = self.merge_all(vcard::parse_file(path)?.into_values());
        debug!(path = %path.display(), count, "Imported vCard file");
        Ok(count)
    }

    /// Render the store as concatenated vCard blocks.
    pub fn export_vcard_string(&self) -> String {
        vcard::serialize_all(self.iter())
    }

    /// Write the store to a vCard file, replacing it. Returns the number of
    /// contacts written.
    pub fn export_vcard(&self, path: impl AsRef<Path>) -> StoreResult<usize> {
        let path = path.as_ref();
        std::fs::write(path, self.export_vcard_string()).map_err(|e| StoreError::io(path, e))?;
        debug!(path = %path.display(), count = self.len(), "Exported vCard file");
        Ok(self.len())
    }

    /// Merge every contact, returning how many were merged.
    fn merge_all(&mut self, contacts: impl IntoIterator<Item = Contact>) -> usize {
        let mut count = 0;
        for contact in contacts {
            self.merge(contact);
            count += 1;
        }
        count
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = indexmap::map::Values<'a, String, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.values()
    }
}
