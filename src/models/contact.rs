//! Contact model representing one entry of the contact book.

use crate::codec::vcard;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A person in the contact book.
///
/// The serde field names are the CSV column headers, so a CSV row keyed by
/// header deserializes straight into a `Contact`.
///
/// Equality compares all four fields, while [`Hash`] only looks at the name
/// pair. Two contacts with the same name but different phone or email hash
/// alike and still compare unequal; equal contacts always hash alike, so the
/// `Hash`/`Eq` contract holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Last name (surname)
    #[serde(rename = "Last name")]
    pub last_name: String,

    /// First name
    #[serde(rename = "First name")]
    pub first_name: String,

    /// Mobile number, ten digits without country code
    #[serde(rename = "Mobile")]
    pub phone: String,

    /// Email address
    #[serde(rename = "Email")]
    pub email: String,
}

impl Contact {
    /// Create a new contact. No validation is performed here.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// The `"first last"` key the contact is stored under.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Render the contact as a vCard 3.0 block, without a trailing newline.
    ///
    /// This is also the payload handed to QR renderers.
    pub fn to_vcard_text(&self) -> String {
        vcard::serialize(self)
    }
}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.last_name.hash(state);
        self.first_name.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(contact: &Contact) -> u64 {
        let mut hasher = DefaultHasher::new();
        contact.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        assert_eq!(contact.last_name, "Perez");
        assert_eq!(contact.first_name, "Juan");
        assert_eq!(contact.phone, "1122334455");
        assert_eq!(contact.email, "juan@example.com");
    }

    #[test]
    fn test_display_name() {
        let contact = Contact::new("Perez", "Juan", "", "");
        assert_eq!(contact.display_name(), "Juan Perez");
        assert_eq!(contact.to_string(), "Juan Perez");

        let empty = Contact::default();
        assert_eq!(empty.display_name(), " ");
    }

    #[test]
    fn test_equality_uses_all_fields() {
        let a = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        let b = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        let c = Contact::new("Perez", "Juan", "9999999999", "juan@example.com");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_uses_name_only() {
        let a = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        let b = Contact::new("Perez", "Juan", "9999999999", "otro@example.com");
        assert_ne!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_to_vcard_text() {
        let contact = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        let expected = "BEGIN:VCARD\n\
                        VERSION:3.0\n\
                        FN;CHARSET=UTF-8:Juan Perez\n\
                        N;CHARSET=UTF-8:Perez;Juan;;;\n\
                        TEL;CELL;VOICE:+541122334455\n\
                        EMAIL;CHARSET=UTF-8;type=INTERNET:juan@example.com\n\
                        END:VCARD";
        assert_eq!(contact.to_vcard_text(), expected);
    }

    #[test]
    fn test_contact_serializes_with_csv_headers() {
        let contact = Contact::new("Perez", "Juan", "1122334455", "juan@example.com");
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["Last name"], "Perez");
        assert_eq!(json["First name"], "Juan");
        assert_eq!(json["Mobile"], "1122334455");
        assert_eq!(json["Email"], "juan@example.com");
    }
}
