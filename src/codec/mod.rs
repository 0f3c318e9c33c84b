//! Text formats the contact book reads and writes.
//!
//! - **csv**: fixed four-column schema (`Last name,First name,Mobile,Email`)
//! - **vcard**: vCard 3.0 subset, also the QR payload format

pub mod csv;
pub mod vcard;

use crate::models::Contact;
use indexmap::IndexMap;

/// Contacts keyed by display name, in first-insertion order.
pub type ContactMap = IndexMap<String, Contact>;
