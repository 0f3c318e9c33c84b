//! In-memory contact storage.
//!
//! [`ContactStore`] owns every contact the session knows about and composes
//! the CSV and vCard codecs for bulk import and export.

mod contact_store;

pub use contact_store::ContactStore;
