//! Contact Book - a personal contact list manager.
//!
//! Contacts (last name, first name, phone, email) live in an in-memory
//! [`ContactStore`] keyed by display name and can be imported from and
//! exported to CSV and vCard files. A contact's vCard text doubles as the
//! payload for QR codes.
//!
//! # Architecture
//!
//! - **domain**: Phone and email validators used for interactive input
//! - **models**: The `Contact` entity
//! - **codec**: CSV and vCard readers and writers
//! - **store**: The display-name keyed contact store
//! - **console**: Interactive menu over a store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod codec;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod store;

pub use config::Config;
pub use console::Console;
pub use domain::{is_valid_email, is_valid_phone, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConsoleError, StoreError};
pub use models::Contact;
pub use store::ContactStore;
