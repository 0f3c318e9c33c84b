//! Domain value objects and validators.
//!
//! This module contains the phone and email predicates used to reject
//! interactive input, plus type-safe wrappers that run them at construction
//! time. Imported files are never re-validated; only contacts typed in by the
//! user go through these checks.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use phone::{is_valid_phone, PhoneNumber};
