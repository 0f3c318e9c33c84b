//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Ten ASCII digits, anchored at the start only.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}").expect("Failed to compile phone regex"));

/// Check whether `phone` starts with exactly ten decimal digits.
///
/// Only the start is anchored: `"1122334455 ext 2"` is accepted, while
/// `"112233445"` or `"11-22334455"` are not. Callers pass raw terminal input.
///
/// # Example
///
/// ```
/// use contact_book::domain::is_valid_phone;
///
/// assert!(is_valid_phone("1122334455"));
/// assert!(!is_valid_phone("112233"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// A phone number that passed [`is_valid_phone`].
///
/// No country code is stored; the vCard writer prepends one on output.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1122334455").unwrap();
/// assert_eq!(phone.as_str(), "1122334455");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
