//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// RFC 5322 inspired address pattern. Lower-case only and anchored at the start.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
    )
    .expect("Failed to compile email regex")
});

/// Check whether `email` starts with a `local@domain` address.
///
/// The pattern is matched case-sensitively as written, so upper-case letters
/// are rejected; callers decide whether to lower-case input first.
///
/// # Example
///
/// ```
/// use contact_book::domain::is_valid_email;
///
/// assert!(is_valid_email("juan@example.com"));
/// assert!(!is_valid_email("juan@"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// An email address that passed [`is_valid_email`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("juan@example.com").unwrap();
        assert_eq!(email.as_str(), "juan@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("juan.perez+agenda@mail.example.com.ar"));
        assert!(is_valid_email("o'neil_{x}@host-1.net"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("juan@"));
        assert!(!is_valid_email("juan@localhost"));
        assert!(!is_valid_email("juan..perez@example.com"));
        assert!(!is_valid_email(".juan@example.com"));
        assert!(!is_valid_email("juan@-example.com"));
    }

    #[test]
    fn test_email_is_case_sensitive() {
        assert!(!is_valid_email("Juan@example.com"));
        assert!(!is_valid_email("juan@Example.com"));
    }

    #[test]
    fn test_email_allows_trailing_text() {
        // Anchored at the start only.
        assert!(is_valid_email("juan@example.com trailing"));
    }

    #[test]
    fn test_email_rejects_invalid() {
        let err = EmailAddress::new("nope").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("nope".to_string()));
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("juan@example.com").unwrap();
        assert_eq!(format!("{}", email), "juan@example.com");
    }
}
