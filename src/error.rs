//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing or exporting contacts.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing a contact file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV input does not follow the `Last name,First name,Mobile,Email` schema
    #[error("Malformed CSV schema at line {line}: {reason}")]
    MalformedSchema { line: usize, reason: String },
}

impl StoreError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive console session.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Terminal input or output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;
