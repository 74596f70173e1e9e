//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ContactBookError`].
///
/// The command layer picks its user-facing message by kind, not by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field failed its format or value rule.
    InvalidInput,
    /// A referenced contact or phone does not exist.
    NotFound,
    /// A required value was absent at the input boundary.
    MalformedType,
}

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is filed under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone with this value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A command was given the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        command: String,
        expected: usize,
        actual: usize,
    },
}

impl ContactBookError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(err) if err.is_missing() => ErrorKind::MalformedType,
            Self::Validation(_) => ErrorKind::InvalidInput,
            Self::ContactNotFound(_) | Self::PhoneNotFound(_) => ErrorKind::NotFound,
            Self::WrongArgumentCount { .. } => ErrorKind::MalformedType,
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid address book
    #[error("Invalid address book data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Loading or saving the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Console input or output failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ContactBookError
pub type BookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
