//! Custom error types for FinanceBuddy
//!
//! Domain validation errors live next to the models they guard
//! ([`crate::models::EntryError`]) and record-level parse errors next to the
//! codec ([`crate::storage::RecordError`]). This module defines the top-level
//! error every public operation returns.

use thiserror::Error;

use crate::models::EntryError;

/// The main error type for FinanceBuddy operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors (directory/file creation, open, read, write)
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors that are not plain I/O (temp file handling, renames)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A new entry or budget violated a domain constraint
    #[error("Validation error: {0}")]
    Validation(#[from] EntryError),
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for FinanceBuddy operations
pub type FinanceResult<T> = Result<T, FinanceError>;
