//! Core error types for the LedgerLens engine.
//!
//! The engine itself is designed to never fail on well-typed input: missing
//! optional data degrades to zero, zero denominators resolve to zero, and
//! dangling references surface as warning entries on the result. These
//! error types cover the remaining fallible surface: input validation
//! helpers and the notification collaborator boundary.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Signal handler failed: {0}")]
    Signal(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for input records.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: String },
}
