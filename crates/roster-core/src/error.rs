//! Error types for roster core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for roster operations.
#[derive(Debug, Error)]
pub enum RosterError {
    /// Backing file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted line could not be parsed
    #[error("Malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A record violates a data model constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// The presentation layer could not supply input
    #[error("Input error: {0}")]
    Input(String),
}

impl RosterError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        RosterError::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Whether this error came from a corrupt data file.
    pub fn is_malformed(&self) -> bool {
        matches!(self, RosterError::Malformed { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Storage(err.to_string())
    }
}
