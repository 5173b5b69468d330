//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else exits with 1.

use std::fmt;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// The data file could not be parsed at startup
    MalformedData { message: String, hint: String },

    /// Invalid flags or arguments
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MalformedData { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn malformed_data(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::MalformedData {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::MalformedData { hint, .. } => Some(hint),
            CliError::InvalidInput(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use crate::constants::exit_codes;
        match self {
            CliError::MalformedData { .. } => exit_codes::MALFORMED_DATA,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}
