//! Error types and result aliases for Lentil operations.
//!
//! Provides a unified error type that covers all failure conditions of the
//! parameter ingestion subsystem with enough context (file, line, key,
//! offending token) to diagnose bad input.

use thiserror::Error;

/// Unified error type for all Lentil operations
#[derive(Error, Debug)]
pub enum LentilError {
    // File errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: malformed line '{text}' (expected '<key>{separator}<value>')")]
    MalformedLine {
        path: String,
        line: usize,
        separator: String,
        text: String,
    },

    // Coercion errors
    #[error("Parameter '{key}' is not defined")]
    UnknownKey { key: String },

    #[error("Parameter '{key}': cannot parse '{token}' as {target}")]
    ParseValue {
        key: String,
        token: String,
        target: &'static str,
    },

    #[error("Parameter '{key}' already holds a {found} value, expected raw text")]
    AlreadyTyped { key: String, found: &'static str },

    #[error("Unrecognized conversion tag '{tag}'")]
    UnknownCoercion { tag: String },

    // Output errors
    #[error("Failed to serialize mapping: {message}")]
    Serialize { message: String },
}

/// Result type alias for Lentil operations
pub type LentilResult<T> = Result<T, LentilError>;

impl LentilError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LentilError::MalformedLine { .. } => {
                Some("Check that every line contains the separator, and pass --separator if the file uses a different one")
            },
            LentilError::UnknownKey { .. } => {
                Some("Check the key spelling against the parameter file")
            },
            LentilError::ParseValue { .. } => {
                Some("List values must be separated by ', ' and booleans must be 'True' or 'False'")
            },
            LentilError::UnknownCoercion { .. } => {
                Some("Recognized conversion tags are: list, boolean, float, int")
            },
            _ => None,
        }
    }
}
