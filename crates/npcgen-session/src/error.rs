//! Error types for the editing session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during an editing session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Required input is missing or blank.
    #[error("validation error: {0}")]
    Validation(String),
}
