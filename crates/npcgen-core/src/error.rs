//! Error types for loading career data and rules.

use std::path::PathBuf;

/// Alias for `Result<T, NpcError>`.
pub type NpcResult<T> = Result<T, NpcError>;

/// Errors that can occur while loading NPC reference data.
#[derive(Debug, thiserror::Error)]
pub enum NpcError {
    /// A data file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A data file was read but its contents are malformed.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for NpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidData(err.to_string())
    }
}
