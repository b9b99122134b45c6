//! Error types for the folio library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FolioError`] enum. The engine itself degrades gracefully: malformed
//! persisted data reads as empty and best-effort writes are logged rather
//! than surfaced, so most errors a caller sees originate in the collection
//! provider.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O errors (file-backed persistence, collection loading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Storage-related errors (key-value persistence boundary).
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FolioError.
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        FolioError::Query(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        FolioError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FolioError::Other(msg.into())
    }
}
