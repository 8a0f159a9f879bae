//! Error types for roster storage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading, writing, or mutating the roster.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A task index does not exist in the current catalog.
    #[error("task index {index} out of range (catalog has {len} tasks)")]
    TaskIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Size of the catalog at the time of the call.
        len: usize,
    },

    /// The named person is not on the roster.
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    /// Reading or writing the store file failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The store file is not valid JSON for this schema.
    #[error("malformed store file {path}: {source}")]
    Json {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
