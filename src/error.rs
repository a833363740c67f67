//! Error types for the contact import engine and contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a file.
///
/// Only acquisition of the input stream is a hard failure. Malformed records
/// are skipped by the readers and never reach the caller.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Reading the input stream failed
    #[error("Failed to read import stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur in the contact group store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem operation failed
    #[error("Storage I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode a stored group
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Group or contact not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Identifier cannot be used as a storage key
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Reading an import stream failed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// An edit would break a contact or group invariant
    #[error("Invalid edit: {0}")]
    Validation(#[from] ValidationError),

    /// The blocking import worker did not complete
    #[error("Import task failed: {0}")]
    Task(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
