//! Error types for storage operations

use thiserror::Error;

/// Errors that can occur while reading or writing snapshots
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Snapshot version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Point {index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    #[error("Write error: {message}")]
    WriteError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl From<StorageError> for pointscene_core::Error {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(io) => pointscene_core::Error::Io(io),
            StorageError::ParseError { message } => pointscene_core::Error::Serialization(message),
            StorageError::NonFinitePoint { .. } | StorageError::VersionMismatch { .. } => {
                pointscene_core::Error::InvalidData(e.to_string())
            }
            other => pointscene_core::Error::Storage(other.to_string()),
        }
    }
}
