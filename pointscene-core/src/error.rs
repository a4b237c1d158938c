//! Error types for pointscene

use thiserror::Error;

/// Main error type for pointscene operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for pointscene operations
pub type Result<T> = std::result::Result<T, Error>;
