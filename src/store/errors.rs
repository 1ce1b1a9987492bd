//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage faults. Never caused by client input.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// Existing storage is not a valid JSON array of client records
    #[error("Storage is corrupt: {0}")]
    Corrupt(String),

    /// Records could not be encoded
    #[error("Storage encode error: {0}")]
    Encode(String),
}
