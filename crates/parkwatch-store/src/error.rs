//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during gateway operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Journal backend could not be read or written.
    #[error("journal error: {0}")]
    Journal(#[from] parkwatch_journal::JournalError),
    /// Backend is unreachable for a reason other than journal I/O.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Event rejected on ingestion.
    #[error("invalid event: {0}")]
    Validation(#[from] parkwatch_core::ValidationError),
    /// Event could not be encoded for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true if the error means the backing store could not be reached
    /// or read, as opposed to the caller supplying a bad event.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Journal(_) | StoreError::Unavailable(_))
    }
}
