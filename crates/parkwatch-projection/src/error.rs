use parkwatch_store::StoreError;
use thiserror::Error;

/// Errors surfaced by engine queries.
///
/// "No results" is never an error; empty sequences are valid outcomes.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Query parameters were rejected before reaching storage.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The gateway failed; passed through unchanged and never retried here.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}
