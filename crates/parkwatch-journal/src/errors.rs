use thiserror::Error;

/// Errors that can occur during journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// File header is missing or does not describe a Parkwatch journal.
    #[error("invalid journal header: {0}")]
    InvalidHeader(String),
    /// Frame header is malformed.
    #[error("invalid frame at offset {offset}: {reason}")]
    InvalidFrame {
        /// Byte offset where the frame starts.
        offset: u64,
        /// Reason for invalidity.
        reason: String,
    },
    /// Record payload is larger than a frame may carry.
    #[error("payload size {size} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload size.
        size: u64,
        /// Maximum allowed size.
        max: u32,
    },
    /// Record payload is not UTF-8.
    #[error("invalid UTF-8 in record payload: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Record payload is not JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Existing file is too short to hold a header.
    #[error("file is not empty but has no journal header")]
    FileNotEmpty,
    /// Frame ends before its declared length (strict mode only).
    #[error("truncated frame at offset {offset}")]
    TruncatedFrame {
        /// Byte offset where truncation occurred.
        offset: u64,
    },
}
