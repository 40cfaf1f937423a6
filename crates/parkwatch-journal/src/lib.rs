//! Append-only journal format for Parkwatch occupancy events.
//!
//! A journal (`.pkj`) is a 16-byte header followed by length-prefixed frames,
//! each carrying one JSON event record. Files are only ever appended to.
//!
//! ## Key Types
//!
//! - [`JournalWriter`] - Append records to a journal file
//! - [`JournalReader`] - Read records back in append order
//! - [`ReadMode`] - Strict or permissive handling of a truncated tail

#![deny(missing_docs)]

/// Error types for journal operations.
pub mod errors;
/// Frame structure and serialization.
pub mod frame;
/// Journal reader implementation.
pub mod reader;
/// Record JSON type alias and helpers.
pub mod record;
/// Journal writer implementation.
pub mod writer;

pub use errors::JournalError;
pub use frame::{FrameHeader, FrameKind, JournalHeader};
pub use reader::{JournalReader, ReadMode};
pub use record::{has_record_shape, RecordJson};
pub use writer::{JournalWriter, WriteOptions};
