//! Event Store Gateway for Parkwatch.
//!
//! This crate provides:
//! - The [`EventGateway`] trait: insert an event, fetch all events, fetch
//!   events by plate
//! - [`JournalGateway`], backed by a `parkwatch-journal` file
//! - [`MemoryGateway`], backed by a vector, for tests and embedding
//! - Record decoding that skips malformed records instead of failing

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Gateway-side event predicates.
pub mod filter;
/// Journal-backed gateway.
pub mod journal;
/// In-memory gateway.
pub mod memory;
/// Gateway trait.
pub mod traits;
/// Typed record decoding.
pub mod typed;

pub use error::StoreError;
pub use filter::{EventFilter, PlateFilter};
pub use journal::JournalGateway;
pub use memory::MemoryGateway;
pub use parkwatch_journal::{ReadMode, RecordJson};
pub use traits::EventGateway;
pub use typed::{
    decode_payload, decode_payloads, decode_record, decode_records, DecodeError, DecodedEvents,
};
