//! Occupancy event model for Parkwatch.
//!
//! This crate provides:
//! - [`ParkingEvent`], the immutable sensor observation stored by the gateway
//! - [`NewEvent`], the ingestion payload validated before an id is assigned
//! - Identifier newtypes for spots, devices, plates and statuses
//! - Content-derived event id computation
//!
//! Core invariants:
//! - Events are immutable, append-only records
//! - Event ids are derived from the append sequence and the event body, so
//!   they are never reused within a store
//!
#![deny(missing_docs)]

/// Event types.
pub mod event;
/// Event id computation with domain-separated hashing.
pub mod event_id;
/// Identifier newtypes.
pub mod identifiers;
/// Validation errors.
pub mod validation;

pub use event::{parse_timestamp, NewEvent, ParkingEvent, Timestamp};
pub use event_id::compute_event_id;
pub use identifiers::{DeviceId, EventId, PlateNumber, SpotId, Status};
pub use validation::ValidationError;
