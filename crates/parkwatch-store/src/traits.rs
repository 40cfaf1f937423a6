//! Gateway trait shared by every storage backend.

use crate::error::StoreError;
use parkwatch_core::{NewEvent, ParkingEvent};

/// Durable, append-only storage of occupancy events.
///
/// Implementations must be safe to share between threads: reads may run
/// concurrently with each other. Records that cannot be decoded are skipped
/// (and logged) rather than failing the whole fetch.
pub trait EventGateway: Send + Sync {
    /// Returns every stored event in insertion order.
    fn fetch_all_events(&self) -> Result<Vec<ParkingEvent>, StoreError>;

    /// Returns the stored events whose plate matches `plate`, in insertion order.
    ///
    /// A plate matches when it equals `plate` ignoring ASCII case and
    /// surrounding whitespace. Events without a plate never match.
    fn fetch_events_by_plate(&self, plate: &str) -> Result<Vec<ParkingEvent>, StoreError>;

    /// Validates `event`, assigns its id and appends it.
    fn insert_event(&self, event: NewEvent) -> Result<ParkingEvent, StoreError>;
}
