//! Plate lookup, delegated to the gateway.

use crate::error::QueryError;
use parkwatch_core::ParkingEvent;
use parkwatch_store::EventGateway;

/// Looks up every event recorded for `plate`.
///
/// A blank or whitespace-only plate is rejected with
/// [`QueryError::InvalidInput`] without touching the gateway. Otherwise the
/// trimmed plate is passed to [`EventGateway::fetch_events_by_plate`] and
/// gateway failures are returned as [`QueryError::StorageUnavailable`].
pub fn by_plate<G>(gateway: &G, plate: &str) -> Result<Vec<ParkingEvent>, QueryError>
where
    G: EventGateway + ?Sized,
{
    let plate = plate.trim();
    if plate.is_empty() {
        return Err(QueryError::InvalidInput(
            "plate number must not be blank".to_string(),
        ));
    }
    let events = gateway.fetch_events_by_plate(plate)?;
    tracing::debug!(plate, matches = events.len(), "plate lookup");
    Ok(events)
}
