//! Per-spot history.

use parkwatch_core::ParkingEvent;

/// All events recorded for exactly `spot_id`, in the order given.
///
/// Matching is exact (no trimming or case folding). An unknown spot yields
/// an empty vector.
pub fn history(events: &[ParkingEvent], spot_id: &str) -> Vec<ParkingEvent> {
    events
        .iter()
        .filter(|e| e.parking_spot_id.as_str() == spot_id)
        .cloned()
        .collect()
}
