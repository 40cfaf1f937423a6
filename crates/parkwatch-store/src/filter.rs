//! Gateway-side event predicates.

use parkwatch_core::ParkingEvent;

/// Predicate applied by a gateway while scanning stored events.
pub trait EventFilter {
    /// Returns true if the event should be returned.
    fn matches(&self, event: &ParkingEvent) -> bool;
}

/// Matches events whose plate equals the query, ignoring ASCII case and
/// surrounding whitespace.
#[derive(Debug, Clone)]
pub struct PlateFilter {
    /// Plate to look for.
    pub plate: String,
}

impl PlateFilter {
    /// Creates a filter for `plate`.
    pub fn new(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
        }
    }
}

impl EventFilter for PlateFilter {
    fn matches(&self, event: &ParkingEvent) -> bool {
        event
            .plate_number
            .as_ref()
            .map(|p| p.matches(&self.plate))
            .unwrap_or(false)
    }
}

/// Keeps the events of `events` accepted by `filter`, preserving order.
pub fn retain_matching<F: EventFilter + ?Sized>(
    events: Vec<ParkingEvent>,
    filter: &F,
) -> Vec<ParkingEvent> {
    events.into_iter().filter(|e| filter.matches(e)).collect()
}
