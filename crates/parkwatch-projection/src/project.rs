//! Latest-state projection.

use parkwatch_core::{ParkingEvent, SpotId};
use std::collections::HashMap;

/// Latest known event per parking spot.
///
/// Entries are kept in order of each spot's first appearance in the input
/// the snapshot was projected from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<ParkingEvent>,
    index: HashMap<SpotId, usize>,
}

impl Snapshot {
    /// Latest event for `spot_id`, if the spot was seen.
    pub fn get(&self, spot_id: &str) -> Option<&ParkingEvent> {
        self.index
            .get(&SpotId::new(spot_id))
            .map(|&i| &self.entries[i])
    }

    /// Number of distinct spots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no spot was seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[ParkingEvent] {
        &self.entries
    }

    /// Iterates entries in first-appearance order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParkingEvent> {
        self.entries.iter()
    }

    /// Consumes the snapshot, returning its entries in first-appearance order.
    pub fn into_entries(self) -> Vec<ParkingEvent> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a ParkingEvent;
    type IntoIter = std::slice::Iter<'a, ParkingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reduces an event stream to the latest event per spot.
///
/// Single pass over `events`, in any order. For each spot the event with the
/// greatest timestamp wins; among events with equal timestamps the one that
/// comes later in `events` wins.
pub fn project(events: &[ParkingEvent]) -> Snapshot {
    let mut latest: Vec<&ParkingEvent> = Vec::new();
    let mut index: HashMap<&SpotId, usize> = HashMap::new();

    for event in events {
        match index.get(&event.parking_spot_id) {
            Some(&i) => {
                if event.timestamp >= latest[i].timestamp {
                    latest[i] = event;
                }
            }
            None => {
                index.insert(&event.parking_spot_id, latest.len());
                latest.push(event);
            }
        }
    }

    let entries: Vec<ParkingEvent> = latest.into_iter().cloned().collect();
    let index = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.parking_spot_id.clone(), i))
        .collect();

    tracing::trace!(events = events.len(), spots = entries.len(), "projected snapshot");
    Snapshot { entries, index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::event;

    #[test]
    fn empty_input_projects_to_empty_snapshot() {
        let snapshot = project(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn latest_timestamp_wins_regardless_of_order() {
        let events = [
            event("e1", "A", 20, "Vacant"),
            event("e2", "A", 10, "Occupied"),
            event("e3", "B", 15, "Occupied"),
        ];
        let snapshot = project(&events);
        assert_eq!(snapshot.get("A").unwrap().event_id.as_str(), "e1");
        assert_eq!(snapshot.get("B").unwrap().event_id.as_str(), "e3");
        assert!(snapshot.get("C").is_none());
    }

    #[test]
    fn equal_timestamps_resolve_to_last_in_scan_order() {
        let events = [
            event("first", "A", 10, "Occupied"),
            event("second", "A", 10, "Vacant"),
        ];
        assert_eq!(project(&events).get("A").unwrap().event_id.as_str(), "second");

        let reversed = [events[1].clone(), events[0].clone()];
        assert_eq!(project(&reversed).get("A").unwrap().event_id.as_str(), "first");
    }

    #[test]
    fn entries_follow_first_appearance() {
        let events = [
            event("e1", "C", 1, "Occupied"),
            event("e2", "A", 1, "Occupied"),
            event("e3", "C", 2, "Vacant"),
            event("e4", "B", 1, "Occupied"),
        ];
        let spots: Vec<_> = project(&events)
            .iter()
            .map(|e| e.parking_spot_id.to_string())
            .collect();
        assert_eq!(spots, ["C", "A", "B"]);
    }
}
