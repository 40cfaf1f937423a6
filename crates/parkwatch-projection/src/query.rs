//! Composed queries driven by immutable parameter values.

use crate::error::QueryError;
use crate::filter::{filter, FilterCriteria};
use crate::history::history;
use crate::project::project;
use crate::sort::{sort_in_place, SortKey};
use parkwatch_core::ParkingEvent;
use parkwatch_store::EventGateway;

/// Parameters of the "current status of every spot" view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotQuery {
    /// Which spots to show.
    pub criteria: FilterCriteria,
    /// Row order.
    pub sort: SortKey,
}

/// Parameters of the per-spot history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Spot to show, matched exactly.
    pub spot_id: String,
    /// Optional row order; `None` keeps gateway order.
    pub sort: Option<SortKey>,
}

impl HistoryQuery {
    /// History of `spot_id` in gateway order.
    pub fn new(spot_id: impl Into<String>) -> Self {
        Self {
            spot_id: spot_id.into(),
            sort: None,
        }
    }

    /// Orders the history by `key`.
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }
}

/// Latest state per spot, filtered and ordered per `query`.
pub fn dashboard(events: &[ParkingEvent], query: &SnapshotQuery) -> Vec<ParkingEvent> {
    let snapshot = project(events);
    let mut rows = filter(snapshot.entries(), &query.criteria);
    sort_in_place(&mut rows, query.sort);
    rows
}

/// History of one spot, optionally ordered per `query`.
pub fn spot_history(events: &[ParkingEvent], query: &HistoryQuery) -> Vec<ParkingEvent> {
    let mut rows = history(events, &query.spot_id);
    if let Some(key) = query.sort {
        sort_in_place(&mut rows, key);
    }
    rows
}

/// Fetches the current event set and evaluates [`dashboard`] over it.
pub fn load_dashboard<G>(gateway: &G, query: &SnapshotQuery) -> Result<Vec<ParkingEvent>, QueryError>
where
    G: EventGateway + ?Sized,
{
    let events = gateway.fetch_all_events()?;
    Ok(dashboard(&events, query))
}

/// Fetches the current event set and evaluates [`spot_history`] over it.
pub fn load_history<G>(gateway: &G, query: &HistoryQuery) -> Result<Vec<ParkingEvent>, QueryError>
where
    G: EventGateway + ?Sized,
{
    let events = gateway.fetch_all_events()?;
    Ok(spot_history(&events, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event, event_on_device};

    #[test]
    fn dashboard_projects_then_filters_then_sorts() {
        let events = [
            event("a-old", "A2", 1, "Occupied"),
            event("b", "B1", 5, "Occupied"),
            event("a1", "A1", 3, "Occupied"),
            event("a-new", "A2", 9, "Vacant"),
        ];
        let query = SnapshotQuery {
            criteria: FilterCriteria::any().spot_id("a"),
            sort: SortKey::Timestamp,
        };
        let ids: Vec<_> = dashboard(&events, &query)
            .iter()
            .map(|e| e.event_id.to_string())
            .collect();
        assert_eq!(ids, ["a-new", "a1"]);
    }

    #[test]
    fn default_dashboard_orders_by_spot() {
        let events = [
            event_on_device("1", "C", "d"),
            event_on_device("2", "A", "d"),
            event_on_device("3", "B", "d"),
        ];
        let spots: Vec<_> = dashboard(&events, &SnapshotQuery::default())
            .iter()
            .map(|e| e.parking_spot_id.to_string())
            .collect();
        assert_eq!(spots, ["A", "B", "C"]);
    }

    #[test]
    fn history_sorting_is_optional() {
        let events = [
            event("1", "A", 10, "Occupied"),
            event("2", "A", 30, "Vacant"),
            event("3", "A", 20, "Occupied"),
        ];
        let unsorted: Vec<_> = spot_history(&events, &HistoryQuery::new("A"))
            .iter()
            .map(|e| e.event_id.to_string())
            .collect();
        assert_eq!(unsorted, ["1", "2", "3"]);

        let newest_first: Vec<_> =
            spot_history(&events, &HistoryQuery::new("A").sorted_by(SortKey::Timestamp))
                .iter()
                .map(|e| e.event_id.to_string())
                .collect();
        assert_eq!(newest_first, ["2", "3", "1"]);
    }
}
