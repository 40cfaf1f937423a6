//! Stable ordering of event rows.

use parkwatch_core::ParkingEvent;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column to order rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Spot id, ascending.
    #[default]
    SpotId,
    /// Status, ascending.
    Status,
    /// Timestamp, most recent first.
    Timestamp,
}

impl SortKey {
    /// Compares two events under this key.
    pub fn compare(self, a: &ParkingEvent, b: &ParkingEvent) -> Ordering {
        match self {
            SortKey::SpotId => a.parking_spot_id.cmp(&b.parking_spot_id),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::Timestamp => b.timestamp.cmp(&a.timestamp),
        }
    }
}

/// Error returned for an unrecognized sort key name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key '{0}' (expected spot_id, status or timestamp)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "spot_id" | "spot" => Ok(SortKey::SpotId),
            "status" => Ok(SortKey::Status),
            "timestamp" | "time" => Ok(SortKey::Timestamp),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::SpotId => "spot_id",
            SortKey::Status => "status",
            SortKey::Timestamp => "timestamp",
        })
    }
}

/// Returns `entries` ordered by `key`.
///
/// The sort is stable: rows comparing equal keep their input order.
pub fn sort(entries: &[ParkingEvent], key: SortKey) -> Vec<ParkingEvent> {
    let mut sorted = entries.to_vec();
    sort_in_place(&mut sorted, key);
    sorted
}

/// Orders `entries` by `key` in place (stable).
pub fn sort_in_place(entries: &mut [ParkingEvent], key: SortKey) {
    entries.sort_by(|a, b| key.compare(a, b));
}
