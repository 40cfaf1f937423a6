//! Projection engine for Parkwatch occupancy events.
//!
//! Every function here is a pure transformation of the event set it is
//! given plus immutable query parameters:
//!
//! - [`project`] reduces events to the latest state per spot
//! - [`filter`] keeps rows whose spot/device ids contain a substring
//! - [`sort`] orders rows by spot id, status, or recency
//! - [`history`] selects one spot's events
//! - [`by_plate`] validates a plate query and delegates it to the gateway
//!
//! Nothing is cached between calls; each query is recomputed from the
//! gateway's current events.

#![deny(missing_docs)]

mod error;
mod filter;
mod history;
mod plate;
mod project;
mod query;
mod sort;

pub use error::QueryError;
pub use filter::{filter, FilterCriteria};
pub use history::history;
pub use plate::by_plate;
pub use project::{project, Snapshot};
pub use query::{dashboard, load_dashboard, load_history, spot_history, HistoryQuery, SnapshotQuery};
pub use sort::{sort, sort_in_place, ParseSortKeyError, SortKey};
