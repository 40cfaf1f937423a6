//! Status command implementation: latest state of every spot.

use crate::output::{self, DASHBOARD_COLUMNS};
use parkwatch_projection::{load_dashboard, FilterCriteria, SnapshotQuery, SortKey};
use parkwatch_store::JournalGateway;

pub fn run(
    gateway: &JournalGateway,
    spot: Option<String>,
    device: Option<String>,
    sort: SortKey,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = SnapshotQuery {
        criteria: FilterCriteria {
            spot_id_substring: spot,
            device_id_substring: device,
        },
        sort,
    };
    let rows = load_dashboard(gateway, &query)?;
    output::print_events(
        &rows,
        DASHBOARD_COLUMNS,
        json,
        "No data found for the selected filters.",
    )?;
    Ok(())
}
