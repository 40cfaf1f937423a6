//! History command implementation: every event of one spot.

use crate::output::{self, HISTORY_COLUMNS};
use parkwatch_projection::{load_history, HistoryQuery, SortKey};
use parkwatch_store::JournalGateway;

pub fn run(
    gateway: &JournalGateway,
    spot: String,
    sort: Option<SortKey>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = HistoryQuery { spot_id: spot, sort };
    let rows = load_history(gateway, &query)?;

    if !json && !rows.is_empty() {
        println!("Logs for parking spot: {}", query.spot_id);
    }
    output::print_events(
        &rows,
        HISTORY_COLUMNS,
        json,
        "No logs found for this parking spot.",
    )?;
    Ok(())
}
