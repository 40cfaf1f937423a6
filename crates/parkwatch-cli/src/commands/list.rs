//! List command implementation: raw events in journal order.

use crate::output::{self, DASHBOARD_COLUMNS};
use parkwatch_store::JournalGateway;

pub fn run(
    gateway: &JournalGateway,
    json: bool,
    max_events: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoded = gateway.fetch_decoded()?;
    if decoded.skipped > 0 {
        tracing::warn!(skipped = decoded.skipped, "journal contains malformed records");
    }

    let limit = max_events.unwrap_or(usize::MAX);
    let events: Vec<_> = decoded.events.into_iter().take(limit).collect();
    output::print_events(&events, DASHBOARD_COLUMNS, json, "Journal is empty.")?;
    Ok(())
}
