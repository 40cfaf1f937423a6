//! Plate command implementation: where has a vehicle been seen.

use crate::output::{self, PLATE_COLUMNS};
use parkwatch_projection::by_plate;
use parkwatch_store::JournalGateway;

pub fn run(
    gateway: &JournalGateway,
    plate: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rows = by_plate(gateway, &plate)?;
    output::print_events(
        &rows,
        PLATE_COLUMNS,
        json,
        "No data found for this plate number.",
    )?;
    Ok(())
}
