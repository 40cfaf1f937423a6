//! Record command implementation.

use crate::output;
use chrono::Utc;
use parkwatch_core::{parse_timestamp, NewEvent};
use parkwatch_store::{EventGateway, JournalGateway};

pub fn run(
    gateway: &JournalGateway,
    spot: String,
    device: String,
    status: String,
    plate: Option<String>,
    at: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let timestamp = match at {
        Some(text) => parse_timestamp(&text)?,
        None => Utc::now(),
    };
    let event = NewEvent::parse(&spot, &device, &status, plate.as_deref(), timestamp)?;

    let stored = gateway.insert_event(event)?;
    tracing::info!(event_id = %stored.event_id, spot = %stored.parking_spot_id, "recorded event");

    if json {
        println!("{}", serde_json::to_string(&stored)?);
    } else {
        println!("{}", output::format_json(&stored));
    }
    Ok(())
}
