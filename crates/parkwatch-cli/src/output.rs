//! Output formatting utilities.

use chrono::SecondsFormat;
use parkwatch_core::ParkingEvent;

/// Column of an event table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Parking spot id.
    Spot,
    /// Reporting device id.
    Device,
    /// Occupancy status.
    Status,
    /// Plate number, `N/A` when absent.
    Plate,
    /// Observation time.
    Timestamp,
}

impl Column {
    fn title(self) -> &'static str {
        match self {
            Column::Spot => "PARKING_SPOT",
            Column::Device => "DEVICE_ID",
            Column::Status => "STATUS",
            Column::Plate => "PLATE_NUMBER",
            Column::Timestamp => "TIMESTAMP",
        }
    }

    fn width(self) -> usize {
        match self {
            Column::Spot | Column::Device => 16,
            Column::Status | Column::Plate => 14,
            Column::Timestamp => 24,
        }
    }

    fn cell(self, event: &ParkingEvent) -> String {
        match self {
            Column::Spot => event.parking_spot_id.to_string(),
            Column::Device => event.device_id.to_string(),
            Column::Status => event.status.to_string(),
            Column::Plate => event
                .plate_number
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            Column::Timestamp => format_timestamp(event),
        }
    }
}

/// Columns of the current-status view.
pub const DASHBOARD_COLUMNS: &[Column] = &[
    Column::Spot,
    Column::Device,
    Column::Status,
    Column::Plate,
    Column::Timestamp,
];

/// Columns of the per-spot history view.
pub const HISTORY_COLUMNS: &[Column] = &[
    Column::Device,
    Column::Status,
    Column::Plate,
    Column::Timestamp,
];

/// Columns of the plate lookup view.
pub const PLATE_COLUMNS: &[Column] = &[
    Column::Spot,
    Column::Device,
    Column::Status,
    Column::Timestamp,
];

/// RFC 3339 timestamp with millisecond precision and `Z` suffix.
pub fn format_timestamp(event: &ParkingEvent) -> String {
    event.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Formats an event as pretty JSON.
pub fn format_json(event: &ParkingEvent) -> String {
    serde_json::to_string_pretty(event).unwrap_or_else(|_| "{}".to_string())
}

/// Formats the table header line followed by a rule.
pub fn format_table_header(columns: &[Column]) -> String {
    let titles: Vec<&str> = columns.iter().map(|c| c.title()).collect();
    let widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    let line = join_padded(&titles, &widths);
    let rule = "-".repeat(line.len());
    format!("{}\n{}", line, rule)
}

/// Formats an event as one table row.
pub fn format_table_row(event: &ParkingEvent, columns: &[Column]) -> String {
    let cells: Vec<String> = columns.iter().map(|c| c.cell(event)).collect();
    let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
    let widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
    join_padded(&cells, &widths)
}

/// Prints `events` as a table, or as one JSON object per line.
///
/// An empty result prints `empty_message` in table mode and nothing in JSON
/// mode.
pub fn print_events(
    events: &[ParkingEvent],
    columns: &[Column],
    json: bool,
    empty_message: &str,
) -> Result<(), serde_json::Error> {
    if json {
        for event in events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", empty_message);
        return Ok(());
    }

    println!("{}", format_table_header(columns));
    for event in events {
        println!("{}", format_table_row(event, columns));
    }
    Ok(())
}

fn join_padded(cells: &[&str], widths: &[usize]) -> String {
    let last = cells.len().saturating_sub(1);
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.to_string()
            } else {
                format!("{:<width$}", truncate(cell, *width - 1), width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
