//! Parkwatch CLI - record parking sensor events and query spot occupancy.

use clap::{Parser, Subcommand};
use parkwatch_projection::SortKey;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod output;

use commands::{history, list, plate, record, status};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "parkwatch")]
#[command(about = "Parking spot occupancy events: record, current status, history, plate lookup")]
struct Cli {
    /// Path to the event journal
    #[arg(long, global = true, env = config::JOURNAL_ENV, default_value = config::DEFAULT_JOURNAL)]
    journal: PathBuf,
    /// Treat a truncated journal tail as end-of-file instead of an error
    #[arg(long, global = true)]
    permissive: bool,
    /// Sync the journal to disk after recording an event
    #[arg(long, global = true)]
    sync: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a sensor event
    Record {
        /// Parking spot id
        #[arg(long)]
        spot: String,
        /// Reporting device id
        #[arg(long)]
        device: String,
        /// Occupancy status (e.g. Occupied, Vacant)
        #[arg(long)]
        status: String,
        /// Detected plate number
        #[arg(long)]
        plate: Option<String>,
        /// Observation time, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Print the stored event on one line
        #[arg(long)]
        json: bool,
    },
    /// Show the latest status of every spot
    Status {
        /// Only spots whose id contains this text (case-insensitive)
        #[arg(long)]
        spot: Option<String>,
        /// Only spots whose device id contains this text (case-insensitive)
        #[arg(long)]
        device: Option<String>,
        /// Order rows by spot_id, status or timestamp
        #[arg(long, default_value_t = SortKey::SpotId)]
        sort: SortKey,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show every event recorded for a spot
    History {
        /// Parking spot id (exact match)
        spot: String,
        /// Order rows by spot_id, status or timestamp (default: journal order)
        #[arg(long)]
        sort: Option<SortKey>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Find events for a plate number
    Plate {
        /// Plate number (case-insensitive)
        plate: String,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// List raw events in journal order
    List {
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
        /// Stop after N events (default: unlimited)
        #[arg(long)]
        max_events: Option<usize>,
    },
}

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = CliConfig::new(cli.journal, cli.permissive, cli.sync);
    logging::init(&config.log_filter);
    let gateway = config.gateway();
    tracing::debug!(journal = %gateway.path().display(), mode = ?config.read_mode, "starting");

    let result = match cli.command {
        Commands::Record {
            spot,
            device,
            status,
            plate,
            at,
            json,
        } => record::run(&gateway, spot, device, status, plate, at, json),
        Commands::Status {
            spot,
            device,
            sort,
            json,
        } => status::run(&gateway, spot, device, sort, json),
        Commands::History { spot, sort, json } => history::run(&gateway, spot, sort, json),
        Commands::Plate { plate, json } => plate::run(&gateway, plate, json),
        Commands::List { json, max_events } => list::run(&gateway, json, max_events),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
