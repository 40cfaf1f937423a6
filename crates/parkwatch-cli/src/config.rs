//! Runtime configuration resolved from flags and the environment.

use parkwatch_store::{JournalGateway, ReadMode};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the journal file.
pub const JOURNAL_ENV: &str = "PARKWATCH_JOURNAL";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "PARKWATCH_LOG";
/// Journal used when neither flag nor environment names one.
pub const DEFAULT_JOURNAL: &str = "parkwatch.pkj";
/// Log filter used when none is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Journal backing the gateway.
    pub journal: PathBuf,
    /// How to treat a truncated journal tail.
    pub read_mode: ReadMode,
    /// fsync after every recorded event.
    pub sync: bool,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl CliConfig {
    /// Builds the configuration from parsed global flags.
    ///
    /// The log filter comes from `PARKWATCH_LOG`, then `RUST_LOG`, then
    /// [`DEFAULT_LOG_FILTER`].
    pub fn new(journal: PathBuf, permissive: bool, sync: bool) -> Self {
        let log_filter = env::var(LOG_ENV)
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Self {
            journal,
            read_mode: if permissive {
                ReadMode::Permissive
            } else {
                ReadMode::Strict
            },
            sync,
            log_filter,
        }
    }

    /// Opens the gateway described by this configuration.
    pub fn gateway(&self) -> JournalGateway {
        JournalGateway::new(&self.journal, self.read_mode).with_sync(self.sync)
    }
}
