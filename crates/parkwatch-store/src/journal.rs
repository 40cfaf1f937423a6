//! Journal-backed gateway.

use crate::error::StoreError;
use crate::filter::{retain_matching, PlateFilter};
use crate::traits::EventGateway;
use crate::typed::{decode_payloads, DecodedEvents};
use parkwatch_core::{NewEvent, ParkingEvent};
use parkwatch_journal::{JournalError, JournalReader, JournalWriter, ReadMode, WriteOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Gateway storing events in a single append-only journal file.
///
/// Every fetch opens a fresh reader, so concurrent reads never share
/// state. Inserts through one gateway (or its clones) are serialized;
/// separate processes writing the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct JournalGateway {
    path: PathBuf,
    read_mode: ReadMode,
    write_options: WriteOptions,
    write_lock: Arc<Mutex<()>>,
}

/// Record payloads of one pass over the journal.
struct Scan {
    payloads: Vec<Vec<u8>>,
    /// End of the last complete frame, `None` if the file doesn't exist.
    valid_len: Option<u64>,
}

impl JournalGateway {
    /// Creates a gateway over the journal at `path`.
    ///
    /// The file is not touched until the first fetch or insert.
    pub fn new(path: impl Into<PathBuf>, read_mode: ReadMode) -> Self {
        Self {
            path: path.into(),
            read_mode,
            write_options: WriteOptions::default(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Enables fsync after every insert.
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.write_options.sync = sync;
        self
    }

    /// Path of the backing journal.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every raw record payload. A journal that doesn't exist yet holds
    /// no records.
    ///
    /// Only framing is checked here; payloads that are not JSON are returned
    /// as-is and dropped later by decoding.
    pub fn read_payloads(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        Ok(self.scan()?.payloads)
    }

    /// Reads and decodes every record, reporting how many were skipped.
    pub fn fetch_decoded(&self) -> Result<DecodedEvents, StoreError> {
        let decoded = decode_payloads(self.read_payloads()?);
        tracing::debug!(
            path = %self.path.display(),
            events = decoded.events.len(),
            skipped = decoded.skipped,
            "fetched events from journal"
        );
        Ok(decoded)
    }

    fn scan(&self) -> Result<Scan, StoreError> {
        match JournalReader::open(&self.path, self.read_mode) {
            Ok(mut reader) => {
                let payloads = reader.read_all_payloads()?;
                Ok(Scan {
                    payloads,
                    valid_len: Some(reader.position()),
                })
            }
            Err(JournalError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "journal not found, treating as empty");
                Ok(Scan {
                    payloads: Vec::new(),
                    valid_len: None,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl EventGateway for JournalGateway {
    fn fetch_all_events(&self) -> Result<Vec<ParkingEvent>, StoreError> {
        Ok(self.fetch_decoded()?.events)
    }

    fn fetch_events_by_plate(&self, plate: &str) -> Result<Vec<ParkingEvent>, StoreError> {
        let events = self.fetch_all_events()?;
        Ok(retain_matching(events, &PlateFilter::new(plate)))
    }

    fn insert_event(&self, event: NewEvent) -> Result<ParkingEvent, StoreError> {
        let event = event.validated()?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("journal write lock poisoned".to_string()))?;

        // Sequence counts raw records, malformed ones included, so positions
        // stay unique even when some records no longer decode.
        let scan = self.scan()?;
        let sequence = scan.payloads.len() as u64;
        let stored = event.into_event(sequence)?;

        let mut writer = JournalWriter::open(&self.path, self.write_options.clone())?;
        if let Some(valid_len) = scan.valid_len {
            // Only a permissive scan gets here with a torn tail; appending
            // after it would bury the new frame inside the torn one.
            let dropped = writer.truncate_to(valid_len)?;
            if dropped > 0 {
                tracing::warn!(
                    path = %self.path.display(),
                    offset = valid_len,
                    dropped,
                    "discarded torn frame at end of journal"
                );
            }
        }
        writer.append_record(&serde_json::to_value(&stored)?)?;
        writer.finish()?;

        tracing::debug!(
            event_id = %stored.event_id,
            spot = %stored.parking_spot_id,
            sequence,
            "appended event to journal"
        );
        Ok(stored)
    }
}
