//! In-memory gateway for tests and embedding.

use crate::error::StoreError;
use crate::filter::{retain_matching, PlateFilter};
use crate::traits::EventGateway;
use crate::typed::decode_records;
use parkwatch_core::{NewEvent, ParkingEvent};
use parkwatch_journal::RecordJson;
use std::sync::RwLock;

/// Gateway holding raw records in memory.
///
/// Records are kept as JSON, exactly as a durable backend would hold them,
/// so malformed records can be seeded and are skipped the same way.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: RwLock<Vec<RecordJson>>,
}

impl MemoryGateway {
    /// Creates an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-seeded with raw records.
    pub fn with_records(records: Vec<RecordJson>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of raw records held, malformed ones included.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    /// Returns true if no records are held.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<RecordJson>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl EventGateway for MemoryGateway {
    fn fetch_all_events(&self) -> Result<Vec<ParkingEvent>, StoreError> {
        let records = self.read()?.clone();
        Ok(decode_records(records).events)
    }

    fn fetch_events_by_plate(&self, plate: &str) -> Result<Vec<ParkingEvent>, StoreError> {
        let events = self.fetch_all_events()?;
        Ok(retain_matching(events, &PlateFilter::new(plate)))
    }

    fn insert_event(&self, event: NewEvent) -> Result<ParkingEvent, StoreError> {
        let event = event.validated()?;
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        let stored = event.into_event(records.len() as u64)?;
        records.push(serde_json::to_value(&stored)?);
        Ok(stored)
    }
}
