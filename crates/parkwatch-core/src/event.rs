use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_id::compute_event_id;
use crate::identifiers::{DeviceId, EventId, PlateNumber, SpotId, Status};
use crate::validation::ValidationError;

/// Point in time at which a sensor observed a spot.
pub type Timestamp = DateTime<Utc>;

/// Parses an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ValidationError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// One immutable sensor observation of a parking spot.
///
/// Serialized with the field names used on the wire and in the journal:
/// `event_id`, `parking_spot_id`, `device_id`, `status`, `plate_number`
/// (`null` when no vehicle was detected) and `timestamp` (RFC 3339).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingEvent {
    /// Unique id assigned when the event was stored.
    pub event_id: EventId,
    /// Spot the observation is about.
    pub parking_spot_id: SpotId,
    /// Sensor that reported the observation.
    pub device_id: DeviceId,
    /// Reported occupancy status.
    pub status: Status,
    /// Detected plate, if any.
    #[serde(default)]
    pub plate_number: Option<PlateNumber>,
    /// Observation time.
    pub timestamp: Timestamp,
}

/// Ingestion payload: an event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Spot the observation is about.
    pub parking_spot_id: SpotId,
    /// Sensor that reported the observation.
    pub device_id: DeviceId,
    /// Reported occupancy status.
    pub status: Status,
    /// Detected plate, if any.
    #[serde(default)]
    pub plate_number: Option<PlateNumber>,
    /// Observation time.
    pub timestamp: Timestamp,
}

impl NewEvent {
    /// Builds an ingestion payload from raw field values.
    ///
    /// Ids and status are trimmed and must be non-blank. A blank plate is
    /// treated as "no vehicle detected".
    pub fn parse(
        parking_spot_id: &str,
        device_id: &str,
        status: &str,
        plate_number: Option<&str>,
        timestamp: Timestamp,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            parking_spot_id: SpotId::parse(parking_spot_id)?,
            device_id: DeviceId::parse(device_id)?,
            status: Status::parse(status)?,
            plate_number: plate_number.and_then(|p| PlateNumber::parse(p).ok()),
            timestamp,
        })
    }

    /// Re-applies the validation rules of [`NewEvent::parse`] to an already
    /// constructed payload (e.g. one deserialized from JSON).
    pub fn validated(self) -> Result<Self, ValidationError> {
        Self::parse(
            self.parking_spot_id.as_str(),
            self.device_id.as_str(),
            self.status.as_str(),
            self.plate_number.as_ref().map(PlateNumber::as_str),
            self.timestamp,
        )
    }

    /// Assigns an id derived from `sequence`, producing the stored event.
    ///
    /// # Errors
    ///
    /// Fails only if the body cannot be serialized for hashing.
    pub fn into_event(self, sequence: u64) -> Result<ParkingEvent, serde_json::Error> {
        let event_id = compute_event_id(&self, sequence)?;
        Ok(ParkingEvent {
            event_id,
            parking_spot_id: self.parking_spot_id,
            device_id: self.device_id,
            status: self.status,
            plate_number: self.plate_number,
            timestamp: self.timestamp,
        })
    }
}
