//! Typed event decoding from stored JSON records.

use parkwatch_core::ParkingEvent;
use parkwatch_journal::{has_record_shape, RecordJson};
use thiserror::Error;

/// Error that can occur when decoding a stored record.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Record is missing one of the required fields.
    #[error("record is missing required fields")]
    MissingFields,
    /// Payload is not JSON, or a field has the wrong type or an unparsable
    /// value (e.g. a timestamp that is not RFC 3339).
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Result of decoding a batch of stored records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedEvents {
    /// Successfully decoded events, in record order.
    pub events: Vec<ParkingEvent>,
    /// Number of records skipped as malformed.
    pub skipped: usize,
}

/// Decodes one stored record into a [`ParkingEvent`].
pub fn decode_record(record: &RecordJson) -> Result<ParkingEvent, DecodeError> {
    if !has_record_shape(record) {
        return Err(DecodeError::MissingFields);
    }
    Ok(serde_json::from_value(record.clone())?)
}

/// Decodes one raw journal payload into a [`ParkingEvent`].
pub fn decode_payload(payload: &[u8]) -> Result<ParkingEvent, DecodeError> {
    let record: RecordJson = serde_json::from_slice(payload)?;
    decode_record(&record)
}

/// Decodes a batch of records, skipping malformed ones.
///
/// A record missing `parking_spot_id`, carrying an unparsable `timestamp`,
/// or otherwise failing to decode is logged and counted in
/// [`DecodedEvents::skipped`]; the remaining records are still returned so
/// one bad sensor report cannot hide every other spot.
pub fn decode_records<I>(records: I) -> DecodedEvents
where
    I: IntoIterator<Item = RecordJson>,
{
    tally(records.into_iter().map(|record| decode_record(&record)))
}

/// Decodes a batch of raw journal payloads, skipping malformed ones.
///
/// Same rules as [`decode_records`], plus payloads that are not UTF-8 JSON
/// count as malformed.
pub fn decode_payloads<I>(payloads: I) -> DecodedEvents
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    tally(
        payloads
            .into_iter()
            .map(|payload| decode_payload(payload.as_ref())),
    )
}

fn tally<I>(results: I) -> DecodedEvents
where
    I: Iterator<Item = Result<ParkingEvent, DecodeError>>,
{
    let mut decoded = DecodedEvents::default();
    for (index, result) in results.enumerate() {
        match result {
            Ok(event) => decoded.events.push(event),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed event record");
                decoded.skipped += 1;
            }
        }
    }
    decoded
}
