use serde_json::Value;

/// JSON payload of one journal record.
///
/// The journal stores event records as untyped JSON so that a record written
/// by an older or newer producer can still be read; decoding into typed
/// events happens in `parkwatch-store`.
pub type RecordJson = Value;

/// Fields every stored occupancy record is expected to carry.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "event_id",
    "parking_spot_id",
    "device_id",
    "status",
    "timestamp",
];

/// Returns true if `value` is an object carrying all [`REQUIRED_FIELDS`].
///
/// This is a structural check only; it does not validate field contents.
pub fn has_record_shape(value: &RecordJson) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    REQUIRED_FIELDS.iter().all(|field| obj.contains_key(*field))
}
