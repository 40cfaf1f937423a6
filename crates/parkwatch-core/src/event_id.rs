use base64::Engine;
use sha2::{Digest, Sha256};

use crate::event::NewEvent;
use crate::identifiers::EventId;

/// Domain separator for event id computation: `b"parkwatch:event:v1\0"`.
const EVENT_DOMAIN_SEPARATOR: &[u8] = b"parkwatch:event:v1\0";

/// Computes the id for an event appended at position `sequence`.
///
/// Formula: `sha256(domain_separator || sequence_le || json(event))`,
/// encoded as base64url without padding.
///
/// The sequence makes ids unique even when a sensor reports the same body
/// twice; the journal is append-only so a sequence is never handed out again.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if the event body cannot be serialized.
pub fn compute_event_id(event: &NewEvent, sequence: u64) -> Result<EventId, serde_json::Error> {
    let body = serde_json::to_vec(event)?;

    let mut hasher = Sha256::new();
    hasher.update(EVENT_DOMAIN_SEPARATOR);
    hasher.update(sequence.to_le_bytes());
    hasher.update(&body);
    let hash_bytes = hasher.finalize();
    Ok(EventId::new(
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes),
    ))
}
