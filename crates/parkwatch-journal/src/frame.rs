use crate::errors::JournalError;

/// Journal file magic bytes: `b"PKJ1"`.
pub const MAGIC: &[u8; 4] = b"PKJ1";

/// Current journal format version.
pub const VERSION: u16 = 0x0001;

/// File header size in bytes.
pub const HEADER_SIZE: usize = 16;

/// Frame header size in bytes.
pub const FRAME_HEADER_SIZE: usize = 8;

/// Maximum payload carried by one frame: 16 MiB.
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

/// Frame kind byte for a JSON event record.
pub const FRAME_KIND_RECORD: u8 = 0x01;

/// Journal file header.
///
/// Layout: magic (4) | version u16 LE (2) | flags u16 LE (2) | reserved (8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalHeader {
    /// Format version.
    pub version: u16,
}

impl JournalHeader {
    /// Header for the current format version.
    pub fn current() -> Self {
        Self { version: VERSION }
    }

    /// Encodes the header.
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(MAGIC);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes
    }

    /// Decodes and validates a header.
    pub fn decode(bytes: &[u8]) -> Result<Self, JournalError> {
        if bytes.len() < HEADER_SIZE {
            return Err(JournalError::InvalidHeader(format!(
                "header too short: {} bytes",
                bytes.len()
            )));
        }
        if &bytes[0..4] != MAGIC {
            return Err(JournalError::InvalidHeader(format!(
                "bad magic {:?}",
                &bytes[0..4]
            )));
        }
        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(JournalError::InvalidHeader(format!(
                "unsupported version 0x{:04x}",
                version
            )));
        }
        let flags = u16::from_le_bytes([bytes[6], bytes[7]]);
        if flags != 0 {
            return Err(JournalError::InvalidHeader(format!(
                "non-zero flags 0x{:04x}",
                flags
            )));
        }
        if bytes[8..HEADER_SIZE].iter().any(|b| *b != 0) {
            return Err(JournalError::InvalidHeader(
                "non-zero reserved bytes".to_string(),
            ));
        }
        Ok(Self { version })
    }
}

impl Default for JournalHeader {
    fn default() -> Self {
        Self::current()
    }
}

/// Kind of payload carried by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// UTF-8 JSON event record.
    Record,
    /// Kind written by a newer producer; skipped by readers.
    Unknown(u8),
}

impl From<u8> for FrameKind {
    fn from(byte: u8) -> Self {
        match byte {
            FRAME_KIND_RECORD => FrameKind::Record,
            other => FrameKind::Unknown(other),
        }
    }
}

impl From<FrameKind> for u8 {
    fn from(kind: FrameKind) -> Self {
        match kind {
            FrameKind::Record => FRAME_KIND_RECORD,
            FrameKind::Unknown(b) => b,
        }
    }
}

/// Frame header preceding every payload.
///
/// Layout: kind (1) | reserved (3) | payload length u32 LE (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Payload kind.
    pub kind: FrameKind,
    /// Payload length in bytes.
    pub len: u32,
}

impl FrameHeader {
    /// Creates a frame header for a payload of `len` bytes.
    pub fn new(kind: FrameKind, len: usize) -> Result<Self, JournalError> {
        match u32::try_from(len) {
            Ok(len) if len <= MAX_PAYLOAD_SIZE => Ok(Self { kind, len }),
            _ => Err(JournalError::PayloadTooLarge {
                size: len as u64,
                max: MAX_PAYLOAD_SIZE,
            }),
        }
    }

    /// Encodes the frame header.
    pub fn encode(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        bytes[0] = self.kind.into();
        bytes[4..8].copy_from_slice(&self.len.to_le_bytes());
        bytes
    }

    /// Decodes a frame header found at byte `offset` of the file.
    pub fn decode(bytes: &[u8], offset: u64) -> Result<Self, JournalError> {
        let invalid = |reason: String| JournalError::InvalidFrame { offset, reason };
        if bytes.len() < FRAME_HEADER_SIZE {
            return Err(invalid(format!(
                "frame header too short: {} bytes",
                bytes.len()
            )));
        }
        if bytes[1..4].iter().any(|b| *b != 0) {
            return Err(invalid("non-zero reserved bytes".to_string()));
        }
        let len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if len > MAX_PAYLOAD_SIZE {
            return Err(invalid(format!(
                "payload size {} exceeds maximum {}",
                len, MAX_PAYLOAD_SIZE
            )));
        }
        Ok(Self {
            kind: FrameKind::from(bytes[0]),
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_decodes_what_it_encodes() {
        let header = JournalHeader::current();
        assert_eq!(JournalHeader::decode(&header.encode()).unwrap(), header);
    }

    #[test]
    fn header_rejects_foreign_magic() {
        let mut bytes = JournalHeader::current().encode();
        bytes[0..4].copy_from_slice(b"NRJ1");
        assert!(JournalHeader::decode(&bytes).is_err());
    }

    #[test]
    fn header_rejects_future_version() {
        let mut bytes = JournalHeader::current().encode();
        bytes[4] = 0x02;
        let err = JournalHeader::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn header_rejects_flags_and_reserved() {
        let mut flagged = JournalHeader::current().encode();
        flagged[6] = 1;
        assert!(JournalHeader::decode(&flagged).is_err());

        let mut reserved = JournalHeader::current().encode();
        reserved[15] = 1;
        assert!(JournalHeader::decode(&reserved).is_err());
    }

    #[test]
    fn frame_header_reports_offset() {
        let mut bytes = FrameHeader::new(FrameKind::Record, 10).unwrap().encode();
        bytes[2] = 0xAA;
        match FrameHeader::decode(&bytes, 512).unwrap_err() {
            JournalError::InvalidFrame { offset, .. } => assert_eq!(offset, 512),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn frame_header_limits_payload() {
        assert!(FrameHeader::new(FrameKind::Record, MAX_PAYLOAD_SIZE as usize).is_ok());
        assert!(FrameHeader::new(FrameKind::Record, MAX_PAYLOAD_SIZE as usize + 1).is_err());
    }

    #[test]
    fn unknown_kind_keeps_its_byte() {
        let kind = FrameKind::from(0x7F);
        assert_eq!(kind, FrameKind::Unknown(0x7F));
        assert_eq!(u8::from(kind), 0x7F);
    }
}
