//! Journal reader implementation.

use crate::errors::JournalError;
use crate::frame::{FrameHeader, FrameKind, JournalHeader, FRAME_HEADER_SIZE, HEADER_SIZE};
use crate::record::RecordJson;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// How a reader treats a frame cut short by a crash mid-append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Truncated frames are errors.
    #[default]
    Strict,
    /// Truncation is treated as end-of-file.
    Permissive,
}

/// Sequential reader over the records of a journal file.
///
/// Records are returned in the order they were appended.
///
/// # Example
///
/// ```no_run
/// use parkwatch_journal::{JournalReader, ReadMode};
///
/// let mut reader = JournalReader::open("parkwatch.pkj", ReadMode::Strict)?;
/// while let Some(record) = reader.read_record()? {
///     println!("{}", record["parking_spot_id"]);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JournalReader {
    inner: BufReader<File>,
    mode: ReadMode,
    position: u64,
}

impl JournalReader {
    /// Opens a journal file and validates its header.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if the file cannot be opened or its header is
    /// invalid.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, JournalError> {
        let mut inner = BufReader::new(File::open(path)?);
        let mut header = [0u8; HEADER_SIZE];
        inner.read_exact(&mut header).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => {
                JournalError::InvalidHeader("file shorter than header".to_string())
            }
            _ => JournalError::Io(e),
        })?;
        JournalHeader::decode(&header)?;

        Ok(Self {
            inner,
            mode,
            position: HEADER_SIZE as u64,
        })
    }

    /// Byte offset of the next frame.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads the next frame of any kind.
    ///
    /// Returns `Ok(None)` at end-of-file, or at a truncated frame in
    /// permissive mode.
    pub fn read_frame(&mut self) -> Result<Option<(FrameKind, Vec<u8>)>, JournalError> {
        let frame_start = self.position;

        let mut header_bytes = [0u8; FRAME_HEADER_SIZE];
        match fill(&mut self.inner, &mut header_bytes)? {
            0 => return Ok(None),
            n if n < FRAME_HEADER_SIZE => return self.truncated(frame_start),
            _ => {}
        }
        let header = FrameHeader::decode(&header_bytes, frame_start)?;

        let mut payload = vec![0u8; header.len as usize];
        if fill(&mut self.inner, &mut payload)? < payload.len() {
            return self.truncated(frame_start);
        }

        self.position += (FRAME_HEADER_SIZE + payload.len()) as u64;
        Ok(Some((header.kind, payload)))
    }

    /// Reads the payload of the next record frame without parsing it,
    /// skipping frames of unknown kind.
    ///
    /// Only framing is checked, so a record whose payload is not JSON still
    /// comes back and the caller decides what to do with it.
    pub fn read_payload(&mut self) -> Result<Option<Vec<u8>>, JournalError> {
        loop {
            match self.read_frame()? {
                None => return Ok(None),
                Some((FrameKind::Record, payload)) => return Ok(Some(payload)),
                Some((FrameKind::Unknown(kind), _)) => {
                    tracing::debug!(kind, offset = self.position, "skipping unknown frame kind");
                }
            }
        }
    }

    /// Reads every remaining record payload.
    ///
    /// Afterwards [`position`](Self::position) is the end of the last
    /// complete frame.
    pub fn read_all_payloads(&mut self) -> Result<Vec<Vec<u8>>, JournalError> {
        let mut payloads = Vec::new();
        while let Some(payload) = self.read_payload()? {
            payloads.push(payload);
        }
        Ok(payloads)
    }

    /// Reads the next JSON record, skipping frames of unknown kind.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] on malformed frames, non-UTF-8 or non-JSON
    /// payloads, truncation in strict mode, or I/O failure.
    pub fn read_record(&mut self) -> Result<Option<RecordJson>, JournalError> {
        match self.read_payload()? {
            None => Ok(None),
            Some(payload) => {
                let text = std::str::from_utf8(&payload)?;
                Ok(Some(serde_json::from_str(text)?))
            }
        }
    }

    /// Reads every remaining record.
    pub fn read_all(&mut self) -> Result<Vec<RecordJson>, JournalError> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    fn truncated<T>(&self, offset: u64) -> Result<Option<T>, JournalError> {
        match self.mode {
            ReadMode::Permissive => {
                tracing::warn!(offset, "truncated frame treated as end of journal");
                Ok(None)
            }
            ReadMode::Strict => Err(JournalError::TruncatedFrame { offset }),
        }
    }
}

/// Reads until `buf` is full or EOF; returns the number of bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut read = 0;
    while read < buf.len() {
        match reader.read(&mut buf[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(read)
}
