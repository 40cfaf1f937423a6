//! Journal writer implementation.

use crate::errors::JournalError;
use crate::frame::{FrameHeader, FrameKind, JournalHeader, HEADER_SIZE};
use crate::record::RecordJson;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Options for opening a journal for writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// fsync after each append (default: false).
    pub sync: bool,
    /// Create the file if it doesn't exist (default: true).
    pub create: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create: true,
        }
    }
}

/// Append-only writer for journal files.
///
/// A new file gets a header on open; an existing file must already carry a
/// valid header and is appended to. Only [`JournalWriter::truncate_to`]
/// removes bytes.
///
/// # Example
///
/// ```no_run
/// use parkwatch_journal::{JournalWriter, WriteOptions};
/// use serde_json::json;
///
/// let mut writer = JournalWriter::open("parkwatch.pkj", WriteOptions::default())?;
/// writer.append_record(&json!({"parking_spot_id": "A1"}))?;
/// writer.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct JournalWriter {
    file: File,
    sync: bool,
}

impl JournalWriter {
    /// Opens or creates a journal for appending.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`] if the file cannot be opened, or if an
    /// existing file is not a valid journal.
    pub fn open<P: AsRef<Path>>(path: P, options: WriteOptions) -> Result<Self, JournalError> {
        let mut file = OpenOptions::new()
            .create(options.create)
            .read(true)
            .write(true)
            .open(path)?;

        let len = file.metadata()?.len();
        if len == 0 {
            file.write_all(&JournalHeader::current().encode())?;
            file.flush()?;
            if options.sync {
                file.sync_all()?;
            }
        } else if len < HEADER_SIZE as u64 {
            return Err(JournalError::FileNotEmpty);
        } else {
            let mut header = [0u8; HEADER_SIZE];
            file.seek(SeekFrom::Start(0))?;
            file.read_exact(&mut header)?;
            JournalHeader::decode(&header)?;
            file.seek(SeekFrom::End(0))?;
        }

        Ok(Self {
            file,
            sync: options.sync,
        })
    }

    /// Appends one JSON record.
    pub fn append_record(&mut self, record: &RecordJson) -> Result<(), JournalError> {
        let payload = serde_json::to_vec(record)?;
        self.append_raw(FrameKind::Record, &payload)
    }

    /// Appends a frame with an arbitrary kind and payload.
    ///
    /// Header and payload are written in a single call so a crash leaves at
    /// most one truncated trailing frame.
    pub fn append_raw(&mut self, kind: FrameKind, payload: &[u8]) -> Result<(), JournalError> {
        let header = FrameHeader::new(kind, payload.len())?;
        let mut frame = Vec::with_capacity(header.encode().len() + payload.len());
        frame.extend_from_slice(&header.encode());
        frame.extend_from_slice(payload);

        self.file.write_all(&frame)?;
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }

    /// Cuts the file back to `len` bytes and continues appending there.
    ///
    /// `len` must be a frame boundary, normally the reader's
    /// [`position`](crate::JournalReader::position) after a permissive scan
    /// stopped at a torn frame. Returns the number of bytes dropped; a `len`
    /// at or past the end of the file drops nothing.
    pub fn truncate_to(&mut self, len: u64) -> Result<u64, JournalError> {
        if len < HEADER_SIZE as u64 {
            return Err(JournalError::InvalidFrame {
                offset: len,
                reason: "cannot truncate into the journal header".to_string(),
            });
        }
        let current = self.file.metadata()?.len();
        if len >= current {
            return Ok(0);
        }
        self.file.set_len(len)?;
        self.file.seek(SeekFrom::Start(len))?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(current - len)
    }

    /// Flushes (and syncs, if requested) and closes the file.
    pub fn finish(mut self) -> Result<(), JournalError> {
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }
}
