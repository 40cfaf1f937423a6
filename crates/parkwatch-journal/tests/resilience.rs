use parkwatch_journal::frame::{FRAME_HEADER_SIZE, HEADER_SIZE, MAX_PAYLOAD_SIZE};
use parkwatch_journal::{FrameHeader, FrameKind, JournalError, JournalReader, JournalWriter, ReadMode, WriteOptions};
use serde_json::json;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tempfile::TempDir;

fn journal_with_two_records(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("spots.pkj");
    let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
    writer
        .append_record(&json!({"parking_spot_id": "A1", "status": "Occupied"}))
        .unwrap();
    writer
        .append_record(&json!({"parking_spot_id": "A2", "status": "Vacant"}))
        .unwrap();
    writer.finish().unwrap();
    path
}

fn chop(path: &std::path::Path, bytes: u64) {
    let len = fs::metadata(path).unwrap().len();
    let file = OpenOptions::new().write(true).open(path).unwrap();
    file.set_len(len - bytes).unwrap();
}

#[test]
fn test_truncated_payload_strict_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    chop(&path, 3);

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(reader.read_record().unwrap().is_some());
    assert!(matches!(
        reader.read_record(),
        Err(JournalError::TruncatedFrame { .. })
    ));
}

#[test]
fn test_truncated_payload_permissive_is_eof() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    chop(&path, 3);

    let records = JournalReader::open(&path, ReadMode::Permissive)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["parking_spot_id"], "A1");
}

#[test]
fn test_partial_frame_header_is_truncation() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    {
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&[0x01, 0x00]).unwrap();
    }

    let mut strict = JournalReader::open(&path, ReadMode::Strict).unwrap();
    strict.read_record().unwrap();
    strict.read_record().unwrap();
    assert!(matches!(
        strict.read_record(),
        Err(JournalError::TruncatedFrame { .. })
    ));

    let permissive = JournalReader::open(&path, ReadMode::Permissive)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(permissive.len(), 2);
}

#[test]
fn test_unknown_frames_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mixed.pkj");
    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_raw(FrameKind::Unknown(0x09), b"opaque").unwrap();
        writer
            .append_record(&json!({"parking_spot_id": "C3"}))
            .unwrap();
        writer.finish().unwrap();
    }

    let records = JournalReader::open(&path, ReadMode::Strict)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["parking_spot_id"], "C3");
}

#[test]
fn test_non_json_record_payload_is_still_readable_raw() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("garbage.pkj");
    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer
            .append_record(&json!({"parking_spot_id": "A1"}))
            .unwrap();
        writer.append_raw(FrameKind::Record, b"{not json").unwrap();
        writer.append_raw(FrameKind::Record, &[0xff, 0xfe, 0x00]).unwrap();
        writer
            .append_record(&json!({"parking_spot_id": "C3"}))
            .unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let payloads = reader.read_all_payloads().unwrap();
    assert_eq!(payloads.len(), 4);
    assert_eq!(payloads[1], b"{not json");
    assert_eq!(payloads[2], [0xff, 0xfe, 0x00]);
    assert_eq!(reader.position(), fs::metadata(&path).unwrap().len());

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(reader.read_record().unwrap().is_some());
    assert!(matches!(reader.read_record(), Err(JournalError::Json(_))));
    assert!(matches!(reader.read_record(), Err(JournalError::InvalidUtf8(_))));
}

#[test]
fn test_truncate_to_drops_torn_tail_before_append() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    {
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        // frame header promising 100 bytes, followed by only 4
        let mut torn = FrameHeader::new(FrameKind::Record, 100).unwrap().encode().to_vec();
        torn.extend_from_slice(b"{\"pa");
        file.write_all(&torn).unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Permissive).unwrap();
    assert_eq!(reader.read_all_payloads().unwrap().len(), 2);
    let boundary = reader.position();

    let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
    assert_eq!(writer.truncate_to(boundary).unwrap(), (FRAME_HEADER_SIZE + 4) as u64);
    writer
        .append_record(&json!({"parking_spot_id": "B2", "status": "Occupied"}))
        .unwrap();
    writer.finish().unwrap();

    let records = JournalReader::open(&path, ReadMode::Strict)
        .unwrap()
        .read_all()
        .unwrap();
    let spots: Vec<_> = records.iter().map(|r| r["parking_spot_id"].clone()).collect();
    assert_eq!(spots, [json!("A1"), json!("A2"), json!("B2")]);
}

#[test]
fn test_truncate_to_refuses_header_and_ignores_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    let len = fs::metadata(&path).unwrap().len();

    let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
    assert!(matches!(
        writer.truncate_to(HEADER_SIZE as u64 - 1),
        Err(JournalError::InvalidFrame { .. })
    ));
    assert_eq!(writer.truncate_to(len).unwrap(), 0);
    assert_eq!(writer.truncate_to(len + 10).unwrap(), 0);
    writer.finish().unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), len);
}

#[test]
fn test_oversized_payload_is_rejected_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("big.pkj");
    let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();

    let oversized = vec![b' '; MAX_PAYLOAD_SIZE as usize + 1];
    match writer.append_raw(FrameKind::Record, &oversized) {
        Err(JournalError::PayloadTooLarge { size, max }) => {
            assert_eq!(size, MAX_PAYLOAD_SIZE as u64 + 1);
            assert_eq!(max, MAX_PAYLOAD_SIZE);
        }
        other => panic!("expected PayloadTooLarge, got {:?}", other.err()),
    }
    writer.finish().unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), HEADER_SIZE as u64);
}

#[test]
fn test_corrupt_reserved_bytes_are_invalid_frame() {
    let temp_dir = TempDir::new().unwrap();
    let path = journal_with_two_records(&temp_dir);
    let mut bytes = fs::read(&path).unwrap();
    bytes[HEADER_SIZE + 1] = 0xFF;
    fs::write(&path, &bytes).unwrap();

    let mut reader = JournalReader::open(&path, ReadMode::Permissive).unwrap();
    match reader.read_record() {
        Err(JournalError::InvalidFrame { offset, .. }) => assert_eq!(offset, HEADER_SIZE as u64),
        other => panic!("expected InvalidFrame, got {other:?}"),
    }
    assert_eq!(FRAME_HEADER_SIZE, 8);
}
