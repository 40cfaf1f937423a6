use parkwatch_journal::{JournalError, JournalReader, JournalWriter, ReadMode, RecordJson, WriteOptions};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn make_record(spot: &str, ts: &str) -> RecordJson {
    json!({
        "event_id": format!("id-{spot}-{ts}"),
        "parking_spot_id": spot,
        "device_id": "sensor-1",
        "status": "Occupied",
        "plate_number": null,
        "timestamp": ts
    })
}

#[test]
fn test_write_read_in_append_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("spots.pkj");

    {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(&make_record("A1", "2024-01-01T00:00:00Z")).unwrap();
        writer.append_record(&make_record("B2", "2024-01-01T00:00:05Z")).unwrap();
        writer.finish().unwrap();
    }

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    let first = reader.read_record().unwrap().unwrap();
    let second = reader.read_record().unwrap().unwrap();
    assert_eq!(first["parking_spot_id"], "A1");
    assert_eq!(second["parking_spot_id"], "B2");
    assert!(reader.read_record().unwrap().is_none());
}

#[test]
fn test_reopen_appends_instead_of_truncating() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("spots.pkj");

    for (spot, ts) in [("A1", "2024-01-01T00:00:00Z"), ("A1", "2024-01-01T01:00:00Z")] {
        let mut writer = JournalWriter::open(&path, WriteOptions::default()).unwrap();
        writer.append_record(&make_record(spot, ts)).unwrap();
        writer.finish().unwrap();
    }

    let records = JournalReader::open(&path, ReadMode::Strict)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["timestamp"], "2024-01-01T01:00:00Z");
}

#[test]
fn test_empty_journal_has_no_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.pkj");
    JournalWriter::open(&path, WriteOptions::default())
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 16);
    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(reader.read_record().unwrap().is_none());
    assert_eq!(reader.position(), 16);
}

#[test]
fn test_open_rejects_foreign_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, b"this is definitely not a journal").unwrap();

    assert!(matches!(
        JournalReader::open(&path, ReadMode::Strict),
        Err(JournalError::InvalidHeader(_))
    ));
    assert!(matches!(
        JournalWriter::open(&path, WriteOptions::default()),
        Err(JournalError::InvalidHeader(_))
    ));
}

#[test]
fn test_writer_rejects_short_non_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("short.pkj");
    fs::write(&path, b"PKJ").unwrap();

    assert!(matches!(
        JournalWriter::open(&path, WriteOptions::default()),
        Err(JournalError::FileNotEmpty)
    ));
}

#[test]
fn test_open_missing_file_without_create_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.pkj");
    let options = WriteOptions {
        sync: false,
        create: false,
    };
    assert!(matches!(
        JournalWriter::open(&path, options),
        Err(JournalError::Io(_))
    ));
}
