//! Tests for the CSV writer

use super::*;
use crate::pagination::Record;
use chrono::TimeZone;
use pretty_assertions::assert_eq;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().unwrap().clone()
}

#[test]
fn test_column_set_unions_keys_in_first_seen_order() {
    let records = vec![
        record(json!({"a": 1, "b": 2})),
        record(json!({"b": 3, "c": 4})),
    ];

    assert_eq!(column_set(&records), vec!["a", "b", "c"]);
}

#[test]
fn test_column_set_empty() {
    assert_eq!(column_set(&[]), Vec::<String>::new());
}

#[test]
fn test_write_fills_blanks_for_absent_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![
        record(json!({"a": 1, "b": 2})),
        record(json!({"b": 3, "c": 4})),
    ];

    let written = CsvWriter::new().write(&records, &path).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["a,b,c", "1,2,", ",3,4"]);
}

#[test]
fn test_write_empty_records_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let written = CsvWriter::new().write(&[], &path).unwrap();

    assert_eq!(written, 0);
    assert!(!path.exists());
}

#[test]
fn test_write_quotes_delimiters_and_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![record(json!({
        "id": "1",
        "text": "hey, \"you\"\nthere",
    }))];

    CsvWriter::new().write(&records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "id,text\n1,\"hey, \"\"you\"\"\nthere\"\n");
}

#[test]
fn test_write_renders_scalars_and_nulls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let records = vec![record(json!({
        "id": "42",
        "count": 7,
        "read": true,
        "gap": null,
    }))];

    CsvWriter::new().write(&records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,count,read,gap");
    assert_eq!(lines[1], "42,7,true,");
}

#[test]
fn test_write_typical_dm_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dms.csv");
    let records = vec![
        record(json!({
            "id": "1585321400000",
            "text": "see you at 6",
            "created_at": "2023-01-15T18:01:02.000Z",
            "sender_id": "2244994945",
        })),
        record(json!({
            "id": "1585321400001",
            "text": "on my way",
            "created_at": "2023-01-15T18:03:10.000Z",
            "recipient_id": "6253282",
        })),
    ];

    let written = CsvWriter::new().write(&records, &path).unwrap();
    assert_eq!(written, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,text,created_at,sender_id,recipient_id");
    assert!(lines[1].ends_with("2244994945,"));
    assert!(lines[2].ends_with(",6253282"));
}

#[test]
fn test_write_fails_on_unwritable_destination() {
    let records = vec![record(json!({"a": 1}))];
    let result = CsvWriter::new().write(&records, "/nonexistent-dir/out.csv");
    assert!(result.is_err());
}

#[test]
fn test_timestamped_filename() {
    let now = chrono::Local.with_ymd_and_hms(2024, 3, 7, 16, 5, 9).unwrap();
    assert_eq!(timestamped_filename(now), "twitter_dms_20240307_160509.csv");
}
