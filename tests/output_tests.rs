//! Tests for output writers (JSON, JSONL, CSV)

use chatlens::ChatMessage;
use chatlens::core::OutputConfig;
use chatlens::core::output::{to_csv, to_json, write_csv, write_json, write_jsonl};
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use std::fs;
use tempfile::tempdir;

const SAMPLE_CHAT: &str = "[15/1/24, 10:30:00 AM] Alice: Hello!
[15/1/24, 10:31:00 AM] Bob: Hi Alice!
two lines; with a semicolon
[15/1/24, 10:32:00 AM] Alice: She said \"fine\"";

fn sample_messages() -> Vec<ChatMessage> {
    chatlens::parse(SAMPLE_CHAT).unwrap().into_messages()
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_messages(), &path, &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let array = parsed.as_array().unwrap();

        assert_eq!(array.len(), 3);
        assert_eq!(array[0]["sender"], "Alice");
        assert_eq!(array[1]["body"], "Hi Alice!\ntwo lines; with a semicolon");
        assert!(array[0].get("timestamp").is_none());
    }

    #[test]
    fn test_json_with_timestamps() {
        let json = to_json(&sample_messages(), &OutputConfig::all()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["timestamp"], "2024-01-15T10:30:00");
        assert_eq!(parsed[2]["body"], "She said \"fine\"");
    }

    #[test]
    fn test_json_empty() {
        let json = to_json(&[], &OutputConfig::new()).unwrap();
        assert_eq!(json, "[]");
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_record_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&sample_messages(), &path, &OutputConfig::new().with_timestamps()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        for line in lines {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(record.get("timestamp").is_some());
            assert!(record.get("sender").is_some());
        }
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_messages(), &path, &OutputConfig::new().with_timestamps()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&path)
            .unwrap();

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Timestamp", "Sender", "Body"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "2024-01-15 10:30:00");
        assert_eq!(&rows[1][2], "Hi Alice!\ntwo lines; with a semicolon");
        assert_eq!(&rows[2][2], "She said \"fine\"");
    }

    #[test]
    fn test_csv_without_timestamps() {
        let csv = to_csv(&sample_messages(), &OutputConfig::new()).unwrap();
        assert!(csv.starts_with("Sender;Body\n"));
        assert!(csv.contains("Alice;Hello!\n"));
    }
}

// ============================================================================
// Format dispatch
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn test_write_to_format_by_extension() {
        let dir = tempdir().unwrap();
        let messages = sample_messages();

        for name in ["out.csv", "out.json", "out.jsonl"] {
            let path = dir.path().join(name);
            let format = OutputFormat::from_path(&path).unwrap();
            write_to_format(&messages, &path, format, &OutputConfig::new()).unwrap();

            let written = fs::read_to_string(&path).unwrap();
            let expected = to_format_string(&messages, format, &OutputConfig::new()).unwrap();
            assert_eq!(written, expected, "{name}");
        }
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_to_format(&sample_messages(), &path, OutputFormat::Csv, &OutputConfig::new())
            .unwrap_err();
        assert!(err.is_io());
    }
}
