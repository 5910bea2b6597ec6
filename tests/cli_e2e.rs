//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check the
//! files it writes and what it prints.
//!
//! # Test Categories
//!
//! - **Convert**: CSV, JSON, JSONL generation, timestamps, filters
//! - **Analyze**: participants, views, keywords, phrase comparison
//! - **Error handling**: proper error messages and hints for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "[15/1/24, 10:30:00 AM] Alice: Hello love!
[15/1/24, 10:31:00 AM] Bob: Hi Alice! I love you
and I miss you
[16/1/24, 8:00:00 AM] Alice: I love you too, darling
[16/1/24, 8:05:00 AM] Bob: <Media omitted>
[17/1/2024, 21:10:00] Alice: good night";

/// Creates a temporary directory with transcript fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(
        dir.path().join("solo.txt"),
        "[1/2/24, 9:05:00 PM] Alice: note to self\n[1/2/24, 9:06:00 PM] Alice: another",
    )
    .unwrap();
    fs::write(dir.path().join("plain.txt"), "just a note\nwithout any header\n").unwrap();
    fs::write(
        dir.path().join("bad_dates.txt"),
        "[1/13/24, 9:05:00 PM] Alice: month thirteen",
    )
    .unwrap();

    dir
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").unwrap()
}

// ============================================================================
// Convert
// ============================================================================

mod convert_tests {
    use super::*;

    #[test]
    fn test_convert_to_csv() {
        let dir = setup_fixtures();
        let output = dir.path().join("out.csv");

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "chat.txt"))
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 5 messages"))
            .stdout(predicate::str::contains("✅ Done!"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Sender;Body\n"));
        assert!(content.contains("\"Hi Alice! I love you\nand I miss you\""));
    }

    #[test]
    fn test_convert_to_json_with_timestamps() {
        let dir = setup_fixtures();
        let output = dir.path().join("out.json");

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "chat.txt"))
            .args(["-f", "json", "-t", "-o"])
            .arg(&output)
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 5);
        assert_eq!(parsed[0]["timestamp"], "2024-01-15T10:30:00");
        assert_eq!(parsed[4]["timestamp"], "2024-01-17T21:10:00");
    }

    #[test]
    fn test_convert_to_jsonl() {
        let dir = setup_fixtures();
        let output = dir.path().join("out.jsonl");

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "chat.txt"))
            .args(["--format", "jsonl", "--output"])
            .arg(&output)
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 5);
        for line in content.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_convert_default_output_path() {
        let dir = setup_fixtures();

        chatlens()
            .current_dir(dir.path())
            .args(["convert", "chat.txt", "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chat_export.json"));

        assert!(dir.path().join("chat_export.json").exists());
    }

    #[test]
    fn test_convert_filters() {
        let dir = setup_fixtures();
        let output = dir.path().join("filtered.jsonl");

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "chat.txt"))
            .args(["-f", "jsonl", "--after", "2024-01-16", "--from", "alice", "-o"])
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("2 messages after filtering"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|l| l.contains("\"sender\":\"Alice\"")));
    }

    #[test]
    fn test_convert_invalid_date() {
        let dir = setup_fixtures();

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "chat.txt"))
            .args(["--after", "15/01/2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"))
            .stderr(predicate::str::contains("💡"));
    }

    #[test]
    fn test_convert_reports_skipped_headers() {
        let dir = setup_fixtures();
        let text = format!("{CHAT}\n[1/13/24, 9:05:00 PM] Bob: impossible date");
        fs::write(dir.path().join("partial.txt"), text).unwrap();

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "partial.txt"))
            .arg("-o")
            .arg(dir.path().join("out.csv"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Skipped 1 of 6 headers"));
    }
}

// ============================================================================
// Analyze
// ============================================================================

mod analyze_tests {
    use super::*;

    #[test]
    fn test_analyze_overall() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("👥 Participants: Alice and Bob"))
            .stdout(predicate::str::contains("Overall Analysis"))
            .stdout(predicate::str::contains("Keyword frequency"))
            .stdout(predicate::str::contains("Most common words"));
    }

    #[test]
    fn test_analyze_second_view_with_keywords() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "chat.txt"))
            .args(["--view", "second", "-k", "hug"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bob's Analysis"))
            .stdout(predicate::str::contains("Bob didn't use any of the tracked words."));
    }

    #[test]
    fn test_analyze_phrase_comparison() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "chat.txt"))
            .args(["--phrase", "I love you"])
            .assert()
            .success()
            .stdout(predicate::str::contains("💬 Messages containing \"I love you\":"));
    }

    #[test]
    fn test_analyze_unknown_participant() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "chat.txt"))
            .args(["--first", "Carol"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown participant 'Carol'"));
    }

    #[test]
    fn test_analyze_single_sender() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "solo.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please select two different people"));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_no_headers() {
        let dir = setup_fixtures();

        chatlens()
            .arg("convert")
            .arg(fixture(&dir, "plain.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("No messages found"));
    }

    #[test]
    fn test_headers_without_timestamps() {
        let dir = setup_fixtures();

        chatlens()
            .arg("analyze")
            .arg(fixture(&dir, "bad_dates.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse any valid messages"));
    }

    #[test]
    fn test_missing_file() {
        chatlens()
            .args(["convert", "definitely/not/here.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("❌ Error"));
    }

    #[test]
    fn test_unknown_format_rejected_by_clap() {
        chatlens()
            .args(["convert", "chat.txt", "-f", "xml"])
            .assert()
            .failure();
    }
}
