//! JSON Lines (JSONL) output writer.
//!
//! One JSON object per line, no enclosing array. Suits `jq`, line-oriented
//! tooling and appending to existing files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonMessage;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::ChatMessage;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"Alice","body":"Hello"}
/// {"sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    messages: &[ChatMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(messages, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[ChatMessage], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[ChatMessage], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for msg in messages {
        let line = serde_json::to_string(&JsonMessage::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn msg(sender: &str, body: &str) -> ChatMessage {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        ChatMessage::new(ts, sender, body)
    }

    #[test]
    fn test_write_jsonl_basic() {
        let messages = vec![msg("Alice", "Hello"), msg("Bob", "Hi\nthere")];

        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&messages, temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["body"], "Hello");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["body"], "Hi\nthere");
    }

    #[test]
    fn test_to_jsonl_with_timestamps() {
        let jsonl = to_jsonl(&[msg("Alice", "Hello")], &OutputConfig::new().with_timestamps()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(jsonl.trim()).unwrap();

        assert_eq!(parsed["timestamp"], "2024-06-15T12:30:00");
        assert!(!jsonl.contains('['));
    }
}
