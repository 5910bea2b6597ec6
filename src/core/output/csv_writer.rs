//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::CSV_TIMESTAMP_FORMAT;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::ChatMessage;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Body`, preceded by `Timestamp` when enabled
/// - Encoding: UTF-8; multi-line bodies are quoted
pub fn write_csv(
    messages: &[ChatMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], returned in memory.
pub fn to_csv(messages: &[ChatMessage], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[ChatMessage], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(3);
    if config.include_timestamps {
        header.push("Timestamp");
    }
    header.push("Sender");
    header.push("Body");
    header
}

fn build_record(msg: &ChatMessage, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::with_capacity(3);
    if config.include_timestamps {
        record.push(msg.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string());
    }
    record.push(msg.sender.clone());
    record.push(msg.body.clone());
    record
}
