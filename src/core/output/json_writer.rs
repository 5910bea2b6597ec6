//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::JSON_TIMESTAMP_FORMAT;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::ChatMessage;

/// Message structure for JSON and JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonMessage<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    sender: &'a str,
    body: &'a str,
}

impl<'a> JsonMessage<'a> {
    pub(super) fn from_message(msg: &'a ChatMessage, config: &OutputConfig) -> Self {
        Self {
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format(JSON_TIMESTAMP_FORMAT).to_string()),
            sender: &msg.sender,
            body: &msg.body,
        }
    }
}

/// Writes messages to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"sender": "Alice", "body": "Hello"},
///   {"sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    messages: &[ChatMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a JSON array string.
pub fn to_json(messages: &[ChatMessage], config: &OutputConfig) -> Result<String> {
    let json_messages: Vec<JsonMessage<'_>> = messages
        .iter()
        .map(|m| JsonMessage::from_message(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}
