//! Parsed chat records.
//!
//! This module provides [`ChatMessage`], one fully parsed message entry, and
//! [`ParseResult`], the ordered sequence produced by a single parse pass.
//!
//! # Examples
//!
//! ```
//! use chatlens::ChatMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let msg = ChatMessage::new(ts, "Alice", "hello");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.to_export_line(), "[1/2/24, 9:05:00 PM] Alice: hello");
//! ```

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single message recovered from a transcript.
///
/// Records are created once per recognized header/body pair and never
/// modified afterwards. The parser only produces records whose timestamp was
/// read successfully and whose sender is non-empty.
///
/// # Serialization
///
/// Timestamps serialize as ISO 8601 without a zone (`2024-02-01T21:05:00`),
/// since exports carry the sender's local wall-clock time.
///
/// ```
/// use chatlens::ChatMessage;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(21, 5, 0).unwrap();
/// let json = serde_json::to_string(&ChatMessage::new(ts, "Alice", "hi"))?;
/// assert!(json.contains("2024-02-01T21:05:00"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Wall-clock time the message was sent, second precision.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, trimmed.
    pub sender: String,

    /// Message text, trimmed. May span several lines or be empty.
    pub body: String,
}

impl ChatMessage {
    /// Creates a new record.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Renders the record in the 12-hour export layout.
    ///
    /// The output re-matches the header grammar, so feeding it back through
    /// the parser yields the same timestamp, sender and body. Years inside
    /// 2000..=2099 are written with two digits, like the exports do.
    pub fn to_export_line(&self) -> String {
        let year = self.timestamp.year();
        let date = if (2000..2100).contains(&year) {
            self.timestamp.format("%-d/%-m/%y")
        } else {
            self.timestamp.format("%-d/%-m/%Y")
        };
        format!(
            "[{}, {}] {}: {}",
            date,
            self.timestamp.format("%-I:%M:%S %p"),
            self.sender,
            self.body
        )
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_export_line())
    }
}

/// Outcome of one parse pass.
///
/// Holds the records in file order together with the counts needed for
/// diagnostics: how many headers were seen and how many of them were dropped
/// because their timestamp (or sender) could not be normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Records in the order they appear in the transcript.
    pub messages: Vec<ChatMessage>,

    /// Number of candidate headers located by segmentation.
    pub headers_found: usize,

    /// Number of headers dropped during normalization.
    pub failed: usize,
}

impl ParseResult {
    /// Number of records kept.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no record was kept.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns `true` if every located header became a record.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }

    /// Borrowing iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    /// Distinct senders in order of first appearance.
    pub fn participants(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.messages
            .iter()
            .filter(|m| seen.insert(m.sender.as_str()))
            .map(|m| m.sender.clone())
            .collect()
    }

    /// Consumes the result and returns the records.
    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }
}

impl IntoIterator for ParseResult {
    type Item = ChatMessage;
    type IntoIter = std::vec::IntoIter<ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
