//! Transcript parser.
//!
//! [`ChatLogParser`] turns a complete export buffer into an ordered
//! [`ParseResult`]. Parsing is two passes: segmentation on header boundaries,
//! then normalization of each header/body pair. Structural problems abort the
//! parse; a single unreadable header only drops that message.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatLogParser;
//!
//! let text = "[1/2/24, 9:05:00 PM] Alice: hello\nworld\n[1/2/24, 9:06:00 PM] Bob: hi";
//! let result = ChatLogParser::new().parse(text)?;
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.messages[0].body, "hello\nworld");
//! assert_eq!(result.messages[1].sender, "Bob");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Failure modes
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | no header in the buffer | [`ChatlensError::NoHeadersFound`] |
//! | headers and bodies disagree | [`ChatlensError::HeaderBodyCountMismatch`] |
//! | one header has an unreadable timestamp | message dropped, counted in [`ParseResult::failed`] |
//! | every header was dropped | [`ChatlensError::EmptyResult`] |

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result, TimestampError};
use crate::message::{ChatMessage, ParseResult};
use crate::parsing::header::HeaderMatcher;
use crate::parsing::timestamp::{DEFAULT_FORMATS, TimestampFormat, parse_timestamp};

/// Direction mark iOS exports leave at the edges of some lines.
const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Why a located header did not become a message.
#[derive(Debug, Error)]
enum Rejection {
    #[error("header fields could not be extracted")]
    Fields,
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("sender is empty")]
    EmptySender,
}

/// Parser for text chat exports.
///
/// The parser holds no per-call state: the same instance can parse any
/// number of buffers, and parsing the same buffer twice gives equal results.
#[derive(Debug, Clone)]
pub struct ChatLogParser {
    config: ParserConfig,
    matcher: HeaderMatcher,
    formats: Vec<TimestampFormat>,
}

impl ChatLogParser {
    /// Creates a parser with default configuration and timestamp formats.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            matcher: HeaderMatcher::new(),
            formats: DEFAULT_FORMATS.to_vec(),
        }
    }

    /// Replaces the ordered list of timestamp formats.
    #[must_use]
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = TimestampFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Appends a timestamp format, tried after the existing ones.
    #[must_use]
    pub fn push_format(mut self, format: TimestampFormat) -> Self {
        self.formats.push(format);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the timestamp formats in the order they are tried.
    pub fn formats(&self) -> &[TimestampFormat] {
        &self.formats
    }

    /// Parses a complete transcript held in memory.
    pub fn parse(&self, raw_text: &str) -> Result<ParseResult> {
        if raw_text.len() > self.config.max_input_size {
            return Err(ChatlensError::input_too_large(
                self.config.max_input_size,
                raw_text.len(),
            ));
        }

        let segmentation = self.matcher.segment(raw_text);
        let headers_found = segmentation.headers.len();

        if segmentation.is_empty() {
            debug!(bytes = raw_text.len(), "no message headers found");
            return Err(ChatlensError::NoHeadersFound);
        }

        if !segmentation.is_consistent() {
            return Err(ChatlensError::HeaderBodyCountMismatch {
                headers: headers_found,
                bodies: segmentation.bodies.len(),
            });
        }

        let mut messages = Vec::with_capacity(headers_found);
        let mut failed = 0;

        for (index, (header, body)) in segmentation.pairs().enumerate() {
            match self.build_message(header, body) {
                Ok(message) => messages.push(message),
                Err(reason) => {
                    failed += 1;
                    debug!(index, header, %reason, "dropping message");
                }
            }
        }

        if messages.is_empty() {
            return Err(ChatlensError::EmptyResult {
                headers: headers_found,
            });
        }

        if failed > 0 {
            warn!(
                failed,
                headers = headers_found,
                "some messages had unreadable headers and were skipped"
            );
        }
        info!(
            headers = headers_found,
            messages = messages.len(),
            failed,
            "parsed transcript"
        );

        Ok(ParseResult {
            messages,
            headers_found,
            failed,
        })
    }

    /// Reads a UTF-8 export from disk and parses it.
    ///
    /// The size limit is checked against file metadata before reading.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let path = path.as_ref();

        let size = fs::metadata(path)
            .map_err(|e| ChatlensError::read(path, e))?
            .len();
        let size = usize::try_from(size).unwrap_or(usize::MAX);
        if size > self.config.max_input_size {
            return Err(ChatlensError::input_too_large(
                self.config.max_input_size,
                size,
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| ChatlensError::read(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read transcript");
        self.parse(&content)
    }

    fn build_message(&self, header: &str, body: &str) -> std::result::Result<ChatMessage, Rejection> {
        let raw = self.matcher.extract(header).ok_or(Rejection::Fields)?;
        let timestamp = parse_timestamp(&raw, &self.formats)?;

        let sender = raw.sender_text.trim();
        if sender.is_empty() {
            return Err(Rejection::EmptySender);
        }

        let body = body.trim_matches(|c: char| c.is_whitespace() || c == LEFT_TO_RIGHT_MARK);

        Ok(ChatMessage::new(timestamp, sender, body))
    }
}

impl Default for ChatLogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a transcript with the default parser.
///
/// ```rust
/// let result = chatlens::parse("[14/05/25, 9:33:53 PM] Alice: Hi")?;
/// assert_eq!(result.messages[0].sender, "Alice");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse(raw_text: &str) -> Result<ParseResult> {
    ChatLogParser::new().parse(raw_text)
}
