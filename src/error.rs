//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report, plus [`TimestampError`] for the per-record
//! failures that the parser absorbs instead of returning.
//!
//! # Error Handling Philosophy
//!
//! - **Structural** problems (no headers, header/body mismatch, nothing
//!   parseable) abort the parse and are returned as [`ChatlensError`]
//! - **Record-level** problems (one unparseable timestamp) are counted in
//!   [`ParseResult::failed`](crate::ParseResult::failed) and logged, never returned
//! - Every error has a message suitable for end users; [`ChatlensError::hint`]
//!   adds guidance for the empty-result cases

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatMessage;
///
/// fn load() -> Result<Vec<ChatMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Not a single message header was found in the input.
    ///
    /// The file is empty, is not a chat export, or uses a layout the header
    /// grammar does not recognize.
    #[error("No messages found: the file format was not recognized")]
    NoHeadersFound,

    /// Segmentation produced a different number of bodies than headers.
    ///
    /// Indicates corrupted or adversarial input; no partial result is kept.
    #[error("Mismatch between message headers ({headers}) and message bodies ({bodies}); the chat file might be corrupted")]
    HeaderBodyCountMismatch {
        /// Number of headers located
        headers: usize,
        /// Number of body segments produced
        bodies: usize,
    },

    /// Headers were found but none of them produced a valid message.
    #[error("Failed to parse any valid messages ({headers} message headers found, none had a readable timestamp)")]
    EmptyResult {
        /// Number of headers located
        headers: usize,
    },

    /// The input exceeds the configured maximum size.
    #[error("Input too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    InputTooLarge {
        /// Maximum allowed size in bytes
        max_size: usize,
        /// Actual size encountered
        actual_size: usize,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when file content is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The format doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A selected participant never sent a message in the transcript.
    #[error("Unknown participant '{name}'. Known participants: {}", known.join(", "))]
    UnknownParticipant {
        /// The requested name
        name: String,
        /// Senders present in the transcript
        known: Vec<String>,
    },

    /// Both session selections point to the same participant.
    #[error("Please select two different people (both selections are '{name}')")]
    SameParticipant {
        /// The duplicated name
        name: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read the input file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Per-record timestamp failure.
///
/// Produced while normalizing a single header; the parser absorbs it by
/// dropping that record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimestampError {
    /// None of the configured timestamp formats accepted the input.
    #[error("timestamp '{input}' matches none of the known formats")]
    Unparsable {
        /// The normalization key that was attempted
        input: String,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an input size error.
    pub fn input_too_large(max_size: usize, actual_size: usize) -> Self {
        ChatlensError::InputTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Creates a read error carrying the file path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::Read {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_) | ChatlensError::Read { .. })
    }

    /// Returns `true` if the parse produced no messages, for any reason.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            ChatlensError::NoHeadersFound | ChatlensError::EmptyResult { .. }
        )
    }

    /// Returns `true` if the input structure itself was rejected.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ChatlensError::NoHeadersFound
                | ChatlensError::HeaderBodyCountMismatch { .. }
                | ChatlensError::InputTooLarge { .. }
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns guidance a front end can show next to the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ChatlensError::NoHeadersFound => Some(
                "Make sure the file is a chat exported as text, with lines like \
                 '[14/05/25, 9:33:53 PM] Name: message'.",
            ),
            ChatlensError::EmptyResult { .. } => Some(
                "Message headers were recognized but their dates could not be read. \
                 Please ensure the file is a standard WhatsApp chat export (day/month/year dates).",
            ),
            ChatlensError::HeaderBodyCountMismatch { .. } => {
                Some("Try exporting the chat again; the file might be truncated or edited.")
            }
            ChatlensError::InputTooLarge { .. } => {
                Some("Split the export into smaller files or raise the size limit.")
            }
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
