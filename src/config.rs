//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. The CLI maps its flags onto them.
//!
//! - [`ParserConfig`] - limits applied by [`ChatLogParser`](crate::parser::ChatLogParser)
//! - [`SessionConfig`] - participant selection and keyword list for an
//!   [`AnalysisSession`](crate::core::session::AnalysisSession)
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{ParserConfig, SessionConfig};
//!
//! let parser = ParserConfig::new().with_max_input_size(8 * 1024 * 1024);
//! let session = SessionConfig::new()
//!     .with_participants("Alice", "Bob")
//!     .with_keywords(["love", "miss you"]);
//!
//! assert_eq!(parser.max_input_size, 8 * 1024 * 1024);
//! assert_eq!(session.keywords.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::analysis::DEFAULT_KEYWORDS;

/// Limits applied while parsing a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Largest accepted input in bytes (default: 64MB)
    pub max_input_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024, // 64MB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input size.
    #[must_use]
    pub fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

/// Settings of one analysis session.
///
/// Replaces the selection widgets of an interactive front end: which two
/// participants are compared, which keywords are counted and how many tokens
/// the word-frequency view keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// First compared participant. `None` picks the first sender of the chat.
    pub first: Option<String>,

    /// Second compared participant. `None` picks the second sender of the chat.
    pub second: Option<String>,

    /// Keywords counted by the keyword-frequency view.
    pub keywords: Vec<String>,

    /// Number of tokens kept by the token-frequency view (default: 50)
    pub top_tokens: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first: None,
            second: None,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            top_tokens: 50,
        }
    }
}

impl SessionConfig {
    /// Creates a new configuration with the default keyword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects both compared participants.
    #[must_use]
    pub fn with_participants(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self.second = Some(second.into());
        self
    }

    /// Selects the first participant.
    #[must_use]
    pub fn with_first(mut self, name: impl Into<String>) -> Self {
        self.first = Some(name.into());
        self
    }

    /// Selects the second participant.
    #[must_use]
    pub fn with_second(mut self, name: impl Into<String>) -> Self {
        self.second = Some(name.into());
        self
    }

    /// Replaces the keyword list.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how many tokens the token-frequency view keeps.
    #[must_use]
    pub fn with_top_tokens(mut self, limit: usize) -> Self {
        self.top_tokens = limit;
        self
    }
}
