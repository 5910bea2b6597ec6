//! # Chatlens
//!
//! A Rust library for parsing plain-text chat exports (the
//! `[D/M/YY, H:MM:SS PM] Sender: text` layout written by WhatsApp and
//! similar messengers) into typed records, and for running simple
//! conversation statistics over them.
//!
//! ## Overview
//!
//! - One message may span many lines; a new message starts only where a
//!   bracketed timestamp header followed by `Sender:` appears.
//! - 12- and 24-hour clocks, with or without a comma after the date, and
//!   AM/PM markers written after a narrow no-break space are all accepted.
//! - A header with an unreadable timestamp drops only that message; the
//!   number of drops is reported alongside the records.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "[1/2/24, 9:05:00 PM] Alice: hello\nworld\n[1/2/24, 9:06:00 PM] Bob: hi";
//!     let result = ChatLogParser::new().parse(text)?;
//!
//!     assert_eq!(result.len(), 2);
//!     assert_eq!(result.messages[0].body, "hello\nworld");
//!
//!     let session = AnalysisSession::new(result, SessionConfig::new())?;
//!     let report = session.report(View::Overall);
//!     assert_eq!(report.message_count, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatLogParser`], the two-pass transcript parser
//! - [`parsing`] - header grammar ([`parsing::header`]) and timestamp
//!   normalization ([`parsing::timestamp`])
//! - [`message`] - [`ChatMessage`] and [`ParseResult`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`SessionConfig`](config::SessionConfig)
//! - [`core`] - analysis, sessions, filtering and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatlensError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{ChatMessage, ParseResult};
pub use parser::{ChatLogParser, parse};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::message::{ChatMessage, ParseResult};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::ChatLogParser;
    pub use crate::parsing::{HeaderMatcher, TimestampFormat};

    pub use crate::config::{ParserConfig, SessionConfig};

    pub use crate::core::analysis::{
        DEFAULT_KEYWORDS, compare_phrase, count_phrase, free_text, keyword_frequency,
        token_frequencies,
    };
    pub use crate::core::filter::{FilterConfig, apply_filters, filter_ref};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::session::{AnalysisSession, Report, View};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
