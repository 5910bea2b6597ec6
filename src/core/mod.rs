//! Everything that consumes parsed messages.
//!
//! This module contains:
//! - [`analysis`] - keyword, phrase and token statistics
//! - [`session`] - two-participant analysis with per-view reports
//! - [`filter`] - message filtering by date and sender
//! - [`models`] - output configuration
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlens::core::{
//!     AnalysisSession, FilterConfig, OutputConfig, View,
//!     apply_filters, keyword_frequency,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod analysis;
pub mod filter;
pub mod models;
pub mod output;
pub mod session;

// Re-export main types for convenience
pub use analysis::{
    DEFAULT_KEYWORDS, KeywordCount, PhraseComparison, TokenCount, compare_phrase, count_phrase,
    free_text, keyword_frequency, token_frequencies,
};
pub use filter::{FilterConfig, apply_filters, filter_ref};
pub use models::OutputConfig;
pub use session::{AnalysisSession, Report, View};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
