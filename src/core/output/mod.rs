//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | CSV | spreadsheets, pandas, quick inspection |
//! | JSON | structured data, APIs |
//! | JSONL | line-oriented tools, appending, `jq` |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use chatlens::core::models::OutputConfig;
//!
//! let result = chatlens::parse("[1/2/24, 9:05:00 PM] Alice: Hello!\n[1/2/24, 9:06:00 PM] Bob: Hi there!")?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! // Write to files
//! write_csv(&result.messages, "output.csv", &config)?;
//! write_json(&result.messages, "output.json", &config)?;
//! write_jsonl(&result.messages, "output.jsonl", &config)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&result.messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by the CSV writer.
#[cfg(feature = "csv-output")]
const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp layout used by the JSON writers (ISO 8601, no zone).
#[cfg(feature = "json-output")]
const JSON_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
