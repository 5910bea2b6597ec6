//! Output format selection.
//!
//! [`OutputFormat`] names the three record formats, detects them from file
//! extensions, and dispatches to the writers in [`core::output`](crate::core::output).
//! The type carries no CLI framework dependency; the CLI wraps it.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::core::models::OutputConfig;
//!
//! let result = chatlens::parse("[1/2/24, 9:05:00 PM] Alice: Hello!")?;
//!
//! let format = OutputFormat::from_path("export.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&result.messages, format, &OutputConfig::new())?;
//! assert!(jsonl.contains("Hello!"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatlensError, Result};
use crate::message::ChatMessage;

/// Record format for converted transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines, one object per line. Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Cargo feature the writer for this format lives behind.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension, case-insensitively.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/chat.NDJSON").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("chat.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        ext.parse().map_err(|_| {
            ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }

    fn unavailable(self) -> ChatlensError {
        ChatlensError::invalid_format(
            "output",
            format!(
                "Output format {self} requires the '{}' feature to be enabled",
                self.required_feature()
            ),
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes messages to a file in the given format.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    messages: &[ChatMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

/// Renders messages to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[ChatMessage],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("ndjson".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ChatlensError::InvalidFormat { format: "output", .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("/tmp/a.b/out.json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("out.jsonl").unwrap(), OutputFormat::Jsonl);
        assert!(OutputFormat::from_path("out.txt").is_err());
        assert!(OutputFormat::from_path("no_extension").is_err());
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Json.required_feature(), "json-output");
        assert_eq!(OutputFormat::all().len(), 3);
    }

    #[test]
    fn test_format_serde() {
        assert_eq!(serde_json::to_string(&OutputFormat::Jsonl).unwrap(), "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        let result = crate::parse("[1/2/24, 9:05:00 PM] Alice: Hello").unwrap();
        let config = OutputConfig::new();

        let csv = to_format_string(&result.messages, OutputFormat::Csv, &config).unwrap();
        assert!(csv.contains("Alice;Hello"));

        let json = to_format_string(&result.messages, OutputFormat::Json, &config).unwrap();
        assert!(json.trim_start().starts_with('['));

        let jsonl = to_format_string(&result.messages, OutputFormat::Jsonl, &config).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
    }
}
