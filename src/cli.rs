//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] / [`Command`] - the `convert` and `analyze` subcommands
//! - [`FormatArg`] - output format flag, mapped onto [`format::OutputFormat`](crate::format::OutputFormat)
//! - [`ViewArg`] - report view flag, mapped onto [`View`]
//!
//! The arguments convert into the library's plain configuration structs, so
//! the binary itself only wires things together.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::config::SessionConfig;
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::core::session::View;
use crate::error::Result;
use crate::format::OutputFormat;

/// Default output path stem; the extension follows `--format`.
pub const DEFAULT_OUTPUT_STEM: &str = "chat_export";

/// Parse chat transcripts into records and explore who said what.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens convert chat.txt
    chatlens convert chat.txt -o messages.jsonl -f jsonl -t
    chatlens convert chat.txt --after 2024-01-01 --from Alice
    chatlens analyze chat.txt
    chatlens analyze chat.txt --first Bob --second Alice --view second
    chatlens analyze chat.txt --keyword love --keyword hug --phrase \"i love you\"")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a transcript and write its messages as CSV, JSON or JSONL
    Convert(ConvertArgs),

    /// Parse a transcript and print keyword and word statistics
    Analyze(AnalyzeArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Path to output file [default: chat_export.<format>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender only (case-insensitive)
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,
}

impl ConvertArgs {
    /// Output path, defaulting to `chat_export.<ext>`.
    pub fn output_path(&self) -> String {
        self.output.clone().unwrap_or_else(|| {
            format!(
                "{DEFAULT_OUTPUT_STEM}.{}",
                OutputFormat::from(self.format).extension()
            )
        })
    }

    /// Builds the filter from `--after`, `--before` and `--from`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`](crate::ChatlensError::InvalidDate)
    /// for a malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender_ignore_case(from.clone());
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        if self.timestamps {
            OutputConfig::new().with_timestamps()
        } else {
            OutputConfig::new()
        }
    }
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// First participant to compare [default: first sender]
    #[arg(long, value_name = "NAME")]
    pub first: Option<String>,

    /// Second participant to compare [default: second sender]
    #[arg(long, value_name = "NAME")]
    pub second: Option<String>,

    /// Which messages the report covers
    #[arg(long, value_enum, default_value = "overall")]
    pub view: ViewArg,

    /// Keyword to count; repeat to build a list [default: built-in list]
    #[arg(short, long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Compare how many messages of each participant contain this phrase
    #[arg(short, long)]
    pub phrase: Option<String>,

    /// Number of most frequent words to list
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

impl AnalyzeArgs {
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new().with_top_tokens(self.top);
        if let Some(ref first) = self.first {
            config = config.with_first(first.clone());
        }
        if let Some(ref second) = self.second {
            config = config.with_second(second.clone());
        }
        if !self.keywords.is_empty() {
            config = config.with_keywords(self.keywords.iter().cloned());
        }
        config
    }
}

/// Output format flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines, one object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Report view flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ViewArg {
    /// The whole conversation
    #[default]
    Overall,

    /// Messages of the first participant
    First,

    /// Messages of the second participant
    Second,
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> View {
        match view {
            ViewArg::Overall => View::Overall,
            ViewArg::First => View::First,
            ViewArg::Second => View::Second,
        }
    }
}
