//! Timestamp normalization for message headers.
//!
//! Exports disagree on three things: 12- vs 24-hour clocks, whether a comma
//! sits between date and time, and how the AM/PM marker is spelled (`PM`,
//! `pm`, `p.m.`, sometimes after a narrow no-break space). Every header is
//! reduced to a canonical key and then tried against an ordered list of
//! [`TimestampFormat`]s; the first one that parses wins.
//!
//! Two-digit years (`D/M/YY`, read as `20YY`) only appear in 12-hour
//! exports. The 24-hour layouts require the full year, so
//! `[14/05/25, 21:33:53]` matches no default format.
//!
//! # Example
//!
//! ```
//! use chatlens::parsing::header::HeaderMatcher;
//! use chatlens::parsing::timestamp::{DEFAULT_FORMATS, parse_timestamp};
//!
//! let raw = HeaderMatcher::new().extract("[1/2/24, 9:05:00\u{202F}p.m.] Alice:").unwrap();
//! let ts = parse_timestamp(&raw, DEFAULT_FORMATS).unwrap();
//! assert_eq!(ts.to_string(), "2024-02-01 21:05:00");
//! ```

use std::borrow::Cow;

use chrono::NaiveDateTime;

use super::header::RawHeader;
use crate::error::TimestampError;

/// Thin space some exporters put between the time and its AM/PM marker.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

/// One accepted timestamp layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    /// Short human-readable label, used in logs.
    pub name: &'static str,
    /// chrono format string applied to the normalization key.
    pub pattern: &'static str,
    /// Whether a `D/M/YY` date is rewritten to `D/M/20YY` before `pattern`
    /// is tried. When `false` only dates that already carry four digits match.
    pub short_year: bool,
}

impl TimestampFormat {
    /// Creates a format descriptor that also accepts two-digit years.
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self {
            name,
            pattern,
            short_year: true,
        }
    }

    /// Restricts the format to dates written with a four-digit year.
    #[must_use]
    pub const fn four_digit_year(mut self) -> Self {
        self.short_year = false;
        self
    }
}

/// Formats tried by default, in order. Extend by appending.
pub const DEFAULT_FORMATS: &[TimestampFormat] = &[
    TimestampFormat::new("12-hour with comma", "%d/%m/%Y, %I:%M:%S %p"),
    TimestampFormat::new("24-hour with comma", "%d/%m/%Y, %H:%M:%S").four_digit_year(),
    TimestampFormat::new("12-hour", "%d/%m/%Y %I:%M:%S %p"),
    TimestampFormat::new("24-hour", "%d/%m/%Y %H:%M:%S").four_digit_year(),
];

/// Canonicalizes the time part of a header.
///
/// U+202F becomes a plain space, the text is trimmed, and an AM/PM marker is
/// rewritten as ` AM` / ` PM` whatever its original spelling.
///
/// ```
/// use chatlens::parsing::timestamp::normalize_time;
///
/// assert_eq!(normalize_time("9:05:00\u{202F}p.m."), "9:05:00 PM");
/// assert_eq!(normalize_time("9:05:00pm"), "9:05:00 PM");
/// assert_eq!(normalize_time(" 21:05:00 "), "21:05:00");
/// ```
pub fn normalize_time(time_text: &str) -> String {
    let time = time_text.replace(NARROW_NO_BREAK_SPACE, " ");
    let time = time.trim();

    let clock_end = time
        .find(|c: char| !(c.is_ascii_digit() || c == ':'))
        .unwrap_or(time.len());
    let (clock, rest) = time.split_at(clock_end);

    let marker: String = rest
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if marker.is_empty() {
        clock.to_string()
    } else {
        format!("{clock} {marker}")
    }
}

/// Rewrites a `D/M/YY` date as `D/M/20YY`; other dates are returned as is.
pub fn expand_two_digit_year(date_text: &str) -> Cow<'_, str> {
    match date_text.rsplit_once('/') {
        Some((day_month, year)) if year.len() == 2 => Cow::Owned(format!("{day_month}/20{year}")),
        _ => Cow::Borrowed(date_text),
    }
}

/// Builds the string the timestamp formats are matched against.
///
/// The separator is kept as the export wrote it (`", "` or `" "`), so the
/// comma and comma-less formats only ever match their own variant. The year
/// stays as written; [`parse_key`] expands it per format.
pub fn normalization_key(raw: &RawHeader<'_>) -> String {
    format!(
        "{}{}{}",
        raw.date_text,
        raw.separator.as_str(),
        normalize_time(raw.time_text)
    )
}

/// Splits `key` into its leading date and the rest.
fn split_key_date(key: &str) -> (&str, &str) {
    key.split_at(key.find([',', ' ']).unwrap_or(key.len()))
}

/// Returns `true` if the date that opens `key` has fewer than four year digits.
fn has_short_year(key: &str) -> bool {
    split_key_date(key)
        .0
        .rsplit_once('/')
        .is_some_and(|(_, year)| year.len() < 4)
}

/// Expands the year of the date that opens `key`.
fn expand_key_year(key: &str) -> Cow<'_, str> {
    let (date, rest) = split_key_date(key);
    match expand_two_digit_year(date) {
        Cow::Borrowed(_) => Cow::Borrowed(key),
        Cow::Owned(date) => Cow::Owned(date + rest),
    }
}

/// Parses a normalization key with the first matching format.
pub fn parse_key(
    key: &str,
    formats: &[TimestampFormat],
) -> Result<(NaiveDateTime, TimestampFormat), TimestampError> {
    formats
        .iter()
        .find_map(|format| {
            // chrono's %Y also reads "25" as year 25, so the length is checked here
            let candidate = match (format.short_year, has_short_year(key)) {
                (true, _) => expand_key_year(key),
                (false, true) => return None,
                (false, false) => Cow::Borrowed(key),
            };
            NaiveDateTime::parse_from_str(&candidate, format.pattern)
                .ok()
                .map(|ts| (ts, *format))
        })
        .ok_or_else(|| TimestampError::Unparsable {
            input: key.to_string(),
        })
}

/// Normalizes and parses the timestamp of one header.
pub fn parse_timestamp(
    raw: &RawHeader<'_>,
    formats: &[TimestampFormat],
) -> Result<NaiveDateTime, TimestampError> {
    parse_key(&normalization_key(raw), formats).map(|(ts, _)| ts)
}
