//! Filter messages by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] / [`filter_ref`] for applying them.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from one participant |
//! | Sender, any case | [`with_sender_ignore_case`](FilterConfig::with_sender_ignore_case) | Same, case-insensitive |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//!
//! # fn main() -> chatlens::Result<()> {
//! let result = chatlens::parse(
//!     "[1/1/24, 9:00:00 AM] Alice: Old\n\
//!      [15/6/24, 9:00:00 AM] Alice: New\n\
//!      [15/6/24, 9:01:00 AM] Bob: Also new",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("Alice");
//!
//! let filtered = apply_filters(result.messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive whole days in the transcript's wall-clock time
//! - Sender matching is exact unless built with
//!   [`with_sender_ignore_case`](FilterConfig::with_sender_ignore_case)
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChatlensError, Result};
use crate::message::ChatMessage;

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender.
    pub sender: Option<String>,

    /// Compare the sender without regard to case.
    pub ignore_case: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from `00:00:00`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] unless the date is `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, up to `23:59:59`).
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] unless the date is `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(date.and_time(end_of_day));
        Ok(self)
    }

    /// Keeps only messages whose sender equals `sender` exactly.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self.ignore_case = false;
        self
    }

    /// Keeps only messages from `sender`, compared case-insensitively.
    ///
    /// ```
    /// use chatlens::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_sender_ignore_case("Alice");
    /// assert!(config.ignore_case);
    /// ```
    #[must_use]
    pub fn with_sender_ignore_case(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self.ignore_case = true;
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, ts: NaiveDateTime) -> Self {
        self.after = Some(ts);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, ts: NaiveDateTime) -> Self {
        self.before = Some(ts);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.sender.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `message` passes every active filter.
    pub fn matches(&self, message: &ChatMessage) -> bool {
        if let Some(ref sender) = self.sender {
            let same = if self.ignore_case {
                message.sender.to_lowercase() == sender.to_lowercase()
            } else {
                message.sender == *sender
            };
            if !same {
                return false;
            }
        }

        if self.after.is_some_and(|after| message.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| message.timestamp > before) {
            return false;
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters a collection of messages, consuming it.
///
/// If no filters are active the input is returned unchanged.
pub fn apply_filters(messages: Vec<ChatMessage>, config: &FilterConfig) -> Vec<ChatMessage> {
    if !config.is_active() {
        return messages;
    }

    messages.into_iter().filter(|m| config.matches(m)).collect()
}

/// Filters borrowed messages, keeping file order.
pub fn filter_ref<'a, I>(messages: I, config: &FilterConfig) -> Vec<&'a ChatMessage>
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    messages.into_iter().filter(|m| config.matches(m)).collect()
}
