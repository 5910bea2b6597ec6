//! Two-participant analysis session.
//!
//! An [`AnalysisSession`] owns one [`ParseResult`] and the explicit
//! [`SessionConfig`] describing what to look at: which two senders are
//! compared, which keywords are counted and how many tokens are kept. Each
//! [`View`] yields a [`Report`] built from the functions in
//! [`analysis`](crate::core::analysis).
//!
//! # Example
//!
//! ```
//! use chatlens::config::SessionConfig;
//! use chatlens::core::session::{AnalysisSession, View};
//!
//! # fn main() -> chatlens::Result<()> {
//! let result = chatlens::parse(
//!     "[1/2/24, 9:05:00 PM] Alice: I love you\n\
//!      [1/2/24, 9:06:00 PM] Bob: love you too, darling",
//! )?;
//!
//! let session = AnalysisSession::new(result, SessionConfig::new())?;
//! assert_eq!(session.first(), "Alice");
//!
//! let report = session.report(View::Second);
//! assert_eq!(report.title, "Bob's Analysis");
//! assert_eq!(report.keywords[0].keyword, "love");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analysis::{
    KeywordCount, PhraseComparison, TokenCount, compare_phrase, keyword_frequency,
    token_frequencies,
};
use crate::config::SessionConfig;
use crate::error::{ChatlensError, Result};
use crate::message::{ChatMessage, ParseResult};

/// Which messages a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Every message of the transcript.
    #[default]
    Overall,
    /// Messages of the first selected participant.
    First,
    /// Messages of the second selected participant.
    Second,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Overall => write!(f, "overall"),
            View::First => write!(f, "first"),
            View::Second => write!(f, "second"),
        }
    }
}

/// Statistics for one [`View`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub view: View,
    /// Heading, e.g. `Overall Analysis` or `Alice's Analysis`.
    pub title: String,
    /// Participant the view is restricted to, if any.
    pub participant: Option<String>,
    pub message_count: usize,
    /// Keyword counts, highest first; keywords never used are absent.
    pub keywords: Vec<KeywordCount>,
    pub top_tokens: Vec<TokenCount>,
}

impl Report {
    /// Returns `true` if none of the tracked keywords occurred.
    pub fn has_no_keywords(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// A parsed transcript with two selected participants.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    result: ParseResult,
    config: SessionConfig,
    first: String,
    second: String,
}

impl AnalysisSession {
    /// Creates a session, resolving the selected participants.
    ///
    /// Unset selections default to the first and second sender in order of
    /// appearance. With a single sender both defaults resolve to the same
    /// name and the session is rejected.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::EmptyResult`] if `result` holds no message
    /// - [`ChatlensError::UnknownParticipant`] if a selected name never sent a message
    /// - [`ChatlensError::SameParticipant`] if both selections resolve to one name
    pub fn new(result: ParseResult, config: SessionConfig) -> Result<Self> {
        if result.is_empty() {
            return Err(ChatlensError::EmptyResult {
                headers: result.headers_found,
            });
        }
        let participants = result.participants();

        let first = resolve(config.first.as_deref(), 0, &participants)?;
        let second = resolve(
            config.second.as_deref(),
            if participants.len() > 1 { 1 } else { 0 },
            &participants,
        )?;

        if first == second {
            return Err(ChatlensError::SameParticipant { name: first });
        }

        debug!(%first, %second, messages = result.len(), "analysis session ready");

        Ok(Self {
            result,
            config,
            first,
            second,
        })
    }

    /// First selected participant.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second selected participant.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying parse result.
    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    /// Every distinct sender, in order of first appearance.
    pub fn participants(&self) -> Vec<String> {
        self.result.participants()
    }

    /// Messages covered by `view`, in file order.
    pub fn messages(&self, view: View) -> Vec<&ChatMessage> {
        match self.participant(view) {
            Some(name) => self.messages_from(name),
            None => self.result.iter().collect(),
        }
    }

    /// Builds the report for `view`.
    pub fn report(&self, view: View) -> Report {
        let messages = self.messages(view);
        let participant = self.participant(view).map(str::to_string);
        let title = match &participant {
            Some(name) => format!("{name}'s Analysis"),
            None => "Overall Analysis".to_string(),
        };

        Report {
            view,
            title,
            participant,
            message_count: messages.len(),
            keywords: keyword_frequency(messages.iter().copied(), &self.config.keywords),
            top_tokens: token_frequencies(messages.iter().copied(), self.config.top_tokens),
        }
    }

    /// Counts messages containing `phrase` for each selected participant.
    pub fn phrase_comparison(&self, phrase: &str) -> PhraseComparison {
        compare_phrase(
            self.messages_from(&self.first),
            self.messages_from(&self.second),
            phrase,
        )
    }

    fn participant(&self, view: View) -> Option<&str> {
        match view {
            View::Overall => None,
            View::First => Some(&self.first),
            View::Second => Some(&self.second),
        }
    }

    fn messages_from(&self, name: &str) -> Vec<&ChatMessage> {
        self.result.iter().filter(|m| m.sender == name).collect()
    }
}

fn resolve(selected: Option<&str>, default_index: usize, participants: &[String]) -> Result<String> {
    match selected {
        Some(name) if participants.iter().any(|p| p == name) => Ok(name.to_string()),
        Some(name) => Err(ChatlensError::UnknownParticipant {
            name: name.to_string(),
            known: participants.to_vec(),
        }),
        None => participants.get(default_index).cloned().ok_or_else(|| {
            ChatlensError::UnknownParticipant {
                name: format!("#{}", default_index + 1),
                known: participants.to_vec(),
            }
        }),
    }
}
