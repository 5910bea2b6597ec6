//! Descriptive statistics over parsed messages.
//!
//! All functions are pure and accept any iterator of borrowed
//! [`ChatMessage`]s, so they work on a whole [`ParseResult`](crate::ParseResult),
//! a slice, or a filtered view alike.
//!
//! | Function | Counts |
//! |----------|--------|
//! | [`keyword_frequency`] | messages containing each keyword |
//! | [`count_phrase`] / [`compare_phrase`] | messages containing a phrase, per participant |
//! | [`free_text`] | all bodies joined, media placeholders removed |
//! | [`token_frequencies`] | word occurrences, for word-cloud style views |
//!
//! Matching is case-insensitive everywhere.
//!
//! # Example
//!
//! ```
//! use chatlens::core::analysis::keyword_frequency;
//! use chatlens::ChatMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let messages = vec![
//!     ChatMessage::new(ts, "Alice", "I love you, love you so much"),
//!     ChatMessage::new(ts, "Bob", "Love is great"),
//! ];
//!
//! let counts = keyword_frequency(&messages, &["love"]);
//! assert_eq!(counts[0].count, 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::ChatMessage;

/// Keywords counted when the caller supplies none.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "love",
    "miss you",
    "hug",
    "kiss",
    "darling",
    "sweetheart",
    "honey",
    "babe",
    "my love",
    "beautiful",
    "handsome",
    "amazing",
];

/// Tokens exporters use in media placeholders (`<Media omitted>`,
/// `image omitted`, `video omitted`).
pub const MEDIA_STOPWORDS: &[&str] = &["media", "omitted", "image", "video"];

/// Number of messages containing a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Occurrences of one normalized token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCount {
    pub token: String,
    pub count: usize,
}

/// Messages containing a phrase, for two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseComparison {
    pub phrase: String,
    pub first: usize,
    pub second: usize,
}

impl PhraseComparison {
    /// Combined count of both participants.
    pub fn total(&self) -> usize {
        self.first + self.second
    }
}

/// Counts, for each keyword, how many messages contain it.
///
/// A message counts once per keyword however many times the keyword
/// appears in it. Keywords found in no message are omitted; the rest are
/// sorted by count, highest first, ties keeping the input order.
pub fn keyword_frequency<'a, I, S>(messages: I, keywords: &[S]) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'a ChatMessage>,
    S: AsRef<str>,
{
    let needles: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().to_lowercase())
        .collect();
    let mut counts = vec![0usize; needles.len()];

    for message in messages {
        let body = message.body.to_lowercase();
        for (count, needle) in counts.iter_mut().zip(&needles) {
            if !needle.is_empty() && body.contains(needle.as_str()) {
                *count += 1;
            }
        }
    }

    let mut result: Vec<KeywordCount> = keywords
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(keyword, count)| KeywordCount {
            keyword: keyword.as_ref().to_string(),
            count,
        })
        .collect();

    // stable: equal counts keep keyword order
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

/// Counts messages containing `phrase`, case-insensitive.
pub fn count_phrase<'a, I>(messages: I, phrase: &str) -> usize
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let needle = phrase.to_lowercase();
    if needle.is_empty() {
        return 0;
    }

    messages
        .into_iter()
        .filter(|m| m.body.to_lowercase().contains(&needle))
        .count()
}

/// Counts messages containing `phrase` in two message sequences.
pub fn compare_phrase<'a, 'b, A, B>(first: A, second: B, phrase: &str) -> PhraseComparison
where
    A: IntoIterator<Item = &'a ChatMessage>,
    B: IntoIterator<Item = &'b ChatMessage>,
{
    PhraseComparison {
        phrase: phrase.to_string(),
        first: count_phrase(first, phrase),
        second: count_phrase(second, phrase),
    }
}

/// Lower-cases a token and strips punctuation from its edges.
///
/// Returns `None` for tokens made only of punctuation.
fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn is_media_stopword(token: &str) -> bool {
    MEDIA_STOPWORDS.contains(&token)
}

/// Joins every body into one text, dropping media placeholder tokens.
///
/// Tokens keep their original spelling; only the stoplist check is done on
/// the normalized form.
pub fn free_text<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    messages
        .into_iter()
        .flat_map(|m| m.body.split_whitespace())
        .filter(|token| {
            normalize_token(token).is_none_or(|normalized| !is_media_stopword(&normalized))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts normalized tokens across all bodies.
///
/// Tokens are lower-cased with edge punctuation removed; media placeholder
/// tokens are skipped. The result is sorted by count, highest first, then
/// alphabetically, and cut to `limit` entries.
pub fn token_frequencies<'a, I>(messages: I, limit: usize) -> Vec<TokenCount>
where
    I: IntoIterator<Item = &'a ChatMessage>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for message in messages {
        for token in message.body.split_whitespace().filter_map(normalize_token) {
            if !is_media_stopword(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    let mut sorted: Vec<TokenCount> = counts
        .into_iter()
        .map(|(token, count)| TokenCount { token, count })
        .collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    sorted.truncate(limit);
    sorted
}
