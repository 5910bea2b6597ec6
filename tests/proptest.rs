//! Property-based tests for chatlens.
//!
//! These tests generate random transcripts to find edge cases.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use chatlens::core::{FilterConfig, apply_filters, keyword_frequency};
use chatlens::parsing::header::HeaderMatcher;
use chatlens::{ChatLogParser, ChatMessage};

/// Generate a timestamp with whole seconds in a range the exports produce
fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (1990i32..2099, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

/// Generate a random ChatMessage using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (
        arb_timestamp(),
        prop::sample::select(vec![
            "Alice",
            "Bob",
            "Charlie Brown",
            "+1 555 0100",
            "Иван",
            "Mia 🌸",
        ]),
        prop::sample::select(vec![
            "Hello",
            "I love you",
            "miss you, darling",
            "time: 10:30, place: here",
            "<Media omitted>",
            "Привет мир",
            "two\nlines",
            "ends with [brackets]",
            "🎉🔥 emoji",
            "",
        ]),
    )
        .prop_map(|(timestamp, sender, body)| ChatMessage::new(timestamp, sender, body))
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<ChatMessage>> {
    prop::collection::vec(arb_message(), 1..max_len)
}

fn render(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(ChatMessage::to_export_line)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Rendering then parsing reproduces every record
    #[test]
    fn export_lines_parse_back(messages in arb_messages(20)) {
        let result = chatlens::parse(&render(&messages)).unwrap();
        prop_assert_eq!(result.messages, messages);
    }

    /// Parsing the same text twice gives the same result
    #[test]
    fn parse_is_idempotent(messages in arb_messages(20)) {
        let text = render(&messages);
        let parser = ChatLogParser::new();
        prop_assert_eq!(parser.parse(&text).unwrap(), parser.parse(&text).unwrap());
    }

    /// One record per header when every timestamp is readable
    #[test]
    fn message_count_equals_header_count(messages in arb_messages(20)) {
        let text = render(&messages);
        let result = chatlens::parse(&text).unwrap();
        prop_assert_eq!(result.len(), HeaderMatcher::new().count(&text));
        prop_assert_eq!(result.failed, 0);
    }

    /// Text without brackets never yields a record
    #[test]
    fn text_without_headers_is_rejected(text in "[a-z ,:\n]{0,200}") {
        prop_assert!(chatlens::parse(&text).unwrap_err().is_empty_result());
    }

    /// Arbitrary input never panics
    #[test]
    fn parse_never_panics(text in "\\PC{0,300}") {
        let _ = chatlens::parse(&text);
    }

    // ============================================
    // ANALYSIS PROPERTIES
    // ============================================

    /// A keyword is never counted in more messages than exist
    #[test]
    fn keyword_count_bounded_by_messages(messages in arb_messages(30)) {
        let counts = keyword_frequency(&messages, &["love", "miss you", "darling", "you"]);
        for entry in counts {
            prop_assert!(entry.count >= 1);
            prop_assert!(entry.count <= messages.len());
        }
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// No filter means passthrough
    #[test]
    fn no_filter_is_passthrough(messages in arb_messages(20)) {
        let original = messages.clone();
        let filtered = apply_filters(messages, &FilterConfig::new());
        prop_assert_eq!(filtered, original);
    }

    /// Sender filter keeps an ordered subset of matching messages
    #[test]
    fn sender_filter_keeps_ordered_subset(messages in arb_messages(20)) {
        let config = FilterConfig::new().with_sender("Alice");
        let expected: Vec<ChatMessage> = messages
            .iter()
            .filter(|m| m.sender == "Alice")
            .cloned()
            .collect();
        let filtered = apply_filters(messages, &config);
        prop_assert_eq!(filtered, expected);
    }

    /// Date bounds are inclusive and never widen the set
    #[test]
    fn date_filter_respects_bounds(messages in arb_messages(20), year in 1990i32..2099) {
        let from = format!("{year}-01-01");
        let config = FilterConfig::new().with_date_from(&from).unwrap();
        let original_len = messages.len();
        let filtered = apply_filters(messages, &config);

        prop_assert!(filtered.len() <= original_len);
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        prop_assert!(filtered.iter().all(|m| m.timestamp >= start));
    }
}
