//! Message header recognition and buffer segmentation.
//!
//! A header is the bracketed prefix that starts every message in a text
//! export:
//!
//! ```text
//! [14/05/25, 9:33:53 PM] Alice: first line of the body
//! [14/05/2025 21:34:10] Bob: bodies may
//! span several lines
//! ```
//!
//! Segmentation splits the whole buffer on header boundaries instead of on
//! newlines, which is what keeps multi-line bodies intact.

use std::sync::LazyLock;

use regex::Regex;

/// Coarse header grammar used to locate message boundaries.
///
/// Date `D/M/Y`, comma-or-space separator, `H:MM:SS`, optional AM/PM marker
/// (periods allowed, U+202F allowed before it), closing bracket, a space and a
/// colon-terminated sender. The sender class excludes line breaks so a
/// header never spans lines.
// Narrower than "anything but a colon" on purpose: a system line such as
// `[..] Alice changed the subject` stays body text instead of pairing with
// the next line's sender.
const HEADER_PATTERN: &str = r"\[\d{1,2}/\d{1,2}/\d{2,4}(?:,[\s\x{202F}]*|[\s\x{202F}]+)\d{1,2}:\d{2}:\d{2}(?:[\s\x{202F}]*[AaPp]\.?[Mm]\.?)?\] [^:\r\n]+:";

/// Field-extracting grammar applied to a single header substring.
///
/// Stricter than [`HEADER_PATTERN`] on the year: only 2 or 4 digits.
const FIELDS_PATTERN: &str = r"^\[(\d{1,2}/\d{1,2}/(?:\d{4}|\d{2}))(,[\s\x{202F}]*|[\s\x{202F}]+)(\d{1,2}:\d{2}:\d{2}(?:[\s\x{202F}]*[AaPp]\.?[Mm]\.?)?)\] ([^:\r\n]+):$";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

static FIELDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FIELDS_PATTERN).expect("header fields pattern is valid"));

/// How the export separated the date from the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `14/05/25, 9:33:53 PM`
    Comma,
    /// `14/05/25 9:33:53 PM`
    Space,
}

impl Separator {
    /// Canonical text used when rebuilding a normalization key.
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::Space => " ",
        }
    }
}

/// Fields of one header, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader<'a> {
    /// `D/M/Y` exactly as written.
    pub date_text: &'a str,
    /// Separator between date and time.
    pub separator: Separator,
    /// Time including any AM/PM marker, not yet normalized.
    pub time_text: &'a str,
    /// Sender, untrimmed.
    pub sender_text: &'a str,
}

/// Buffer split on header boundaries.
///
/// `headers[i]` owns `bodies[i]`: the text after it and before the next
/// header (or end of input).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation<'a> {
    /// Text before the first header, e.g. an encryption notice.
    pub preamble: &'a str,
    /// Header substrings in input order.
    pub headers: Vec<&'a str>,
    /// Body substrings, untrimmed, in input order.
    pub bodies: Vec<&'a str>,
}

impl<'a> Segmentation<'a> {
    /// Returns `true` if no header was found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns `true` if every header has exactly one body.
    ///
    /// [`HeaderMatcher::segment`] pushes headers and bodies in lockstep, so
    /// its output always passes. The fields are public, and the parser still
    /// checks this before pairing to catch hand-built or altered segments.
    pub fn is_consistent(&self) -> bool {
        self.headers.len() == self.bodies.len()
    }

    /// Header/body pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.headers.iter().copied().zip(self.bodies.iter().copied())
    }
}

/// Locates and dissects message headers.
///
/// # Example
///
/// ```
/// use chatlens::parsing::header::HeaderMatcher;
///
/// let text = "[1/2/24, 9:05:00 PM] Alice: hello\nworld\n[1/2/24, 9:06:00 PM] Bob: hi";
/// let seg = HeaderMatcher::new().segment(text);
///
/// assert_eq!(seg.headers.len(), 2);
/// assert_eq!(seg.bodies[0].trim(), "hello\nworld");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderMatcher;

impl HeaderMatcher {
    /// Creates a matcher. The underlying patterns are compiled once per process.
    pub fn new() -> Self {
        Self
    }

    /// Splits `text` into header and body segments.
    pub fn segment<'a>(&self, text: &'a str) -> Segmentation<'a> {
        let spans: Vec<_> = HEADER_RE.find_iter(text).collect();

        let Some(first) = spans.first() else {
            return Segmentation {
                preamble: text,
                ..Segmentation::default()
            };
        };

        let mut headers = Vec::with_capacity(spans.len());
        let mut bodies = Vec::with_capacity(spans.len());

        for (i, span) in spans.iter().enumerate() {
            let body_end = spans.get(i + 1).map_or(text.len(), |next| next.start());
            headers.push(span.as_str());
            bodies.push(&text[span.end()..body_end]);
        }

        debug_assert_eq!(headers.len(), bodies.len());
        Segmentation {
            preamble: &text[..first.start()],
            headers,
            bodies,
        }
    }

    /// Counts header matches without building segments.
    pub fn count(&self, text: &str) -> usize {
        HEADER_RE.find_iter(text).count()
    }

    /// Returns `true` if `text` contains at least one header.
    pub fn contains_header(&self, text: &str) -> bool {
        HEADER_RE.is_match(text)
    }

    /// Extracts the fields of a header located by [`segment`](Self::segment).
    ///
    /// Returns `None` when the header passes the coarse grammar but not the
    /// field grammar (a 3-digit year, for instance).
    pub fn extract<'a>(&self, header: &'a str) -> Option<RawHeader<'a>> {
        let caps = FIELDS_RE.captures(header)?;

        let separator = if caps[2].starts_with(',') {
            Separator::Comma
        } else {
            Separator::Space
        };

        Some(RawHeader {
            date_text: caps.get(1)?.as_str(),
            separator,
            time_text: caps.get(3)?.as_str(),
            sender_text: caps.get(4)?.as_str(),
        })
    }
}
