//! Building blocks of the transcript parser.
//!
//! - [`header`] - header grammar and buffer segmentation
//! - [`timestamp`] - time normalization and the ordered timestamp formats
//!
//! [`ChatLogParser`](crate::parser::ChatLogParser) wires these together.

pub mod header;
pub mod timestamp;

// Re-export commonly used items
pub use header::{HeaderMatcher, RawHeader, Segmentation, Separator};
pub use timestamp::{
    DEFAULT_FORMATS, NARROW_NO_BREAK_SPACE, TimestampFormat, normalization_key, normalize_time,
    parse_timestamp,
};
