//! Output configuration.

use serde::{Deserialize, Serialize};

/// Controls which fields the output writers include.
///
/// Sender and body are always written; the timestamp is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include timestamps in output
    pub include_timestamps: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    /// Returns a configuration with every optional field enabled.
    pub fn all() -> Self {
        Self::new().with_timestamps()
    }
}
