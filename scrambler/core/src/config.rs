//! Label Configuration
//!
//! Everything the collaborator can set before (or between) runs: the
//! target text, the character universe, and the delay between ticks.
//! Setting configuration never starts an animation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::charset::CharacterSet;
use crate::error::ScrambleError;

/// Default delay between ticks (the original label refreshed at 20 fps).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Configuration for a scramble label.
///
/// The same interval drives both animation modes; there is deliberately no
/// per-mode override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// The text that is shown once settling completes. May contain
    /// space-delimited words; spaces are preserved in every frame.
    pub final_text: String,

    /// The character universe random frames draw from.
    pub charset: CharacterSet,

    /// Delay between ticks, in milliseconds. Must be positive.
    pub tick_interval_ms: u64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            final_text: String::new(),
            charset: CharacterSet::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl ScrambleConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target text.
    #[must_use]
    pub fn with_final_text(mut self, text: impl Into<String>) -> Self {
        self.final_text = text.into();
        self
    }

    /// Set the character universe.
    #[must_use]
    pub fn with_charset(mut self, charset: CharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Set the delay between ticks.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Check the configuration for contract violations.
    pub fn validate(&self) -> Result<(), ScrambleError> {
        if self.tick_interval_ms == 0 {
            return Err(ScrambleError::InvalidTickInterval);
        }
        Ok(())
    }

    /// The tick delay as a [`Duration`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
