//! Error Types
//!
//! Configuration is the only thing that can fail: random sampling and
//! string construction are infallible for non-empty universes, and a tick
//! callback firing after cancellation or teardown is a silent no-op by
//! contract, never a reported error.

use thiserror::Error;

/// Rejected configuration, reported synchronously at call time with no
/// partial state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrambleError {
    /// `ticks_per_char` must be a positive integer.
    #[error("ticks per character must be at least 1, got {0}")]
    InvalidTicksPerCharacter(u32),

    /// The tick interval must be a positive duration.
    #[error("tick interval must be at least 1 ms")]
    InvalidTickInterval,
}
