//! Scramble Tick State Machine
//!
//! [`ScrambleAnimator`] is the synchronous heart of the crate: a state
//! machine that computes one displayed frame per tick and reports whether
//! another tick is due. It knows nothing about timers or channels, which
//! makes every animation property simulable in plain unit tests; the async
//! scheduling around it lives in [`crate::label`].
//!
//! # State machine
//!
//! ```text
//! Idle ──begin_settle──▶ Settling(0) ──tick──▶ Settling(n+1) ─┐
//!  ▲                         │    ▲                           │
//!  │                         │    └───────(more to reveal)────┘
//!  │◀──(fully revealed)──────┘
//!  │
//!  └──◀──stop──── Looping ◀──begin_loop── (any state)
//! ```
//!
//! `Idle` is the resting state; settling's full reveal is the only natural
//! terminal transition. All indexing is by logical `char`, never bytes.

use rand::Rng;

use crate::charset::CharacterSet;
use crate::config::ScrambleConfig;
use crate::error::ScrambleError;
use crate::randomize::random_text_like;

/// Which animation currently drives the displayed text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No animation is running; the displayed text holds its last value.
    Idle,
    /// Progressive reveal toward the final text.
    Settling {
        /// Ticks consumed so far in this run.
        ticks_elapsed: u32,
        /// Ticks required per revealed character.
        ticks_per_char: u32,
    },
    /// Unbounded full-string randomization.
    Looping,
}

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// The frame was updated and another tick is due after the interval.
    Again,
    /// Settling reached the final text; no further tick is due.
    Done,
    /// No animation is active; nothing changed.
    Idle,
}

/// Deterministic tick-driven scramble animation.
#[derive(Debug)]
pub struct ScrambleAnimator {
    config: ScrambleConfig,
    phase: Phase,
    displayed: String,
}

impl ScrambleAnimator {
    /// Create an animator from a validated configuration.
    pub fn new(config: ScrambleConfig) -> Result<Self, ScrambleError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Idle,
            displayed: String::new(),
        })
    }

    /// Replace the whole configuration.
    ///
    /// Safe at any time, including mid-run: a new charset or target takes
    /// effect on the next randomization, never retroactively.
    pub fn set_config(&mut self, config: ScrambleConfig) -> Result<(), ScrambleError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Set the target text.
    pub fn set_final_text(&mut self, text: impl Into<String>) {
        self.config.final_text = text.into();
    }

    /// Set the character universe for subsequent randomization.
    pub fn set_charset(&mut self, charset: CharacterSet) {
        self.config.charset = charset;
    }

    /// Current configuration.
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current observable output.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Enter the settle mode at progress zero and display the initial,
    /// fully scrambled frame.
    ///
    /// Rejects `ticks_per_char == 0` before touching any state.
    pub fn begin_settle(
        &mut self,
        rng: &mut impl Rng,
        ticks_per_char: u32,
    ) -> Result<(), ScrambleError> {
        if ticks_per_char == 0 {
            return Err(ScrambleError::InvalidTicksPerCharacter(ticks_per_char));
        }
        self.phase = Phase::Settling {
            ticks_elapsed: 0,
            ticks_per_char,
        };
        self.displayed = self.settle_frame(rng, 0);
        Ok(())
    }

    /// Enter the loop-forever mode and display a fully random frame.
    pub fn begin_loop(&mut self, rng: &mut impl Rng) {
        self.phase = Phase::Looping;
        self.displayed = random_text_like(rng, self.config.charset, &self.config.final_text);
    }

    /// Return to `Idle`. The displayed text keeps whatever was last shown.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Advance one tick: recompute the displayed frame and report whether
    /// another tick is due.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Tick {
        match self.phase {
            Phase::Idle => Tick::Idle,
            Phase::Looping => {
                self.displayed =
                    random_text_like(rng, self.config.charset, &self.config.final_text);
                Tick::Again
            }
            Phase::Settling {
                ticks_elapsed,
                ticks_per_char,
            } => {
                let total = self.config.final_text.chars().count();
                let ticks_elapsed = ticks_elapsed + 1;
                let revealed = ((ticks_elapsed / ticks_per_char) as usize).min(total);
                self.displayed = self.settle_frame(rng, revealed);
                if revealed == total {
                    self.phase = Phase::Idle;
                    Tick::Done
                } else {
                    self.phase = Phase::Settling {
                        ticks_elapsed,
                        ticks_per_char,
                    };
                    Tick::Again
                }
            }
        }
    }

    /// A settle frame: the first `revealed` characters of the final text
    /// verbatim, the rest drawn from a fresh space-preserving random
    /// string. Both halves come from strings of identical length and space
    /// structure, so the seam is invisible.
    fn settle_frame(&self, rng: &mut impl Rng, revealed: usize) -> String {
        let scrambled = random_text_like(rng, self.config.charset, &self.config.final_text);
        let mut frame: String = self.config.final_text.chars().take(revealed).collect();
        frame.extend(scrambled.chars().skip(revealed));
        frame
    }
}
