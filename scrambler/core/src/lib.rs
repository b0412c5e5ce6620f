//! Scrambler Core - Headless Settle-and-Reveal Text Animation
//!
//! This crate provides the animation logic for a "scrambled" text label,
//! completely independent of any UI framework. It can drive a TUI, a GUI
//! label, or run headless for testing.
//!
//! Two animation modes compete for the label's output:
//!
//! - **Settle**: the target text is revealed one character at a time, left
//!   to right, while the not-yet-revealed positions churn with random
//!   characters. Ends on its own once everything is revealed.
//! - **Loop forever**: every position churns with random characters on
//!   every tick, with no natural end, until explicitly cancelled.
//!
//! Spaces in the target text are never randomized; intermediate frames
//! always have the target's exact length and space positions.
//!
//! # Key Types
//!
//! - [`ScrambleLabel`]: the async controller. Owns the timers, cancellation
//!   and the observable `displayed` output.
//! - [`ScrambleAnimator`]: the synchronous tick state machine underneath,
//!   fully simulable in tests without a runtime.
//! - [`CharacterSet`]: the four candidate character universes.
//! - [`ScrambleConfig`]: target text, character set and tick interval.
//!
//! # Quick Start
//!
//! ```ignore
//! use scrambler_core::{CharacterSet, ScrambleConfig, ScrambleLabel};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ScrambleConfig::default()
//!         .with_final_text("HELLO WORLD")
//!         .with_charset(CharacterSet::UpperAlphabetic);
//!     let label = ScrambleLabel::new(config).unwrap();
//!
//!     let mut frames = label.subscribe();
//!     label.settle_and_reveal(5).unwrap();
//!
//!     while frames.changed().await.is_ok() {
//!         println!("{}", *frames.borrow());
//!     }
//! }
//! ```

pub mod animator;
pub mod charset;
pub mod config;
pub mod error;
pub mod label;
pub mod randomize;

pub use animator::{Phase, ScrambleAnimator, Tick};
pub use charset::CharacterSet;
pub use config::{ScrambleConfig, DEFAULT_TICK_INTERVAL_MS};
pub use error::ScrambleError;
pub use label::{ScrambleLabel, DEFAULT_TICKS_PER_CHAR};
