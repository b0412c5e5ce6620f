//! Async Scramble Label Controller
//!
//! [`ScrambleLabel`] wraps the tick state machine with its scheduling:
//! each active mode is driven by a chain of one-shot delayed callbacks
//! (a `tokio::time::sleep` per tick, never a recurring timer), and each
//! callback decides at entry whether it is still current before acting.
//!
//! # Cancellation
//!
//! Cancellation is cooperative. Each mode has an epoch counter; starting a
//! run captures the epoch it was armed with, and every scheduled callback
//! compares its captured epoch against the live one first thing. Bumping
//! an epoch (by starting the other mode, calling [`ScrambleLabel::stop`],
//! or dropping the label) turns any pending callback into a no-op: it will
//! still fire, but it neither updates the text nor reschedules. A plain
//! reset-to-false boolean would reopen the race where an old sleeping
//! callback wakes after the flag is re-armed and double-drives the label;
//! a captured epoch cannot be confused with a newer run's.
//!
//! At most one mode drives the output at any instant: arming either mode
//! bumps the other's epoch before scheduling anything.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::animator::{Phase, ScrambleAnimator, Tick};
use crate::charset::CharacterSet;
use crate::config::ScrambleConfig;
use crate::error::ScrambleError;

/// Default number of ticks between each additional revealed character.
pub const DEFAULT_TICKS_PER_CHAR: u32 = 5;

/// Which epoch counter a scheduled run answers to.
#[derive(Clone, Copy)]
enum Mode {
    Settle,
    Loop,
}

struct Shared {
    animator: Mutex<ScrambleAnimator>,
    settle_epoch: AtomicU64,
    loop_epoch: AtomicU64,
    displayed_tx: watch::Sender<String>,
}

impl Shared {
    fn epoch(&self, mode: Mode) -> &AtomicU64 {
        match mode {
            Mode::Settle => &self.settle_epoch,
            Mode::Loop => &self.loop_epoch,
        }
    }
}

/// A text label animated by scrambled characters.
///
/// The label owns its timers and cancellation state; the outside world
/// configures it, starts one of the two modes, and observes `displayed`
/// (directly or through [`ScrambleLabel::subscribe`]).
///
/// Operations that start an animation must be called from within a tokio
/// runtime; everything else is runtime-free.
pub struct ScrambleLabel {
    shared: Arc<Shared>,
}

impl ScrambleLabel {
    /// Create a label from a configuration.
    pub fn new(config: ScrambleConfig) -> Result<Self, ScrambleError> {
        let animator = ScrambleAnimator::new(config)?;
        let (displayed_tx, _) = watch::channel(animator.displayed().to_owned());
        Ok(Self {
            shared: Arc::new(Shared {
                animator: Mutex::new(animator),
                settle_epoch: AtomicU64::new(0),
                loop_epoch: AtomicU64::new(0),
                displayed_tx,
            }),
        })
    }

    /// Replace the configuration. Never starts or stops an animation;
    /// changes take effect on the next randomization.
    pub fn configure(&self, config: ScrambleConfig) -> Result<(), ScrambleError> {
        self.shared.animator.lock().set_config(config)
    }

    /// Set the target text without touching the rest of the configuration.
    pub fn set_final_text(&self, text: impl Into<String>) {
        self.shared.animator.lock().set_final_text(text);
    }

    /// Set the character universe for subsequent randomization.
    pub fn set_charset(&self, charset: CharacterSet) {
        self.shared.animator.lock().set_charset(charset);
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> ScrambleConfig {
        self.shared.animator.lock().config().clone()
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.shared.animator.lock().phase()
    }

    /// The text currently shown.
    pub fn displayed(&self) -> String {
        self.shared.displayed_tx.borrow().clone()
    }

    /// Subscribe to displayed-text changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.shared.displayed_tx.subscribe()
    }

    /// Begin revealing the final text, one character per `ticks_per_char`
    /// ticks, scrambling the rest. Cancels any loop-forever run first.
    ///
    /// Ends on its own once the text is fully revealed; cancelling early
    /// leaves the partial reveal on screen.
    pub fn settle_and_reveal(&self, ticks_per_char: u32) -> Result<(), ScrambleError> {
        if ticks_per_char == 0 {
            return Err(ScrambleError::InvalidTicksPerCharacter(ticks_per_char));
        }
        self.shared.loop_epoch.fetch_add(1, Ordering::AcqRel);
        let token = self.shared.settle_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        {
            let mut animator = self.shared.animator.lock();
            animator.begin_settle(&mut rand::thread_rng(), ticks_per_char)?;
            self.shared
                .displayed_tx
                .send_replace(animator.displayed().to_owned());
        }
        debug!(ticks_per_char, "settle-and-reveal started");
        Self::schedule(Arc::clone(&self.shared), Mode::Settle, token);
        Ok(())
    }

    /// Begin regenerating the whole string every tick, forever. Cancels
    /// any settle run first. Runs until explicitly cancelled.
    pub fn loop_forever(&self) {
        self.shared.settle_epoch.fetch_add(1, Ordering::AcqRel);
        let token = self.shared.loop_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        {
            let mut animator = self.shared.animator.lock();
            animator.begin_loop(&mut rand::thread_rng());
            self.shared
                .displayed_tx
                .send_replace(animator.displayed().to_owned());
        }
        debug!("loop-forever started");
        Self::schedule(Arc::clone(&self.shared), Mode::Loop, token);
    }

    /// Cancel whichever mode is running. The last shown text stays.
    pub fn stop(&self) {
        self.shared.settle_epoch.fetch_add(1, Ordering::AcqRel);
        self.shared.loop_epoch.fetch_add(1, Ordering::AcqRel);
        self.shared.animator.lock().stop();
        debug!("animation stopped");
    }

    /// Drive one mode with a chain of one-shot delayed callbacks.
    fn schedule(shared: Arc<Shared>, mode: Mode, token: u64) {
        tokio::spawn(async move {
            loop {
                let interval = shared.animator.lock().config().tick_interval();
                tokio::time::sleep(interval).await;

                let outcome = {
                    let mut animator = shared.animator.lock();
                    // Checked under the same lock as the tick, so a mode
                    // switch cannot land between the check and the tick.
                    if shared.epoch(mode).load(Ordering::Acquire) != token {
                        trace!("stale tick fired after cancellation; ignoring");
                        return;
                    }
                    let outcome = animator.tick(&mut rand::thread_rng());
                    if outcome != Tick::Idle {
                        shared.displayed_tx.send_replace(animator.displayed().to_owned());
                    }
                    outcome
                };

                match outcome {
                    Tick::Again => {}
                    Tick::Done => {
                        debug!("settle complete");
                        return;
                    }
                    Tick::Idle => return,
                }
            }
        });
    }
}

impl Drop for ScrambleLabel {
    fn drop(&mut self) {
        // Any outstanding scheduled callback must become a no-op.
        self.shared.settle_epoch.fetch_add(1, Ordering::AcqRel);
        self.shared.loop_epoch.fetch_add(1, Ordering::AcqRel);
    }
}

impl std::fmt::Debug for ScrambleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrambleLabel")
            .field("phase", &self.phase())
            .field("displayed", &self.displayed())
            .finish()
    }
}
