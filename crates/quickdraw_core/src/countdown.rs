//! # Countdown Sequencer
//!
//! Four fixed-duration stages, one indicator each, timed by blocking delay.
//! The shared clock starts at the instant the first stage begins, before the
//! first indicator activates, so every elapsed-at-press reading is relative
//! to the true start of stage 1. The start of stage 4 is the press-validity
//! threshold.
//!
//! The sequence always runs to completion. A premature press does not
//! shorten it; scoring is deferred until the controller reads the latch.

use crate::clock::RoundClock;
use crate::config::{DuelConfig, COUNTDOWN_STAGES};
use crate::io::{Delay, Indicator};

/// Drives the fixed indicator sequence and starts the round clock.
pub struct CountdownSequencer {
    stage_duration_ms: u32,
    indicators: [Box<dyn Indicator + Send>; COUNTDOWN_STAGES],
}

impl CountdownSequencer {
    /// Creates a sequencer over the four ordered stage indicators.
    #[must_use]
    pub fn new(
        config: &DuelConfig,
        indicators: [Box<dyn Indicator + Send>; COUNTDOWN_STAGES],
    ) -> Self {
        Self {
            stage_duration_ms: config.stage_duration_ms,
            indicators,
        }
    }

    /// Runs the full countdown. Returns only after all stages complete.
    pub fn run(&mut self, clock: &dyn RoundClock, delay: &dyn Delay) {
        clock.start();
        for (stage, indicator) in self.indicators.iter_mut().enumerate() {
            tracing::debug!(stage = stage + 1, "countdown stage");
            indicator.set_on();
            delay.delay_ms(self.stage_duration_ms);
            indicator.set_off();
        }
    }
}
