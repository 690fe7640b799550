//! # Host Peripherals
//!
//! Stand-ins for the board's outputs: stage lamps become log lines, the
//! serial console becomes stdout, and the busy-wait timer becomes a
//! thread sleep.

use quickdraw_core::{Delay, Indicator, ReportSink};
use std::io::Write;
use std::time::Duration;

/// Countdown stage lamp that logs its transitions.
#[derive(Clone, Copy, Debug)]
pub struct LampIndicator {
    stage: usize,
}

impl LampIndicator {
    /// Creates the lamp for the given 1-based stage.
    #[must_use]
    pub fn new(stage: usize) -> Self {
        Self { stage }
    }
}

impl Indicator for LampIndicator {
    fn set_on(&mut self) {
        tracing::info!(stage = self.stage, "lamp on");
    }

    fn set_off(&mut self) {
        tracing::info!(stage = self.stage, "lamp off");
    }
}

/// Report sink writing to stdout, the host's serial console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn write_report(&mut self, text: &str) {
        // Peripheral I/O is assumed non-failing; a closed stdout is not
        // worth crashing the game over.
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

/// Blocking delay backed by [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepDelay;

impl Delay for SleepDelay {
    fn delay_ms(&self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
