//! # Round Clock
//!
//! The shared elapsed-time source for a round. Button handlers read it from
//! their own execution context while the main flow runs the countdown, so
//! implementations must be safe to read concurrently.
//!
//! Reading a clock that has not been started yet returns 0, which is what a
//! stopped, zeroed hardware timer reports.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Instant;

/// Monotonic elapsed-time source, resettable between rounds.
pub trait RoundClock: Send + Sync {
    /// Stops counting and zeroes the elapsed value.
    fn reset(&self);
    /// Begins counting from zero. Call after [`RoundClock::reset`].
    fn start(&self);
    /// Current elapsed milliseconds. 0 while stopped.
    fn read_ms(&self) -> u32;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Default)]
pub struct MonotonicClock {
    started: Mutex<Option<Instant>>,
}

impl MonotonicClock {
    /// Creates a stopped, zeroed clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundClock for MonotonicClock {
    fn reset(&self) {
        *self.started.lock() = None;
    }

    fn start(&self) {
        *self.started.lock() = Some(Instant::now());
    }

    fn read_ms(&self) -> u32 {
        self.started
            .lock()
            .map_or(0, |t| u32::try_from(t.elapsed().as_millis()).unwrap_or(u32::MAX))
    }
}

/// Manually driven clock for deterministic tests and simulations.
///
/// The elapsed value only moves when the test says so; `advance` while
/// stopped is ignored, matching a hardware timer that is not running.
#[derive(Debug, Default)]
pub struct ManualClock {
    elapsed_ms: AtomicU32,
    running: AtomicBool,
}

impl ManualClock {
    /// Creates a stopped, zeroed clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the elapsed reading directly (only honored while running).
    pub fn set_ms(&self, ms: u32) {
        if self.running.load(Ordering::Acquire) {
            self.elapsed_ms.store(ms, Ordering::Release);
        }
    }

    /// Advances the elapsed reading (only honored while running).
    pub fn advance(&self, ms: u32) {
        if self.running.load(Ordering::Acquire) {
            self.elapsed_ms.fetch_add(ms, Ordering::AcqRel);
        }
    }

    /// Whether the clock is currently counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl RoundClock for ManualClock {
    fn reset(&self) {
        self.running.store(false, Ordering::Release);
        self.elapsed_ms.store(0, Ordering::Release);
    }

    fn start(&self) {
        self.elapsed_ms.store(0, Ordering::Release);
        self.running.store(true, Ordering::Release);
    }

    fn read_ms(&self) -> u32 {
        self.elapsed_ms.load(Ordering::Acquire)
    }
}
