//! # Peripheral Interfaces
//!
//! Traits the embedding must implement to connect the core to real hardware.
//! The core never touches a pin, a UART or a sleep syscall directly; it only
//! talks to these interfaces.
//!
//! ```text
//! Core defines:          Embedding implements:
//! ┌──────────────┐       ┌──────────────────────────┐
//! │ EdgeInput    │  ←──  │ interrupt pin / SimButton │
//! │ Indicator    │  ←──  │ LED / log lamp            │
//! │ ReportSink   │  ←──  │ serial console / stdout   │
//! │ Delay        │  ←──  │ busy timer / thread sleep │
//! └──────────────┘       └──────────────────────────┘
//! ```
//!
//! Mock implementations live here too so the round protocol is fully
//! testable on the host without hardware.

use parking_lot::Mutex;
use std::sync::Arc;

/// Callback invoked on a falling edge, in the event source's own
/// execution context.
pub type EdgeHandler = Box<dyn Fn() + Send + Sync>;

/// A falling-edge event source (idle-high, pressed-low button).
///
/// A single handler may be registered; registration replaces any previous
/// handler. No debounce is applied - repeat edges simply re-run the handler,
/// and the latch's claim rule makes the repeats harmless.
pub trait EdgeInput {
    /// Registers the handler to run on each falling edge.
    fn on_falling_edge(&mut self, handler: EdgeHandler);
}

/// One of the four countdown stage indicators.
pub trait Indicator {
    /// Activates the indicator.
    fn set_on(&mut self);
    /// Deactivates the indicator.
    fn set_off(&mut self);
}

/// Receives the formatted human-readable outcome text.
pub trait ReportSink {
    /// Writes one already-formatted report fragment, newlines included.
    fn write_report(&mut self, text: &str);
}

/// Blocking delay source used for stage timing and the inter-round pause.
pub trait Delay {
    /// Blocks the calling context for `ms` milliseconds.
    fn delay_ms(&self, ms: u32);
}

// ============================================================================
// MOCK IMPLEMENTATIONS (For Testing)
// ============================================================================

/// Mock edge input whose edges are raised by calling [`MockButton::trigger`].
///
/// Clones share the registered handler, so a test can hand one clone to the
/// arbiter and keep another to fire presses from any thread. Triggers on the
/// same button serialize (a handler is never re-entered by itself); triggers
/// on different buttons can overlap.
#[derive(Clone, Default)]
pub struct MockButton {
    handler: Arc<Mutex<Option<EdgeHandler>>>,
}

impl MockButton {
    /// Creates a button with no handler registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates one falling edge in the caller's context.
    pub fn trigger(&self) {
        let guard = self.handler.lock();
        if let Some(handler) = guard.as_ref() {
            handler();
        }
    }
}

impl EdgeInput for MockButton {
    fn on_falling_edge(&mut self, handler: EdgeHandler) {
        *self.handler.lock() = Some(handler);
    }
}

/// Mock indicator that records every on/off transition into a shared log.
#[derive(Clone)]
pub struct MockIndicator {
    stage: usize,
    log: Arc<Mutex<Vec<String>>>,
}

impl MockIndicator {
    /// Creates an indicator that appends to `log` as `"L<stage> on"` /
    /// `"L<stage> off"`.
    #[must_use]
    pub fn new(stage: usize, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { stage, log }
    }
}

impl Indicator for MockIndicator {
    fn set_on(&mut self) {
        self.log.lock().push(format!("L{} on", self.stage));
    }

    fn set_off(&mut self) {
        self.log.lock().push(format!("L{} off", self.stage));
    }
}

/// Report sink that collects every fragment in memory.
///
/// Clones share the same buffer, so the test keeps a handle while the
/// controller owns its own.
#[derive(Clone, Default)]
pub struct MemorySink {
    reports: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, in order.
    #[must_use]
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, text: &str) {
        self.reports.lock().push(text.to_owned());
    }
}

/// Delay that returns immediately. Keeps unit tests instant.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn delay_ms(&self, _ms: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_mock_button_runs_registered_handler() {
        let mut button = button_pair().0;
        let count = Arc::new(AtomicU32::new(0));
        let counted = Arc::clone(&count);
        button.on_falling_edge(Box::new(move || {
            counted.fetch_add(1, Ordering::AcqRel);
        }));

        let remote = button.clone();
        remote.trigger();
        remote.trigger();
        assert_eq!(count.load(Ordering::Acquire), 2);
    }

    #[test]
    fn test_mock_button_without_handler_is_inert() {
        let (button, _) = button_pair();
        button.trigger();
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.write_report("a\n");
        writer.write_report("b\n");
        assert_eq!(sink.reports(), vec!["a\n".to_owned(), "b\n".to_owned()]);
    }

    fn button_pair() -> (MockButton, MockButton) {
        let button = MockButton::new();
        (button.clone(), button)
    }
}
