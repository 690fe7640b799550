//! # Simulated Buttons
//!
//! A [`SimButton`] stands in for an edge-interrupt input pin. `press` raises
//! the falling edge in the caller's thread, which plays the role of interrupt
//! context; `press_after` hands the press to a per-button scheduler thread so
//! tests and demos can line presses up against the countdown.
//!
//! Presses on the same button serialize (a handler never preempts itself);
//! presses on different buttons run on different threads and may genuinely
//! race, which is the whole point.

use crossbeam_channel::{unbounded, Sender};
use parking_lot::Mutex;
use quickdraw_core::{EdgeHandler, EdgeInput};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Thread-backed falling-edge event source.
///
/// Clones share the handler and the scheduler, so one clone can be handed to
/// the arbiter while others fire presses from anywhere.
#[derive(Clone)]
pub struct SimButton {
    handler: Arc<Mutex<Option<EdgeHandler>>>,
    scheduler: Sender<Duration>,
}

impl SimButton {
    /// Creates a button and spawns its press scheduler thread.
    ///
    /// The scheduler exits once every clone of the button is dropped.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let handler: Arc<Mutex<Option<EdgeHandler>>> = Arc::new(Mutex::new(None));
        let (scheduler, scheduled) = unbounded::<Duration>();

        let scheduled_handler = Arc::clone(&handler);
        thread::Builder::new()
            .name(format!("{name}-presser"))
            .spawn(move || {
                for delay in scheduled {
                    thread::sleep(delay);
                    let guard = scheduled_handler.lock();
                    if let Some(handler) = guard.as_ref() {
                        handler();
                    }
                }
            })
            .expect("failed to spawn button scheduler thread");

        Self { handler, scheduler }
    }

    /// Raises one falling edge immediately, in the calling thread.
    pub fn press(&self) {
        let guard = self.handler.lock();
        if let Some(handler) = guard.as_ref() {
            handler();
        }
    }

    /// Schedules one falling edge `delay` from now on the scheduler thread.
    pub fn press_after(&self, delay: Duration) {
        // Send only fails if the scheduler is gone, which means the process
        // is shutting down anyway.
        let _ = self.scheduler.send(delay);
    }
}

impl EdgeInput for SimButton {
    fn on_falling_edge(&mut self, handler: EdgeHandler) {
        *self.handler.lock() = Some(handler);
    }
}
