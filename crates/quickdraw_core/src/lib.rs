//! # QUICKDRAW Core - Round Protocol & Press Arbitration
//!
//! The control core of a two-player reaction duel: a fixed four-stage visual
//! countdown followed by a race between two asynchronous button inputs, whose
//! outcome updates persistent scores.
//!
//! ## Architecture
//!
//! - **Latch**: single-word CAS claim; at most one handler's press is ever
//!   observed per round, with no torn triple
//! - **Arbiter**: stateless falling-edge handlers that read the clock and
//!   attempt the claim
//! - **Sequencer**: blocking four-stage countdown that starts the shared clock
//! - **Controller**: Idle -> CountingDown -> AwaitingPress -> Resolved -> Idle,
//!   forever
//!
//! ## Concurrency Model
//!
//! Two execution contexts: the main flow (controller + sequencer, blocking
//! delays) and the event-handler context (edge callbacks, any time, possibly
//! overlapping each other). Everything crossing the boundary is atomic or
//! behind the latch's condition variable. The controller's wait for a press
//! is unbounded - the game has no no-show timeout.
//!
//! ## Example
//!
//! ```rust,ignore
//! use quickdraw_core::{ButtonArbiter, DuelConfig, PressLatch, RoundController};
//!
//! let config = DuelConfig::default();
//! let latch = Arc::new(PressLatch::new());
//! ButtonArbiter::bind(&latch, &clock, &mut button1, &mut button2);
//! let mut controller = RoundController::new(config, latch, clock, countdown,
//!     scores, sink, delay);
//! controller.run_forever(); // Blocks, loops rounds
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod arbiter;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod io;
pub mod latch;
pub mod player;
pub mod round;
pub mod score;

// Re-exports for convenience
pub use arbiter::ButtonArbiter;
pub use clock::{ManualClock, MonotonicClock, RoundClock};
pub use config::{ConfigError, DuelConfig, COUNTDOWN_STAGES};
pub use countdown::CountdownSequencer;
pub use io::{Delay, EdgeHandler, EdgeInput, Indicator, ReportSink};
pub use latch::{Press, PressLatch};
pub use player::PlayerId;
pub use round::{resolve, RoundController, RoundOutcome, RoundState, Verdict};
pub use score::ScoreBoard;
