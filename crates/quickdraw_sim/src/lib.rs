//! # QUICKDRAW Sim - Host-Side Simulation
//!
//! Runs the duel core without hardware. Edge interrupts become threads,
//! the busy timer becomes `thread::sleep`, stage LEDs become log lines and
//! the serial console becomes stdout. The core cannot tell the difference,
//! which is what makes the arbitration logic testable here.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod button;
pub mod harness;
pub mod peripherals;

pub use button::SimButton;
pub use harness::{build, build_with_sink, Duel};
pub use peripherals::{ConsoleSink, LampIndicator, SleepDelay};
