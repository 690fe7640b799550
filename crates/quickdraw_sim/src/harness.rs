//! # Duel Harness
//!
//! Wires a complete game on the host: simulated buttons through the arbiter,
//! a wall clock, lamp indicators, sleeping delays and a caller-chosen report
//! sink. This mirrors the board bring-up order: peripherals first, handlers
//! bound once, then the controller loop owns the main context.

use crate::button::SimButton;
use crate::peripherals::{ConsoleSink, LampIndicator, SleepDelay};
use quickdraw_core::{
    ButtonArbiter, CountdownSequencer, DuelConfig, Indicator, MonotonicClock, PressLatch,
    ReportSink, RoundClock, RoundController, ScoreBoard, COUNTDOWN_STAGES,
};
use std::sync::Arc;

/// A fully wired game plus the handles a driver needs to play it.
pub struct Duel<S: ReportSink> {
    /// The round controller; call [`RoundController::run_forever`] or
    /// [`RoundController::play_round`].
    pub controller: RoundController<S, SleepDelay>,
    /// Player 1's button.
    pub button1: SimButton,
    /// Player 2's button.
    pub button2: SimButton,
}

/// Builds a game writing reports to stdout.
#[must_use]
pub fn build(config: DuelConfig) -> Duel<ConsoleSink> {
    build_with_sink(config, ConsoleSink)
}

/// Builds a game writing reports to the given sink.
pub fn build_with_sink<S: ReportSink>(config: DuelConfig, sink: S) -> Duel<S> {
    let latch = Arc::new(PressLatch::new());
    let clock: Arc<dyn RoundClock> = Arc::new(MonotonicClock::new());
    let scores = Arc::new(ScoreBoard::new());

    let mut button1 = SimButton::new("player1");
    let mut button2 = SimButton::new("player2");
    ButtonArbiter::bind(&latch, &clock, &mut button1, &mut button2);

    let indicators: [Box<dyn Indicator + Send>; COUNTDOWN_STAGES] = [
        Box::new(LampIndicator::new(1)),
        Box::new(LampIndicator::new(2)),
        Box::new(LampIndicator::new(3)),
        Box::new(LampIndicator::new(4)),
    ];
    let countdown = CountdownSequencer::new(&config, indicators);

    let controller = RoundController::new(
        config,
        latch,
        clock,
        countdown,
        scores,
        sink,
        SleepDelay,
    );

    Duel {
        controller,
        button1,
        button2,
    }
}
