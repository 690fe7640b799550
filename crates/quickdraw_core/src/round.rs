//! # Round Controller
//!
//! The round state machine. One round is:
//!
//! ```text
//! Idle ──rearm──> CountingDown ──stages done──> AwaitingPress
//!                                                    │ latch claimed
//! Idle <──pause elapsed── Resolved <──────────────────┘
//! ```
//!
//! Transitions happen strictly in that order; the controller owns all
//! round-scoped state and never runs two rounds concurrently. Scores are the
//! one value that survives from round to round.
//!
//! ## Resolution rule
//!
//! With `t` the latched elapsed-at-press and `T` the countdown threshold:
//! `t < T` awards the point to the player who did *not* press (the presser
//! jumped the gun by `T - t` ms); `t >= T` awards the presser a reaction
//! time of `t - T` ms. Exactly `T` is a valid win.

use crate::clock::RoundClock;
use crate::config::DuelConfig;
use crate::countdown::CountdownSequencer;
use crate::io::{Delay, ReportSink};
use crate::latch::{Press, PressLatch};
use crate::player::PlayerId;
use crate::score::ScoreBoard;
use std::sync::Arc;

/// Phase of the round protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    /// Between rounds; nothing armed.
    Idle,
    /// Indicator sequence in progress, clock running.
    CountingDown,
    /// Countdown complete; blocked on the latch.
    AwaitingPress,
    /// Latch read; scoring and reporting.
    Resolved,
}

/// How the latched press scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Press landed before the threshold; the presser loses.
    TooEarly {
        /// How early the press was, in milliseconds.
        margin_ms: u32,
    },
    /// Press landed at or after the threshold; the presser wins.
    ValidWin {
        /// Reaction time past the threshold, in milliseconds.
        reaction_ms: u32,
    },
}

/// A resolved round: the latched press plus its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The press that ended the round.
    pub press: Press,
    /// How it scored.
    pub verdict: Verdict,
}

impl RoundOutcome {
    /// The player who receives the point.
    #[must_use]
    pub fn awarded(&self) -> PlayerId {
        match self.verdict {
            Verdict::TooEarly { .. } => self.press.second_responder,
            Verdict::ValidWin { .. } => self.press.first_responder,
        }
    }
}

/// Applies the resolution rule to a latched press.
///
/// The boundary is inclusive: `elapsed_ms == threshold_ms` is a win.
#[must_use]
pub fn resolve(press: Press, threshold_ms: u32) -> RoundOutcome {
    let verdict = if press.elapsed_ms < threshold_ms {
        Verdict::TooEarly {
            margin_ms: threshold_ms - press.elapsed_ms,
        }
    } else {
        Verdict::ValidWin {
            reaction_ms: press.elapsed_ms - threshold_ms,
        }
    };
    RoundOutcome { press, verdict }
}

/// Orchestrates rounds forever: rearm, countdown, await, resolve, report,
/// pause.
pub struct RoundController<S: ReportSink, D: Delay> {
    config: DuelConfig,
    state: RoundState,
    latch: Arc<PressLatch>,
    clock: Arc<dyn RoundClock>,
    countdown: CountdownSequencer,
    scores: Arc<ScoreBoard>,
    sink: S,
    delay: D,
    rounds_played: u64,
}

impl<S: ReportSink, D: Delay> RoundController<S, D> {
    /// Assembles a controller from its collaborators.
    ///
    /// The latch and clock are shared with the button arbiter; the scoreboard
    /// is shared with anything that wants to read totals.
    pub fn new(
        config: DuelConfig,
        latch: Arc<PressLatch>,
        clock: Arc<dyn RoundClock>,
        countdown: CountdownSequencer,
        scores: Arc<ScoreBoard>,
        sink: S,
        delay: D,
    ) -> Self {
        Self {
            config,
            state: RoundState::Idle,
            latch,
            clock,
            countdown,
            scores,
            sink,
            delay,
            rounds_played: 0,
        }
    }

    /// Current phase of the protocol.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Rounds fully resolved so far.
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Shared scoreboard handle.
    #[must_use]
    pub fn scores(&self) -> &Arc<ScoreBoard> {
        &self.scores
    }

    /// Runs one complete round: Idle through Resolved and back to Idle,
    /// including the inter-round pause.
    ///
    /// Blocks without timeout while awaiting a press; if neither button is
    /// ever pressed the round never resolves, by design.
    pub fn play_round(&mut self) -> RoundOutcome {
        self.transition(RoundState::CountingDown);
        // Fresh latch and clock every round; a press latched during the
        // pause is discarded here. Scores persist.
        self.latch.rearm();
        self.clock.reset();
        self.countdown.run(self.clock.as_ref(), &self.delay);

        self.transition(RoundState::AwaitingPress);
        let press = self.latch.wait();

        self.transition(RoundState::Resolved);
        let outcome = resolve(press, self.config.countdown_threshold_ms);
        self.scores.award(outcome.awarded());
        self.report(&outcome);
        self.rounds_played += 1;

        self.delay.delay_ms(self.config.inter_round_pause_ms);
        self.transition(RoundState::Idle);
        outcome
    }

    /// Loops rounds indefinitely. Never returns under normal operation.
    pub fn run_forever(&mut self) -> ! {
        loop {
            self.play_round();
        }
    }

    fn transition(&mut self, next: RoundState) {
        tracing::info!(
            from = state_name(self.state),
            to = state_name(next),
            round = self.rounds_played + 1,
            "round state transition"
        );
        self.state = next;
    }

    fn report(&mut self, outcome: &RoundOutcome) {
        let first = outcome.press.first_responder;
        let line = match outcome.verdict {
            Verdict::TooEarly { margin_ms } => {
                format!("Player {first} was {margin_ms} ms too early and lost.\n")
            }
            Verdict::ValidWin { reaction_ms } => {
                format!("Player {first} won with a reaction time of only {reaction_ms} ms.\n")
            }
        };
        self.sink.write_report(&line);
        self.sink.write_report(&format!(
            "Player 1: {} points, Player 2: {} points\n\n",
            self.scores.read(PlayerId::One),
            self.scores.read(PlayerId::Two),
        ));
    }
}

/// Human-readable state name for logs.
fn state_name(state: RoundState) -> &'static str {
    match state {
        RoundState::Idle => "IDLE",
        RoundState::CountingDown => "COUNTING_DOWN",
        RoundState::AwaitingPress => "AWAITING_PRESS",
        RoundState::Resolved => "RESOLVED",
    }
}
