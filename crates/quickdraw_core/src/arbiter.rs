//! # Button Arbiter
//!
//! Binds one handler to each player's falling-edge input. Each handler reads
//! the shared round clock and then attempts the single-word claim on the
//! press latch; the loser of the race does nothing further. All the
//! race-safety lives in [`PressLatch::claim`] - the handlers themselves are
//! stateless.
//!
//! Handlers are bound once, before the first round, and stay armed for the
//! process lifetime. A press between rounds still runs the handler; it claims
//! a stale latch that the next round's rearm discards, exactly as the
//! original hardware behaved.

use crate::clock::RoundClock;
use crate::io::EdgeInput;
use crate::latch::PressLatch;
use crate::player::PlayerId;
use std::sync::Arc;

/// Wires both players' edge inputs to the shared latch and clock.
pub struct ButtonArbiter;

impl ButtonArbiter {
    /// Registers a claim handler on each input.
    pub fn bind(
        latch: &Arc<PressLatch>,
        clock: &Arc<dyn RoundClock>,
        player1_input: &mut dyn EdgeInput,
        player2_input: &mut dyn EdgeInput,
    ) {
        Self::bind_player(latch, clock, player1_input, PlayerId::One);
        Self::bind_player(latch, clock, player2_input, PlayerId::Two);
    }

    fn bind_player(
        latch: &Arc<PressLatch>,
        clock: &Arc<dyn RoundClock>,
        input: &mut dyn EdgeInput,
        player: PlayerId,
    ) {
        let latch = Arc::clone(latch);
        let clock = Arc::clone(clock);
        input.on_falling_edge(Box::new(move || {
            // Capture the elapsed time first; the claim publishes it
            // atomically with the responder pair.
            let elapsed_ms = clock.read_ms();
            if latch.claim(player, elapsed_ms) {
                tracing::debug!(player = player.number(), elapsed_ms, "press claimed");
            } else {
                tracing::trace!(player = player.number(), "press ignored, latch already claimed");
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::io::MockButton;

    fn wired() -> (Arc<PressLatch>, Arc<ManualClock>, MockButton, MockButton) {
        let latch = Arc::new(PressLatch::new());
        let clock = Arc::new(ManualClock::new());
        let clock_dyn: Arc<dyn RoundClock> = clock.clone();
        let mut button1 = MockButton::new();
        let mut button2 = MockButton::new();
        ButtonArbiter::bind(&latch, &clock_dyn, &mut button1, &mut button2);
        (latch, clock, button1, button2)
    }

    #[test]
    fn test_first_edge_claims_with_clock_reading() {
        let (latch, clock, button1, _button2) = wired();
        clock.start();
        clock.set_ms(2500);
        button1.trigger();

        let press = latch.get().unwrap();
        assert_eq!(press.first_responder, PlayerId::One);
        assert_eq!(press.second_responder, PlayerId::Two);
        assert_eq!(press.elapsed_ms, 2500);
    }

    #[test]
    fn test_second_edge_is_ignored() {
        let (latch, clock, button1, button2) = wired();
        clock.start();
        clock.set_ms(3100);
        button2.trigger();
        clock.set_ms(3200);
        button1.trigger();

        let press = latch.get().unwrap();
        assert_eq!(press.first_responder, PlayerId::Two);
        assert_eq!(press.elapsed_ms, 3100);
    }

    #[test]
    fn test_repeat_edges_from_noisy_switch_latch_once() {
        let (latch, clock, button1, _button2) = wired();
        clock.start();
        clock.set_ms(3050);
        button1.trigger();
        clock.set_ms(3060);
        button1.trigger();
        button1.trigger();

        assert_eq!(latch.get().unwrap().elapsed_ms, 3050);
    }

    #[test]
    fn test_press_before_clock_start_reads_zero() {
        let (latch, _clock, button1, _button2) = wired();
        button1.trigger();
        assert_eq!(latch.get().unwrap().elapsed_ms, 0);
    }
}
