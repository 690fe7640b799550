//! Full-stack rounds over real time: wall clock, sleeping delays and presses
//! arriving from scheduler threads. Timings use wide margins so scheduler
//! jitter cannot flip a verdict.

use quickdraw_core::io::MemorySink;
use quickdraw_core::{DuelConfig, PlayerId, Verdict};
use std::time::Duration;

/// 50 ms stages: threshold at 150 ms, whole countdown 200 ms, short pause.
fn fast_config() -> DuelConfig {
    DuelConfig {
        countdown_threshold_ms: 150,
        stage_duration_ms: 50,
        inter_round_pause_ms: 10,
    }
}

#[test]
fn press_after_countdown_is_a_valid_win() {
    let config = fast_config();
    config.validate().unwrap();
    let sink = MemorySink::new();
    let mut duel = quickdraw_sim::build_with_sink(config, sink.clone());

    // Press well past the countdown: ~100 ms of reaction headroom.
    duel.button2.press_after(Duration::from_millis(250));
    let outcome = duel.controller.play_round();

    assert_eq!(outcome.press.first_responder, PlayerId::Two);
    let Verdict::ValidWin { reaction_ms } = outcome.verdict else {
        panic!("expected a valid win, got {:?}", outcome.verdict);
    };
    assert!(reaction_ms >= 50, "pressed before threshold? {reaction_ms}");
    assert_eq!(duel.controller.scores().read(PlayerId::Two), 1);
    assert!(sink.reports()[0].starts_with("Player 2 won with a reaction time of only"));
}

#[test]
fn press_during_countdown_is_an_early_loss() {
    let config = fast_config();
    let sink = MemorySink::new();
    let mut duel = quickdraw_sim::build_with_sink(config, sink.clone());

    // Press mid-stage-2, far from the 150 ms threshold.
    duel.button1.press_after(Duration::from_millis(60));
    let outcome = duel.controller.play_round();

    assert_eq!(outcome.press.first_responder, PlayerId::One);
    assert!(matches!(outcome.verdict, Verdict::TooEarly { .. }));
    assert_eq!(outcome.awarded(), PlayerId::Two);
    assert_eq!(duel.controller.scores().read(PlayerId::Two), 1);
    assert!(sink.reports()[0].starts_with("Player 1 was"));
    assert!(sink.reports()[0].ends_with("ms too early and lost.\n"));
}

#[test]
fn simultaneous_presses_award_exactly_one_point() {
    let config = fast_config();
    let sink = MemorySink::new();
    let mut duel = quickdraw_sim::build_with_sink(config, sink.clone());

    duel.button1.press_after(Duration::from_millis(250));
    duel.button2.press_after(Duration::from_millis(250));
    let outcome = duel.controller.play_round();

    assert_ne!(
        outcome.press.first_responder,
        outcome.press.second_responder
    );
    let scores = duel.controller.scores();
    assert_eq!(scores.read(PlayerId::One) + scores.read(PlayerId::Two), 1);
    // Two report fragments per round: the verdict line and the score line.
    assert_eq!(sink.reports().len(), 2);
}

#[test]
fn consecutive_rounds_rearm_and_accumulate() {
    let config = fast_config();
    let sink = MemorySink::new();
    let mut duel = quickdraw_sim::build_with_sink(config, sink.clone());

    // Round 1: player 1 wins cleanly.
    duel.button1.press_after(Duration::from_millis(250));
    let first = duel.controller.play_round();
    assert!(matches!(first.verdict, Verdict::ValidWin { .. }));

    // Round 2: player 2 jumps the gun.
    duel.button2.press_after(Duration::from_millis(60));
    let second = duel.controller.play_round();
    assert_eq!(second.press.first_responder, PlayerId::Two);
    assert!(matches!(second.verdict, Verdict::TooEarly { .. }));

    // Player 1 took both points; the final score line says so.
    assert_eq!(duel.controller.scores().read(PlayerId::One), 2);
    assert_eq!(
        sink.reports().last().unwrap(),
        "Player 1: 2 points, Player 2: 0 points\n\n"
    );
    assert_eq!(duel.controller.rounds_played(), 2);
}
