//! # Press Latch
//!
//! The one-shot latch both button handlers race to claim. The entire claim -
//! claimed flag, first responder, elapsed-at-press - lives in a single
//! `AtomicU64`, so one compare-and-swap publishes the whole triple or nothing.
//! A reader can never observe a torn triple, and the losing handler's write
//! never lands at all.
//!
//! ## Packed word layout
//!
//! ```text
//! bit 63      bit 32        bits 31..0
//! ┌─────────┬─────────────┬──────────────────┐
//! │ claimed │ player index│ elapsed_ms (u32) │
//! └─────────┴─────────────┴──────────────────┘
//! ```
//!
//! An unclaimed latch is the all-zero word. A claimed word always has bit 63
//! set, so claimed-with-player-1-at-0-ms is still distinguishable from empty.
//!
//! The main flow blocks in [`PressLatch::wait`] on a condition variable; the
//! winning handler notifies after its CAS lands. The wait is unbounded by
//! design: the game has no no-show timeout.

use crate::player::PlayerId;
use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};

const UNCLAIMED: u64 = 0;
const CLAIMED_BIT: u64 = 1 << 63;
const PLAYER_BIT: u64 = 1 << 32;

/// The consistent triple captured by the winning claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    /// The player whose handler won the claim.
    pub first_responder: PlayerId,
    /// The other player.
    pub second_responder: PlayerId,
    /// Clock reading taken by the winning handler, in milliseconds.
    pub elapsed_ms: u32,
}

/// One-shot claim latch shared between both button handlers and the
/// round controller.
#[derive(Debug, Default)]
pub struct PressLatch {
    word: AtomicU64,
    wait_lock: Mutex<()>,
    claimed_cond: Condvar,
}

impl PressLatch {
    /// Creates an unclaimed latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any claim, including stale presses latched between rounds.
    pub fn rearm(&self) {
        self.word.store(UNCLAIMED, Ordering::Release);
    }

    /// Attempts to claim the latch for `player` at `elapsed_ms`.
    ///
    /// Exactly one claim per round succeeds; a `false` return means the
    /// other handler already owns this round and the caller must do nothing
    /// further. Safe to call from any execution context.
    pub fn claim(&self, player: PlayerId, elapsed_ms: u32) -> bool {
        let packed = CLAIMED_BIT | (player.index() as u64 * PLAYER_BIT) | u64::from(elapsed_ms);
        let won = self
            .word
            .compare_exchange(UNCLAIMED, packed, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            // Take the lock so the notify cannot slip between the waiter's
            // check and its sleep.
            let _guard = self.wait_lock.lock();
            self.claimed_cond.notify_all();
        }
        won
    }

    /// The latched press, if any handler has claimed this round.
    #[must_use]
    pub fn get(&self) -> Option<Press> {
        let word = self.word.load(Ordering::Acquire);
        if word == UNCLAIMED {
            return None;
        }
        let first = PlayerId::from_index((word >> 32) & 1);
        let elapsed_ms = (word & u64::from(u32::MAX)) as u32;
        Some(Press {
            first_responder: first,
            second_responder: first.opponent(),
            elapsed_ms,
        })
    }

    /// Whether a claim has landed this round.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.word.load(Ordering::Acquire) != UNCLAIMED
    }

    /// Blocks until a claim lands, then returns it.
    ///
    /// Unbounded: if no button is ever pressed, this never returns.
    pub fn wait(&self) -> Press {
        let mut guard = self.wait_lock.lock();
        loop {
            if let Some(press) = self.get() {
                return press;
            }
            self.claimed_cond.wait(&mut guard);
        }
    }
}
