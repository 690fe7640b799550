//! # Score Board
//!
//! Per-player point counters. Written only by the round controller, readable
//! from anywhere. Counters start at zero once and are never reset; there is
//! no decrement operation.

use crate::player::PlayerId;
use std::sync::atomic::{AtomicU32, Ordering};

/// Two monotonically non-decreasing point counters.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    points: [AtomicU32; 2],
}

impl ScoreBoard {
    /// Creates a board with both counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Awards exactly one point to `player`.
    pub fn award(&self, player: PlayerId) {
        self.points[player.index()].fetch_add(1, Ordering::AcqRel);
    }

    /// Current point count for `player`.
    #[must_use]
    pub fn read(&self, player: PlayerId) -> u32 {
        self.points[player.index()].load(Ordering::Acquire)
    }
}
