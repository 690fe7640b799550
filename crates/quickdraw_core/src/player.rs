//! # Player Identity
//!
//! Exactly two players exist for the lifetime of the process. Everything that
//! refers to "the other player" goes through [`PlayerId::opponent`] so the
//! pairing can never drift out of sync.

use std::fmt;

/// Identifier for one of the two duelling players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerId {
    /// Player 1, bound to the first button input.
    One = 0,
    /// Player 2, bound to the second button input.
    Two = 1,
}

impl PlayerId {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Player number as printed in reports (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// Zero-based index, used for score storage and latch packing.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PlayerId::index`] for the latch's packed word.
    pub(crate) const fn from_index(index: u64) -> Self {
        if index == 0 {
            Self::One
        } else {
            Self::Two
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
