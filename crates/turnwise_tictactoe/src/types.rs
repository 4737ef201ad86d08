//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use turnwise_core::PlayerId;

/// Mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player one's mark (goes first).
    X,
    /// Player two's mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The seat that plays this mark.
    pub fn player(self) -> PlayerId {
        match self {
            Mark::X => PlayerId::One,
            Mark::O => PlayerId::Two,
        }
    }
}

impl From<PlayerId> for Mark {
    fn from(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Mark::X,
            PlayerId::Two => Mark::O,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// The mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}
