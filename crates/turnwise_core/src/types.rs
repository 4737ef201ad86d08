//! Core domain types shared by every game.

use serde::{Deserialize, Serialize};

/// Seat at the table. Fixed for the whole game.
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
pub enum PlayerId {
    /// Moves first.
    #[display("Player one")]
    One,
    /// Moves second.
    #[display("Player two")]
    Two,
}

impl PlayerId {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Position of this seat in a two-element array.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Status of a game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    #[display("In progress")]
    InProgress,
    /// The given player completed a winning configuration.
    #[display("{} wins", _0)]
    WonBy(PlayerId),
    /// No moves remain and nobody won.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameStatus::WonBy(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
