//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::{GameError, GameRules, PlayerId};
use serde::{Deserialize, Serialize};

/// Who is behind a seat.
///
/// The orchestrator re-prompts a human after an illegal move; an illegal move
/// from a computer is a bug and ends the game with an error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from outside the engine.
    #[display("human")]
    Human,
    /// Moves come from a strategy.
    #[display("computer")]
    Computer,
}

/// Trait for anything that can take a turn.
pub trait Player<G: GameRules> {
    /// Produces a move for `seat` on the given board.
    fn take_turn(
        &mut self,
        rules: &G,
        board: &G::Board,
        seat: PlayerId,
    ) -> Result<G::Move, GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Human or computer.
    fn kind(&self) -> PlayerKind;

    /// Called when the orchestrator refuses a move this player proposed.
    fn on_rejected(&mut self, _mv: G::Move, _reason: &GameError) {}
}
