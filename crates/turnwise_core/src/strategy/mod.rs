//! Move selection policies for computer players.

mod first_available;
mod minimax;
mod random;

pub use first_available::FirstAvailable;
pub use minimax::{MoveScore, Unbeatable};
pub use random::RandomStrategy;

use crate::{GameError, GameRules, GameStatus, PlayerId};

/// Chooses a move for the player to act.
///
/// Implementations receive a shared borrow of the live board and never mutate
/// it; exploratory play happens on clones.
pub trait Strategy<G: GameRules> {
    /// Picks a move for `player`.
    ///
    /// Fails with [`GameError::NoLegalMove`] if the game is already decided.
    fn select_move(
        &mut self,
        rules: &G,
        board: &G::Board,
        player: PlayerId,
    ) -> Result<G::Move, GameError>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

/// Returns the legal moves, or `NoLegalMove` when the game is over.
pub(crate) fn playable_moves<G: GameRules>(
    rules: &G,
    board: &G::Board,
) -> Result<Vec<G::Move>, GameError> {
    if rules.status(board)? != GameStatus::InProgress {
        return Err(GameError::NoLegalMove);
    }
    let moves = rules.legal_moves(board);
    if moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    Ok(moves)
}
