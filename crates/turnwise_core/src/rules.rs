//! The contract a game must satisfy to be driven by the orchestrator.

use crate::{GameError, GameStatus, PlayerId};
use std::fmt;

/// Score of a position from the maximizing player's point of view.
pub type Score = i32;

/// Magnitude of a win found at the root. Larger than any reachable ply count.
pub const WIN_SCORE: Score = 1_000;

/// Rules of a two-player, perfect-information, turn-based game.
///
/// An implementation bundles board construction, legality, move application
/// and status evaluation. The orchestrator and the search strategies only talk
/// to a game through this trait.
pub trait GameRules {
    /// Board representation. Cloning yields an independent snapshot.
    type Board: Clone + fmt::Debug + fmt::Display;

    /// A move, produced by a player and consumed by [`GameRules::apply`].
    type Move: Copy + fmt::Debug + fmt::Display + PartialEq;

    /// Human readable name of the game.
    fn name(&self) -> &str;

    /// Creates the starting board.
    fn new_board(&self) -> Self::Board;

    /// Legal moves in canonical (ascending) order.
    ///
    /// Says nothing about whether the game is over; callers check
    /// [`GameRules::status`] first.
    fn legal_moves(&self, board: &Self::Board) -> Vec<Self::Move>;

    /// Explains why a move is illegal, or returns `Ok(())`.
    fn check_move(&self, board: &Self::Board, mv: Self::Move) -> Result<(), GameError>;

    /// Places `mv` for `player`, mutating `board` in place.
    fn apply(
        &self,
        board: &mut Self::Board,
        player: PlayerId,
        mv: Self::Move,
    ) -> Result<(), GameError>;

    /// Derives the status from the board contents.
    fn status(&self, board: &Self::Board) -> Result<GameStatus, GameError>;

    /// True iff the move targets a valid, free location.
    fn is_legal(&self, board: &Self::Board, mv: Self::Move) -> bool {
        self.check_move(board, mv).is_ok()
    }

    /// Terminal score from `maximizer`'s perspective, `None` while in progress.
    fn score(
        &self,
        board: &Self::Board,
        maximizer: PlayerId,
        ply: u32,
    ) -> Result<Option<Score>, GameError> {
        Ok(terminal_score(self.status(board)?, maximizer, ply))
    }
}

/// Depth-biased terminal score.
///
/// A win is worth `WIN_SCORE - ply` and a loss `ply - WIN_SCORE`, so a search
/// strictly prefers the quickest win and the slowest loss. Draws score zero.
pub fn terminal_score(status: GameStatus, maximizer: PlayerId, ply: u32) -> Option<Score> {
    let ply = Score::try_from(ply).unwrap_or(WIN_SCORE).min(WIN_SCORE - 1);
    match status {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(0),
        GameStatus::WonBy(winner) if winner == maximizer => Some(WIN_SCORE - ply),
        GameStatus::WonBy(_) => Some(ply - WIN_SCORE),
    }
}
