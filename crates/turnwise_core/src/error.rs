//! Error taxonomy for the engine.

use crate::PlayerId;

/// Error raised while validating, applying or choosing a move.
///
/// `OutOfRange` and `OccupiedCell` are recoverable when they come from a
/// human (the orchestrator asks again). Everything else signals a broken
/// contract between the orchestrator, the rules and the strategies.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A cell index outside the board.
    #[display("Cell index {} (zero-based) is out of range", index)]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell index {} (zero-based) is already occupied", index)]
    OccupiedCell {
        /// The rejected index.
        index: usize,
    },

    /// A strategy was asked to move on a finished game.
    #[display("No legal move: the game is already decided")]
    NoLegalMove,

    /// The orchestrator was stepped after reaching its terminal state.
    #[display("Game is already over")]
    GameOver,

    /// A player tried to move out of turn.
    #[display("It is not {}'s turn", _0)]
    WrongTurn(PlayerId),

    /// A board state that correct play can never produce.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// A computer player proposed an illegal move.
    #[display("{} proposed an illegal move: {}", player, detail)]
    IllegalStrategyMove {
        /// Seat of the offending player.
        player: PlayerId,
        /// Why the move was rejected.
        detail: String,
    },

    /// A human kept proposing illegal moves.
    #[display("{} gave {} illegal moves in a row", player, attempts)]
    TooManyRejections {
        /// Seat of the human.
        player: PlayerId,
        /// Number of rejected attempts.
        attempts: usize,
    },

    /// The human move source failed or produced unreadable input.
    #[display("Input error: {}", _0)]
    Input(String),
}

impl GameError {
    /// True for legality errors a human can fix by trying again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::OutOfRange { .. } | GameError::OccupiedCell { .. }
        )
    }
}

impl std::error::Error for GameError {}
