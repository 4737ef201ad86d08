//! Tic-tac-toe plugged into the turnwise engine.

#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::{Board, Mark, rules};
use turnwise_core::{GameError, GameRules, GameStatus, PlayerId};

/// Tic-tac-toe rules. Player one plays X and moves first.
///
/// Moves are cell indices 0-8 in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// Creates the rules bundle.
    pub fn new() -> Self {
        Self
    }
}

impl GameRules for TicTacToe {
    type Board = Board;
    type Move = usize;

    fn name(&self) -> &str {
        "Tic-tac-toe"
    }

    fn new_board(&self) -> Board {
        Board::new()
    }

    fn legal_moves(&self, board: &Board) -> Vec<usize> {
        board.empty_cells().collect()
    }

    fn check_move(&self, board: &Board, mv: usize) -> Result<(), GameError> {
        rules::check_move(board, mv)
    }

    /// Places the acting player's mark.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (game not over, player's turn, legal cell)
    /// - Postconditions checked in debug builds only, on a copy; `board` is
    ///   updated only when every check passes
    fn apply(&self, board: &mut Board, player: PlayerId, mv: usize) -> Result<(), GameError> {
        if rules::status(board)? != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let mark = Mark::from(player);
        if board.next_mark() != mark {
            return Err(GameError::WrongTurn(player));
        }

        let mut next = board.clone();
        next.place(mv, mark)?;

        #[cfg(debug_assertions)]
        TicTacToeInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        *board = next;
        Ok(())
    }

    fn status(&self, board: &Board) -> Result<GameStatus, GameError> {
        rules::status(board)
    }
}
