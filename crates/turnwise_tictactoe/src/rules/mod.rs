//! Tic-tac-toe rules: win and draw detection, move legality and status.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_marks};

use crate::Board;
use turnwise_core::{GameError, GameStatus};

/// Derives the game status from the board.
///
/// A completed line wins regardless of the rest of the board. A board where
/// both marks have a line cannot arise from legal play and is reported as an
/// [`GameError::InvariantViolation`].
pub fn status(board: &Board) -> Result<GameStatus, GameError> {
    if let Some(mark) = check_winner(board)? {
        return Ok(GameStatus::WonBy(mark.player()));
    }
    if is_full(board) {
        return Ok(GameStatus::Draw);
    }
    Ok(GameStatus::InProgress)
}

/// Checks that `index` is on the board and empty.
pub fn check_move(board: &Board, index: usize) -> Result<(), GameError> {
    match board.cell_at(index)? {
        crate::Square::Empty => Ok(()),
        crate::Square::Occupied(_) => Err(GameError::OccupiedCell { index }),
    }
}

/// True iff `index` is on the board and empty.
pub fn is_legal(board: &Board, index: usize) -> bool {
    check_move(board, index).is_ok()
}
