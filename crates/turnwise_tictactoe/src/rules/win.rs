//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark};
use strum::IntoEnumIterator;
use turnwise_core::GameError;

/// The eight winning lines.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Marks that own at least one complete line.
pub fn winning_marks(board: &Board) -> Vec<Mark> {
    let squares = board.squares();
    Mark::iter()
        .filter(|mark| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&i| squares[i].mark() == Some(*mark)))
        })
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if exactly one mark has three in a row, `None` if
/// neither does, and an error if both do.
pub fn check_winner(board: &Board) -> Result<Option<Mark>, GameError> {
    match winning_marks(board).as_slice() {
        [] => Ok(None),
        [mark] => Ok(Some(*mark)),
        _ => Err(GameError::InvariantViolation(
            "both marks have a complete line".into(),
        )),
    }
}
