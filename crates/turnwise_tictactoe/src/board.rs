//! 3x3 board with cell occupancy and query operations.

use crate::{Mark, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use turnwise_core::GameError;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cloning produces an independent snapshot; strategies explore on clones
/// while the orchestrator mutates the single live instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at `index` (0-8).
    pub fn cell_at(&self, index: usize) -> Result<Square, GameError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(GameError::OutOfRange { index })
    }

    /// Places `mark` on an empty square.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        match self.squares.get_mut(index) {
            None => Err(GameError::OutOfRange { index }),
            Some(Square::Occupied(_)) => Err(GameError::OccupiedCell { index }),
            Some(square) => {
                *square = Square::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Checks if a square is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        CELLS - self.empty_cells().count()
    }

    /// Mark whose turn it is, judging by the counts. X moves first.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty squares show their 1-based number, as typed at the prompt.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells of `X`, `O` or `.`/`-`/`_`; whitespace is ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(GameError::Input(format!("unexpected board character {other:?}")));
                }
            };
            if count == CELLS {
                return Err(GameError::Input("board has more than 9 cells".into()));
            }
            board.squares[count] = square;
            count += 1;
        }
        if count != CELLS {
            return Err(GameError::Input(format!("board has {count} cells, expected 9")));
        }
        Ok(board)
    }
}
