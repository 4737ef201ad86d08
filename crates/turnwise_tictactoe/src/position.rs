//! Named cells, for people who would rather type "top-left" than 0.

use crate::{Board, CELLS};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the nine cells, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

const LABELS: [&str; CELLS] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// Human-readable name, e.g. "Middle-right".
    pub fn label(self) -> &'static str {
        LABELS[self.to_index()]
    }

    /// Board index 0-8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The cell at `index`, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parses a 0-8 index or a label.
    ///
    /// Labels ignore case and punctuation, so "top left", "TopLeft" and
    /// "top-left" agree. "middle" and "centre" also name the center.
    #[instrument]
    pub fn from_label_or_number(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(index) = text.parse::<usize>() {
            return Self::from_index(index);
        }

        let key = fold(text);
        match key.as_str() {
            "middle" | "centre" => Some(Self::Center),
            _ => Self::iter().find(|pos| fold(pos.label()) == key),
        }
    }

    /// Cells still open on `board`, in index order.
    pub fn valid_moves(board: &Board) -> Vec<Self> {
        board.empty_cells().filter_map(Self::from_index).collect()
    }
}

// Lowercase alphanumerics only.
fn fold(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}
