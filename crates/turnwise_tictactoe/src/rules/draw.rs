//! Board-full check used for draw detection.

use crate::Board;

/// True once no empty cell remains. A full board without a line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.empty_cells().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_up() {
        let cases = [
            ("... ... ...", false),
            ("XO. ... ...", false),
            ("XOX OXO OX.", false),
            ("XOX XOO OXX", true),
            ("XXX OOX OXO", true),
        ];
        for (text, full) in cases {
            let board: Board = text.parse().unwrap();
            assert_eq!(is_full(&board), full, "{text}");
        }
    }
}
