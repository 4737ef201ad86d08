//! A tiny subtraction game used to exercise the engine without a real board.
//!
//! Players alternately take one to three stones; whoever takes the last stone
//! wins. Piles that are a multiple of four are lost for the player to move.

use crate::{GameError, GameRules, GameStatus, PlayerId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    pub remaining: usize,
    pub to_move: PlayerId,
    pub last_mover: Option<PlayerId>,
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stones, {} to move", self.remaining, self.to_move)
    }
}

#[derive(Debug, Clone)]
pub struct Nim {
    pub start: usize,
}

impl GameRules for Nim {
    type Board = Pile;
    type Move = usize;

    fn name(&self) -> &str {
        "Nim"
    }

    fn new_board(&self) -> Pile {
        Pile {
            remaining: self.start,
            to_move: PlayerId::One,
            last_mover: None,
        }
    }

    fn legal_moves(&self, board: &Pile) -> Vec<usize> {
        (1..=3).filter(|take| *take <= board.remaining).collect()
    }

    fn check_move(&self, board: &Pile, mv: usize) -> Result<(), GameError> {
        if mv == 0 || mv > 3 || mv > board.remaining {
            return Err(GameError::OutOfRange { index: mv });
        }
        Ok(())
    }

    fn apply(&self, board: &mut Pile, player: PlayerId, mv: usize) -> Result<(), GameError> {
        if player != board.to_move {
            return Err(GameError::WrongTurn(player));
        }
        self.check_move(board, mv)?;
        board.remaining -= mv;
        board.last_mover = Some(player);
        board.to_move = player.opponent();
        Ok(())
    }

    fn status(&self, board: &Pile) -> Result<GameStatus, GameError> {
        match (board.remaining, board.last_mover) {
            (0, Some(player)) => Ok(GameStatus::WonBy(player)),
            (0, None) => Ok(GameStatus::Draw),
            _ => Ok(GameStatus::InProgress),
        }
    }
}
