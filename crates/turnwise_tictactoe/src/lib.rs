//! Tic-tac-toe for the turnwise engine.
//!
//! Pure game logic: the board, win/draw rules, board invariants and the
//! [`TicTacToe`] rules bundle that the orchestrator and strategies drive.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, CELLS};
pub use game::TicTacToe;
pub use position::Position;
pub use types::{Mark, Square};
