//! Turnwise core - a game-agnostic engine for two-player turn-based games.
//!
//! # Architecture
//!
//! - **Rules**: a game plugs in through [`GameRules`] (construct, check,
//!   apply, status)
//! - **Strategies**: computer move selection ([`Unbeatable`] minimax,
//!   [`RandomStrategy`], [`FirstAvailable`])
//! - **Players**: [`ComputerPlayer`] wraps a strategy, [`HumanPlayer`] wraps an
//!   external move source
//! - **Orchestrator**: the fixed game loop, alternating turns until the rules
//!   report a terminal status
//!
//! # Example
//!
//! ```ignore
//! use turnwise_core::{ComputerPlayer, Orchestrator, Unbeatable};
//!
//! let mut game = Orchestrator::new(
//!     rules,
//!     Box::new(ComputerPlayer::new("one", Unbeatable::new())),
//!     Box::new(ComputerPlayer::new("two", Unbeatable::new())),
//! );
//! let record = game.run()?;
//! println!("{}", record.status());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod orchestrator;
mod rules;
mod types;

pub mod player;
pub mod strategy;

#[cfg(test)]
mod test_game;

// Crate-level exports - Domain types
pub use error::GameError;
pub use types::{GameStatus, PlayerId};

// Crate-level exports - Rules contract
pub use rules::{GameRules, Score, WIN_SCORE, terminal_score};

// Crate-level exports - Players and strategies
pub use player::{ComputerPlayer, HumanPlayer, Player, PlayerKind};
pub use strategy::{FirstAvailable, MoveScore, RandomStrategy, Strategy, Unbeatable};

// Crate-level exports - Orchestration
pub use orchestrator::{
    DEFAULT_MAX_REJECTIONS, GameEvent, GameObserver, GameRecord, Orchestrator, Phase, PlayedMove,
};
