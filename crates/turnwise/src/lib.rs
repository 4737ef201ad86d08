//! Turnwise - terminal tic-tac-toe on the turnwise engine.
//!
//! # Architecture
//!
//! - **Config**: [`MatchConfig`] seats and series settings, from TOML or CLI
//!   flags
//! - **Roster**: turns seat configuration into [`turnwise_core::Player`]s
//! - **Console**: a human seat reading typed moves and a board-printing
//!   observer
//! - **Play**: one interactive game, narrated to a chosen writer
//! - **Tournament**: unattended computer-vs-computer series with a [`Tally`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod play;
pub mod roster;
pub mod tournament;

pub use config::{ConfigError, MatchConfig, PlayerChoice, PlayerConfig, StrategyKind};
pub use console::{BoardPrinter, SharedInput, console_player, shared_input};
pub use play::{PlayError, play_game};
pub use roster::{build_player, computer_player};
pub use tournament::{Tally, TournamentError, run_tournament, run_tournament_with};
