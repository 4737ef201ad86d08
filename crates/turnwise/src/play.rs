//! A single interactive game.

use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::config::{ConfigError, MatchConfig, PlayerConfig};
use crate::console::{BoardPrinter, SharedInput, console_player};
use crate::roster::build_player;
use tracing::{info, instrument};
use turnwise_core::{GameError, GameRecord, Orchestrator, Player};
use turnwise_tictactoe::TicTacToe;

/// Why a game could not be played to the end.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum PlayError {
    /// The seats could not be built.
    #[display("{}", _0)]
    Config(ConfigError),
    /// The game stopped with an engine error.
    #[display("{}", _0)]
    Game(GameError),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Game(e) => Some(e),
        }
    }
}

/// Plays one game of `config`.
///
/// Human seats read lines from `input`. Every prompt, rejection notice and
/// board goes to a writer made by `console`, so callers that want a clean
/// stdout point it at stderr.
#[instrument(skip_all, fields(player_one = %config.player_one().name(), player_two = %config.player_two().name()))]
pub fn play_game<R, W, F>(
    config: &MatchConfig,
    input: SharedInput<R>,
    console: F,
) -> Result<GameRecord<usize>, PlayError>
where
    R: BufRead + 'static,
    W: Write + 'static,
    F: Fn() -> W,
{
    let seat = |player: &PlayerConfig| -> Box<dyn Player<TicTacToe>> {
        Box::new(console_player(player.name().clone(), Rc::clone(&input), console()))
    };
    let one = build_player(config.player_one(), 0, seat)?;
    let two = build_player(config.player_two(), 0, seat)?;

    let printer = BoardPrinter::new(
        console(),
        config.player_one().name().clone(),
        config.player_two().name().clone(),
    );
    let mut game = Orchestrator::new(TicTacToe::new(), one, two)
        .with_max_rejections(*config.max_rejections())
        .with_observer(printer);

    let record = game.run()?;
    info!(status = %record.status(), moves = record.moves().len(), "Game complete");
    Ok(record)
}
