//! Computer-vs-computer series.

use std::fmt;

use crate::config::{ConfigError, MatchConfig};
use crate::roster::computer_player;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};
use turnwise_core::{GameError, GameRecord, GameStatus, Orchestrator, PlayerId};
use turnwise_tictactoe::TicTacToe;

/// Running totals for a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    /// Games completed.
    games: usize,
    /// Games won by the seat that moves first.
    player_one_wins: usize,
    /// Games won by the seat that moves second.
    player_two_wins: usize,
    /// Games with no winner.
    draws: usize,
}

impl Tally {
    /// Counts one finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::WonBy(PlayerId::One) => self.player_one_wins += 1,
            GameStatus::WonBy(PlayerId::Two) => self.player_two_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }

    /// Wins for `player`.
    pub fn wins(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::One => self.player_one_wins,
            PlayerId::Two => self.player_two_wins,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: {} won by player one, {} won by player two, {} drawn",
            self.games, self.player_one_wins, self.player_two_wins, self.draws
        )
    }
}

/// Why a series stopped early.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum TournamentError {
    /// The configuration cannot be played unattended.
    #[display("{}", _0)]
    Config(ConfigError),
    /// A game failed part-way.
    #[display("Game {} failed: {}", game, source)]
    #[from(ignore)]
    Game {
        /// One-based number of the failing game.
        game: usize,
        /// The engine error.
        source: GameError,
    },
}

impl std::error::Error for TournamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Game { source, .. } => Some(source),
        }
    }
}

/// Plays every game of the series with fresh players and returns the tally.
///
/// Human seats are refused up front.
#[instrument(skip(config), fields(games = config.games()))]
pub fn run_tournament(config: &MatchConfig) -> Result<Tally, TournamentError> {
    run_tournament_with(config, |_, _| {})
}

/// Like [`run_tournament`], handing each finished game to `on_game`.
pub fn run_tournament_with<F>(config: &MatchConfig, mut on_game: F) -> Result<Tally, TournamentError>
where
    F: FnMut(usize, &GameRecord<usize>),
{
    if config.has_human() {
        return Err(ConfigError::new("tournaments are computer-vs-computer only".to_string()).into());
    }

    let mut tally = Tally::default();
    for round in 0..*config.games() {
        let offset = round as u64;
        let mut game = Orchestrator::new(
            TicTacToe::new(),
            Box::new(computer_player(config.player_one(), offset)?),
            Box::new(computer_player(config.player_two(), offset)?),
        );
        let record = game
            .run()
            .map_err(|source| TournamentError::Game {
                game: round + 1,
                source,
            })?;
        debug!(round, status = %record.status(), moves = record.moves().len(), "Game finished");
        tally.record(record.status());
        on_game(round, &record);
    }

    info!(%tally, "Tournament finished");
    Ok(tally)
}
