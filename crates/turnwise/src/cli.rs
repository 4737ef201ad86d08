//! Command-line interface for turnwise.

use crate::config::{ConfigError, MatchConfig, PlayerChoice, PlayerConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Turnwise - tic-tac-toe against computer opponents that never lose
#[derive(Parser, Debug)]
#[command(name = "turnwise")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game
    Play(PlayArgs),

    /// Run a computer-vs-computer series and print the tally
    Tournament(TournamentArgs),
}

/// Seat selection shared by every command.
#[derive(Args, Debug, Clone)]
pub struct SeatArgs {
    /// Who plays X and moves first (human, unbeatable, random, first)
    #[arg(long)]
    pub player_one: Option<PlayerChoice>,

    /// Who plays O (human, unbeatable, random, first)
    #[arg(long)]
    pub player_two: Option<PlayerChoice>,

    /// Match configuration file (TOML); seat flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for random players, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of narrating
    #[arg(long)]
    pub json: bool,

    /// Search every node instead of pruning; same moves, slower
    #[arg(long)]
    pub no_pruning: bool,
}

impl SeatArgs {
    /// Merges the configuration file, if any, with the flags.
    ///
    /// Seats given neither way fall back to `default_one` and `default_two`.
    #[instrument(skip(self))]
    pub fn resolve(
        &self,
        default_one: PlayerChoice,
        default_two: PlayerChoice,
    ) -> Result<MatchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::from_file(path)?,
            None => MatchConfig::new(
                PlayerConfig::from_choice(default_one),
                PlayerConfig::from_choice(default_two),
            ),
        };
        if let Some(choice) = self.player_one {
            config = config.with_player_one(PlayerConfig::from_choice(choice));
        }
        if let Some(choice) = self.player_two {
            config = config.with_player_two(PlayerConfig::from_choice(choice));
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.no_pruning {
            config = config.with_pruning(false);
        }
        debug!(?config, "Resolved match config");
        Ok(config)
    }
}

/// Options for `play`.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Seats and output
    #[command(flatten)]
    pub seats: SeatArgs,

    /// Illegal moves allowed per turn before the game is abandoned
    #[arg(long)]
    pub max_rejections: Option<usize>,
}

impl PlayArgs {
    /// Match configuration for a single game; human vs unbeatable by default.
    pub fn resolve(&self) -> Result<MatchConfig, ConfigError> {
        let mut config = self
            .seats
            .resolve(PlayerChoice::Human, PlayerChoice::Unbeatable)?
            .with_games(1);
        if let Some(max) = self.max_rejections {
            config = config.with_max_rejections(max);
        }
        Ok(config)
    }
}

/// Options for `tournament`.
#[derive(Args, Debug, Clone)]
pub struct TournamentArgs {
    /// Seats and output
    #[command(flatten)]
    pub seats: SeatArgs,

    /// Number of games to play
    #[arg(short, long)]
    pub games: Option<usize>,
}

impl TournamentArgs {
    /// Match configuration for the series; unbeatable vs random by default.
    pub fn resolve(&self) -> Result<MatchConfig, ConfigError> {
        let mut config = self
            .seats
            .resolve(PlayerChoice::Unbeatable, PlayerChoice::Random)?;
        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        config.validate()?;
        Ok(config)
    }
}
