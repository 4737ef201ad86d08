//! Match configuration loaded from TOML or assembled from CLI flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use turnwise_core::{DEFAULT_MAX_REJECTIONS, PlayerKind};

/// Move-selection strategy for a computer seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Full minimax search; never loses.
    #[default]
    Unbeatable,
    /// Uniformly random legal moves.
    Random,
    /// Lowest-numbered empty cell.
    First,
}

/// Shorthand accepted on the command line for a whole seat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerChoice {
    /// Moves typed at the console.
    Human,
    /// Computer running [`StrategyKind::Unbeatable`].
    Unbeatable,
    /// Computer running [`StrategyKind::Random`].
    Random,
    /// Computer running [`StrategyKind::First`].
    First,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,

    /// Human or computer.
    #[serde(default = "default_kind")]
    kind: PlayerKind,

    /// Strategy used when `kind` is computer.
    #[serde(default)]
    strategy: StrategyKind,

    /// Seed for the random strategy. Drawn from system entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether minimax uses alpha-beta pruning.
    #[serde(default = "default_pruning")]
    pruning: bool,
}

fn default_kind() -> PlayerKind {
    PlayerKind::Computer
}

fn default_pruning() -> bool {
    true
}

impl PlayerConfig {
    /// A computer seat running `strategy`.
    pub fn computer(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Computer,
            strategy,
            seed: None,
            pruning: default_pruning(),
        }
    }

    /// A console seat.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            kind: PlayerKind::Human,
            ..Self::computer(name, StrategyKind::default())
        }
    }

    /// Seat described by a command-line shorthand.
    #[instrument]
    pub fn from_choice(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::Human => Self::human("Human"),
            PlayerChoice::Unbeatable => Self::computer("Unbeatable", StrategyKind::Unbeatable),
            PlayerChoice::Random => Self::computer("Random", StrategyKind::Random),
            PlayerChoice::First => Self::computer("First available", StrategyKind::First),
        }
    }

    /// Replaces the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// True for console seats.
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

/// A series of games between two seats.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seat that plays X and moves first.
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Seat that plays O.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,

    /// Number of games in the series.
    #[serde(default = "default_games")]
    games: usize,

    /// Illegal moves tolerated from a human in a single turn.
    #[serde(default = "default_max_rejections")]
    max_rejections: usize,
}

fn default_player_one() -> PlayerConfig {
    PlayerConfig::from_choice(PlayerChoice::Human)
}

fn default_player_two() -> PlayerConfig {
    PlayerConfig::from_choice(PlayerChoice::Unbeatable)
}

fn default_games() -> usize {
    1
}

fn default_max_rejections() -> usize {
    DEFAULT_MAX_REJECTIONS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_player_one(), default_player_two())
    }
}

impl MatchConfig {
    /// A single game between the two seats.
    pub fn new(player_one: PlayerConfig, player_two: PlayerConfig) -> Self {
        Self {
            player_one,
            player_two,
            games: default_games(),
            max_rejections: default_max_rejections(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            games = config.games,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        for seat in [&self.player_one, &self.player_two] {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::new("player name must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Replaces the seat that moves first.
    pub fn with_player_one(mut self, player: PlayerConfig) -> Self {
        self.player_one = player;
        self
    }

    /// Replaces the seat that moves second.
    pub fn with_player_two(mut self, player: PlayerConfig) -> Self {
        self.player_two = player;
        self
    }

    /// Sets the series length.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Sets the per-turn rejection limit for humans.
    pub fn with_max_rejections(mut self, max_rejections: usize) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    /// Seeds both seats from one value; player two gets `seed + 1` so the
    /// two generators differ.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.player_one.seed = Some(seed);
        self.player_two.seed = Some(seed.wrapping_add(1));
        self
    }

    /// Turns alpha-beta pruning on or off for both seats.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.player_one = self.player_one.with_pruning(pruning);
        self.player_two = self.player_two.with_pruning(pruning);
        self
    }

    /// True if either seat is a console player.
    pub fn has_human(&self) -> bool {
        self.player_one.is_human() || self.player_two.is_human()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
