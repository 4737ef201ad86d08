//! Turns seat configuration into live players.

use crate::config::{ConfigError, PlayerConfig, StrategyKind};
use tracing::{debug, instrument};
use turnwise_core::{ComputerPlayer, FirstAvailable, Player, RandomStrategy, Unbeatable};
use turnwise_tictactoe::TicTacToe;

/// Builds the computer player a seat describes.
///
/// `round` offsets the seed so that each game of a seeded series differs
/// while the series as a whole replays exactly.
#[instrument(skip(config), fields(name = %config.name(), strategy = %config.strategy()))]
pub fn computer_player(
    config: &PlayerConfig,
    round: u64,
) -> Result<ComputerPlayer<TicTacToe>, ConfigError> {
    if config.is_human() {
        return Err(ConfigError::new(format!(
            "{} is a human seat, not a computer",
            config.name()
        )));
    }

    let name = config.name().clone();
    let player = match config.strategy() {
        StrategyKind::Unbeatable => {
            let strategy = match *config.pruning() {
                true => Unbeatable::new(),
                false => Unbeatable::without_pruning(),
            };
            debug!(pruning = strategy.pruning(), "Configuring minimax");
            ComputerPlayer::new(name, strategy)
        }
        StrategyKind::Random => {
            let seed = config.seed().map(|seed| seed.wrapping_add(round));
            debug!(?seed, "Seeding random strategy");
            ComputerPlayer::new(name, RandomStrategy::from_seed(seed))
        }
        StrategyKind::First => ComputerPlayer::new(name, FirstAvailable),
    };
    Ok(player)
}

/// Builds any seat, asking `human` to supply console players.
pub fn build_player<F>(
    config: &PlayerConfig,
    round: u64,
    human: F,
) -> Result<Box<dyn Player<TicTacToe>>, ConfigError>
where
    F: FnOnce(&PlayerConfig) -> Box<dyn Player<TicTacToe>>,
{
    if config.is_human() {
        Ok(human(config))
    } else {
        Ok(Box::new(computer_player(config, round)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerChoice;
    use std::collections::HashSet;
    use turnwise_core::{GameRules, HumanPlayer, PlayerId, PlayerKind};

    #[test]
    fn test_strategy_names() {
        let cases = [
            (PlayerChoice::Unbeatable, "unbeatable"),
            (PlayerChoice::Random, "random"),
            (PlayerChoice::First, "first-available"),
        ];
        for (choice, expected) in cases {
            let config = PlayerConfig::from_choice(choice);
            let player = computer_player(&config, 0).unwrap();
            assert_eq!(player.strategy_name(), expected);
        }
    }

    #[test]
    fn test_human_seat_is_not_a_computer() {
        let config = PlayerConfig::from_choice(PlayerChoice::Human);
        assert!(computer_player(&config, 0).is_err());
    }

    #[test]
    fn test_seeded_rounds_differ_but_replay() {
        let rules = TicTacToe::new();
        let board = rules.new_board();
        let config = PlayerConfig::from_choice(PlayerChoice::Random).with_seed(Some(11));
        let first_move = |round| {
            computer_player(&config, round)
                .unwrap()
                .take_turn(&rules, &board, PlayerId::One)
                .unwrap()
        };
        assert_eq!(first_move(3), first_move(3));
        let seen: HashSet<usize> = (0..20).map(first_move).collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_build_player_routes_humans() {
        let human = PlayerConfig::from_choice(PlayerChoice::Human);
        let player = build_player(&human, 0, |config| {
            Box::new(HumanPlayer::<TicTacToe>::new(config.name().clone(), |_, _| Ok(0)))
        })
        .unwrap();
        assert_eq!(player.kind(), PlayerKind::Human);
        assert_eq!(player.name(), "Human");

        let computer = PlayerConfig::from_choice(PlayerChoice::First);
        let player = build_player(&computer, 0, |_| unreachable!()).unwrap();
        assert_eq!(player.kind(), PlayerKind::Computer);
    }
}
