//! Computer player backed by a strategy.

use super::{Player, PlayerKind};
use crate::strategy::Strategy;
use crate::{GameError, GameRules, PlayerId};
use tracing::{debug, instrument};

/// A player whose moves come from a pluggable [`Strategy`].
pub struct ComputerPlayer<G: GameRules> {
    name: String,
    strategy: Box<dyn Strategy<G>>,
}

impl<G: GameRules> ComputerPlayer<G> {
    /// Creates a computer player around `strategy`.
    pub fn new(name: impl Into<String>, strategy: impl Strategy<G> + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
        }
    }

    /// Name of the configured strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl<G: GameRules> Player<G> for ComputerPlayer<G> {
    #[instrument(skip(self, rules, board), fields(player = %self.name, strategy = self.strategy.name()))]
    fn take_turn(
        &mut self,
        rules: &G,
        board: &G::Board,
        seat: PlayerId,
    ) -> Result<G::Move, GameError> {
        let mv = self.strategy.select_move(rules, board, seat)?;
        debug!(%mv, "Computer chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

impl<G: GameRules> std::fmt::Debug for ComputerPlayer<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerPlayer")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
