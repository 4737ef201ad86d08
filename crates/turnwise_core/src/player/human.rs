//! Human player fed by an external move source.

use super::{Player, PlayerKind};
use crate::{GameError, GameRules, PlayerId};
use tracing::{debug, warn};

/// A player whose moves come from a caller-supplied function.
///
/// The function sees a snapshot of the board and the acting seat, and returns
/// a move or an input error. It may be invoked again after a rejection.
pub struct HumanPlayer<G: GameRules> {
    name: String,
    source: Box<dyn FnMut(&G::Board, PlayerId) -> Result<G::Move, GameError>>,
    rejection_hook: Option<Box<dyn FnMut(G::Move, &GameError)>>,
}

impl<G: GameRules> HumanPlayer<G> {
    /// Creates a human player reading moves from `source`.
    pub fn new<F>(name: impl Into<String>, source: F) -> Self
    where
        F: FnMut(&G::Board, PlayerId) -> Result<G::Move, GameError> + 'static,
    {
        Self {
            name: name.into(),
            source: Box::new(source),
            rejection_hook: None,
        }
    }

    /// Registers a callback told about every rejected move.
    pub fn with_rejection_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut(G::Move, &GameError) + 'static,
    {
        self.rejection_hook = Some(Box::new(hook));
        self
    }
}

impl<G: GameRules> Player<G> for HumanPlayer<G> {
    fn take_turn(
        &mut self,
        _rules: &G,
        board: &G::Board,
        seat: PlayerId,
    ) -> Result<G::Move, GameError> {
        debug!(player = %self.name, %seat, "Waiting for human move");
        (self.source)(board, seat)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn on_rejected(&mut self, mv: G::Move, reason: &GameError) {
        warn!(player = %self.name, %mv, %reason, "Move rejected");
        if let Some(hook) = self.rejection_hook.as_mut() {
            hook(mv, reason);
        }
    }
}

impl<G: GameRules> std::fmt::Debug for HumanPlayer<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer").field("name", &self.name).finish()
    }
}
