//! Strategy that takes the first legal move.

use super::{Strategy, playable_moves};
use crate::{GameError, GameRules, PlayerId};
use tracing::debug;

/// Always plays the lowest legal move. Useful as a predictable sparring partner.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl<G: GameRules> Strategy<G> for FirstAvailable {
    fn select_move(
        &mut self,
        rules: &G,
        board: &G::Board,
        player: PlayerId,
    ) -> Result<G::Move, GameError> {
        let moves = playable_moves(rules, board)?;
        let mv = moves[0];
        debug!(%player, %mv, "First available move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "first-available"
    }
}
