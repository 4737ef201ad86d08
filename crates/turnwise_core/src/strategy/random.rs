//! Strategy that picks uniformly among legal moves.

use super::{Strategy, playable_moves};
use crate::{GameError, GameRules, PlayerId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Uniformly random play driven by an injected generator.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Reproducible generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, otherwise from system entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<G: GameRules, R: Rng> Strategy<G> for RandomStrategy<R> {
    fn select_move(
        &mut self,
        rules: &G,
        board: &G::Board,
        player: PlayerId,
    ) -> Result<G::Move, GameError> {
        let moves = playable_moves(rules, board)?;
        let mv = *moves.choose(&mut self.rng).ok_or(GameError::NoLegalMove)?;
        debug!(%player, %mv, candidates = moves.len(), "Random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "random"
    }
}
