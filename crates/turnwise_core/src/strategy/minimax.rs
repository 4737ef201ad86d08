//! Exhaustive minimax search.
//!
//! Scores come from [`GameRules::score`], which biases wins and losses by ply,
//! so among equally decisive lines the search takes the fastest win and the
//! slowest loss. Ties between root moves go to the first move in canonical
//! order. Alpha-beta pruning is on by default and never changes the chosen
//! move.

use super::{Strategy, playable_moves};
use crate::{GameError, GameRules, PlayerId, Score};
use serde::Serialize;
use tracing::{debug, instrument};

/// Backed-up value of a single root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_new::new)]
pub struct MoveScore<M> {
    /// The candidate move.
    pub mv: M,
    /// Minimax value from the mover's perspective.
    pub score: Score,
}

/// Perfect-play strategy: never loses a game that can be saved.
#[derive(Debug, Clone, Copy)]
pub struct Unbeatable {
    pruning: bool,
}

impl Unbeatable {
    /// Minimax with alpha-beta pruning.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Plain minimax visiting every node.
    pub fn without_pruning() -> Self {
        Self { pruning: false }
    }

    /// Whether alpha-beta pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Exact minimax value of every legal move, in canonical order.
    ///
    /// Always searches with a full window, so the scores are exact even when
    /// pruning is enabled.
    #[instrument(skip(self, rules, board))]
    pub fn evaluate_moves<G: GameRules>(
        &self,
        rules: &G,
        board: &G::Board,
        player: PlayerId,
    ) -> Result<Vec<MoveScore<G::Move>>, GameError> {
        playable_moves(rules, board)?
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                rules.apply(&mut child, player, mv)?;
                let window = Window::full();
                let score = self.search(rules, &child, player.opponent(), player, 1, window)?;
                Ok(MoveScore::new(mv, score))
            })
            .collect()
    }

    fn search<G: GameRules>(
        &self,
        rules: &G,
        board: &G::Board,
        to_move: PlayerId,
        maximizer: PlayerId,
        ply: u32,
        mut window: Window,
    ) -> Result<Score, GameError> {
        if let Some(score) = rules.score(board, maximizer, ply)? {
            return Ok(score);
        }

        let moves = rules.legal_moves(board);
        if moves.is_empty() {
            return Err(GameError::InvariantViolation(format!(
                "{} reported a game in progress with no legal moves",
                rules.name()
            )));
        }

        let maximizing = to_move == maximizer;
        let mut best = if maximizing { Score::MIN } else { Score::MAX };
        for mv in moves {
            let mut child = board.clone();
            rules.apply(&mut child, to_move, mv)?;
            let value = self.search(rules, &child, to_move.opponent(), maximizer, ply + 1, window)?;

            if maximizing {
                best = best.max(value);
                window.alpha = window.alpha.max(value);
            } else {
                best = best.min(value);
                window.beta = window.beta.min(value);
            }
            if self.pruning && window.alpha >= window.beta {
                break;
            }
        }
        Ok(best)
    }
}

impl Default for Unbeatable {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameRules> Strategy<G> for Unbeatable {
    #[instrument(skip(self, rules, board), fields(game = rules.name(), pruning = self.pruning()))]
    fn select_move(
        &mut self,
        rules: &G,
        board: &G::Board,
        player: PlayerId,
    ) -> Result<G::Move, GameError> {
        let mut best: Option<MoveScore<G::Move>> = None;
        let mut window = Window::full();

        for mv in playable_moves(rules, board)? {
            let mut child = board.clone();
            rules.apply(&mut child, player, mv)?;
            let score = self.search(rules, &child, player.opponent(), player, 1, window)?;

            // Strictly better only: earlier moves win ties.
            if best.is_none_or(|b| score > b.score) {
                best = Some(MoveScore::new(mv, score));
                if self.pruning {
                    window.alpha = window.alpha.max(score);
                }
            }
        }

        let best = best.ok_or(GameError::NoLegalMove)?;
        debug!(mv = %best.mv, score = best.score, "Minimax chose move");
        Ok(best.mv)
    }

    fn name(&self) -> &str {
        "unbeatable"
    }
}

/// Alpha-beta bounds.
#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: Score,
    beta: Score,
}

impl Window {
    fn full() -> Self {
        Self {
            alpha: Score::MIN,
            beta: Score::MAX,
        }
    }
}
