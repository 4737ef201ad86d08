//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board reachable by legal play
//! satisfies. They are checked after each move in debug builds and can be
//! tested independently.

use crate::rules::winning_marks;
use crate::{Board, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose from individual invariants.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        match violations.is_empty() {
            true => Ok(()),
            false => Err(violations),
        }
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct TurnBalanceInvariant;

impl Invariant<Board> for TurnBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Turn balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Invariant: at most one mark owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        winning_marks(board).len() <= 1
    }

    fn description() -> &'static str {
        "At most one mark has three in a row"
    }
}

/// All tic-tac-toe board invariants as a composable set.
pub type TicTacToeInvariants = (TurnBalanceInvariant, SingleWinnerInvariant);
