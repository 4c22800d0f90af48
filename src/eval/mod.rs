//! Evaluation module for Kalah positions
//!
//! An [`Evaluator`] scores a board from one side's perspective. The search
//! takes it as a parameter, so two engines in the same match can use
//! different heuristics. Plain closures `Fn(&Board, Side) -> i32` work too.

pub mod heuristic;

pub use heuristic::{HeuristicKind, Positional, StoreDifference};

use crate::board::{Board, Side};

/// Static position evaluation.
///
/// Positive values favour `perspective`, negative values its opponent.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, perspective: Side) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Side) -> i32,
{
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        self(board, perspective)
    }
}
