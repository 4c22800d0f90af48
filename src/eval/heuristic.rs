//! Heuristic evaluation functions for Kalah positions
//!
//! - [`StoreDifference`]: material only (own store minus opponent store)
//! - [`Positional`]: material plus row seeds and ready bonus turns

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::board::{Board, Side};

use super::Evaluator;

/// Own store minus opponent store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreDifference;

impl Evaluator for StoreDifference {
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        i32::from(board.store(perspective)) - i32::from(board.store(perspective.opponent()))
    }
}

/// Weighted material, row control and bonus-turn readiness.
///
/// Stores dominate; seeds still on a row count a little since they end up
/// in that side's store if the game stops; pits holding exactly their
/// distance to the store are bonus turns waiting to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positional {
    pub store_weight: i32,
    pub row_weight: i32,
    pub bonus_weight: i32,
}

impl Default for Positional {
    fn default() -> Self {
        Self {
            store_weight: 4,
            row_weight: 1,
            bonus_weight: 2,
        }
    }
}

impl Positional {
    /// Pits of `side` whose seeds end exactly in the own store
    fn ready_bonus_turns(board: &Board, side: Side) -> i32 {
        side.pits()
            .iter()
            .filter(|&&p| board.pit(p) > 0 && board.pit(p) == p.store_distance())
            .count() as i32
    }
}

impl Evaluator for Positional {
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        let opponent = perspective.opponent();

        let stores = StoreDifference.evaluate(board, perspective);
        let rows = board.row_seeds(perspective) as i32 - board.row_seeds(opponent) as i32;
        let bonus = Self::ready_bonus_turns(board, perspective)
            - Self::ready_bonus_turns(board, opponent);

        self.store_weight * stores + self.row_weight * rows + self.bonus_weight * bonus
    }
}

/// Named heuristics selectable from configuration
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum HeuristicKind {
    #[default]
    StoreDifference,
    Positional,
}

impl Evaluator for HeuristicKind {
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        match self {
            HeuristicKind::StoreDifference => StoreDifference.evaluate(board, perspective),
            HeuristicKind::Positional => Positional::default().evaluate(board, perspective),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PitId;

    #[test]
    fn test_store_difference_is_antisymmetric() {
        let board = Board::from_parts([4; 12], [7, 3]);
        assert_eq!(StoreDifference.evaluate(&board, Side::A), 4);
        assert_eq!(StoreDifference.evaluate(&board, Side::B), -4);
    }

    #[test]
    fn test_start_position_is_even() {
        let board = Board::new();
        for kind in [HeuristicKind::StoreDifference, HeuristicKind::Positional] {
            assert_eq!(kind.evaluate(&board, Side::A), 0);
            assert_eq!(kind.evaluate(&board, Side::B), 0);
        }
    }

    #[test]
    fn test_positional_counts_ready_bonus_turns() {
        // C holds 4 = distance to store A; nothing else differs
        let mut pits = [0; 12];
        pits[PitId::C.index()] = 4;
        pits[PitId::G.index()] = 4;
        let board = Board::from_parts(pits, [0, 0]);

        // G needs 6 seeds for the store, so only A has a ready bonus turn
        assert_eq!(Positional::default().evaluate(&board, Side::A), 2);
        assert_eq!(Positional::default().evaluate(&board, Side::B), -2);
    }

    #[test]
    fn test_positional_weights_stores() {
        let board = Board::from_parts([0; 12], [10, 5]);
        assert_eq!(Positional::default().evaluate(&board, Side::A), 20);
    }

    #[test]
    fn test_closure_evaluator() {
        let seeds_on_row = |board: &Board, side: Side| board.row_seeds(side) as i32;
        assert_eq!(seeds_on_row.evaluate(&Board::new(), Side::B), 24);
    }

    #[test]
    fn test_heuristic_kind_parse() {
        assert_eq!(
            "positional".parse::<HeuristicKind>().ok(),
            Some(HeuristicKind::Positional)
        );
        assert_eq!(
            "store-difference".parse::<HeuristicKind>().ok(),
            Some(HeuristicKind::StoreDifference)
        );
        assert_eq!(HeuristicKind::Positional.to_string(), "positional");
    }
}
