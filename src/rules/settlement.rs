//! End of game: sweep-up and result

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    /// Strictly larger store wins, equal stores draw
    pub fn from_stores(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::A),
            std::cmp::Ordering::Less => Outcome::Winner(Side::B),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::Draw => None,
        }
    }
}

/// Store totals with the derived outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Store totals, indexed by `Side::index()`
    pub stores: [u8; 2],
    pub outcome: Outcome,
}

impl Score {
    #[inline]
    pub fn of(&self, side: Side) -> u8 {
        self.stores[side.index()]
    }
}

/// Move every seed left on a row into that row's own store.
///
/// # Returns
/// Seeds swept per side, indexed by `Side::index()`. Both are 0 on an
/// already settled board.
pub fn settle(board: &mut Board) -> [u8; 2] {
    let mut swept = [0u8; 2];
    for side in [Side::A, Side::B] {
        for pit in side.pits() {
            swept[side.index()] += board.take_pit(pit);
        }
        board.add_to_store(side, swept[side.index()]);
    }
    swept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PitId;

    #[test]
    fn test_outcome_from_stores() {
        assert_eq!(Outcome::from_stores(25, 23), Outcome::Winner(Side::A));
        assert_eq!(Outcome::from_stores(20, 28), Outcome::Winner(Side::B));
        assert_eq!(Outcome::from_stores(24, 24), Outcome::Draw);
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_settle_sweeps_each_row_to_owner() {
        let mut pits = [0; 12];
        pits[PitId::G.index()] = 3;
        pits[PitId::L.index()] = 2;
        let mut board = Board::from_parts(pits, [20, 21]);

        let swept = settle(&mut board);

        assert_eq!(swept, [0, 5]);
        assert_eq!(board.store(Side::A), 20);
        assert_eq!(board.store(Side::B), 26);
        assert!(board.pits().iter().all(|&c| c == 0));

        // Second settlement is a no-op
        assert_eq!(settle(&mut board), [0, 0]);
        assert_eq!(board.store(Side::B), 26);
    }
}
