//! Sowing: pick up a pit and drop one seed per slot along the ring
//!
//! The mover's own store receives seeds, the opponent's store is passed over
//! without receiving one and without using up a seed.

use crate::board::{Board, PitId, Side, Slot};
use crate::error::{InvalidMoveReason, MancalaError};

use super::capture::capture_at;

/// What happened during one sowing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SowResult {
    /// Seeds picked up from the played pit
    pub sown: u8,
    /// Slot that received the last seed
    pub last: Slot,
    /// Seeds moved to the mover's store by a capture (0 if none)
    pub captured: u8,
    /// Last seed landed in the mover's own store
    pub bonus_turn: bool,
}

/// Validate that `side` may play `pit`.
///
/// # Errors
/// `InvalidMove` when the pit belongs to the other side or holds no seeds.
pub fn check_move(board: &Board, side: Side, pit: PitId) -> Result<(), MancalaError> {
    let reason = if pit.owner() != side {
        InvalidMoveReason::NotOwned
    } else if board.pit(pit) == 0 {
        InvalidMoveReason::EmptyPit
    } else {
        return Ok(());
    };
    Err(MancalaError::InvalidMove { side, pit, reason })
}

/// Sow `pit` for `side`, then apply capture.
///
/// Unchecked: callers go through [`check_move`] first, or take `pit` from
/// `Board::legal_moves(side)`.
pub fn sow(board: &mut Board, side: Side, pit: PitId) -> SowResult {
    debug_assert!(check_move(board, side, pit).is_ok(), "{side} cannot play {pit}");

    let sown = board.take_pit(pit);
    let skipped = Slot::Store(side.opponent());

    let mut remaining = sown;
    let mut current = Slot::Pit(pit);
    while remaining > 0 {
        current = current.successor();
        if current == skipped {
            continue;
        }
        match current {
            Slot::Pit(p) => board.add_to_pit(p, 1),
            Slot::Store(s) => board.add_to_store(s, 1),
        }
        remaining -= 1;
    }

    let captured = match current {
        Slot::Pit(landing) => capture_at(board, side, landing),
        Slot::Store(_) => 0,
    };

    SowResult {
        sown,
        last: current,
        captured,
        bonus_turn: current == Slot::Store(side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sow_from_start() {
        let mut board = Board::new();
        let result = sow(&mut board, Side::A, PitId::A);

        assert_eq!(result.sown, 4);
        assert_eq!(result.last, Slot::Pit(PitId::E));
        assert_eq!(result.captured, 0);
        assert!(!result.bonus_turn);
        assert_eq!(board.pit(PitId::A), 0);
        for pit in [PitId::B, PitId::C, PitId::D, PitId::E] {
            assert_eq!(board.pit(pit), 5);
        }
        assert_eq!(board.pit(PitId::F), 4);
    }

    #[test]
    fn test_sow_into_own_store() {
        let mut board = Board::new();
        let result = sow(&mut board, Side::A, PitId::C);

        assert_eq!(result.last, Slot::Store(Side::A));
        assert!(result.bonus_turn);
        assert_eq!(board.store(Side::A), 1);
    }

    #[test]
    fn test_sow_side_b_wraps_to_a() {
        let mut board = Board::new();
        let result = sow(&mut board, Side::B, PitId::L);

        // L -> store B, A, B, C
        assert_eq!(result.last, Slot::Pit(PitId::C));
        assert_eq!(board.store(Side::B), 1);
        assert_eq!(board.pit(PitId::A), 5);
        assert_eq!(board.pit(PitId::C), 5);
        assert!(!result.bonus_turn);
    }

    #[test]
    fn test_check_move_reasons() {
        let mut pits = [4; 12];
        pits[PitId::B.index()] = 0;
        let board = Board::from_parts(pits, [0, 0]);

        assert_eq!(
            check_move(&board, Side::A, PitId::G),
            Err(MancalaError::InvalidMove {
                side: Side::A,
                pit: PitId::G,
                reason: InvalidMoveReason::NotOwned,
            })
        );
        assert_eq!(
            check_move(&board, Side::A, PitId::B),
            Err(MancalaError::InvalidMove {
                side: Side::A,
                pit: PitId::B,
                reason: InvalidMoveReason::EmptyPit,
            })
        );
        assert!(check_move(&board, Side::A, PitId::A).is_ok());
    }
}
