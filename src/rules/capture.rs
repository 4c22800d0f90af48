//! Capture rule
//!
//! When the last seed lands in one of the mover's own pits that was empty,
//! and the facing pit is not empty, both go to the mover's store.

use crate::board::{Board, PitId, Side};

/// Apply the capture rule for a last seed that landed in `landing`.
///
/// # Returns
/// Seeds moved into `side`'s store (facing pit + the landing seed), or 0.
pub fn capture_at(board: &mut Board, side: Side, landing: PitId) -> u8 {
    if landing.owner() != side || board.pit(landing) != 1 {
        return 0;
    }

    let opposite = landing.opposite();
    if board.pit(opposite) == 0 {
        return 0;
    }

    let captured = board.take_pit(opposite) + board.take_pit(landing);
    board.add_to_store(side, captured);
    captured
}
