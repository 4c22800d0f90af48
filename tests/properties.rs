//! Property tests over random legal move sequences.

use mancala::board::PitId;
use mancala::eval::{HeuristicKind, StoreDifference};
use mancala::search::{Searcher, TurnPolicy};
use mancala::{Board, Side, TOTAL_SEEDS};
use proptest::prelude::*;

/// Play `choices` from the opening, honouring bonus turns.
///
/// Each choice picks among the legal moves by index modulo their count.
/// Stops early once the game is over. Returns the boards after every move
/// together with the side to move.
fn replay(choices: &[usize]) -> Vec<(Board, Side)> {
    let mut board = Board::new();
    let mut side = Side::A;
    let mut positions = vec![(board, side)];

    for &choice in choices {
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            break;
        }
        let pit = moves[choice % moves.len()];
        let bonus = board.apply_move(side, pit).unwrap();
        if board.is_terminal() {
            positions.push((board, side));
            break;
        }
        if !bonus {
            side = side.opponent();
        }
        positions.push((board, side));
    }
    positions
}

proptest! {
    /// Invariant: seeds are never created or destroyed.
    #[test]
    fn seeds_are_conserved(choices in prop::collection::vec(0usize..6, 0..80)) {
        for (board, _) in replay(&choices) {
            prop_assert_eq!(board.total_seeds(), TOTAL_SEEDS);
        }
    }

    /// Invariant: legal moves are exactly the non-empty own pits, in board order.
    #[test]
    fn legal_moves_are_sound_and_complete(choices in prop::collection::vec(0usize..6, 0..80)) {
        for (board, _) in replay(&choices) {
            for side in [Side::A, Side::B] {
                let moves = board.legal_moves(side);
                let expected: Vec<PitId> = side
                    .pits()
                    .into_iter()
                    .filter(|&p| board.pit(p) > 0)
                    .collect();
                prop_assert_eq!(&moves, &expected);
                for pit in moves {
                    prop_assert_eq!(pit.owner(), side);
                    prop_assert!(board.pit(pit) > 0);
                }
            }
        }
    }

    /// Invariant: sowing never feeds the opponent's store.
    #[test]
    fn opponent_store_never_grows(choices in prop::collection::vec(0usize..6, 1..60)) {
        let mut board = Board::new();
        let mut side = Side::A;
        for &choice in &choices {
            let moves = board.legal_moves(side);
            if moves.is_empty() {
                break;
            }
            let before = board.store(side.opponent());
            let bonus = board.apply_move(side, moves[choice % moves.len()]).unwrap();
            prop_assert_eq!(board.store(side.opponent()), before);
            if board.is_terminal() {
                break;
            }
            if !bonus {
                side = side.opponent();
            }
        }
    }

    /// Invariant: once settled, every pit is empty and the stores hold everything.
    #[test]
    fn settlement_empties_the_board(choices in prop::collection::vec(0usize..6, 0..200)) {
        let positions = replay(&choices);
        let (mut last, _) = *positions.last().unwrap();
        if last.is_terminal() {
            prop_assert!(last.pits().iter().all(|&c| c == 0));
            let score = last.score();
            prop_assert_eq!(
                u32::from(score.of(Side::A)) + u32::from(score.of(Side::B)),
                TOTAL_SEEDS
            );
        }
    }

    /// Invariant: pruning changes node counts, never the result.
    #[test]
    fn pruning_preserves_minimax_value(
        choices in prop::collection::vec(0usize..6, 0..30),
        depth in 1u8..4,
        alternate in any::<bool>(),
    ) {
        let policy = if alternate { TurnPolicy::AlwaysAlternate } else { TurnPolicy::HonorBonusTurn };
        let (board, side) = *replay(&choices).last().unwrap();
        let mut searcher = Searcher::new(policy);

        for heuristic in [HeuristicKind::StoreDifference, HeuristicKind::Positional] {
            let pruned = searcher.search(&board, side, depth, &heuristic);
            let full = searcher.search_exhaustive(&board, side, depth, &heuristic);
            prop_assert_eq!(pruned.score, full.score);
            prop_assert_eq!(pruned.best_move, full.best_move);
            prop_assert!(pruned.nodes <= full.nodes);
        }
    }

    /// Invariant: a chosen move is always legal for the side to move.
    #[test]
    fn search_returns_legal_move(choices in prop::collection::vec(0usize..6, 0..40)) {
        let (board, side) = *replay(&choices).last().unwrap();
        let result = Searcher::default().search(&board, side, 3, &StoreDifference);
        match result.best_move {
            Some(pit) => prop_assert!(board.legal_moves(side).contains(&pit)),
            None => prop_assert!(board.is_game_over()),
        }
    }
}
