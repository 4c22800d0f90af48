//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Kalah AI.
//! Every node works on its own copy of the board, so sibling branches never
//! see each other's moves and the caller's board is never touched.
//!
//! # Features
//!
//! - Explicit maximizing/minimizing roles instead of sign tricks
//! - Moves tried in board order; the first move reaching the best value wins ties
//! - Configurable handling of bonus turns inside the tree ([`TurnPolicy`])
//! - Pluggable evaluation through [`Evaluator`]
//!
//! # Example
//!
//! ```
//! use mancala::board::{Board, Side};
//! use mancala::eval::StoreDifference;
//! use mancala::search::{Searcher, TurnPolicy};
//!
//! let mut searcher = Searcher::new(TurnPolicy::HonorBonusTurn);
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Side::A, 4, &StoreDifference);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::board::{Board, PitId, Side};
use crate::eval::Evaluator;
use crate::rules::sow;

/// Who moves after a move that earned a bonus turn, inside the search tree.
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
pub enum TurnPolicy {
    /// The mover plays again after a bonus turn, as in a real game.
    #[default]
    HonorBonusTurn,
    /// The side flips after every move, bonus turn or not.
    AlwaysAlternate,
}

impl TurnPolicy {
    /// Side to move after `side` played a move
    #[inline]
    pub fn next_side(self, side: Side, bonus_turn: bool) -> Side {
        match self {
            TurnPolicy::HonorBonusTurn if bonus_turn => side,
            _ => side.opponent(),
        }
    }
}

/// Whether a node maximizes or minimizes the evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    /// Role of the node where `to_move` plays, in a search for `maximizer`
    #[inline]
    pub fn of(to_move: Side, maximizer: Side) -> Role {
        if to_move == maximizer {
            Role::Maximizing
        } else {
            Role::Minimizing
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` if the root was terminal or had no move
    pub best_move: Option<PitId>,
    /// Minimax value from the maximizing side's perspective
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher.
///
/// Holds only the turn policy and a node counter; the heuristic is passed
/// per call so one searcher can serve any evaluator.
#[derive(Debug, Clone)]
pub struct Searcher {
    policy: TurnPolicy,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(policy: TurnPolicy) -> Self {
        Self { policy, nodes: 0 }
    }

    #[inline]
    pub fn policy(&self) -> TurnPolicy {
        self.policy
    }

    /// Search for the best move of `side` with alpha-beta pruning.
    ///
    /// # Arguments
    ///
    /// * `board` - Current board state (not modified)
    /// * `side` - Side to move, also the maximizing side
    /// * `depth` - Plies to look ahead; 0 is treated as 1
    /// * `evaluator` - Static evaluation used at cutoff and terminal nodes
    #[must_use]
    pub fn search<E>(&mut self, board: &Board, side: Side, depth: u8, evaluator: &E) -> SearchResult
    where
        E: Evaluator + ?Sized,
    {
        self.nodes = 0;
        let depth = depth.max(1);
        let (score, best_move) =
            self.alpha_beta(board, side, side, depth, i32::MIN, i32::MAX, evaluator);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Same tree as [`Searcher::search`] without pruning.
    ///
    /// Visits every node up to `depth`; meant for checking the pruned search
    /// and for small depths only.
    #[must_use]
    pub fn search_exhaustive<E>(
        &mut self,
        board: &Board,
        side: Side,
        depth: u8,
        evaluator: &E,
    ) -> SearchResult
    where
        E: Evaluator + ?Sized,
    {
        self.nodes = 0;
        let depth = depth.max(1);
        let (score, best_move) = self.minimax(board, side, side, depth, evaluator);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Recursive alpha-beta search (fail-soft).
    ///
    /// Returns the node value and, for interior nodes, the move reaching it.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta<E>(
        &mut self,
        board: &Board,
        to_move: Side,
        maximizer: Side,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        evaluator: &E,
    ) -> (i32, Option<PitId>)
    where
        E: Evaluator + ?Sized,
    {
        self.nodes += 1;

        // Settlement happens on this node's own copy
        let mut board = *board;
        if board.is_terminal() || depth == 0 {
            return (evaluator.evaluate(&board, maximizer), None);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            return (evaluator.evaluate(&board, maximizer), None);
        }

        let role = Role::of(to_move, maximizer);
        let mut best_value = match role {
            Role::Maximizing => i32::MIN,
            Role::Minimizing => i32::MAX,
        };
        let mut best_move = None;

        for pit in moves {
            let mut child = board;
            let bonus = sow(&mut child, to_move, pit).bonus_turn;
            let next = self.policy.next_side(to_move, bonus);

            let (value, _) =
                self.alpha_beta(&child, next, maximizer, depth - 1, alpha, beta, evaluator);

            match role {
                Role::Maximizing => {
                    if best_move.is_none() || value > best_value {
                        best_value = value;
                        best_move = Some(pit);
                    }
                    if best_value >= beta {
                        break;
                    }
                    alpha = alpha.max(best_value);
                }
                Role::Minimizing => {
                    if best_move.is_none() || value < best_value {
                        best_value = value;
                        best_move = Some(pit);
                    }
                    if best_value <= alpha {
                        break;
                    }
                    beta = beta.min(best_value);
                }
            }
        }

        (best_value, best_move)
    }

    /// Plain minimax with the same cutoff, ordering and tie-break rules
    fn minimax<E>(
        &mut self,
        board: &Board,
        to_move: Side,
        maximizer: Side,
        depth: u8,
        evaluator: &E,
    ) -> (i32, Option<PitId>)
    where
        E: Evaluator + ?Sized,
    {
        self.nodes += 1;

        let mut board = *board;
        if board.is_terminal() || depth == 0 {
            return (evaluator.evaluate(&board, maximizer), None);
        }

        let role = Role::of(to_move, maximizer);
        let mut best: Option<(i32, PitId)> = None;

        for pit in board.legal_moves(to_move) {
            let mut child = board;
            let bonus = sow(&mut child, to_move, pit).bonus_turn;
            let next = self.policy.next_side(to_move, bonus);
            let (value, _) = self.minimax(&child, next, maximizer, depth - 1, evaluator);

            let improves = match (best, role) {
                (None, _) => true,
                (Some((b, _)), Role::Maximizing) => value > b,
                (Some((b, _)), Role::Minimizing) => value < b,
            };
            if improves {
                best = Some((value, pit));
            }
        }

        match best {
            Some((value, pit)) => (value, Some(pit)),
            None => (evaluator.evaluate(&board, maximizer), None),
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(TurnPolicy::default())
    }
}

/// Pick a move for `side` with a fresh searcher and the default turn policy.
///
/// Returns `None` only when `side` has nothing to play.
#[must_use]
pub fn choose_move<E>(board: &Board, side: Side, depth: u8, evaluator: &E) -> Option<PitId>
where
    E: Evaluator + ?Sized,
{
    Searcher::default()
        .search(board, side, depth, evaluator)
        .best_move
}
