//! Main AI Engine wrapping the search with its configuration
//!
//! An [`AIEngine`] is one automated player: a search depth, a turn policy
//! and an evaluation function. Two engines with different heuristics can
//! face each other in the same match.
//!
//! # Example
//!
//! ```
//! use mancala::{AIEngine, Board, Side};
//!
//! let mut engine = AIEngine::with_depth(4);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::A);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, PitId, Side};
use crate::config::EngineConfig;
use crate::eval::{Evaluator, HeuristicKind};
use crate::rules::sow;
use crate::search::{SearchResult, Searcher, TurnPolicy};

/// Default look-ahead in plies
pub const DEFAULT_DEPTH: u8 = 5;

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Only one legal move, no search needed
    Forced,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<PitId>,
    /// Evaluation from the mover's perspective
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Depth searched (0 for forced moves)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn forced(pit: PitId, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pit),
            score,
            search_type: SearchType::Forced,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Automated Kalah player.
///
/// # Configuration
///
/// - Search depth (plies)
/// - Turn policy for bonus turns inside the search tree
/// - Evaluation function (any [`Evaluator`])
pub struct AIEngine {
    searcher: Searcher,
    evaluator: Box<dyn Evaluator + Send + Sync>,
    max_depth: u8,
}

impl AIEngine {
    /// Engine with the default configuration: depth 5, bonus turns honoured,
    /// store-difference evaluation.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// Default engine searching `depth` plies
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self::from_config(&EngineConfig {
            depth,
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_evaluator(config.depth, config.turn_policy, config.heuristic)
    }

    /// Engine with a custom evaluation function.
    ///
    /// # Example
    ///
    /// ```
    /// use mancala::{AIEngine, Board, Side};
    /// use mancala::search::TurnPolicy;
    ///
    /// // Hoard seeds on the own row
    /// let hoarder = |board: &Board, side: Side| board.row_seeds(side) as i32;
    /// let mut engine = AIEngine::with_evaluator(3, TurnPolicy::HonorBonusTurn, hoarder);
    /// assert!(engine.get_move(&Board::new(), Side::A).is_some());
    /// ```
    #[must_use]
    pub fn with_evaluator<E>(depth: u8, policy: TurnPolicy, evaluator: E) -> Self
    where
        E: Evaluator + Send + Sync + 'static,
    {
        Self {
            searcher: Searcher::new(policy),
            evaluator: Box::new(evaluator),
            max_depth: depth.max(1),
        }
    }

    /// Get the best move for `side`, or `None` if it has nothing to play.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<PitId> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// A single legal move is returned without searching; otherwise the
    /// alpha-beta search runs to the configured depth.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();

        let moves = board.legal_moves(side);
        if let [only] = moves.as_slice() {
            let mut after = *board;
            sow(&mut after, side, *only);
            // A forced move can end the game; score the settled board
            after.is_terminal();
            let score = self.evaluator.evaluate(&after, side);
            let result = MoveResult::forced(*only, score, start.elapsed().as_millis() as u64);
            debug!(%side, pit = %only, score, "forced move");
            return result;
        }

        let result = self
            .searcher
            .search(board, side, self.max_depth, self.evaluator.as_ref());
        let result = MoveResult::from_alphabeta(result, start.elapsed().as_millis() as u64);

        debug!(
            %side,
            best_move = ?result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }

    /// Set the search depth (at least 1).
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn turn_policy(&self) -> TurnPolicy {
        self.searcher.policy()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HeuristicKind> for AIEngine {
    fn from(heuristic: HeuristicKind) -> Self {
        Self::from_config(&EngineConfig {
            heuristic,
            ..EngineConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::StoreDifference;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
        assert_eq!(engine.turn_policy(), TurnPolicy::HonorBonusTurn);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::with_depth(3);
        assert_eq!(engine.max_depth(), 3);
        engine.set_max_depth(0);
        assert_eq!(engine.max_depth(), 1);
    }

    #[test]
    fn test_engine_forced_move() {
        let mut pits = [0; 12];
        pits[PitId::D.index()] = 3;
        pits[PitId::J.index()] = 2;
        let board = Board::from_parts(pits, [10, 9]);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::A);

        assert_eq!(result.best_move, Some(PitId::D));
        assert_eq!(result.search_type, SearchType::Forced);
        // D -> E, F, store A
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_engine_forced_move_ending_game_is_settled() {
        // F -> store A empties A's row; B sweeps G into its store
        let mut pits = [0; 12];
        pits[PitId::F.index()] = 1;
        pits[PitId::G.index()] = 2;
        let board = Board::from_parts(pits, [20, 22]);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Side::A);
        let searched = Searcher::default().search(&board, Side::A, 1, &StoreDifference);

        assert_eq!(result.search_type, SearchType::Forced);
        assert_eq!(result.best_move, Some(PitId::F));
        assert_eq!(result.score, 21 - 24);
        assert_eq!(result.score, searched.score);
    }

    #[test]
    fn test_engine_matches_searcher() {
        let board = Board::new();
        let mut engine = AIEngine::with_depth(4);
        let result = engine.get_move_with_stats(&board, Side::B);

        let expected = Searcher::default().search(&board, Side::B, 4, &StoreDifference);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.score);
        assert_eq!(result.nodes, expected.nodes);
    }

    #[test]
    fn test_engine_no_move_on_empty_row() {
        let mut pits = [0; 12];
        pits[PitId::G.index()] = 4;
        let board = Board::from_parts(pits, [20, 24]);

        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Side::A), None);
    }

    #[test]
    fn test_engine_from_heuristic() {
        let mut engine = AIEngine::from(HeuristicKind::Positional);
        let board = Board::new();
        assert!(engine.get_move(&board, Side::A).is_some());
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::with_depth(5);
        let board = Board::new();

        let first = engine.get_move(&board, Side::A);
        let second = engine.get_move(&board, Side::A);
        assert_eq!(first, second);
    }
}
