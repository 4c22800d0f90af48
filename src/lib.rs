//! Kalah (Mancala) engine with alpha-beta AI
//!
//! A game engine for the Kalah variant of Mancala:
//! - 6 pits per side, 4 seeds each, plus one store per side
//! - Sowing counter-clockwise, skipping the opponent's store
//! - Last seed in the own store: play again
//! - Last seed in an own empty pit: capture it and the facing pit
//! - Game ends when a row is empty; remaining seeds go to their owner
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and fixed topology tables
//! - [`rules`]: Sowing, capture, settlement and scoring
//! - [`eval`]: Position evaluation heuristics
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Automated player built on the search
//! - [`game`]: Turn driver for human and computer players
//! - [`config`]: TOML configuration for engines and matches
//!
//! # Quick Start
//!
//! ```
//! use mancala::{AIEngine, Board, Side};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_depth(4);
//!
//! // Side A plays C: last seed lands in its store, so A goes again
//! let bonus = board.apply_move(Side::A, mancala::PitId::C).unwrap();
//! assert!(bonus);
//!
//! // AI answers for A's second move
//! if let Some(pit) = engine.get_move(&board, Side::A) {
//!     board.apply_move(Side::A, pit).unwrap();
//!     println!("AI plays {pit}");
//! }
//! assert_eq!(board.total_seeds(), 48);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, PitId, Side, TOTAL_SEEDS};
pub use config::{EngineConfig, MatchConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{InvalidMoveReason, MancalaError};
pub use eval::{Evaluator, HeuristicKind};
pub use game::{Controller, Match, TurnReport};
pub use rules::{Outcome, Score};
pub use search::{choose_move, TurnPolicy};
