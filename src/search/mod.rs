//! Search module for Kalah AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - Plain minimax over the same tree, used to check the pruned search
//! - The turn policy deciding who moves after a bonus turn

pub mod alphabeta;

pub use alphabeta::{choose_move, Role, SearchResult, Searcher, TurnPolicy};
