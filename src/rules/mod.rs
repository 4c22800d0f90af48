//! Game rules for Kalah
//!
//! This module implements the rule set:
//! - Sowing (counter-clockwise, skipping the opponent's store)
//! - Capture (last seed in an own empty pit takes the facing pit)
//! - Bonus turn (last seed in the own store)
//! - Settlement (sweep-up once a row is empty) and scoring

pub mod capture;
pub mod settlement;
pub mod sowing;

// Re-exports for convenient access
pub use capture::capture_at;
pub use settlement::{settle, Outcome, Score};
pub use sowing::{check_move, sow, SowResult};
