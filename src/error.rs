//! Error types for the engine and match driver.

use derive_more::{Display, Error};

use crate::board::{PitId, Side, TOTAL_SEEDS};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidMoveReason {
    /// The pit belongs to the other side.
    #[display("pit belongs to the opponent")]
    NotOwned,
    /// The pit holds no seeds.
    #[display("pit is empty")]
    EmptyPit,
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MancalaError {
    /// A move not drawn from `Board::legal_moves` was submitted.
    #[display("invalid move: side {side} cannot play pit {pit}: {reason}")]
    InvalidMove {
        side: Side,
        pit: PitId,
        reason: InvalidMoveReason,
    },
    /// The match has already ended.
    #[display("game is already over")]
    GameOver,
    /// An automated player was asked to move with nothing to play.
    #[display("side {side} has no legal move")]
    NoLegalMove { side: Side },
    /// The side to move is not driven by an engine.
    #[display("side {side} is not controlled by the computer")]
    NotAutomated { side: Side },
    /// A position holds more seeds than a game can.
    #[display("board holds {seeds} seeds, at most {} allowed", TOTAL_SEEDS)]
    InvalidBoard { seeds: u32 },
    /// Configuration could not be read or parsed.
    #[display("configuration error: {message}")]
    Config { message: String },
}

impl From<toml::de::Error> for MancalaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for MancalaError {
    fn from(err: std::io::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
