//! Board representation for Kalah

pub mod board;
pub mod layout;


// Re-exports
pub use board::Board;
pub use layout::Slot;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Playable pits per side
pub const PITS_PER_SIDE: usize = 6;
pub const PIT_COUNT: usize = PITS_PER_SIDE * 2; // 12

/// Seeds placed in every pit at the start of a game
pub const INITIAL_SEEDS: u8 = 4;
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS as u32 * PIT_COUNT as u32; // 48

/// The two players. Side A owns pits `A..=F`, side B owns pits `G..=L`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index into per-side tables (A = 0, B = 1)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side's pits in board order
    #[inline]
    pub fn pits(self) -> [PitId; PITS_PER_SIDE] {
        layout::ROWS[self.index()]
    }
}

/// A playable pit. Stores are not pits and are addressed by [`Side`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PitId {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl PitId {
    /// All pits in board order
    pub const ALL: [PitId; PIT_COUNT] = [
        PitId::A,
        PitId::B,
        PitId::C,
        PitId::D,
        PitId::E,
        PitId::F,
        PitId::G,
        PitId::H,
        PitId::I,
        PitId::J,
        PitId::K,
        PitId::L,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<PitId> {
        Self::ALL.get(idx).copied()
    }

    /// Side that owns this pit
    #[inline]
    pub fn owner(self) -> Side {
        if self.index() < PITS_PER_SIDE {
            Side::A
        } else {
            Side::B
        }
    }

    /// Position within the owner's row (0..6), counted in sowing direction
    #[inline]
    pub fn column(self) -> usize {
        self.index() % PITS_PER_SIDE
    }

    /// The pit facing this one across the board
    #[inline]
    pub fn opposite(self) -> PitId {
        layout::OPPOSITE[self.index()]
    }

    /// Seeds needed for the last one to land exactly in the owner's store
    #[inline]
    pub fn store_distance(self) -> u8 {
        (PITS_PER_SIDE - self.column()) as u8
    }
}
