//! Fixed board topology: rows, facing pits and the sowing ring
//!
//! Everything here depends only on the 6+6 pit layout, so it lives in
//! constant tables instead of being recomputed per move.

use super::{PitId, Side, PITS_PER_SIDE};

/// Slots on the sowing ring (12 pits + 2 stores)
pub const RING_LEN: usize = 14;

/// A slot that can receive a seed while sowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Pit(PitId),
    Store(Side),
}

/// Rows in board order, indexed by `Side::index()`
pub const ROWS: [[PitId; PITS_PER_SIDE]; 2] = [
    [PitId::A, PitId::B, PitId::C, PitId::D, PitId::E, PitId::F],
    [PitId::G, PitId::H, PitId::I, PitId::J, PitId::K, PitId::L],
];

/// Facing pit, indexed by `PitId::index()`. Column i of A faces column 5-i of B.
pub const OPPOSITE: [PitId; 12] = [
    PitId::L,
    PitId::K,
    PitId::J,
    PitId::I,
    PitId::H,
    PitId::G,
    PitId::F,
    PitId::E,
    PitId::D,
    PitId::C,
    PitId::B,
    PitId::A,
];

/// Sowing order: A..F, store A, G..L, store B, then back to A
pub const RING: [Slot; RING_LEN] = [
    Slot::Pit(PitId::A),
    Slot::Pit(PitId::B),
    Slot::Pit(PitId::C),
    Slot::Pit(PitId::D),
    Slot::Pit(PitId::E),
    Slot::Pit(PitId::F),
    Slot::Store(Side::A),
    Slot::Pit(PitId::G),
    Slot::Pit(PitId::H),
    Slot::Pit(PitId::I),
    Slot::Pit(PitId::J),
    Slot::Pit(PitId::K),
    Slot::Pit(PitId::L),
    Slot::Store(Side::B),
];

/// Ring position of the next slot, indexed by ring position
pub const SUCCESSOR: [usize; RING_LEN] = build_successors();

const fn build_successors() -> [usize; RING_LEN] {
    let mut next = [0; RING_LEN];
    let mut i = 0;
    while i < RING_LEN {
        next[i] = (i + 1) % RING_LEN;
        i += 1;
    }
    next
}

impl Slot {
    /// Position of this slot on the sowing ring
    #[inline]
    pub fn ring_index(self) -> usize {
        match self {
            Slot::Pit(pit) => {
                let idx = pit.index();
                // Store A sits between F and G
                if idx < PITS_PER_SIDE {
                    idx
                } else {
                    idx + 1
                }
            }
            Slot::Store(Side::A) => PITS_PER_SIDE,
            Slot::Store(Side::B) => RING_LEN - 1,
        }
    }

    /// The slot that receives the next seed
    #[inline]
    pub fn successor(self) -> Slot {
        RING[SUCCESSOR[self.ring_index()]]
    }

    /// Owning side of the pit or store
    #[inline]
    pub fn owner(self) -> Side {
        match self {
            Slot::Pit(pit) => pit.owner(),
            Slot::Store(side) => side,
        }
    }
}
