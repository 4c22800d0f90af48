//! Board structure with store tracking

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{PitId, Side, INITIAL_SEEDS, PITS_PER_SIDE, PIT_COUNT, TOTAL_SEEDS};
use crate::error::MancalaError;
use crate::rules::{self, Outcome, Score, SowResult};

/// Game position: seed counts for the 12 pits and both stores.
///
/// `Board` is a plain `Copy` value, so search can clone it freely without
/// touching the authoritative position. Counts only change through
/// [`Board::apply_move`] and the settlement done by [`Board::is_terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    pits: [u8; PIT_COUNT],
    stores: [u8; 2],
}

/// Unchecked snapshot shape, validated on the way into [`Board`]
#[derive(Deserialize)]
struct BoardParts {
    pits: [u8; PIT_COUNT],
    stores: [u8; 2],
}

impl TryFrom<BoardParts> for Board {
    type Error = MancalaError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        Board::try_from_parts(parts.pits, parts.stores)
    }
}

impl Board {
    /// Standard opening: 4 seeds per pit, empty stores
    pub fn new() -> Self {
        Self {
            pits: [INITIAL_SEEDS; PIT_COUNT],
            stores: [0; 2],
        }
    }

    /// Build an arbitrary position (pits in `PitId` order, stores in `Side` order).
    ///
    /// The total must not exceed [`TOTAL_SEEDS`]; sowing and settlement count
    /// in `u8`. Use [`Board::try_from_parts`] for untrusted input.
    pub fn from_parts(pits: [u8; PIT_COUNT], stores: [u8; 2]) -> Self {
        let board = Self { pits, stores };
        debug_assert!(
            board.total_seeds() <= TOTAL_SEEDS,
            "board holds {} seeds",
            board.total_seeds()
        );
        board
    }

    /// Checked [`Board::from_parts`].
    ///
    /// # Errors
    /// [`MancalaError::InvalidBoard`] when the position holds more than
    /// [`TOTAL_SEEDS`] seeds.
    pub fn try_from_parts(pits: [u8; PIT_COUNT], stores: [u8; 2]) -> Result<Self, MancalaError> {
        let board = Self { pits, stores };
        let seeds = board.total_seeds();
        if seeds > TOTAL_SEEDS {
            return Err(MancalaError::InvalidBoard { seeds });
        }
        Ok(board)
    }

    /// Seeds in a pit
    #[inline]
    pub fn pit(&self, pit: PitId) -> u8 {
        self.pits[pit.index()]
    }

    /// Seeds in a side's store
    #[inline]
    pub fn store(&self, side: Side) -> u8 {
        self.stores[side.index()]
    }

    /// All pit counts in board order
    #[inline]
    pub fn pits(&self) -> &[u8; PIT_COUNT] {
        &self.pits
    }

    /// Seeds still on a side's row
    #[inline]
    pub fn row_seeds(&self, side: Side) -> u32 {
        side.pits().iter().map(|&p| u32::from(self.pit(p))).sum()
    }

    /// True when every pit of `side` is empty
    #[inline]
    pub fn is_row_empty(&self, side: Side) -> bool {
        side.pits().iter().all(|&p| self.pit(p) == 0)
    }

    /// Seeds on the whole board, stores included
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().map(|&c| u32::from(c)).sum::<u32>()
            + self.stores.iter().map(|&c| u32::from(c)).sum::<u32>()
    }

    /// Non-empty pits of `side`, in board order.
    ///
    /// Empty when the side's row is empty, which also means the game is over.
    pub fn legal_moves(&self, side: Side) -> Vec<PitId> {
        side.pits()
            .into_iter()
            .filter(|&p| self.pit(p) > 0)
            .collect()
    }

    /// Sow the seeds of `pit` for `side`.
    ///
    /// Returns `true` when the last seed landed in the mover's own store
    /// (the same side moves again).
    ///
    /// # Errors
    ///
    /// [`MancalaError::InvalidMove`] if `pit` is not owned by `side` or is empty.
    /// The board is left untouched in that case.
    pub fn apply_move(&mut self, side: Side, pit: PitId) -> Result<bool, MancalaError> {
        self.play(side, pit).map(|result| result.bonus_turn)
    }

    /// Like [`Board::apply_move`] but reports the full sowing result
    pub fn play(&mut self, side: Side, pit: PitId) -> Result<SowResult, MancalaError> {
        rules::check_move(self, side, pit)?;

        #[cfg(debug_assertions)]
        let before = self.total_seeds();

        let result = rules::sow(self, side, pit);

        #[cfg(debug_assertions)]
        debug_assert_eq!(before, self.total_seeds(), "seed count changed by {side} {pit}");

        trace!(
            %side,
            %pit,
            last = ?result.last,
            captured = result.captured,
            bonus = result.bonus_turn,
            "move applied"
        );
        Ok(result)
    }

    /// True once either row is empty.
    ///
    /// When true, remaining seeds are swept into their owners' stores as part
    /// of the check. Calling it again after settlement changes nothing.
    pub fn is_terminal(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        rules::settle(self);
        true
    }

    /// Read-only terminal check, without settlement
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_row_empty(Side::A) || self.is_row_empty(Side::B)
    }

    /// Store totals and result.
    ///
    /// Only meaningful after [`Board::is_terminal`] has returned `true`;
    /// before that the totals ignore seeds still on the rows.
    pub fn score(&self) -> Score {
        let a = self.store(Side::A);
        let b = self.store(Side::B);
        Score {
            stores: [a, b],
            outcome: Outcome::from_stores(a, b),
        }
    }

    #[inline]
    pub(crate) fn take_pit(&mut self, pit: PitId) -> u8 {
        std::mem::take(&mut self.pits[pit.index()])
    }

    #[inline]
    pub(crate) fn add_to_pit(&mut self, pit: PitId, count: u8) {
        self.pits[pit.index()] += count;
    }

    #[inline]
    pub(crate) fn add_to_store(&mut self, side: Side, count: u8) {
        self.stores[side.index()] += count;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text diagram: B's row reversed on top, stores at the ends, A's row below.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top: Vec<PitId> = Side::B.pits().into_iter().rev().collect();
        let bottom = Side::A.pits();

        write!(f, "     ")?;
        for pit in &top {
            write!(f, "{:>4}", pit.to_string())?;
        }
        writeln!(f)?;
        write!(f, "     ")?;
        for pit in &top {
            write!(f, "{:>4}", self.pit(*pit))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>4}{}{:>4}",
            self.store(Side::B),
            " ".repeat(PITS_PER_SIDE * 4 + 2),
            self.store(Side::A)
        )?;
        write!(f, "     ")?;
        for pit in &bottom {
            write!(f, "{:>4}", self.pit(*pit))?;
        }
        writeln!(f)?;
        write!(f, "     ")?;
        for pit in &bottom {
            write!(f, "{:>4}", pit.to_string())?;
        }
        Ok(())
    }
}
