//! Turn driver owning the authoritative board
//!
//! [`Match`] alternates turns, keeps the side after a bonus turn, routes
//! automated turns to the side's [`AIEngine`] and settles the board when a
//! row runs empty. It does no I/O; front ends read [`Match::board`] and feed
//! human choices to [`Match::play_human`].

use tracing::{debug, info};

use crate::board::{Board, PitId, Side};
use crate::config::MatchConfig;
use crate::engine::AIEngine;
use crate::error::MancalaError;
use crate::rules::Score;

/// Who decides the moves of a side
pub enum Controller {
    Human,
    Computer(Box<AIEngine>),
}

impl Controller {
    #[inline]
    pub fn is_computer(&self) -> bool {
        matches!(self, Controller::Computer(_))
    }
}

/// One played move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub pit: PitId,
    /// Seeds taken by a capture (0 if none)
    pub captured: u8,
    pub bonus_turn: bool,
    /// Side to move next, `None` once the game is over
    pub next: Option<Side>,
}

/// A game in progress
pub struct Match {
    board: Board,
    side_to_move: Side,
    controllers: [Controller; 2],
    history: Vec<TurnReport>,
    over: bool,
}

impl Match {
    /// New game from the standard opening; `config.first` moves first.
    pub fn new(config: &MatchConfig) -> Self {
        let controller = |side| match config.get(side) {
            Some(engine) => Controller::Computer(Box::new(AIEngine::from_config(engine))),
            None => Controller::Human,
        };
        Self::with_controllers(controller(Side::A), controller(Side::B), config.first)
    }

    pub fn with_controllers(side_a: Controller, side_b: Controller, first: Side) -> Self {
        Self {
            board: Board::new(),
            side_to_move: first,
            controllers: [side_a, side_b],
            history: Vec::new(),
            over: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    pub fn controller(&self, side: Side) -> &Controller {
        &self.controllers[side.index()]
    }

    /// Pits the side to move may play (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<PitId> {
        if self.over {
            return Vec::new();
        }
        self.board.legal_moves(self.side_to_move)
    }

    /// True when the side to move is driven by an engine
    pub fn is_computer_turn(&self) -> bool {
        !self.over && self.controller(self.side_to_move).is_computer()
    }

    /// Final score, available once the game is over
    pub fn outcome(&self) -> Option<Score> {
        self.over.then(|| self.board.score())
    }

    /// Play `pit` for the side to move.
    ///
    /// # Errors
    /// - `GameOver` after the game ended
    /// - `InvalidMove` if `pit` is not a legal move; the turn does not change
    pub fn play_human(&mut self, pit: PitId) -> Result<TurnReport, MancalaError> {
        if self.over {
            return Err(MancalaError::GameOver);
        }
        self.apply(pit)
    }

    /// Let the side to move's engine pick and play a move.
    ///
    /// # Errors
    /// - `GameOver` after the game ended
    /// - `NotAutomated` if a human controls the side to move
    /// - `NoLegalMove` if the engine found nothing to play
    pub fn play_computer(&mut self) -> Result<TurnReport, MancalaError> {
        if self.over {
            return Err(MancalaError::GameOver);
        }
        let side = self.side_to_move;
        let pit = match &mut self.controllers[side.index()] {
            Controller::Computer(engine) => engine.get_move(&self.board, side),
            Controller::Human => return Err(MancalaError::NotAutomated { side }),
        };
        let pit = pit.ok_or(MancalaError::NoLegalMove { side })?;
        self.apply(pit)
    }

    /// Play computer turns until a human is to move or the game ends.
    pub fn run_computer_turns(&mut self) -> Result<Vec<TurnReport>, MancalaError> {
        let mut reports = Vec::new();
        while self.is_computer_turn() {
            reports.push(self.play_computer()?);
        }
        Ok(reports)
    }

    fn apply(&mut self, pit: PitId) -> Result<TurnReport, MancalaError> {
        let side = self.side_to_move;
        let result = self.board.play(side, pit)?;

        let next = if self.board.is_terminal() {
            self.over = true;
            None
        } else if result.bonus_turn {
            Some(side)
        } else {
            Some(side.opponent())
        };
        if let Some(next) = next {
            self.side_to_move = next;
        }

        let report = TurnReport {
            side,
            pit,
            captured: result.captured,
            bonus_turn: result.bonus_turn,
            next,
        };
        debug!(
            %side,
            %pit,
            captured = report.captured,
            bonus = report.bonus_turn,
            "turn played"
        );
        self.history.push(report);

        if self.over {
            let score = self.board.score();
            info!(
                store_a = score.of(Side::A),
                store_b = score.of(Side::B),
                outcome = ?score.outcome,
                moves = self.history.len(),
                "game over"
            );
        }
        Ok(report)
    }
}
