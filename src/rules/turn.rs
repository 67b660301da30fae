//! Turn tracking: whose turn it is and what has been taken so far.
//!
//! ## Chip phases
//!
//! Within a turn the chips taken so far are one of:
//!
//! - `Fresh`: nothing taken yet
//! - `One(c1)`: one chip taken
//! - `TwoDistinct(c1, c2)`: two chips of different colors
//!
//! From `One(c1)`, taking `c1` again completes the turn. From
//! `TwoDistinct`, only a third color is legal and it completes the turn.
//! Completed turns are never stored: the turn advances immediately, so
//! "two equal chips" and "three chips" have no representation.
//!
//! `TurnState` only tracks. Deciding whether a chip may be taken is the
//! engine's job; `record_chip` refuses only transitions that no legal play
//! could produce.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChipColor, MoveError, Seat};

/// Most chips a player can take in one turn.
pub const MAX_CHIPS_PER_TURN: usize = 3;

/// Chips taken so far in the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Fresh,
    One(ChipColor),
    TwoDistinct(ChipColor, ChipColor),
}

impl TurnPhase {
    /// Rebuild a phase from a recorded chip sequence.
    ///
    /// Returns `None` for sequences no in-progress turn can hold.
    #[must_use]
    pub fn from_taken(taken: &[ChipColor]) -> Option<Self> {
        match *taken {
            [] => Some(TurnPhase::Fresh),
            [c1] => Some(TurnPhase::One(c1)),
            [c1, c2] if c1 != c2 => Some(TurnPhase::TwoDistinct(c1, c2)),
            _ => None,
        }
    }

    /// The chips taken, in order.
    #[must_use]
    pub fn taken(&self) -> SmallVec<[ChipColor; MAX_CHIPS_PER_TURN]> {
        match *self {
            TurnPhase::Fresh => SmallVec::new(),
            TurnPhase::One(c1) => smallvec::smallvec![c1],
            TurnPhase::TwoDistinct(c1, c2) => smallvec::smallvec![c1, c2],
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            TurnPhase::Fresh => 0,
            TurnPhase::One(_) => 1,
            TurnPhase::TwoDistinct(..) => 2,
        }
    }
}

/// What recording a chip did to the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChipStep {
    /// More chips may follow.
    Continue,
    /// The turn is over and must be advanced.
    TurnComplete,
}

/// Turn-level state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    current: Seat,
    phase: TurnPhase,
    chose_chip_action: bool,
}

impl TurnState {
    /// First seat to act, nothing taken.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored fields.
    ///
    /// Returns `None` if `taken` is not a valid in-progress sequence.
    /// A non-empty sequence implies a chip action was chosen.
    #[must_use]
    pub fn restore(current: Seat, chose_chip_action: bool, taken: &[ChipColor]) -> Option<Self> {
        let phase = TurnPhase::from_taken(taken)?;
        Some(Self {
            current,
            phase,
            chose_chip_action: chose_chip_action || phase != TurnPhase::Fresh,
        })
    }

    #[must_use]
    pub fn current(&self) -> Seat {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Chips taken this turn, in order.
    #[must_use]
    pub fn chips_taken(&self) -> SmallVec<[ChipColor; MAX_CHIPS_PER_TURN]> {
        self.phase.taken()
    }

    #[must_use]
    pub fn chips_taken_count(&self) -> usize {
        self.phase.count()
    }

    /// Has a chip-taking action started this turn? Gates purchasing.
    #[must_use]
    pub fn chose_chip_action(&self) -> bool {
        self.chose_chip_action
    }

    #[must_use]
    pub fn has_taken(&self, color: ChipColor) -> bool {
        self.chips_taken().contains(&color)
    }

    /// Record a chip and advance the phase.
    ///
    /// On `TurnComplete` the phase is left as it was; the caller must
    /// call [`TurnState::reset_for_next_turn`]. On error nothing changes.
    pub fn record_chip(&mut self, color: ChipColor) -> Result<ChipStep, MoveError> {
        let (phase, step) = match self.phase {
            TurnPhase::Fresh => (TurnPhase::One(color), ChipStep::Continue),
            TurnPhase::One(c1) if c1 == color => (self.phase, ChipStep::TurnComplete),
            TurnPhase::One(c1) => (TurnPhase::TwoDistinct(c1, color), ChipStep::Continue),
            TurnPhase::TwoDistinct(c1, c2) if color == c1 || color == c2 => {
                return Err(MoveError::internal(format!(
                    "third chip {color} repeats one of {c1}, {c2}"
                )));
            }
            TurnPhase::TwoDistinct(..) => (self.phase, ChipStep::TurnComplete),
        };
        self.phase = phase;
        self.chose_chip_action = true;
        Ok(step)
    }

    /// End the turn: clear chips and hand over to the other seat.
    pub fn reset_for_next_turn(&mut self) {
        self.phase = TurnPhase::Fresh;
        self.chose_chip_action = false;
        self.current = self.current.other();
    }
}
