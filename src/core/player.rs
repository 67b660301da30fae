//! Seats and per-seat player state.
//!
//! ## Seat
//!
//! Type-safe seat identifier. The game has exactly two seats.
//!
//! ## Seats
//!
//! Fixed two-entry storage indexed by `Seat`.
//!
//! ## Player
//!
//! Chip inventory and victory points for one seat. Chip-count legality
//! is the turn rules' job; `Player` only guards against overspending.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::chip::{ChipColor, ChipSet};
use super::error::InsufficientChips;
use crate::cards::Card;

/// One of the two seats at the table.
///
/// Seat indices are 0-based: the first seat is `Seat::First` (index 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    #[default]
    First,
    Second,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Seat from a raw 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// 1-based player number for display.
    #[must_use]
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use mini_splendor::{Seat, Seats};
///
/// let mut scores: Seats<u32> = Seats::with_value(0);
/// scores[Seat::Second] = 7;
/// assert_eq!(scores[Seat::First], 0);
/// assert_eq!(scores[Seat::Second], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; 2],
}

impl<T> Seats<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// State of one seat: chips held and victory points earned.
///
/// Victory points only ever go up within a game (via [`Player::buy`]),
/// saturating at `u32::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    chips: ChipSet,
    victory_points: u32,
}

impl Player {
    /// A player with no chips and no points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a player from stored values.
    #[must_use]
    pub(crate) fn with_state(chips: ChipSet, victory_points: u32) -> Self {
        Self {
            chips,
            victory_points,
        }
    }

    /// Clear chips and points.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Chips held of one color.
    #[must_use]
    pub fn chips(&self, color: ChipColor) -> u32 {
        self.chips.get(color)
    }

    /// The whole inventory.
    #[must_use]
    pub fn chip_set(&self) -> &ChipSet {
        &self.chips
    }

    #[must_use]
    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    /// True if the player holds any chip or has scored.
    #[must_use]
    pub fn has_anything(&self) -> bool {
        self.victory_points > 0 || !self.chips.is_empty()
    }

    /// Add `n` chips of a color. No upper bound.
    pub fn add_chip(&mut self, color: ChipColor, n: u32) {
        self.chips.add(color, n);
    }

    /// Remove `n` chips of a color.
    pub fn spend_chip(&mut self, color: ChipColor, n: u32) -> Result<(), InsufficientChips> {
        let have = self.chips.get(color);
        if have < n {
            return Err(InsufficientChips {
                color,
                have,
                need: n,
            });
        }
        self.chips.set(color, have - n);
        Ok(())
    }

    /// Can the player pay the card's full cost?
    #[must_use]
    pub fn can_afford(&self, card: &Card) -> bool {
        self.chips.covers(card.cost())
    }

    /// Pay for a card and score its points.
    ///
    /// The whole cost is checked before anything is spent, so a failed
    /// purchase leaves the player untouched.
    pub fn buy(&mut self, card: &Card) -> Result<(), InsufficientChips> {
        if let Some((color, need)) = card
            .cost()
            .non_zero()
            .find(|&(color, need)| self.chips.get(color) < need)
        {
            return Err(InsufficientChips {
                color,
                have: self.chips.get(color),
                need,
            });
        }

        for (color, need) in card.cost().non_zero() {
            self.spend_chip(color, need)?;
        }
        self.victory_points = self.victory_points.saturating_add(card.victory_points());
        Ok(())
    }
}
