//! Chip colors and five-color amount vectors.
//!
//! ## ChipColor
//!
//! The closed set of resource kinds. Every color has a one-letter code
//! (`R`, `B`, `G`, `K`, `W`) used by the snapshot format and by card cost
//! descriptions. The mapping lives here and nowhere else.
//!
//! ## ChipSet
//!
//! A total mapping from every color to a non-negative amount. Used for
//! both player inventories and card costs.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::FormatError;

/// One of the five resource colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChipColor {
    Red,
    Blue,
    Green,
    Black,
    White,
}

impl ChipColor {
    /// All colors in the fixed order used by every encoding.
    pub const ALL: [ChipColor; 5] = [
        ChipColor::Red,
        ChipColor::Blue,
        ChipColor::Green,
        ChipColor::Black,
        ChipColor::White,
    ];

    /// Single-character code for this color.
    ///
    /// ```
    /// use mini_splendor::ChipColor;
    ///
    /// assert_eq!(ChipColor::Black.code(), 'K');
    /// ```
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            ChipColor::Red => 'R',
            ChipColor::Blue => 'B',
            ChipColor::Green => 'G',
            ChipColor::Black => 'K',
            ChipColor::White => 'W',
        }
    }

    /// Look up a color by its code. Case-insensitive.
    ///
    /// ```
    /// use mini_splendor::ChipColor;
    ///
    /// assert_eq!(ChipColor::from_code('g').unwrap(), ChipColor::Green);
    /// assert!(ChipColor::from_code('X').is_err());
    /// ```
    pub fn from_code(code: char) -> Result<Self, FormatError> {
        match code.to_ascii_uppercase() {
            'R' => Ok(ChipColor::Red),
            'B' => Ok(ChipColor::Blue),
            'G' => Ok(ChipColor::Green),
            'K' => Ok(ChipColor::Black),
            'W' => Ok(ChipColor::White),
            _ => Err(FormatError::UnknownColor(code)),
        }
    }

    /// Position in [`ChipColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ChipColor::Red => "red",
            ChipColor::Blue => "blue",
            ChipColor::Green => "green",
            ChipColor::Black => "black",
            ChipColor::White => "white",
        }
    }
}

impl TryFrom<char> for ChipColor {
    type Error = FormatError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for ChipColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Amount held (or required) for each of the five colors.
///
/// Missing colors do not exist: every color always has an amount,
/// defaulting to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChipSet {
    counts: [u32; 5],
}

impl ChipSet {
    /// Build from amounts in `ChipColor::ALL` order (R, B, G, K, W).
    #[must_use]
    pub const fn new(counts: [u32; 5]) -> Self {
        Self { counts }
    }

    /// All-zero set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { counts: [0; 5] }
    }

    /// Build from `(color, amount)` pairs. Later pairs overwrite earlier ones.
    #[must_use]
    pub fn from_pairs(pairs: &[(ChipColor, u32)]) -> Self {
        let mut set = Self::empty();
        for &(color, n) in pairs {
            set.counts[color.index()] = n;
        }
        set
    }

    /// Amount for one color.
    #[must_use]
    pub const fn get(&self, color: ChipColor) -> u32 {
        self.counts[color.index()]
    }

    /// Overwrite the amount for one color.
    pub fn set(&mut self, color: ChipColor, n: u32) {
        self.counts[color.index()] = n;
    }

    /// Add to one color. Saturates rather than wrapping.
    pub fn add(&mut self, color: ChipColor, n: u32) {
        let slot = &mut self.counts[color.index()];
        *slot = slot.saturating_add(n);
    }

    /// True if every color is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Sum over all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// True if `self` holds at least `other` in every color.
    #[must_use]
    pub fn covers(&self, other: &ChipSet) -> bool {
        ChipColor::ALL
            .iter()
            .all(|&c| self.get(c) >= other.get(c))
    }

    /// Iterate `(color, amount)` in fixed color order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (ChipColor, u32)> + '_ {
        ChipColor::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Iterate only the colors with a non-zero amount.
    pub fn non_zero(&self) -> impl Iterator<Item = (ChipColor, u32)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}

impl Index<ChipColor> for ChipSet {
    type Output = u32;

    fn index(&self, color: ChipColor) -> &Self::Output {
        &self.counts[color.index()]
    }
}

impl IndexMut<ChipColor> for ChipSet {
    fn index_mut(&mut self, color: ChipColor) -> &mut Self::Output {
        &mut self.counts[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for color in ChipColor::ALL {
            assert_eq!(ChipColor::from_code(color.code()).unwrap(), color);
            assert_eq!(
                ChipColor::from_code(color.code().to_ascii_lowercase()).unwrap(),
                color
            );
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(ChipColor::from_code('x'), Err(FormatError::UnknownColor('x')));
        assert!(ChipColor::try_from('1').is_err());
    }

    #[test]
    fn test_index_matches_order() {
        for (i, color) in ChipColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_chip_set_basics() {
        let mut set = ChipSet::empty();
        assert!(set.is_empty());

        set.add(ChipColor::Blue, 2);
        set.add(ChipColor::Blue, 1);
        set[ChipColor::White] = 4;

        assert_eq!(set.get(ChipColor::Blue), 3);
        assert_eq!(set[ChipColor::White], 4);
        assert_eq!(set.total(), 7);
        assert!(!set.is_empty());

        let non_zero: Vec<_> = set.non_zero().collect();
        assert_eq!(non_zero, vec![(ChipColor::Blue, 3), (ChipColor::White, 4)]);
    }

    #[test]
    fn test_covers() {
        let held = ChipSet::from_pairs(&[(ChipColor::Blue, 2), (ChipColor::Black, 3)]);
        let cost = ChipSet::from_pairs(&[(ChipColor::Blue, 2), (ChipColor::Black, 2)]);
        assert!(held.covers(&cost));
        assert!(!cost.covers(&held));
        assert!(held.covers(&ChipSet::empty()));
    }

    #[test]
    fn test_serialization() {
        let set = ChipSet::new([1, 0, 2, 0, 3]);
        let json = serde_json::to_string(&set).unwrap();
        let back: ChipSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
