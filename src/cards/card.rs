//! Cards and cost descriptions.
//!
//! A `Card` is immutable once built: an id, a victory-point value, and a
//! full five-color cost.
//!
//! ## Cost descriptions
//!
//! Costs render as code+amount pairs for every non-zero color, in the fixed
//! color order (`R3B2`, `G3K3`, ...), or `FREE` when nothing is owed. The
//! same text is part of the snapshot format, so [`parse_cost`] must accept
//! exactly what [`describe_cost`] produces.

use serde::{Deserialize, Serialize};

use crate::core::{ChipColor, ChipSet, FormatError};

/// Text used for a cost with no chips.
pub const FREE: &str = "FREE";

/// Card identifier, unique within a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchasable card.
///
/// ## Example
///
/// ```
/// use mini_splendor::{Card, ChipColor, ChipSet};
///
/// let card = Card::new("C9", 3, ChipSet::from_pairs(&[(ChipColor::Red, 3), (ChipColor::Blue, 2)]));
/// assert_eq!(card.cost_description(), "R3B2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    victory_points: u32,
    cost: ChipSet,
}

impl Card {
    #[must_use]
    pub fn new(id: impl Into<CardId>, victory_points: u32, cost: ChipSet) -> Self {
        Self {
            id: id.into(),
            victory_points,
            cost,
        }
    }

    /// Build a card from a cost description such as `"G3K2"`.
    pub fn parse(
        id: impl Into<CardId>,
        victory_points: u32,
        cost: &str,
    ) -> Result<Self, FormatError> {
        Ok(Self::new(id, victory_points, parse_cost(cost)?))
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    #[must_use]
    pub fn cost(&self) -> &ChipSet {
        &self.cost
    }

    /// Compact cost text, e.g. `B2K2` or `FREE`.
    #[must_use]
    pub fn cost_description(&self) -> String {
        describe_cost(&self.cost)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Render a cost as code+amount pairs, or `FREE`.
#[must_use]
pub fn describe_cost(cost: &ChipSet) -> String {
    if cost.is_empty() {
        return FREE.to_string();
    }
    cost.non_zero()
        .map(|(color, n)| format!("{}{}", color.code(), n))
        .collect()
}

/// Parse a cost description. Inverse of [`describe_cost`].
///
/// `FREE` is accepted in any case. A repeated color overwrites the
/// earlier amount.
pub fn parse_cost(text: &str) -> Result<ChipSet, FormatError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(FREE) {
        return Ok(ChipSet::empty());
    }
    if text.is_empty() {
        return Err(FormatError::EmptyCost);
    }

    let mut cost = ChipSet::empty();
    let mut chars = text.chars().peekable();
    while let Some(code) = chars.next() {
        let color = ChipColor::from_code(code)?;

        let mut digits = String::new();
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        if digits.is_empty() {
            return Err(FormatError::MissingAmount(code));
        }

        let n = digits
            .parse::<u32>()
            .map_err(|_| FormatError::BadNumber(digits.clone()))?;
        cost.set(color, n);
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_orders_colors() {
        let cost = ChipSet::from_pairs(&[
            (ChipColor::White, 3),
            (ChipColor::Red, 3),
            (ChipColor::Blue, 3),
        ]);
        assert_eq!(describe_cost(&cost), "R3B3W3");
    }

    #[test]
    fn test_describe_free() {
        assert_eq!(describe_cost(&ChipSet::empty()), "FREE");
    }

    #[test]
    fn test_parse_cost() {
        let cost = parse_cost("G3K2").unwrap();
        assert_eq!(cost.get(ChipColor::Green), 3);
        assert_eq!(cost.get(ChipColor::Black), 2);
        assert_eq!(cost.total(), 5);

        assert_eq!(parse_cost("free").unwrap(), ChipSet::empty());
        assert_eq!(parse_cost("r10").unwrap().get(ChipColor::Red), 10);
    }

    #[test]
    fn test_parse_cost_errors() {
        assert_eq!(parse_cost("X3"), Err(FormatError::UnknownColor('X')));
        assert_eq!(parse_cost("R"), Err(FormatError::MissingAmount('R')));
        assert_eq!(parse_cost("RB2"), Err(FormatError::MissingAmount('R')));
        assert_eq!(parse_cost(""), Err(FormatError::EmptyCost));
        assert!(matches!(
            parse_cost("R99999999999"),
            Err(FormatError::BadNumber(_))
        ));
    }

    #[test]
    fn test_describe_then_parse() {
        for counts in [[0, 2, 0, 2, 0], [3, 3, 0, 0, 3], [0, 0, 0, 0, 0], [12, 0, 1, 0, 0]] {
            let cost = ChipSet::new(counts);
            assert_eq!(parse_cost(&describe_cost(&cost)).unwrap(), cost);
        }
    }

    #[test]
    fn test_card_accessors() {
        let card = Card::parse("C4", 2, "G3K2").unwrap();
        assert_eq!(card.id().as_str(), "C4");
        assert_eq!(card.victory_points(), 2);
        assert_eq!(card.cost_description(), "G3K2");
    }
}
