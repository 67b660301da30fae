//! The market of cards available to buy.
//!
//! Cards keep their insertion order. The board only shrinks by removal
//! and is refilled wholesale with `reset_to`. An empty board ends the game.
//!
//! Backed by `im::Vector` so handing out a copy of the board is O(1).

use im::Vector;
use tracing::debug;

use super::card::Card;

/// Cards currently available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard 15-card market.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.reset_to(super::market::standard_cards());
        board
    }

    /// Read-only view of the cards, in order.
    #[must_use]
    pub fn list(&self) -> &Vector<Card> {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id().as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Remove a card by id. Does nothing if it is not present.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id().as_str() == id)?;
        debug!(card = id, "removing card from board");
        Some(self.cards.remove(index))
    }

    /// Replace the whole contents.
    pub fn reset_to(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChipSet;

    fn board_of(ids: &[&str]) -> Board {
        let mut board = Board::new();
        board.reset_to(ids.iter().map(|id| Card::new(*id, 1, ChipSet::empty())));
        board
    }

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.len(), 15);
        assert!(board.contains("C1"));
        assert!(board.contains("C15"));
    }

    #[test]
    fn test_find_missing_is_none() {
        let board = board_of(&["A", "B"]);
        assert!(board.find_by_id("Z").is_none());
        assert_eq!(board.find_by_id("B").unwrap().id().as_str(), "B");
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut board = board_of(&["A", "B", "C"]);
        let removed = board.remove_by_id("B").unwrap();
        assert_eq!(removed.id().as_str(), "B");

        let ids: Vec<_> = board.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert!(board.find_by_id("B").is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut board = board_of(&["A"]);
        assert!(board.remove_by_id("Q").is_none());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_empty() {
        let mut board = board_of(&["A"]);
        assert!(!board.is_empty());
        board.remove_by_id("A");
        assert!(board.is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = board_of(&["A", "B"]);
        let view = board.clone();
        board.remove_by_id("A");
        assert_eq!(view.len(), 2);
        assert_eq!(board.len(), 1);
    }
}
