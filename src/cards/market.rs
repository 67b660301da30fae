//! The fixed 15-card market.
//!
//! Every card costs between 0 and 3 chips per color, at least 2 in some
//! color, and uses at most three colors.

use crate::core::ChipSet;

use super::card::Card;

/// Number of cards on a freshly reset board.
pub const MARKET_SIZE: usize = 15;

/// (id, victory points, cost in R,B,G,K,W order)
const MARKET: [(&str, u32, [u32; 5]); MARKET_SIZE] = [
    ("C1", 1, [0, 2, 0, 2, 0]),
    ("C2", 1, [0, 0, 2, 0, 2]),
    ("C3", 1, [2, 2, 0, 0, 0]),
    ("C4", 2, [0, 0, 3, 2, 0]),
    ("C5", 2, [3, 0, 0, 0, 0]),
    ("C6", 2, [0, 3, 0, 0, 0]),
    ("C7", 2, [0, 0, 3, 0, 0]),
    ("C8", 2, [0, 0, 0, 0, 3]),
    ("C9", 3, [3, 2, 0, 0, 0]),
    ("C10", 3, [0, 0, 3, 2, 0]),
    ("C11", 3, [3, 0, 0, 2, 0]),
    ("C12", 4, [3, 3, 0, 0, 0]),
    ("C13", 4, [0, 0, 3, 0, 3]),
    ("C14", 5, [0, 0, 3, 3, 0]),
    ("C15", 5, [3, 3, 0, 0, 3]),
];

/// The standard market, in board order.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    MARKET
        .iter()
        .map(|&(id, vp, cost)| Card::new(id, vp, ChipSet::new(cost)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_market_shape() {
        let cards = standard_cards();
        assert_eq!(cards.len(), MARKET_SIZE);

        let ids: HashSet<_> = cards.iter().map(|c| c.id().clone()).collect();
        assert_eq!(ids.len(), MARKET_SIZE);

        for card in &cards {
            let colors = card.cost().non_zero().count();
            assert!((1..=3).contains(&colors), "{} uses {} colors", card.id(), colors);
            assert!(card.cost().iter().all(|(_, n)| n <= 3));
            assert!(card.cost().iter().any(|(_, n)| n >= 2));
        }
    }

    #[test]
    fn test_market_descriptions() {
        let descriptions: Vec<_> = standard_cards()
            .iter()
            .map(|c| c.cost_description())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "B2K2", "G2W2", "R2B2", "G3K2", "R3", "B3", "G3", "W3", "R3B2", "G3K2", "R3K2",
                "R3B3", "G3W3", "G3K3", "R3B3W3",
            ]
        );
    }

    #[test]
    fn test_total_points() {
        let total: u32 = standard_cards().iter().map(|c| c.victory_points()).sum();
        assert_eq!(total, 40);
    }
}
