//! Cards, the board, and the fixed market.
//!
//! ## Key Types
//!
//! - `CardId`: Card identifier, unique on a board
//! - `Card`: Immutable id + victory points + five-color cost
//! - `Board`: Ordered set of cards still available to buy
//!
//! The market is hardcoded: every new game starts from the same 15 cards.

pub mod card;
pub mod board;
pub mod market;

pub use card::{describe_cost, parse_cost, Card, CardId};
pub use board::Board;
pub use market::{standard_cards, MARKET_SIZE};
