//! Game rules: the turn state machine and the orchestrator that enforces
//! move legality.
//!
//! `TurnState` only tracks what has happened this turn. `Game` decides what
//! is allowed, applies it, and persists the result.

pub mod turn;
pub mod engine;

pub use turn::{ChipStep, TurnPhase, TurnState, MAX_CHIPS_PER_TURN};
pub use engine::{Game, GameBuilder};
