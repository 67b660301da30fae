//! # mini-splendor
//!
//! A two-seat, turn-based token-and-card game engine.
//!
//! Players alternate turns. On a turn a player either takes chips (two of
//! one color, or three different colors) or buys one card from a fixed
//! 15-card market. The game ends when the market is empty.
//!
//! ## Design Principles
//!
//! 1. **Exact legality**: every rule is checked before anything changes.
//!    A rejected move leaves the game untouched.
//!
//! 2. **Durable after every move**: each successful command writes a full
//!    text snapshot through a [`KeyValueStore`], so a session resumes
//!    exactly where it stopped.
//!
//! 3. **Forgiving loads**: a damaged snapshot degrades field by field to
//!    fresh values instead of failing.
//!
//! ## Modules
//!
//! - `core`: Chip colors, seats, players, errors, configuration, clock
//! - `cards`: Cards, cost descriptions, the board, the fixed market
//! - `rules`: Turn state machine and the `Game` orchestrator
//! - `persist`: Snapshot codec, leaderboard, key-value stores

pub mod core;
pub mod cards;
pub mod rules;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    ChipColor, ChipSet, Clock, ConfigError, EngineConfig, FormatError, InsufficientChips,
    ManualClock, MoveError, Player, Seat, Seats, StoreError, SystemClock,
};

pub use crate::cards::{Board, Card, CardId, MARKET_SIZE};

pub use crate::rules::{ChipStep, Game, GameBuilder, TurnPhase, TurnState, MAX_CHIPS_PER_TURN};

pub use crate::persist::{
    FileKeyValueStore, GameStore, KeyValueStore, Leaderboard, LeaderboardEntry, MemoryStore,
    Snapshot, SnapshotCodec,
};
