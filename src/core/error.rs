//! Error types.
//!
//! - `FormatError`: a token in stored text could not be parsed. Only the
//!   codecs see these; they fall back to defaults instead of failing.
//! - `MoveError`: a player command was rejected or could not be saved. The
//!   rule variants carry the message shown to the player.
//! - `InsufficientChips`: a spend was attempted without enough chips.
//! - `StoreError` / `ConfigError`: I/O and parsing at the edges.

use derive_more::{Display, From};

use super::chip::ChipColor;

/// A stored token could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum FormatError {
    #[display("unrecognized color code {_0:?}")]
    UnknownColor(char),

    #[display("missing amount after color code {_0:?}")]
    MissingAmount(char),

    #[display("bad number {_0:?}")]
    BadNumber(String),

    #[display("empty cost description")]
    EmptyCost,

    #[display("malformed entry {_0:?}")]
    Malformed(String),
}

impl std::error::Error for FormatError {}

/// A player command was rejected or could not be saved.
///
/// `ChipRule` and `Illegal` are ordinary rule rejections. `Internal` means
/// the engine reached a state it should never be in. `Store` means the move
/// was applied in memory but writing it out failed.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Chip-taking broke the per-turn chip rules.
    #[display("{_0}")]
    ChipRule(String),

    /// A purchase was not allowed.
    #[display("{_0}")]
    Illegal(String),

    /// Engine bug: inconsistent turn or player state.
    #[display("Internal state error: {_0}")]
    Internal(String),

    /// The move was applied but the store write failed.
    #[display("Failed to save game state: {_0}")]
    Store(String),
}

impl MoveError {
    pub(crate) fn chip_rule(msg: impl Into<String>) -> Self {
        Self::ChipRule(msg.into())
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        Self::Illegal(msg.into())
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub(crate) fn store(err: &StoreError) -> Self {
        Self::Store(err.to_string())
    }

    /// True for ordinary rule rejections. A rejected move changed nothing.
    #[must_use]
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, MoveError::ChipRule(_) | MoveError::Illegal(_))
    }

    /// True if the move was applied but not saved.
    #[must_use]
    pub fn is_store_failure(&self) -> bool {
        matches!(self, MoveError::Store(_))
    }
}

impl std::error::Error for MoveError {}

/// Tried to spend more chips of a color than the player holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display("Not enough {color} chips: have {have}, need {need}")]
pub struct InsufficientChips {
    pub color: ChipColor,
    pub have: u32,
    pub need: u32,
}

impl std::error::Error for InsufficientChips {}

/// Writing to the backing store failed.
#[derive(Debug, Display, From)]
pub enum StoreError {
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    #[display("serialization error: {_0}")]
    Json(serde_json::Error),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
        }
    }
}

/// Engine configuration could not be loaded.
#[derive(Debug, Display, From)]
pub enum ConfigError {
    #[display("invalid config: {_0}")]
    Toml(toml::de::Error),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Toml(e) => Some(e),
        }
    }
}
