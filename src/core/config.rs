//! Engine configuration.
//!
//! Everything here is storage plumbing. The rules themselves (two seats,
//! three chips per turn, the 15-card market) are fixed and not configurable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::ConfigError;

/// Default key for the game snapshot.
pub const DEFAULT_SNAPSHOT_KEY: &str = "game.snapshot";

/// Default key for the leaderboard.
pub const DEFAULT_LEADERBOARD_KEY: &str = "game.leaderboard";

/// Number of completed games kept by default.
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 4;

/// Storage configuration for a game session.
///
/// ## Example
///
/// ```
/// use mini_splendor::EngineConfig;
///
/// let config = EngineConfig::from_toml_str(r#"
///     save_path = "saves/table.json"
///     leaderboard_capacity = 6
/// "#).unwrap();
///
/// assert_eq!(config.leaderboard_capacity, 6);
/// assert_eq!(config.snapshot_key, "game.snapshot");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Store key holding the game snapshot.
    pub snapshot_key: String,

    /// Store key holding the leaderboard.
    pub leaderboard_key: String,

    /// Most completed games to remember (most recent first).
    pub leaderboard_capacity: usize,

    /// File used by `FileKeyValueStore::from_config`.
    pub save_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            leaderboard_key: DEFAULT_LEADERBOARD_KEY.to_string(),
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
            save_path: PathBuf::from("data").join("minisplendor.json"),
        }
    }
}

impl EngineConfig {
    /// Parse from TOML. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Use a different save file.
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Use different store keys.
    #[must_use]
    pub fn with_keys(mut self, snapshot: impl Into<String>, leaderboard: impl Into<String>) -> Self {
        self.snapshot_key = snapshot.into();
        self.leaderboard_key = leaderboard.into();
        self
    }

    /// Keep a different number of completed games.
    #[must_use]
    pub fn with_leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }
}
