//! Text key-value persistence.
//!
//! ## KeyValueStore
//!
//! The backend contract: `put`, `get`, `remove` on string keys and values.
//! Reads never fail. A store that cannot read its data reports the key as
//! absent.
//!
//! ## GameStore
//!
//! Binds a backend to the two keys the engine uses, one for the game
//! snapshot and one for the leaderboard.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::core::{EngineConfig, StoreError};

/// A text key-value store.
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing anything there.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read a key. Unreadable data is reported as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON file holding a flat string map.
///
/// Every call reads the file; writes atomically replace it. A missing,
/// unreadable, or corrupt file reads as empty.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured save path.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.save_path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read save file, treating as empty");
                return BTreeMap::new();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "corrupt save file, treating as empty");
            BTreeMap::new()
        })
    }

    /// Write to a temporary file next to the save file, then rename it
    /// over the old one. A crash mid-write leaves the old file intact.
    fn save_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };
        let text = serde_json::to_string_pretty(map)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(text.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), keys = map.len(), "save file written");
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.load_map();
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.load_map().remove(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut map = self.load_map();
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}

/// The engine's view of storage: a snapshot slot and a leaderboard slot.
pub struct GameStore {
    backend: Box<dyn KeyValueStore>,
    snapshot_key: String,
    leaderboard_key: String,
}

impl GameStore {
    /// Use the default keys.
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self::with_config(backend, &EngineConfig::default())
    }

    /// Use the keys from `config`.
    pub fn with_config(backend: impl KeyValueStore + 'static, config: &EngineConfig) -> Self {
        Self::from_boxed(Box::new(backend), config)
    }

    pub(crate) fn from_boxed(backend: Box<dyn KeyValueStore>, config: &EngineConfig) -> Self {
        Self {
            backend,
            snapshot_key: config.snapshot_key.clone(),
            leaderboard_key: config.leaderboard_key.clone(),
        }
    }

    pub fn save_snapshot(&mut self, snapshot: &str) -> Result<(), StoreError> {
        self.backend.put(&self.snapshot_key, snapshot)
    }

    /// Stored snapshot text, if any.
    #[must_use]
    pub fn load_snapshot(&self) -> Option<String> {
        self.backend.get(&self.snapshot_key)
    }

    pub fn clear_snapshot(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.snapshot_key)
    }

    pub fn save_leaderboard(&mut self, leaderboard: &str) -> Result<(), StoreError> {
        self.backend.put(&self.leaderboard_key, leaderboard)
    }

    /// Stored leaderboard text, if any.
    #[must_use]
    pub fn load_leaderboard(&self) -> Option<String> {
        self.backend.get(&self.leaderboard_key)
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("snapshot_key", &self.snapshot_key)
            .field("leaderboard_key", &self.leaderboard_key)
            .finish_non_exhaustive()
    }
}
