//! Persistence: the snapshot text codec, the leaderboard, and storage.
//!
//! The engine writes a full snapshot after every move and the leaderboard
//! after every change. Both are plain text under fixed keys of a
//! [`KeyValueStore`].

pub mod codec;
pub mod leaderboard;
pub mod store;

pub use codec::{Snapshot, SnapshotCodec};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use store::{FileKeyValueStore, GameStore, KeyValueStore, MemoryStore};
