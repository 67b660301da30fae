//! History of completed games.
//!
//! Entries are kept most recent first and capped (4 by default). The text
//! form is `timestamp,p1vp,p2vp` entries joined by `;`, in stored order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::DEFAULT_LEADERBOARD_CAPACITY;

/// Final score of one finished or abandoned game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub timestamp_millis: i64,
    pub player1_vp: u32,
    pub player2_vp: u32,
}

impl LeaderboardEntry {
    #[must_use]
    pub const fn new(timestamp_millis: i64, player1_vp: u32, player2_vp: u32) -> Self {
        Self {
            timestamp_millis,
            player1_vp,
            player2_vp,
        }
    }

    /// When the game was recorded, if the timestamp is representable.
    #[must_use]
    pub fn played_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_millis)
    }

    fn parse(text: &str) -> Option<Self> {
        let mut bits = text.split(',').map(str::trim);
        let (Some(ts), Some(p1), Some(p2), None) = (bits.next(), bits.next(), bits.next(), bits.next())
        else {
            return None;
        };
        Some(Self::new(ts.parse().ok()?, p1.parse().ok()?, p2.parse().ok()?))
    }
}

impl std::fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.played_at() {
            Some(at) => write!(f, "{}", at.format("%Y-%m-%d %H:%M"))?,
            None => write!(f, "{}", self.timestamp_millis)?,
        }
        write!(f, "  P1 {} - P2 {}", self.player1_vp, self.player2_vp)
    }
}

/// Most-recent-first list of completed games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LEADERBOARD_CAPACITY)
    }
}

impl Leaderboard {
    /// Empty leaderboard keeping the default 4 entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty leaderboard keeping `capacity` entries. Nothing is allocated
    /// up front, so any capacity is accepted.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a game at the front, dropping the oldest beyond capacity.
    pub fn add_entry(&mut self, player1_vp: u32, player2_vp: u32, timestamp_millis: i64) {
        self.entries
            .insert(0, LeaderboardEntry::new(timestamp_millis, player1_vp, player2_vp));
        self.entries.truncate(self.capacity);
    }

    /// Text form, in stored order.
    #[must_use]
    pub fn encode(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{},{},{}", e.timestamp_millis, e.player1_vp, e.player2_vp))
            .collect();
        parts.join(";")
    }

    /// Parse with the default capacity. See [`Leaderboard::decode_with_capacity`].
    #[must_use]
    pub fn decode(text: &str) -> Self {
        Self::decode_with_capacity(text, DEFAULT_LEADERBOARD_CAPACITY)
    }

    /// Parse stored text. Entries that are not three integers are skipped;
    /// order is kept as given and anything past `capacity` is dropped.
    #[must_use]
    pub fn decode_with_capacity(text: &str, capacity: usize) -> Self {
        let mut board = Self::with_capacity(capacity);
        for part in text.split(';').filter(|p| !p.trim().is_empty()) {
            match LeaderboardEntry::parse(part) {
                Some(entry) => board.entries.push(entry),
                None => debug!(entry = part, "skipping leaderboard entry"),
            }
        }
        board.entries.truncate(capacity);
        board
    }
}
