//! Wall-clock source for leaderboard timestamps.
//!
//! The engine never reads the system time directly so that tests and
//! replays can pin timestamps.

use std::cell::Cell;
use std::rc::Rc;

/// Source of "now" in Unix milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Real UTC wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock. Clones share the same time.
///
/// ```
/// use mini_splendor::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
/// handle.advance(500);
/// assert_eq!(clock.now_millis(), 1_500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(10);
        let other = clock.clone();
        other.set(99);
        assert_eq!(clock.now_millis(), 99);
    }
}
