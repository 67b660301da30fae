//! Core value types: chips, seats, players, errors, configuration, clock.
//!
//! Nothing in here knows about turns or persistence. The rules engine
//! builds on these types.

pub mod chip;
pub mod player;
pub mod error;
pub mod config;
pub mod clock;

pub use chip::{ChipColor, ChipSet};
pub use player::{Player, Seat, Seats};
pub use error::{ConfigError, FormatError, InsufficientChips, MoveError, StoreError};
pub use config::EngineConfig;
pub use clock::{Clock, ManualClock, SystemClock};
