//! The game orchestrator.
//!
//! `Game` owns the board, both players, and the turn state. It is the only
//! thing that mutates them. Every successful command writes a full snapshot
//! to the store before returning.
//!
//! ## Commands
//!
//! - `take_chip`: take one chip; two of a kind or three different colors
//!   end the turn
//! - `buy_card`: buy one card, only before any chip is taken this turn
//! - `start_new_game`: record the outgoing game if it saw play, then reset
//!
//! A rejected command changes nothing except `last_error`. A command whose
//! move applied but whose save failed returns `MoveError::Store`; the move
//! stays applied in memory.
//!
//! ## Leaderboard bookkeeping
//!
//! Two flags decide whether a game gets a leaderboard entry: whether any
//! move happened since the last new game, and whether this game was
//! already recorded. They are not stored; after a load they are derived
//! from the restored state.

use tracing::{debug, error, info, instrument};

use crate::cards::{standard_cards, Board};
use crate::core::{
    ChipColor, Clock, EngineConfig, MoveError, Player, Seat, Seats, StoreError, SystemClock,
};
use crate::persist::{GameStore, KeyValueStore, Leaderboard, LeaderboardEntry, Snapshot, SnapshotCodec};

use super::turn::{ChipStep, TurnPhase, TurnState};

/// Builder for creating a `Game`.
///
/// ## Example
///
/// ```
/// use mini_splendor::{ChipColor, GameBuilder, ManualClock, MemoryStore, Seat};
///
/// let mut game = GameBuilder::new(MemoryStore::new())
///     .clock(ManualClock::new(0))
///     .load_or_new();
///
/// game.take_chip(ChipColor::Red).unwrap();
/// game.take_chip(ChipColor::Red).unwrap();
/// assert_eq!(game.current_seat(), Seat::Second);
/// ```
pub struct GameBuilder {
    backend: Box<dyn KeyValueStore>,
    config: EngineConfig,
    clock: Box<dyn Clock>,
}

impl GameBuilder {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            config: EngineConfig::default(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Resume the stored game, or start a new one if none is stored.
    pub fn load_or_new(self) -> Game {
        let mut game = self.assemble();
        match game.store.load_snapshot().filter(|s| !s.trim().is_empty()) {
            Some(text) => {
                let snapshot = game.codec.decode(&text);
                game.restore(snapshot);
                info!(
                    seat = %game.current_seat(),
                    cards = game.board.len(),
                    "resumed stored game"
                );
            }
            None => game.begin_new_game(),
        }
        game
    }

    /// Start a new game, replacing any stored one.
    ///
    /// A failed initial save is reported by [`Game::last_save_failed`].
    pub fn new_game(self) -> Game {
        let mut game = self.assemble();
        game.begin_new_game();
        game
    }

    fn assemble(self) -> Game {
        let store = GameStore::from_boxed(self.backend, &self.config);
        let capacity = self.config.leaderboard_capacity;
        let leaderboard = store
            .load_leaderboard()
            .map(|text| Leaderboard::decode_with_capacity(&text, capacity))
            .unwrap_or_else(|| Leaderboard::with_capacity(capacity));

        Game {
            board: Board::standard(),
            players: Seats::default(),
            turn: TurnState::new(),
            leaderboard,
            store,
            clock: self.clock,
            codec: SnapshotCodec,
            last_error: String::new(),
            save_failure: None,
            has_meaningful_progress: false,
            game_over_recorded: false,
        }
    }
}

/// A game session bound to its store.
pub struct Game {
    board: Board,
    players: Seats<Player>,
    turn: TurnState,
    leaderboard: Leaderboard,
    store: GameStore,
    clock: Box<dyn Clock>,
    codec: SnapshotCodec,
    last_error: String,
    save_failure: Option<MoveError>,
    has_meaningful_progress: bool,
    game_over_recorded: bool,
}

impl Game {
    // === Commands ===

    /// Take one chip of `color` for the current player.
    #[instrument(skip(self), fields(seat = %self.turn.current()))]
    pub fn take_chip(&mut self, color: ChipColor) -> Result<(), MoveError> {
        self.clear_error();
        let result = self.apply_take_chip(color);
        self.finish_command(result)
    }

    /// Buy a card from the board for the current player.
    #[instrument(skip(self), fields(seat = %self.turn.current()))]
    pub fn buy_card(&mut self, card_id: &str) -> Result<(), MoveError> {
        self.clear_error();
        let result = self.apply_buy_card(card_id);
        self.finish_command(result)
    }

    /// Abandon or close the current game and start over.
    ///
    /// The outgoing game gets a leaderboard entry if it saw any play and
    /// was not already recorded. Only a store failure makes this fail, and
    /// the new game is in place either way.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) -> Result<(), MoveError> {
        self.clear_error();
        self.begin_new_game();
        self.finish_command(Ok(()))
    }

    // === Read access ===

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.turn.current()
    }

    /// 1-based number of the player to act.
    #[must_use]
    pub fn current_player_number(&self) -> usize {
        self.turn.current().number()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &Seats<Player> {
        &self.players
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Message from the last failed command, or empty.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Did a store write fail since the last command started?
    #[must_use]
    pub fn last_save_failed(&self) -> bool {
        self.save_failure.is_some()
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Completed games, most recent first.
    #[must_use]
    pub fn leaderboard_entries(&self) -> &[LeaderboardEntry] {
        self.leaderboard.entries()
    }

    /// The game ends when the board is empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_empty()
    }

    /// Seat with more victory points, `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        let first = self.players[Seat::First].victory_points();
        let second = self.players[Seat::Second].victory_points();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(Seat::First),
            std::cmp::Ordering::Less => Some(Seat::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Has anything happened since the last new game that is not yet
    /// on the leaderboard?
    #[must_use]
    pub fn has_meaningful_progress(&self) -> bool {
        self.has_meaningful_progress
    }

    /// Has the current game already produced its leaderboard entry?
    #[must_use]
    pub fn game_over_recorded(&self) -> bool {
        self.game_over_recorded
    }

    /// Copy of the full game state. Cheap: the board is shared until
    /// either side changes it.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            players: self.players.clone(),
            turn: self.turn,
            board: self.board.clone(),
        }
    }

    /// Snapshot text as it would be stored right now.
    #[must_use]
    pub fn encode(&self) -> String {
        self.codec.encode(&self.snapshot())
    }

    // === Rules ===

    fn apply_take_chip(&mut self, color: ChipColor) -> Result<(), MoveError> {
        if let TurnPhase::TwoDistinct(c1, c2) = self.turn.phase() {
            if color == c1 || color == c2 {
                return Err(MoveError::chip_rule(
                    "Third chip must be a different color than the first two.",
                ));
            }
        }

        let seat = self.turn.current();
        let step = self.turn.record_chip(color)?;
        self.players[seat].add_chip(color, 1);
        self.mark_progress();
        debug!(%seat, %color, ?step, "chip taken");
        self.save_now();

        if step == ChipStep::TurnComplete {
            self.end_turn();
        }
        Ok(())
    }

    fn apply_buy_card(&mut self, card_id: &str) -> Result<(), MoveError> {
        if self.turn.chose_chip_action() {
            return Err(MoveError::illegal(
                "You cannot buy a card after taking chips this turn.",
            ));
        }

        let card = self
            .board
            .find_by_id(card_id)
            .cloned()
            .ok_or_else(|| MoveError::illegal("That card is not available."))?;

        let seat = self.turn.current();
        if !self.players[seat].can_afford(&card) {
            return Err(MoveError::illegal("You cannot afford this card."));
        }

        self.players[seat]
            .buy(&card)
            .map_err(|e| MoveError::internal(e.to_string()))?;
        self.board.remove_by_id(card_id);
        self.mark_progress();
        info!(%seat, card = %card.id(), vp = card.victory_points(), "card bought");
        self.save_now();

        if self.board.is_empty() {
            info!(leader = ?self.leader(), "board empty, game over");
            self.record_completed_game_if_progress();
        }

        self.end_turn();
        Ok(())
    }

    fn end_turn(&mut self) {
        self.turn.reset_for_next_turn();
        debug!(next = %self.turn.current(), "turn ended");
        self.save_now();
    }

    /// A rule rejection wins over a save failure: rejected moves never
    /// reach the store.
    fn finish_command(&mut self, result: Result<(), MoveError>) -> Result<(), MoveError> {
        let result = match (result, self.save_failure.clone()) {
            (Ok(()), Some(failure)) => Err(failure),
            (result, _) => result,
        };
        if let Err(e) = &result {
            match e {
                MoveError::ChipRule(_) | MoveError::Illegal(_) => {
                    debug!(error = %e, "move rejected");
                }
                MoveError::Internal(_) => error!(error = %e, "inconsistent game state"),
                MoveError::Store(_) => {}
            }
            self.last_error = e.to_string();
        }
        result
    }

    fn clear_error(&mut self) {
        self.last_error.clear();
        self.save_failure = None;
    }

    // === State management ===

    fn begin_new_game(&mut self) {
        self.record_completed_game_if_progress();
        if let Err(e) = self.store.clear_snapshot() {
            self.note_store_failure("clear snapshot", &e);
        }
        self.reset_state();
        self.save_now();
        info!("new game started");
    }

    fn reset_state(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.turn = TurnState::new();
        self.board.reset_to(standard_cards());
        self.has_meaningful_progress = false;
        self.game_over_recorded = false;
        self.last_error.clear();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.has_meaningful_progress = snapshot.shows_progress();
        self.game_over_recorded = snapshot.board.is_empty();
        self.players = snapshot.players;
        self.turn = snapshot.turn;
        self.board = snapshot.board;
        self.clear_error();
    }

    fn mark_progress(&mut self) {
        self.has_meaningful_progress = true;
    }

    fn record_completed_game_if_progress(&mut self) {
        if !self.has_meaningful_progress || self.game_over_recorded {
            return;
        }

        let p1 = self.players[Seat::First].victory_points();
        let p2 = self.players[Seat::Second].victory_points();
        let timestamp = self.clock.now_millis();
        self.leaderboard.add_entry(p1, p2, timestamp);
        info!(p1, p2, timestamp, "game recorded on leaderboard");

        if let Err(e) = self.store.save_leaderboard(&self.leaderboard.encode()) {
            self.note_store_failure("save leaderboard", &e);
        }
        self.has_meaningful_progress = false;
        self.game_over_recorded = true;
    }

    /// Write the snapshot. Runs after every state change, so a completed
    /// turn is written once with its last chip and again after the turn
    /// advances.
    fn save_now(&mut self) {
        let text = self.encode();
        if let Err(e) = self.store.save_snapshot(&text) {
            self.note_store_failure("save snapshot", &e);
        }
    }

    /// Keep the first failure of the current command.
    fn note_store_failure(&mut self, action: &str, err: &StoreError) {
        error!(action, error = %err, "store write failed");
        if self.save_failure.is_none() {
            self.save_failure = Some(MoveError::store(err));
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("turn", &self.turn)
            .field("leaderboard", &self.leaderboard)
            .field("last_error", &self.last_error)
            .field("save_failure", &self.save_failure)
            .field("has_meaningful_progress", &self.has_meaningful_progress)
            .field("game_over_recorded", &self.game_over_recorded)
            .finish_non_exhaustive()
    }
}
