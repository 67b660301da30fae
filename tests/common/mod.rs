//! Shared helpers for integration tests.

#![allow(dead_code)]

use mini_splendor::{ChipColor, Game, GameBuilder, ManualClock, MemoryStore};

/// Fresh game on an in-memory store with a hand-driven clock.
pub fn new_game() -> (Game, MemoryStore, ManualClock) {
    let store = MemoryStore::new();
    let clock = ManualClock::new(1_700_000_000_000);
    let game = GameBuilder::new(store.clone())
        .clock(clock.clone())
        .new_game();
    (game, store, clock)
}

/// Resume whatever is stored in `store`.
pub fn reload(store: &MemoryStore, clock: &ManualClock) -> Game {
    GameBuilder::new(store.clone())
        .clock(clock.clone())
        .load_or_new()
}

/// Play one legal turn: buy the first affordable card, otherwise take
/// three different chips aimed at the first card on the board.
pub fn play_turn(game: &mut Game) {
    let player = *game.player(game.current_seat());

    let affordable = game
        .board()
        .iter()
        .find(|c| player.can_afford(c))
        .map(|c| c.id().to_string());
    if let Some(id) = affordable {
        game.buy_card(&id).unwrap();
        return;
    }

    let target = game.board().iter().next().unwrap().clone();
    let mut colors: Vec<ChipColor> = target
        .cost()
        .non_zero()
        .filter(|&(c, n)| player.chips(c) < n)
        .map(|(c, _)| c)
        .collect();
    for c in ChipColor::ALL {
        if colors.len() >= 3 {
            break;
        }
        if !colors.contains(&c) {
            colors.push(c);
        }
    }
    for c in colors.into_iter().take(3) {
        game.take_chip(c).unwrap();
    }
}

/// Play until the board is empty. Returns the number of turns played.
pub fn play_to_end(game: &mut Game) -> usize {
    let mut turns = 0;
    while !game.is_over() {
        play_turn(game);
        turns += 1;
        assert!(turns < 1_000, "game did not finish");
    }
    turns
}
