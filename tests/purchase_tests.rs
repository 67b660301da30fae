//! Purchase and game-end tests.

mod common;

use mini_splendor::{ChipColor, MoveError, Seat, MARKET_SIZE};
use ChipColor::*;

/// Buying a B2K2 card with {B:2, K:3} leaves {B:0, K:1}.
#[test]
fn test_buy_b2k2() {
    let (mut game, _, _) = common::new_game();
    // Seat 0: B,B  Seat 1: R,R  Seat 0: K,K  Seat 1: G,G  Seat 0: K,R,G
    for c in [Blue, Blue, Red, Red, Black, Black, Green, Green, Black, Red, Green] {
        game.take_chip(c).unwrap();
    }
    game.take_chip(White).unwrap();
    game.take_chip(White).unwrap();
    assert_eq!(game.current_seat(), Seat::First);

    let p0 = *game.player(Seat::First);
    assert_eq!(p0.chips(Blue), 2);
    assert_eq!(p0.chips(Black), 3);

    game.buy_card("C1").unwrap();
    let p0 = game.player(Seat::First);
    assert_eq!(p0.chips(Blue), 0);
    assert_eq!(p0.chips(Black), 1);
    assert_eq!(p0.victory_points(), 1);
    assert!(game.board().find_by_id("C1").is_none());
    assert_eq!(game.board().len(), MARKET_SIZE - 1);
    assert_eq!(game.current_seat(), Seat::Second);
}

/// An unaffordable card stays on the board and the turn does not pass.
#[test]
fn test_cannot_afford() {
    let (mut game, _, _) = common::new_game();
    let err = game.buy_card("C15").unwrap_err();
    assert_eq!(err, MoveError::Illegal("You cannot afford this card.".into()));
    assert!(game.board().contains("C15"));
    assert_eq!(game.current_seat(), Seat::First);
}

/// A bought card can never be bought again.
#[test]
fn test_card_gone_after_purchase() {
    let (mut game, _, _) = common::new_game();
    while game.board().len() == MARKET_SIZE {
        common::play_turn(&mut game);
    }
    let gone: Vec<_> = mini_splendor::cards::standard_cards()
        .into_iter()
        .filter(|c| !game.board().contains(c.id().as_str()))
        .collect();
    assert_eq!(gone.len(), 1);

    let id = gone[0].id().as_str().to_string();
    // Start of a fresh turn, so the only possible complaint is availability.
    assert_eq!(
        game.buy_card(&id).unwrap_err(),
        MoveError::Illegal("That card is not available.".into())
    );
}

/// Emptying the board records exactly one leaderboard entry.
#[test]
fn test_game_to_completion() {
    let (mut game, _, _) = common::new_game();
    common::play_to_end(&mut game);

    assert!(game.is_over());
    assert!(game.game_over_recorded());
    assert!(!game.has_meaningful_progress());

    let total: u32 = Seat::ALL
        .iter()
        .map(|&s| game.player(s).victory_points())
        .sum();
    assert_eq!(total, 40);

    let entries = game.leaderboard_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].player1_vp + entries[0].player2_vp,
        total
    );

    // Closing the finished game does not record it twice.
    game.start_new_game().unwrap();
    assert_eq!(game.leaderboard_entries().len(), 1);
    assert_eq!(game.board().len(), MARKET_SIZE);
}
