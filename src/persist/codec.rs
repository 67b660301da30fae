//! Snapshot text format.
//!
//! One record per line, fields separated by `;`, key and value by `=`:
//!
//! ```text
//! P0:chips=R0,B1,G0,K2,W0;vp=3
//! P1:chips=R0,B0,G0,K0,W0;vp=0
//! TURN:current=0;choseChipAction=true;chipsTaken=R,B
//! BOARD:C1|1|B2K2;C2|1|G2W2
//! ```
//!
//! Decoding is forgiving. A missing line leaves that part of the game at
//! its fresh value, and a field or board entry that fails to parse falls
//! back to its default without affecting the others. Decoding never fails.

use tracing::{debug, warn};

use crate::cards::{parse_cost, Board, Card, MARKET_SIZE};
use crate::core::{ChipColor, ChipSet, FormatError, Player, Seat, Seats};
use crate::rules::TurnState;

const PLAYER_TAGS: [&str; 2] = ["P0", "P1"];
const TURN_TAG: &str = "TURN";
const BOARD_TAG: &str = "BOARD";

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Seats<Player>,
    pub turn: TurnState,
    pub board: Board,
}

impl Default for Snapshot {
    /// A brand-new game: empty players, first seat to act, full market.
    fn default() -> Self {
        Self {
            players: Seats::default(),
            turn: TurnState::new(),
            board: Board::standard(),
        }
    }
}

impl Snapshot {
    /// Does this state show any play since a new game?
    ///
    /// True if chips are mid-turn, the board is not the full market, or
    /// either player holds chips or points.
    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.turn.chose_chip_action()
            || self.turn.chips_taken_count() > 0
            || self.board.len() != MARKET_SIZE
            || self.players.iter().any(|(_, p)| p.has_anything())
    }
}

/// Encodes and decodes [`Snapshot`] text.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotCodec;

impl SnapshotCodec {
    /// Encode a snapshot. Deterministic: equal snapshots give equal text.
    #[must_use]
    pub fn encode(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();

        for (seat, player) in snapshot.players.iter() {
            out.push_str(PLAYER_TAGS[seat.index()]);
            out.push_str(":chips=");
            out.push_str(&encode_chips(player.chip_set()));
            out.push_str(&format!(";vp={}\n", player.victory_points()));
        }

        let turn = &snapshot.turn;
        let taken: Vec<String> = turn
            .chips_taken()
            .iter()
            .map(|c| c.code().to_string())
            .collect();
        out.push_str(&format!(
            "{TURN_TAG}:current={};choseChipAction={};chipsTaken={}\n",
            turn.current().index(),
            turn.chose_chip_action(),
            taken.join(",")
        ));

        let cards: Vec<String> = snapshot
            .board
            .iter()
            .map(|c| format!("{}|{}|{}", c.id(), c.victory_points(), c.cost_description()))
            .collect();
        out.push_str(&format!("{BOARD_TAG}:{}\n", cards.join(";")));

        out
    }

    /// Decode snapshot text. Anything unreadable keeps its fresh value.
    #[must_use]
    pub fn decode(&self, text: &str) -> Snapshot {
        let mut snapshot = Snapshot::default();

        for line in text.lines() {
            let Some((tag, body)) = line.split_once(':') else {
                continue;
            };
            match tag.trim() {
                TURN_TAG => snapshot.turn = decode_turn(body),
                BOARD_TAG => snapshot.board = decode_board(body),
                tag => {
                    if let Some(seat) = PLAYER_TAGS
                        .iter()
                        .position(|t| *t == tag)
                        .and_then(Seat::from_index)
                    {
                        snapshot.players[seat] = decode_player(body);
                    } else {
                        debug!(tag, "ignoring unknown snapshot line");
                    }
                }
            }
        }

        snapshot
    }
}

fn encode_chips(chips: &ChipSet) -> String {
    let parts: Vec<String> = chips
        .iter()
        .map(|(color, n)| format!("{}{}", color.code(), n))
        .collect();
    parts.join(",")
}

/// Split `key=value;key=value` into pairs, skipping parts without `=`.
fn fields(body: &str) -> impl Iterator<Item = (&str, &str)> {
    body.split(';')
        .filter_map(|part| part.trim().split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
}

fn parse_number(text: &str) -> Result<u32, FormatError> {
    text.trim()
        .parse()
        .map_err(|_| FormatError::BadNumber(text.to_string()))
}

fn parse_chip_token(token: &str) -> Result<(ChipColor, u32), FormatError> {
    let mut chars = token.chars();
    let code = chars
        .next()
        .ok_or_else(|| FormatError::Malformed(token.to_string()))?;
    let color = ChipColor::from_code(code)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(FormatError::MissingAmount(code));
    }
    Ok((color, parse_number(rest)?))
}

fn decode_player(body: &str) -> Player {
    let mut chips = ChipSet::empty();
    let mut vp = 0;

    for (key, value) in fields(body) {
        match key {
            "chips" => {
                for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    match parse_chip_token(token) {
                        Ok((color, n)) => chips.add(color, n),
                        Err(e) => debug!(token, error = %e, "skipping chip token"),
                    }
                }
            }
            "vp" => match parse_number(value) {
                Ok(n) => vp = n,
                Err(e) => debug!(error = %e, "bad victory points, using 0"),
            },
            _ => {}
        }
    }

    Player::with_state(chips, vp)
}

fn decode_turn(body: &str) -> TurnState {
    let mut current = Seat::First;
    let mut chose = false;
    let mut taken: Vec<ChipColor> = Vec::new();

    for (key, value) in fields(body) {
        match key {
            "current" => match value.parse::<usize>().ok().and_then(Seat::from_index) {
                Some(seat) => current = seat,
                None => debug!(value, "bad current seat, using first"),
            },
            "choseChipAction" => chose = value.eq_ignore_ascii_case("true"),
            "chipsTaken" => {
                let parsed: Result<Vec<_>, _> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(|t| {
                        t.chars()
                            .next()
                            .map_or(Err(FormatError::Malformed(t.to_string())), ChipColor::from_code)
                    })
                    .collect();
                match parsed {
                    Ok(colors) => taken = colors,
                    Err(e) => debug!(error = %e, "bad chipsTaken, using none"),
                }
            }
            _ => {}
        }
    }

    TurnState::restore(current, chose, &taken).unwrap_or_else(|| {
        warn!(?taken, "stored chips taken are not a valid turn, clearing them");
        TurnState::restore(current, chose, &[]).unwrap_or_default()
    })
}

fn decode_card(entry: &str) -> Result<Card, FormatError> {
    let bits: Vec<&str> = entry.split('|').collect();
    let [id, vp, cost] = bits.as_slice() else {
        return Err(FormatError::Malformed(entry.to_string()));
    };
    let id = id.trim();
    if id.is_empty() {
        return Err(FormatError::Malformed(entry.to_string()));
    }
    Ok(Card::new(id, parse_number(vp)?, parse_cost(cost)?))
}

fn decode_board(body: &str) -> Board {
    let mut cards: Vec<Card> = Vec::new();

    for entry in body.split(';').filter(|e| !e.trim().is_empty()) {
        match decode_card(entry) {
            Ok(card) if cards.iter().any(|c| c.id() == card.id()) => {
                debug!(card = %card.id(), "skipping duplicate card");
            }
            Ok(card) => cards.push(card),
            Err(e) => debug!(entry, error = %e, "skipping board entry"),
        }
    }

    if cards.len() > MARKET_SIZE {
        warn!(count = cards.len(), "stored board is larger than the market, truncating");
        cards.truncate(MARKET_SIZE);
    }

    let mut board = Board::new();
    board.reset_to(cards);
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::standard_cards;

    const FRESH: &str = "P0:chips=R0,B0,G0,K0,W0;vp=0\n\
P1:chips=R0,B0,G0,K0,W0;vp=0\n\
TURN:current=0;choseChipAction=false;chipsTaken=\n\
BOARD:C1|1|B2K2;C2|1|G2W2;C3|1|R2B2;C4|2|G3K2;C5|2|R3;C6|2|B3;C7|2|G3;C8|2|W3;C9|3|R3B2;C10|3|G3K2;C11|3|R3K2;C12|4|R3B3;C13|4|G3W3;C14|5|G3K3;C15|5|R3B3W3\n";

    #[test]
    fn test_encode_fresh_game() {
        assert_eq!(SnapshotCodec.encode(&Snapshot::default()), FRESH);
    }

    #[test]
    fn test_decode_fresh_game() {
        let snapshot = SnapshotCodec.decode(FRESH);
        assert_eq!(snapshot, Snapshot::default());
        assert!(!snapshot.shows_progress());
    }

    #[test]
    fn test_mid_turn_round_trip() {
        let text = "P0:chips=R1,B1,G0,K2,W0;vp=3\n\
P1:chips=R0,B0,G4,K0,W0;vp=0\n\
TURN:current=1;choseChipAction=true;chipsTaken=R,B\n\
BOARD:C1|1|B2K2;C15|5|R3B3W3\n";

        let snapshot = SnapshotCodec.decode(text);
        assert_eq!(snapshot.players[Seat::First].chips(ChipColor::Black), 2);
        assert_eq!(snapshot.players[Seat::First].victory_points(), 3);
        assert_eq!(snapshot.players[Seat::Second].chips(ChipColor::Green), 4);
        assert_eq!(snapshot.turn.current(), Seat::Second);
        assert_eq!(
            snapshot.turn.chips_taken().as_slice(),
            &[ChipColor::Red, ChipColor::Blue]
        );
        assert_eq!(snapshot.board.len(), 2);
        assert!(snapshot.shows_progress());

        assert_eq!(SnapshotCodec.encode(&snapshot), text);
    }

    #[test]
    fn test_empty_board_section() {
        let snapshot = SnapshotCodec.decode("BOARD:");
        assert!(snapshot.board.is_empty());
        assert_eq!(snapshot.players, Seats::default());
    }

    #[test]
    fn test_missing_sections_use_fresh_values() {
        let snapshot = SnapshotCodec.decode("P1:chips=R2;vp=1\n");
        assert_eq!(snapshot.board.len(), MARKET_SIZE);
        assert_eq!(snapshot.turn, TurnState::new());
        assert_eq!(snapshot.players[Seat::Second].chips(ChipColor::Red), 2);
        assert_eq!(snapshot.players[Seat::First], Player::new());
    }

    #[test]
    fn test_empty_text_is_fresh() {
        assert_eq!(SnapshotCodec.decode(""), Snapshot::default());
        assert_eq!(SnapshotCodec.decode("garbage\nmore garbage"), Snapshot::default());
    }

    #[test]
    fn test_bad_fields_fall_back_independently() {
        let text = "P0:chips=R2,X9,Bq,G1;vp=lots\n\
TURN:current=7;choseChipAction=TRUE;chipsTaken=G\n";
        let snapshot = SnapshotCodec.decode(text);

        let p0 = snapshot.players[Seat::First];
        assert_eq!(p0.chips(ChipColor::Red), 2);
        assert_eq!(p0.chips(ChipColor::Blue), 0);
        assert_eq!(p0.chips(ChipColor::Green), 1);
        assert_eq!(p0.victory_points(), 0);

        assert_eq!(snapshot.turn.current(), Seat::First);
        assert!(snapshot.turn.chose_chip_action());
        assert_eq!(snapshot.turn.chips_taken().as_slice(), &[ChipColor::Green]);
    }

    #[test]
    fn test_bad_board_entries_skipped() {
        let snapshot = SnapshotCodec.decode("BOARD:C1|1|B2K2;C2|x|R3;C3|1;C4|2|Z9;C5|0|FREE;C1|9|R1\n");
        let ids: Vec<_> = snapshot.board.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(ids, vec!["C1", "C5"]);
        assert!(snapshot.board.find_by_id("C5").unwrap().cost().is_empty());
    }

    #[test]
    fn test_impossible_chips_taken_cleared() {
        let snapshot = SnapshotCodec.decode("TURN:current=1;choseChipAction=true;chipsTaken=R,R\n");
        assert_eq!(snapshot.turn.current(), Seat::Second);
        assert_eq!(snapshot.turn.chips_taken_count(), 0);
        assert!(snapshot.turn.chose_chip_action());
    }

    #[test]
    fn test_bad_chip_code_clears_chips_taken() {
        let snapshot = SnapshotCodec.decode("TURN:current=0;choseChipAction=true;chipsTaken=R,Q\n");
        assert_eq!(snapshot.turn.chips_taken_count(), 0);
    }

    #[test]
    fn test_oversized_board_truncated() {
        let mut cards = standard_cards();
        cards.push(Card::new("X1", 1, ChipSet::empty()));
        let mut board = Board::new();
        board.reset_to(cards);
        let snapshot = Snapshot {
            board,
            ..Snapshot::default()
        };

        let decoded = SnapshotCodec.decode(&SnapshotCodec.encode(&snapshot));
        assert_eq!(decoded.board.len(), MARKET_SIZE);
        assert!(!decoded.board.contains("X1"));
    }

    #[test]
    fn test_windows_line_endings() {
        let text = FRESH.replace('\n', "\r\n");
        assert_eq!(SnapshotCodec.decode(&text), Snapshot::default());
    }
}
