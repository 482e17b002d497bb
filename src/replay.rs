//! Pure layout of a decoded progression as a temporal grid.
//!
//! Rounds flow left to right, five blocks per row. Inside a block, the
//! horizontal offset encodes who played (seat index) and the vertical offset
//! encodes when within the round (play order), so a block reads as a little
//! time-and-player chart. The presentation layer only has to scale the
//! offsets into cells or pixels.

use crate::cards::Card;
use crate::protocol::Progression;
use crate::table::Seat;

/// Round blocks per grid row.
pub const ROUNDS_PER_ROW: usize = 5;

/// Horizontal cell step per seat index within a round block.
pub const SEAT_STEP: u16 = 4;

/// Vertical cell step per play order within a round block.
pub const PLAY_STEP: u16 = 1;

/// One positioned card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub card: Card,
    pub seat: Seat,
    /// Grid row of the round block.
    pub row: u16,
    /// Grid column of the round block.
    pub col: u16,
    /// Horizontal offset inside the block (seat axis).
    pub dx: u16,
    /// Vertical offset inside the block (play-order axis).
    pub dy: u16,
}

/// Lay out every play of `progression` as positioned tokens. Pure and
/// idempotent; the decoder has already truncated unplayed rounds.
pub fn layout(progression: &Progression) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(progression.rounds().len() * 3);
    for (r, round) in progression.rounds().iter().enumerate() {
        let row = (r / ROUNDS_PER_ROW) as u16;
        let col = (r % ROUNDS_PER_ROW) as u16;
        for (order, play) in round.plays().iter().enumerate() {
            tokens.push(Token {
                card: play.card,
                seat: play.seat,
                row,
                col,
                dx: play.seat.index() as u16 * SEAT_STEP,
                dy: order as u16 * PLAY_STEP,
            });
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RESPONSE_LEN;

    fn frame(outcome: char, rounds: &[&str]) -> String {
        let mut s = String::with_capacity(RESPONSE_LEN);
        s.push(outcome);
        for r in rounds {
            s.push_str(r);
        }
        while s.len() < RESPONSE_LEN {
            s.push('9');
        }
        s
    }

    #[test]
    fn sixth_round_wraps_to_second_row() {
        let rounds: Vec<String> = (0..6).map(|_| "001102201".to_string()).collect();
        let refs: Vec<&str> = rounds.iter().map(|s| s.as_str()).collect();
        let p = Progression::decode(&frame('1', &refs)).unwrap();
        let tokens = layout(&p);
        assert_eq!(tokens.len(), 18);
        let sixth = &tokens[15];
        assert_eq!((sixth.row, sixth.col), (1, 0));
        let fifth = &tokens[12];
        assert_eq!((fifth.row, fifth.col), (0, 4));
    }

    #[test]
    fn offsets_encode_seat_and_play_order() {
        let p = Progression::decode(&frame('1', &["201001102"])).unwrap();
        let tokens = layout(&p);
        // first play: opponent B, order 0
        assert_eq!(tokens[0].dx, 2 * SEAT_STEP);
        assert_eq!(tokens[0].dy, 0);
        // second play: player, order 1
        assert_eq!(tokens[1].dx, 0);
        assert_eq!(tokens[1].dy, PLAY_STEP);
        // third play: opponent A, order 2
        assert_eq!(tokens[2].dx, SEAT_STEP);
        assert_eq!(tokens[2].dy, 2 * PLAY_STEP);
    }

    #[test]
    fn layout_is_idempotent() {
        let p = Progression::decode(&frame('1', &["001102201"])).unwrap();
        assert_eq!(layout(&p), layout(&p));
    }
}
