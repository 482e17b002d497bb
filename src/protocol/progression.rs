use super::ProtocolError;
use crate::cards::Card;
use crate::table::{Seat, HAND_CAPACITY, SEAT_COUNT};

/// Maximum rounds in a played-out game.
pub const MAX_ROUNDS: usize = HAND_CAPACITY;

/// Plays per round, one per seat.
pub const PLAYS_PER_ROUND: usize = SEAT_COUNT;

/// Engine response frame: outcome flag + 10 rounds × 3 plays × 3 digits.
pub const RESPONSE_LEN: usize = 1 + MAX_ROUNDS * PLAYS_PER_ROUND * 3;

/// Result of a simulated game, from the requesting side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Parse the outcome flag. Only '1' (win) and '2' (loss) are in the
    /// contract; anything else is a protocol violation upstream.
    pub const fn from_flag(c: char) -> Option<Outcome> {
        match c {
            '1' => Some(Outcome::Win),
            '2' => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

/// One card hitting the table: who played it and what it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
}

/// One completed round: exactly three plays in the chronological order the
/// cards were played, not seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    plays: [Play; PLAYS_PER_ROUND],
}

impl Round {
    pub fn plays(&self) -> &[Play; PLAYS_PER_ROUND] {
        &self.plays
    }
}

/// A decoded engine response: outcome plus the rounds that were actually
/// played. Unplayed tail rounds are dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    outcome: Outcome,
    rounds: Vec<Round>,
}

impl Progression {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Played rounds, chronological.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Decode a 91-byte response frame.
    ///
    /// Byte 0 is the outcome flag; a flag outside {1,2} is an unrecoverable
    /// protocol violation. The fixed tail packs up to ten rounds; the engine
    /// pads unplayed plays with "999", so the first round carrying any seat
    /// digit above 2 ends the playable prefix and the remainder is ignored.
    pub fn decode(s: &str) -> Result<Self, ProtocolError> {
        let bytes = s.as_bytes();
        if bytes.len() != RESPONSE_LEN {
            return Err(ProtocolError::ResultLength { expected: RESPONSE_LEN, got: bytes.len() });
        }
        let flag = bytes[0] as char;
        let outcome = Outcome::from_flag(flag).ok_or(ProtocolError::BadOutcome(flag))?;

        let mut rounds = Vec::with_capacity(MAX_ROUNDS);
        'rounds: for chunk in bytes[1..].chunks_exact(PLAYS_PER_ROUND * 3) {
            // A round is unplayed padding once any of its seat digits leaves
            // 0..=2; partially played rounds count as unplayed.
            for play in chunk.chunks_exact(3) {
                if !(b'0'..=b'2').contains(&play[0]) {
                    break 'rounds;
                }
            }
            let plays = [
                parse_play(&chunk[0..3])?,
                parse_play(&chunk[3..6])?,
                parse_play(&chunk[6..9])?,
            ];
            rounds.push(Round { plays });
        }
        Ok(Self { outcome, rounds })
    }
}

fn parse_play(digits: &[u8]) -> Result<Play, ProtocolError> {
    let seat = Seat::from_index((digits[0].wrapping_sub(b'0')) as usize)
        .ok_or(ProtocolError::BadSeat(digits[0] as char))?;
    let card = Card::from_digits(digits[1] as char, digits[2] as char)?;
    Ok(Play { seat, card })
}
