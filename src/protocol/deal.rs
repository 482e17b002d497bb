use super::ProtocolError;
use crate::cards::{Card, Suit};
use crate::contract::Contract;
use crate::table::{Seat, Slot, Table, HAND_CAPACITY, SEAT_COUNT};

/// Navigation handoff frame: trump digit + 3×10 two-digit card codes.
pub const HANDOFF_LEN: usize = 1 + SEAT_COUNT * HAND_CAPACITY * 2;

/// Engine request frame: contract digit + handoff frame.
pub const REQUEST_LEN: usize = 1 + HANDOFF_LEN;

/// A complete deal snapshot: trump plus three full hands in protocol order
/// (player, opponent A, opponent B), each in insertion order.
///
/// A `Deal` only exists at 10/10/10 occupancy; construction enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    trump: Suit,
    hands: [Vec<Card>; SEAT_COUNT],
}

impl Deal {
    /// Build a deal from explicit hands, validating occupancy and uniqueness.
    pub fn try_new(trump: Suit, hands: [Vec<Card>; SEAT_COUNT]) -> Result<Self, ProtocolError> {
        for (i, hand) in hands.iter().enumerate() {
            if hand.len() != HAND_CAPACITY {
                return Err(ProtocolError::IncompleteDeal {
                    seat: Seat::from_index(i).unwrap_or(Seat::Player),
                    got: hand.len(),
                    need: HAND_CAPACITY,
                });
            }
        }
        let mut seen = [false; crate::cards::DECK_SIZE];
        for card in hands.iter().flatten() {
            if seen[card.home_slot()] {
                return Err(ProtocolError::DuplicateCard(*card));
            }
            seen[card.home_slot()] = true;
        }
        Ok(Self { trump, hands })
    }

    /// Snapshot the current table state. Fails with `IncompleteDeal` unless
    /// every hand holds exactly `HAND_CAPACITY` cards.
    pub fn from_table(table: &Table) -> Result<Self, ProtocolError> {
        for seat in Seat::ALL {
            let got = table.hand(seat).len();
            if got != HAND_CAPACITY {
                return Err(ProtocolError::IncompleteDeal { seat, got, need: HAND_CAPACITY });
            }
        }
        let hands = [
            table.hand(Seat::Player).to_vec(),
            table.hand(Seat::OpponentA).to_vec(),
            table.hand(Seat::OpponentB).to_vec(),
        ];
        Ok(Self { trump: table.active_trump(), hands })
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Encode the 61-byte handoff frame: trump digit, then each hand's cards
    /// as suit digit + rank digit.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(HANDOFF_LEN);
        out.push(self.trump.digit());
        for hand in &self.hands {
            for card in hand {
                out.push(card.suit().digit());
                out.push(card.rank().digit());
            }
        }
        debug_assert_eq!(out.len(), HANDOFF_LEN);
        out
    }

    /// Encode the 62-byte engine request: contract digit + handoff frame.
    pub fn encode_request(&self, contract: Contract) -> String {
        let mut out = String::with_capacity(REQUEST_LEN);
        out.push(contract.digit());
        out.push_str(&self.encode());
        debug_assert_eq!(out.len(), REQUEST_LEN);
        out
    }

    /// Decode a 61-byte handoff frame. Exact length, digit domains and card
    /// uniqueness are all checked before any state is touched.
    pub fn decode(s: &str) -> Result<Self, ProtocolError> {
        let bytes = s.as_bytes();
        if bytes.len() != HANDOFF_LEN {
            return Err(ProtocolError::DealLength { expected: HANDOFF_LEN, got: bytes.len() });
        }
        let trump_ch = bytes[0] as char;
        let trump = Suit::from_digit(trump_ch).ok_or(ProtocolError::BadTrump(trump_ch))?;

        let mut hands: [Vec<Card>; SEAT_COUNT] = [
            Vec::with_capacity(HAND_CAPACITY),
            Vec::with_capacity(HAND_CAPACITY),
            Vec::with_capacity(HAND_CAPACITY),
        ];
        let mut seen = [false; crate::cards::DECK_SIZE];
        for (i, pair) in bytes[1..].chunks_exact(2).enumerate() {
            let card = Card::from_digits(pair[0] as char, pair[1] as char)?;
            if seen[card.home_slot()] {
                return Err(ProtocolError::DuplicateCard(card));
            }
            seen[card.home_slot()] = true;
            hands[i / HAND_CAPACITY].push(card);
        }
        Ok(Self { trump, hands })
    }

    /// Place this deal onto a table: trump marker, then every card into its
    /// hand in insertion order. The previous placement is cleared.
    pub fn apply_to(&self, table: &mut Table) {
        table.reset();
        table.set_active_trump(self.trump);
        for seat in Seat::ALL {
            table.set_active_seat(seat);
            for &card in self.hand(seat) {
                table.toggle(card);
            }
        }
        table.set_active_seat(Seat::Player);
        debug_assert!(table.is_ready());
        debug_assert!(Seat::ALL
            .iter()
            .all(|&s| self.hand(s).iter().all(|&c| table.slot(c) == Slot::Hand(s))));
    }
}
