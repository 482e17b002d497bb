use crate::cards::{full_deck, Card, Suit, DECK_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Playable cards per hand. The presentation layer may reserve an extra
/// element for a label, so capacity checks must use this constant, never a
/// container length.
pub const HAND_CAPACITY: usize = 10;

/// Number of hand containers on the table.
pub const SEAT_COUNT: usize = 3;

/// Cards left in the talon after a full deal.
pub const TALON_SIZE: usize = DECK_SIZE - SEAT_COUNT * HAND_CAPACITY;

/// The three hand containers, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Seat {
    Player = 0,
    OpponentA = 1,
    OpponentB = 2,
}

impl Seat {
    pub const ALL: [Seat; SEAT_COUNT] = [Seat::Player, Seat::OpponentA, Seat::OpponentB];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(i: usize) -> Option<Seat> {
        match i {
            0 => Some(Seat::Player),
            1 => Some(Seat::OpponentA),
            2 => Some(Seat::OpponentB),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Seat::Player => "Player",
            Seat::OpponentA => "Opponent A",
            Seat::OpponentB => "Opponent B",
        }
    }
}

/// Where a card currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The card's fixed tray position (`Card::home_slot`).
    Home,
    /// One of the three hand containers.
    Hand(Seat),
}

/// The deal-building table: 32 tray slots, three hands, one active hand and
/// one active trump marker.
///
/// Every card is in exactly one slot at all times. Home slots are a fixed
/// bijection from card identity, so returning home is total and independent
/// of any other card's movements.
#[derive(Debug, Clone)]
pub struct Table {
    placement: [Slot; DECK_SIZE],
    hands: [Vec<Card>; SEAT_COUNT],
    active_seat: Seat,
    active_trump: Suit,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table: every card home, player hand and trump marker 0 active.
    pub fn new() -> Self {
        Self {
            placement: [Slot::Home; DECK_SIZE],
            hands: [
                Vec::with_capacity(HAND_CAPACITY),
                Vec::with_capacity(HAND_CAPACITY),
                Vec::with_capacity(HAND_CAPACITY),
            ],
            active_seat: Seat::Player,
            active_trump: Suit::Hearts,
        }
    }

    pub fn active_seat(&self) -> Seat {
        self.active_seat
    }

    pub fn active_trump(&self) -> Suit {
        self.active_trump
    }

    /// Cards in `seat`'s hand, in insertion order.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Current slot of `card`.
    pub fn slot(&self, card: Card) -> Slot {
        self.placement[card.home_slot()]
    }

    pub fn is_home(&self, card: Card) -> bool {
        matches!(self.slot(card), Slot::Home)
    }

    /// True once every hand holds exactly `HAND_CAPACITY` cards.
    pub fn is_ready(&self) -> bool {
        self.hands.iter().all(|h| h.len() == HAND_CAPACITY)
    }

    /// The placement gesture. A card at home moves to the active hand unless
    /// that hand is full (silent no-op, capacity guard rather than error); a
    /// card in any hand returns to its home slot unconditionally.
    ///
    /// Returns whether the card moved.
    pub fn toggle(&mut self, card: Card) -> bool {
        match self.slot(card) {
            Slot::Home => {
                let hand = &mut self.hands[self.active_seat.index()];
                if hand.len() >= HAND_CAPACITY {
                    return false;
                }
                hand.push(card);
                self.placement[card.home_slot()] = Slot::Hand(self.active_seat);
                true
            }
            Slot::Hand(seat) => {
                let hand = &mut self.hands[seat.index()];
                if let Some(pos) = hand.iter().position(|&c| c == card) {
                    hand.remove(pos);
                }
                self.placement[card.home_slot()] = Slot::Home;
                true
            }
        }
    }

    /// Make `seat` the target of placement gestures. Idempotent; exactly one
    /// seat is active at all times.
    pub fn set_active_seat(&mut self, seat: Seat) {
        self.active_seat = seat;
    }

    /// Activate a trump marker. Idempotent; exactly one is active at all
    /// times.
    pub fn set_active_trump(&mut self, trump: Suit) {
        self.active_trump = trump;
    }

    /// Return every card to its home slot. Active seat and trump are kept.
    pub fn reset(&mut self) {
        self.placement = [Slot::Home; DECK_SIZE];
        for hand in &mut self.hands {
            hand.clear();
        }
    }

    /// Deal 10 random cards to each hand with a seeded RNG, leaving the two
    /// talon cards home.
    pub fn deal_random(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.deal_random_with(&mut rng);
    }

    /// Deal 10 random cards to each hand using the provided RNG.
    pub fn deal_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        let mut deck = full_deck();
        deck.shuffle(rng);
        for (i, seat) in Seat::ALL.iter().enumerate() {
            for &card in &deck[i * HAND_CAPACITY..(i + 1) * HAND_CAPACITY] {
                self.hands[seat.index()].push(card);
                self.placement[card.home_slot()] = Slot::Hand(*seat);
            }
        }
    }
}
