use std::fmt;
use std::str::FromStr;

/// Number of suits in the Hungarian deck.
pub const SUIT_COUNT: usize = 4;
/// Number of ranks per suit.
pub const RANK_COUNT: usize = 8;
/// Total deck size.
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Ranks of the Hungarian deck in ace-king order, Seven (low) to Ace (high).
///
/// The discriminant doubles as the rank's wire digit. Ace-king order is the
/// deck-tray order; contracts that score in ace-ten order reorder cards on
/// the engine side, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Seven = 0,
    Eight = 1,
    Nine = 2,
    Ten = 3,
    Under = 4,
    Over = 5,
    King = 6,
    Ace = 7,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Under,
        Rank::Over,
        Rank::King,
        Rank::Ace,
    ];

    /// Wire digit, '0'..='7'.
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Under => 'U',
            Rank::Over => 'O',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parse a wire digit.
    pub const fn from_digit(c: char) -> Option<Rank> {
        match c {
            '0' => Some(Rank::Seven),
            '1' => Some(Rank::Eight),
            '2' => Some(Rank::Nine),
            '3' => Some(Rank::Ten),
            '4' => Some(Rank::Under),
            '5' => Some(Rank::Over),
            '6' => Some(Rank::King),
            '7' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'U' => Ok(Rank::Under),
            'O' => Ok(Rank::Over),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "7" | "seven" => Ok(Rank::Seven),
            "8" | "eight" => Ok(Rank::Eight),
            "9" | "nine" => Ok(Rank::Nine),
            "10" | "t" | "ten" => Ok(Rank::Ten),
            "u" | "under" => Ok(Rank::Under),
            "o" | "over" => Ok(Rank::Over),
            "k" | "king" => Ok(Rank::King),
            "a" | "ace" => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(s.to_string())),
        }
    }
}

/// Four suits of the Hungarian deck; order is the deck-tray order and the
/// wire digit, it carries no strength meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Bells = 1,
    Leaves = 2,
    Acorns = 3,
}

impl Suit {
    pub const ALL: [Suit; SUIT_COUNT] = [Suit::Hearts, Suit::Bells, Suit::Leaves, Suit::Acorns];

    /// Wire digit, '0'..='3'.
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Bells => 'b',
            Suit::Leaves => 'l',
            Suit::Acorns => 'a',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Bells => "Bells",
            Suit::Leaves => "Leaves",
            Suit::Acorns => "Acorns",
        }
    }

    /// Parse a wire digit.
    pub const fn from_digit(c: char) -> Option<Suit> {
        match c {
            '0' => Some(Suit::Hearts),
            '1' => Some(Suit::Bells),
            '2' => Some(Suit::Leaves),
            '3' => Some(Suit::Acorns),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            'b' => Ok(Suit::Bells),
            'l' => Ok(Suit::Leaves),
            'a' => Ok(Suit::Acorns),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() == 1 {
            return Suit::try_from(t.chars().next().unwrap());
        }
        match t.to_ascii_lowercase().as_str() {
            "hearts" => Ok(Suit::Hearts),
            "bells" => Ok(Suit::Bells),
            "leaves" => Ok(Suit::Leaves),
            "acorns" => Ok(Suit::Acorns),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

/// A playing card: suit + rank.
///
/// The human form is rank-then-suit, the wire form is the two-digit code
/// (suit digit, then rank digit) used by the deal and progression protocol.
///
/// ```
/// use ulti_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Hearts, Rank::Ace);
/// assert_eq!(card.to_string(), "Ah");
/// assert_eq!(card.code(), "07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Two-character wire identity: suit digit then rank digit.
    pub fn code(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.suit.digit());
        s.push(self.rank.digit());
        s
    }

    /// Build a card from its two wire digits.
    pub fn from_digits(suit: char, rank: char) -> Result<Self, CardParseError> {
        let s = Suit::from_digit(suit)
            .ok_or_else(|| CardParseError::InvalidCode(format!("{suit}{rank}")))?;
        let r = Rank::from_digit(rank)
            .ok_or_else(|| CardParseError::InvalidCode(format!("{suit}{rank}")))?;
        Ok(Card::new(s, r))
    }

    /// Index of this card's home slot in the deck tray. A bijection onto
    /// `0..DECK_SIZE`.
    pub const fn home_slot(self) -> usize {
        self.suit as usize * RANK_COUNT + self.rank as usize
    }

    /// Inverse of [`Card::home_slot`].
    pub const fn from_home_slot(slot: usize) -> Option<Card> {
        if slot >= DECK_SIZE {
            return None;
        }
        let suit = match Suit::from_digit((b'0' + (slot / RANK_COUNT) as u8) as char) {
            Some(s) => s,
            None => return None,
        };
        let rank = match Rank::from_digit((b'0' + (slot % RANK_COUNT) as u8) as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Card::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error("invalid card code: '{0}'")]
    InvalidCode(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() < 2 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        // rank is everything but the last char ("10" included); suit is last
        let suit_ch = t.chars().last().unwrap();
        let rank_str = &t[..t.len() - suit_ch.len_utf8()];
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(suit, rank))
    }
}

/// The 32 cards in home-slot order.
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for &s in &Suit::ALL {
        for &r in &Rank::ALL {
            cards.push(Card::new(s, r));
        }
    }
    cards
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use ulti_rs::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("Ah, Kb 10l").unwrap();
/// assert_eq!(cards[0], Card::new(Suit::Hearts, Rank::Ace));
/// assert_eq!(cards[1], Card::new(Suit::Bells, Rank::King));
/// assert_eq!(cards[2], Card::new(Suit::Leaves, Rank::Ten));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rank_display_and_from_str() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("T").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("under").unwrap(), Rank::Under);
        assert!(Rank::from_str("J").is_err());
    }

    #[test]
    fn suit_display_and_from_str() {
        assert_eq!(Suit::Acorns.to_string(), "a");
        assert_eq!(Suit::from_str("l").unwrap(), Suit::Leaves);
        assert_eq!(Suit::from_str("Bells").unwrap(), Suit::Bells);
        assert!(Suit::from_str("x").is_err());
    }

    #[test]
    fn card_display_and_from_str() {
        let ah = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(ah.to_string(), "Ah");
        assert_eq!(Card::from_str("Ah").unwrap(), ah);
        assert_eq!(Card::from_str("10b").unwrap(), Card::new(Suit::Bells, Rank::Ten));
        assert_eq!(Card::from_str("ka").unwrap(), Card::new(Suit::Acorns, Rank::King));
    }

    #[test]
    fn wire_code_round_trip() {
        for card in full_deck() {
            let code = card.code();
            let mut it = code.chars();
            let back = Card::from_digits(it.next().unwrap(), it.next().unwrap()).unwrap();
            assert_eq!(back, card);
        }
        assert!(Card::from_digits('4', '0').is_err());
        assert!(Card::from_digits('0', '8').is_err());
    }

    #[test]
    fn home_slots_are_a_bijection() {
        let slots: HashSet<usize> = full_deck().iter().map(|c| c.home_slot()).collect();
        assert_eq!(slots.len(), DECK_SIZE);
        assert!(slots.iter().all(|&i| i < DECK_SIZE));
        for card in full_deck() {
            assert_eq!(Card::from_home_slot(card.home_slot()), Some(card));
        }
        assert_eq!(Card::from_home_slot(DECK_SIZE), None);
    }

    #[test]
    fn full_deck_is_32_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 32);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), 32);
    }
}
