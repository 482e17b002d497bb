//! Fixed-format text protocol spoken with the external engine.
//!
//! Outbound: a deal is the active trump plus the three hands flattened into
//! ASCII digits, optionally led by a contract digit when the orchestrator is
//! driving game variants. Inbound: a played-out game is a 91-byte frame of
//! outcome plus up to ten rounds of three plays. Every frame has one exact
//! length; anything else fails before it is used.

mod deal;
mod progression;

pub use deal::{Deal, HANDOFF_LEN, REQUEST_LEN};
pub use progression::{Outcome, Play, Progression, Round, MAX_ROUNDS, PLAYS_PER_ROUND, RESPONSE_LEN};

use crate::cards::{Card, CardParseError};
use crate::table::Seat;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    #[error("deal must be {expected} bytes, got {got}")]
    DealLength { expected: usize, got: usize },
    #[error("result must be {expected} bytes, got {got}")]
    ResultLength { expected: usize, got: usize },
    #[error("invalid trump digit '{0}'")]
    BadTrump(char),
    #[error("duplicate card {0} in deal")]
    DuplicateCard(Card),
    #[error("{} holds {got} cards, a deal needs {need} per hand", .seat.label())]
    IncompleteDeal { seat: Seat, got: usize, need: usize },
    #[error("invalid outcome flag '{0}'")]
    BadOutcome(char),
    #[error("invalid seat digit '{0}'")]
    BadSeat(char),
    #[error(transparent)]
    Card(#[from] CardParseError),
}
