use ulti_rs::cards::{full_deck, Card, Suit};
use ulti_rs::contract::Contract;
use ulti_rs::protocol::{Deal, ProtocolError, HANDOFF_LEN, REQUEST_LEN};
use ulti_rs::table::{Seat, Table};

fn hands_from_deck() -> [Vec<Card>; 3] {
    let deck = full_deck();
    [deck[0..10].to_vec(), deck[10..20].to_vec(), deck[20..30].to_vec()]
}

#[test]
fn well_formed_hands_encode_to_exactly_61_bytes() {
    let deal = Deal::try_new(Suit::Leaves, hands_from_deck()).unwrap();
    let code = deal.encode();
    assert_eq!(code.len(), HANDOFF_LEN);
    assert_eq!(code.len(), 61);
    assert!(code.starts_with('2'));
}

#[test]
fn request_form_is_exactly_62_bytes() {
    let deal = Deal::try_new(Suit::Hearts, hands_from_deck()).unwrap();
    for &contract in &Contract::ALL {
        let req = deal.encode_request(contract);
        assert_eq!(req.len(), REQUEST_LEN);
        assert_eq!(req.chars().next(), Some(contract.digit()));
    }
}

#[test]
fn encode_decode_round_trip_reconstructs_hands_and_trump() {
    let mut table = Table::new();
    table.set_active_trump(Suit::Bells);
    table.deal_random(1234);
    let deal = Deal::from_table(&table).unwrap();

    let decoded = Deal::decode(&deal.encode()).unwrap();
    assert_eq!(decoded.trump(), Suit::Bells);
    for seat in Seat::ALL {
        assert_eq!(decoded.hand(seat), deal.hand(seat), "per-hand ordering must survive");
    }
}

#[test]
fn hand_segments_decode_in_fixed_seat_order() {
    let deal = Deal::try_new(Suit::Hearts, hands_from_deck()).unwrap();
    let code = deal.encode();
    // bytes [1..21) are the player hand, then opponent A, then opponent B
    let decoded = Deal::decode(&code).unwrap();
    let deck = full_deck();
    assert_eq!(decoded.hand(Seat::Player), &deck[0..10]);
    assert_eq!(decoded.hand(Seat::OpponentA), &deck[10..20]);
    assert_eq!(decoded.hand(Seat::OpponentB), &deck[20..30]);
}

#[test]
fn no_partial_deal_is_ever_encoded() {
    let mut table = Table::new();
    for card in full_deck().into_iter().take(9) {
        table.toggle(card);
    }
    let err = Deal::from_table(&table).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::IncompleteDeal { seat: Seat::Player, got: 9, need: 10 }
    ));
}

#[test]
fn decode_validates_length_before_anything_else() {
    for len in [0, 1, 60, 62, 100] {
        let code = "0".repeat(len);
        assert!(
            matches!(Deal::decode(&code), Err(ProtocolError::DealLength { expected: 61, .. })),
            "length {len} must be rejected"
        );
    }
}

#[test]
fn decode_rejects_duplicate_cards_across_hands() {
    let mut hands = hands_from_deck();
    hands[2][0] = hands[0][0];
    let err = Deal::try_new(Suit::Hearts, hands).unwrap_err();
    assert!(matches!(err, ProtocolError::DuplicateCard(_)));
}
