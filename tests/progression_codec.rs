use ulti_rs::protocol::{Outcome, Progression, ProtocolError, RESPONSE_LEN};
use ulti_rs::table::Seat;

fn pad_to_frame(prefix: &str) -> String {
    let mut s = prefix.to_string();
    while s.len() < RESPONSE_LEN {
        s.push('9');
    }
    s
}

#[test]
fn win_with_one_round_then_invalid_round_displays_one_round() {
    // outcome '1', round 1 = "001002201", round 2 starts with player index 3
    let mut frame = String::from("1001002201");
    frame.push_str("301");
    let frame = pad_to_frame(&frame);
    assert_eq!(frame.len(), 91);

    let p = Progression::decode(&frame).unwrap();
    assert_eq!(p.outcome(), Outcome::Win);
    assert_eq!(p.rounds().len(), 1);

    let plays = p.rounds()[0].plays();
    assert_eq!(plays[0].seat, Seat::Player);
    assert_eq!(plays[2].seat, Seat::OpponentB);
}

#[test]
fn chronological_order_is_preserved_not_seating_order() {
    // round led by opponent B, then player, then opponent A
    let frame = pad_to_frame("2201001102");
    let p = Progression::decode(&frame).unwrap();
    let seats: Vec<Seat> = p.rounds()[0].plays().iter().map(|pl| pl.seat).collect();
    assert_eq!(seats, [Seat::OpponentB, Seat::Player, Seat::OpponentA]);
}

#[test]
fn ten_full_rounds_decode() {
    let mut frame = String::from("1");
    for _ in 0..10 {
        frame.push_str("001102201");
    }
    assert_eq!(frame.len(), RESPONSE_LEN);
    let p = Progression::decode(&frame).unwrap();
    assert_eq!(p.rounds().len(), 10);
}

#[test]
fn any_other_outcome_flag_is_an_unrecoverable_violation() {
    for flag in ['0', '3', '9', 'x'] {
        let frame = pad_to_frame(&format!("{flag}001002201"));
        let err = Progression::decode(&frame).unwrap_err();
        assert!(matches!(err, ProtocolError::BadOutcome(f) if f == flag));
    }
}

#[test]
fn length_is_checked_first() {
    for len in [0, 1, 90, 92] {
        let frame = "1".repeat(len);
        assert!(matches!(
            Progression::decode(&frame),
            Err(ProtocolError::ResultLength { expected: 91, .. })
        ));
    }
}
