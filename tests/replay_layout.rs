use ulti_rs::protocol::{Progression, RESPONSE_LEN};
use ulti_rs::replay::{layout, PLAY_STEP, ROUNDS_PER_ROW, SEAT_STEP};

fn frame(rounds: &[&str]) -> String {
    let mut s = String::from("1");
    for r in rounds {
        s.push_str(r);
    }
    while s.len() < RESPONSE_LEN {
        s.push('9');
    }
    s
}

#[test]
fn rounds_fill_rows_of_five() {
    let rounds: Vec<String> = (0..8).map(|_| "001102201".to_string()).collect();
    let refs: Vec<&str> = rounds.iter().map(|s| s.as_str()).collect();
    let p = Progression::decode(&frame(&refs)).unwrap();
    let tokens = layout(&p);
    assert_eq!(tokens.len(), 8 * 3);

    for (i, token) in tokens.iter().enumerate() {
        let round = i / 3;
        assert_eq!(token.row as usize, round / ROUNDS_PER_ROW);
        assert_eq!(token.col as usize, round % ROUNDS_PER_ROW);
    }
}

#[test]
fn seat_maps_to_horizontal_play_order_to_vertical() {
    let p = Progression::decode(&frame(&["102201001"])).unwrap();
    let tokens = layout(&p);

    // opponent A led: seat axis
    assert_eq!(tokens[0].dx, SEAT_STEP);
    assert_eq!(tokens[1].dx, 2 * SEAT_STEP);
    assert_eq!(tokens[2].dx, 0);
    // play-order axis
    assert_eq!(tokens[0].dy, 0);
    assert_eq!(tokens[1].dy, PLAY_STEP);
    assert_eq!(tokens[2].dy, 2 * PLAY_STEP);
}

#[test]
fn layout_stops_where_decoding_stopped() {
    let mut raw = frame(&["001102201", "001102201"]);
    // make round 2 invalid in place: seat digit out of range
    raw.replace_range(10..11, "5");
    let p = Progression::decode(&raw).unwrap();
    assert_eq!(p.rounds().len(), 1);
    assert_eq!(layout(&p).len(), 3);
}

#[test]
fn repeated_layout_calls_are_identical() {
    let p = Progression::decode(&frame(&["001102201"])).unwrap();
    let first = layout(&p);
    let second = layout(&p);
    assert_eq!(first, second);
}
