use proptest::prelude::*;
use ulti_rs::cards::{full_deck, Card, Suit, DECK_SIZE};
use ulti_rs::table::{Seat, Slot, Table, HAND_CAPACITY};

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Toggle(usize),
    SelectSeat(usize),
    SelectTrump(usize),
}

fn any_gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0..DECK_SIZE).prop_map(Gesture::Toggle),
        (0..3usize).prop_map(Gesture::SelectSeat),
        (0..4usize).prop_map(Gesture::SelectTrump),
    ]
}

fn apply(table: &mut Table, gesture: Gesture) {
    match gesture {
        Gesture::Toggle(slot) => {
            if let Some(card) = Card::from_home_slot(slot) {
                table.toggle(card);
            }
        }
        Gesture::SelectSeat(i) => {
            if let Some(seat) = Seat::from_index(i) {
                table.set_active_seat(seat);
            }
        }
        Gesture::SelectTrump(i) => table.set_active_trump(Suit::ALL[i]),
    }
}

proptest! {
    #[test]
    fn placement_invariants_hold_under_any_gesture_sequence(
        gestures in proptest::collection::vec(any_gesture(), 0..200)
    ) {
        let mut table = Table::new();
        for &g in &gestures {
            apply(&mut table, g);

            // capacity guard
            for seat in Seat::ALL {
                prop_assert!(table.hand(seat).len() <= HAND_CAPACITY);
            }
            // every card in exactly one slot; hand membership agrees with
            // the placement map
            let mut in_hands = 0usize;
            for card in full_deck() {
                match table.slot(card) {
                    Slot::Home => {}
                    Slot::Hand(seat) => {
                        prop_assert!(table.hand(seat).contains(&card));
                        in_hands += 1;
                    }
                }
            }
            let total: usize = Seat::ALL.iter().map(|&s| table.hand(s).len()).sum();
            prop_assert_eq!(total, in_hands);
        }
    }

    #[test]
    fn double_toggle_from_home_is_identity(
        slot in 0..DECK_SIZE,
        seat_idx in 0..3usize,
    ) {
        let mut table = Table::new();
        table.set_active_seat(Seat::from_index(seat_idx).unwrap());
        let card = Card::from_home_slot(slot).unwrap();
        prop_assert!(table.toggle(card));
        prop_assert!(table.toggle(card));
        prop_assert!(table.is_home(card));
        for seat in Seat::ALL {
            prop_assert!(table.hand(seat).is_empty());
        }
    }
}
