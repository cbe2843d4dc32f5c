use proptest::prelude::*;

use unobot::card::{Card, CardKind};
use unobot::{IdentityShuffler, StandardShuffler, create_initial_deck, draw_card, shuffle};

fn sorted(cards: impl IntoIterator<Item = Card>) -> Vec<Card> {
    let mut cards: Vec<Card> = cards.into_iter().collect();
    cards.sort();
    cards
}

#[test]
fn initial_deck_has_standard_composition() {
    let deck = create_initial_deck();
    assert_eq!(deck.len(), 108);
    let count = |kinds: &[CardKind]| {
        deck.iter()
            .filter(|card| kinds.contains(&card.kind()))
            .count()
    };
    assert_eq!(count(&[CardKind::Numbered]), 76);
    assert_eq!(
        count(&[CardKind::Skip, CardKind::Reverse, CardKind::Draw]),
        24
    );
    assert_eq!(count(&[CardKind::Wild, CardKind::WildDraw]), 8);
}

#[test]
fn identity_shuffle_keeps_order_and_input() {
    let deck = create_initial_deck();
    let shuffled = shuffle(&deck, &mut IdentityShuffler).expect("identity is a permutation");
    assert_eq!(shuffled, deck);
}

#[test]
fn draw_takes_the_head_card() {
    let deck = create_initial_deck();
    let (card, rest) = draw_card(&deck);
    assert_eq!(card, deck.front().copied());
    assert_eq!(rest.len(), 107);
    assert_eq!(deck.len(), 108, "original deck must not change");
}

proptest! {
    #[test]
    fn standard_shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = create_initial_deck();
        let shuffled = shuffle(&deck, &mut StandardShuffler::seeded(seed)).unwrap();
        prop_assert_eq!(shuffled.len(), deck.len());
        prop_assert_eq!(sorted(shuffled), sorted(deck.iter().copied()));
    }

    #[test]
    fn rotation_shuffles_are_accepted(shift in 0usize..108) {
        let deck = create_initial_deck();
        let mut rotate = |mut cards: Vec<Card>| {
            cards.rotate_left(shift);
            cards
        };
        let shuffled = shuffle(&deck, &mut rotate).unwrap();
        prop_assert_eq!(shuffled.front(), deck.get(shift));
    }
}
