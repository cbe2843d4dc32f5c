use im::Vector;

use crate::card::{COPIES_PER_ACTION, Card, Color, DECK_SIZE, MAX_CARD_NUMBER, WILD_COUNT};
use crate::error::GameError;
use crate::shuffler::Shuffler;

/// Ordered sequence of cards. Head is the next card to draw.
///
/// Backed by a persistent vector so that every game state can be cloned cheaply.
pub type Deck = Vector<Card>;

/// Builds the standard 108-card deck in deterministic order (unshuffled):
/// numbered cards per color, then skips, reverses and draws per color, then wilds.
pub fn create_initial_deck() -> Deck {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        for number in 0..=MAX_CARD_NUMBER {
            let copies = if number == 0 { 1 } else { 2 };
            deck.extend(std::iter::repeat(Card::Numbered { color, number }).take(copies));
        }
    }
    let actions: [fn(Color) -> Card; 3] = [Card::Skip, Card::Reverse, Card::Draw];
    for action in actions {
        for color in Color::ALL {
            deck.extend(std::iter::repeat(action(color)).take(COPIES_PER_ACTION));
        }
    }
    deck.extend(std::iter::repeat(Card::Wild).take(WILD_COUNT));
    deck.extend(std::iter::repeat(Card::WildDraw).take(WILD_COUNT));
    deck.into_iter().collect()
}

/// Returns a shuffled copy of `deck`. The input is left untouched.
///
/// Fails if the shuffler returns anything other than a permutation of its input.
pub fn shuffle(deck: &Deck, shuffler: &mut dyn Shuffler) -> Result<Deck, GameError> {
    let original: Vec<Card> = deck.iter().copied().collect();
    let shuffled = shuffler.shuffle(original.clone());
    if shuffled.len() != original.len() {
        return Err(GameError::InvalidShuffle("shuffler changed the number of cards"));
    }
    let mut expected = original;
    let mut actual = shuffled.clone();
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(GameError::InvalidShuffle("shuffler changed the set of cards"));
    }
    Ok(shuffled.into_iter().collect())
}

/// Removes the head card. An empty deck yields `None` and stays empty.
pub fn draw_card(deck: &Deck) -> (Option<Card>, Deck) {
    let mut remaining = deck.clone();
    let card = remaining.pop_front();
    (card, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardKind;

    #[test]
    fn initial_deck_starts_with_numbered_red() {
        let deck = create_initial_deck();
        assert_eq!(
            deck.front(),
            Some(&Card::Numbered {
                color: Color::Red,
                number: 0
            })
        );
        assert_eq!(deck.back(), Some(&Card::WildDraw));
    }

    #[test]
    fn one_zero_and_two_of_each_other_number_per_color() {
        let deck = create_initial_deck();
        for color in Color::ALL {
            for number in 0..=MAX_CARD_NUMBER {
                let count = deck
                    .iter()
                    .filter(|card| **card == Card::Numbered { color, number })
                    .count();
                assert_eq!(count, if number == 0 { 1 } else { 2 });
            }
        }
        let wilds = deck
            .iter()
            .filter(|card| card.kind() == CardKind::Wild)
            .count();
        assert_eq!(wilds, 4);
    }

    #[test]
    fn draw_from_empty_deck_returns_none() {
        let (card, rest) = draw_card(&Deck::new());
        assert!(card.is_none());
        assert!(rest.is_empty());
    }

    #[test]
    fn shuffle_rejects_non_permutations() {
        let deck = create_initial_deck();
        let mut dropping = |mut cards: Vec<Card>| {
            cards.pop();
            cards
        };
        assert!(matches!(
            shuffle(&deck, &mut dropping),
            Err(GameError::InvalidShuffle(_))
        ));
        let mut duplicating = |mut cards: Vec<Card>| {
            cards[0] = Card::Wild;
            cards
        };
        assert!(matches!(
            shuffle(&deck, &mut duplicating),
            Err(GameError::InvalidShuffle(_))
        ));
    }
}
