//! Pluggable deck randomization.
//!
//! Every deal and reshuffle goes through a [`Shuffler`], so tests can swap the
//! uniform shuffle for a fixed permutation (including the identity).

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::Card;

/// Capability that maps a sequence of cards to a permutation of itself.
pub trait Shuffler {
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Shuffler for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Uniform Fisher-Yates shuffle driven by any `rand` generator.
pub struct StandardShuffler<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> StandardShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl StandardShuffler<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Shuffler for StandardShuffler<R> {
    fn shuffle(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        SliceRandom::shuffle(cards.as_mut_slice(), &mut self.rng);
        cards
    }
}

/// Leaves the order untouched. Useful for reproducible deals in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, cards: Vec<Card>) -> Vec<Card> {
        cards
    }
}

/// Shuffler seeded from OS entropy.
pub fn standard_shuffler() -> StandardShuffler<StdRng> {
    StandardShuffler::from_entropy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    fn sample() -> Vec<Card> {
        (0..=9)
            .map(|number| Card::Numbered {
                color: Color::Red,
                number,
            })
            .collect()
    }

    #[test]
    fn seeded_shuffler_is_deterministic() {
        let a = Shuffler::shuffle(&mut StandardShuffler::seeded(7), sample());
        let b = Shuffler::shuffle(&mut StandardShuffler::seeded(7), sample());
        assert_eq!(a, b);
    }

    #[test]
    fn closures_act_as_shufflers() {
        let mut reverse = |mut cards: Vec<Card>| {
            cards.reverse();
            cards
        };
        let shuffled = Shuffler::shuffle(&mut reverse, sample());
        assert_eq!(shuffled.first(), sample().last());
    }
}
