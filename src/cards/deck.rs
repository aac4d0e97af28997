use super::card::Card;
use super::error::CardError;
use rand::Rng;
use rand::seq::SliceRandom;

/// The dealing deck. One copy is a standard 52-card deck plus two jokers;
/// a table of N players shuffles N copies together, so the deck is a
/// multiset and the same card can be drawn twice.
///
/// Cards come off the back, so a freshly built deck deals in reverse
/// index order until shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Build `copies` interleaved 54-card decks. Zero copies is a
    /// configuration mistake, not an empty deck, and is rejected.
    pub fn new(copies: usize) -> Result<Self, CardError> {
        match copies {
            0 => Err(CardError::EmptyDeck),
            n => Ok(Self(
                (0..n)
                    .flat_map(|_| 0..(crate::DECK_SIZE + crate::JOKERS_PER_DECK))
                    .map(|i| Card::from(i as u8))
                    .collect(),
            )),
        }
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.0.shuffle(rng);
    }

    /// remove the top card from the deck
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub fn remaining(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn composition_scales_with_copies() {
        for copies in 1..=4 {
            let deck = Deck::new(copies).unwrap();
            assert_eq!(deck.remaining(), copies * 54);
            let jokers = deck.clone().filter(Card::is_joker).count();
            assert_eq!(jokers, copies * crate::JOKERS_PER_DECK);
        }
    }

    #[test]
    fn zero_copies_is_rejected() {
        assert_eq!(Deck::new(0), Err(CardError::EmptyDeck));
    }

    #[test]
    fn draw_exhausts_to_none() {
        let mut deck = Deck::new(1).unwrap();
        for _ in 0..54 {
            assert!(deck.draw().is_some());
        }
        assert_eq!(deck.draw(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut a = Deck::new(2).unwrap();
        let mut b = Deck::new(2).unwrap();
        a.shuffle(&mut SmallRng::seed_from_u64(42));
        b.shuffle(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
