use super::card::Card;
use super::deck::Deck;
use super::error::CardError;
use super::subhands::Subhands;

/// Hand represents an unordered collection of Cards. with multiple deck
/// copies in play the same card can be drawn twice, and jokers carry no
/// identity at all, so a 52-bit set representation won't do. we keep the
/// cards in a Vec and accept the allocation; hands top out at 8-ish cards
/// so it never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// append a card to the hand
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    /// remove the card at this position, shifting the rest down
    pub fn take(&mut self, index: usize) -> Card {
        assert!(index < self.0.len());
        self.0.remove(index)
    }

    /// lazily enumerate every 5-card subhand, in a fixed combinatorial
    /// order. yields nothing at all for hands smaller than 5. subhand
    /// selection is a u64 index mask, so hands of 64+ cards (far past
    /// any dealing rule) are unsupported.
    pub fn subhands(&self) -> Subhands<'_> {
        Subhands::from(self.cards())
    }
}

/// Vec<Card> isomorphism (order preserved, duplicates welcome)
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

/// str isomorphism
/// this follows from Card parsing, whitespace separated: "Th Jh ?? Kh Ah"
impl TryFrom<&str> for Hand {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()
            .map(Self)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, "{}", card)?,
                _ => write!(f, " {}", card)?,
            }
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        let mut deck = Deck::new(1).expect("one copy");
        deck.shuffle(&mut rand::rng());
        Self(deck.take(crate::HAND_SIZE).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_str() {
        let repr = "Ts Js ?? Ks As 2c";
        let hand = Hand::try_from(repr).unwrap();
        assert_eq!(hand.to_string(), repr);
    }

    #[test]
    fn add_take_roundtrip() {
        let mut hand = Hand::try_from("2c 3d 4h").unwrap();
        hand.add(Card::Joker);
        assert_eq!(hand.size(), 4);
        assert_eq!(hand.take(3), Card::Joker);
        assert_eq!(hand.take(0), Card::try_from("2c").unwrap());
        assert_eq!(hand.to_string(), "3d 4h");
    }

    #[test]
    fn subhand_census() {
        let hand = Hand::random();
        assert_eq!(hand.size(), crate::HAND_SIZE);
        assert_eq!(hand.subhands().count(), 56); // 8 choose 5
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(Hand::try_from("Ts Js Qx").is_err());
        assert!(Hand::try_from("Ts J").is_err());
    }
}
