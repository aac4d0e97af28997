/// A single card in the game, either a concrete face card or a wildcard.
///
/// The joker carries no rank and no suit. Making it a separate variant (rather
/// than an Option-typed field pair) means a suited joker or a rankless face
/// card cannot be constructed at all, so validation only lives at the parse
/// boundary.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Card {
    Face(Rank, Suit),
    Joker,
}

impl Card {
    /// text form of the wildcard
    pub const WILD: &'static str = "??";

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Face(rank, _) => Some(*rank),
            Card::Joker => None,
        }
    }
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Face(_, suit) => Some(*suit),
            Card::Joker => None,
        }
    }
    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }
}

/// u8 isomorphism
/// face cards map to their location in a sorted deck copy 0..52,
/// the two joker slots of each copy land on 52 and 53
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        match c {
            Card::Face(rank, suit) => u8::from(suit) + u8::from(rank) * 4,
            Card::Joker => crate::DECK_SIZE as u8,
        }
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        match n as usize {
            i if i < crate::DECK_SIZE => Self::Face(Rank::from(n / 4), Suit::from(n % 4)),
            i if i < crate::DECK_SIZE + crate::JOKERS_PER_DECK => Self::Joker,
            _ => panic!("Invalid card u8: {}", n),
        }
    }
}

/// str isomorphism, fallible on the way in
/// "Ah" "Ts" "2c" for faces, "??" for the joker
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        match s {
            Self::WILD => Ok(Self::Joker),
            s => {
                let mut chars = s.chars();
                let rank = chars.next().ok_or_else(|| CardError::BadCard(s.to_string()))?;
                let suit = chars.next().ok_or_else(|| CardError::BadCard(s.to_string()))?;
                match chars.next() {
                    Some(_) => Err(CardError::BadCard(s.to_string())),
                    None => Ok(Self::Face(Rank::try_from(rank)?, Suit::try_from(suit)?)),
                }
            }
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Card::Face(rank, suit) => write!(f, "{}{}", rank, suit),
            Card::Joker => write!(f, "{}", Self::WILD),
        }
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        let slots = crate::DECK_SIZE + crate::JOKERS_PER_DECK;
        Self::from(rand::rng().random_range(0..slots) as u8)
    }
}

use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
