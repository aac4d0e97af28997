use serde::Deserialize;
use serde::Serialize;

/// Every hand category the game recognizes, weakest first. the first nine
/// are the classical poker ladder; everything above Royal Flush is this
/// game's own invention and outranks all of it. ordering is positional:
/// the table IS the law, however odd it looks that a Flush Four beats a
/// Royal Flush.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
    FlushFour = 10,
    SandwichHand = 11,
    OddStraight = 12,
    EvenStraight = 13,
    SkippingStraight = 14,
    RainbowStraight = 15,
    FlushHouse = 16,
    FiveOfAKind = 17,
    FlushFive = 18,
}

impl Category {
    pub const fn all() -> [Self; 19] {
        [
            Self::HighCard,
            Self::OnePair,
            Self::TwoPair,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
            Self::RoyalFlush,
            Self::FlushFour,
            Self::SandwichHand,
            Self::OddStraight,
            Self::EvenStraight,
            Self::SkippingStraight,
            Self::RainbowStraight,
            Self::FlushHouse,
            Self::FiveOfAKind,
            Self::FlushFive,
        ]
    }

    /// everything above the classical ladder
    pub fn is_exotic(&self) -> bool {
        *self >= Self::FlushFour
    }

    /// round points for winning with this category
    pub fn points(&self) -> crate::Points {
        match self {
            Self::FlushFive | Self::FiveOfAKind => crate::POINTS_TOP,
            _ => crate::POINTS_WIN,
        }
    }
}

/// u8 isomorphism
/// position in the ascending table
impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category as u8
    }
}
impl From<u8> for Category {
    fn from(n: u8) -> Self {
        Self::all()[n as usize]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HighCard => write!(f, "High Card"),
            Self::OnePair => write!(f, "One Pair"),
            Self::TwoPair => write!(f, "Two Pair"),
            Self::ThreeOfAKind => write!(f, "Three of a Kind"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::FullHouse => write!(f, "Full House"),
            Self::FourOfAKind => write!(f, "Four of a Kind"),
            Self::StraightFlush => write!(f, "Straight Flush"),
            Self::RoyalFlush => write!(f, "Royal Flush"),
            Self::FlushFour => write!(f, "Flush Four"),
            Self::SandwichHand => write!(f, "Sandwich Hand"),
            Self::OddStraight => write!(f, "Odd Straight"),
            Self::EvenStraight => write!(f, "Even Straight"),
            Self::SkippingStraight => write!(f, "Skipping Straight"),
            Self::RainbowStraight => write!(f, "Rainbow Straight"),
            Self::FlushHouse => write!(f, "Flush House"),
            Self::FiveOfAKind => write!(f, "Five of a Kind"),
            Self::FlushFive => write!(f, "Flush Five"),
        }
    }
}
