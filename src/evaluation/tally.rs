/// histograms of a single 5-card subhand. concrete cards land in rank,
/// suit, and exact-card counts; wildcards are counted but never assigned.
/// every category test below then asks the same question: can the jokers
/// cover the deficit between what is present and what the shape demands?
/// working with counts instead of assignments keeps each test a few
/// comparisons deep, and the zero entries of each histogram stand in for
/// the ranks and cards a joker would have to invent outright.
pub struct Tally {
    ranks: [u8; 13], // how many of each rank. neglect suit
    suits: [u8; 4],  // how many of each suit. neglect rank
    cards: [u8; 52], // how many of each exact card
    jokers: u8,      // how many wildcards await assignment
}

impl Tally {
    /// the highest category this subhand can be completed into. High Card
    /// is satisfied by anything, so the descending scan always lands.
    pub fn category(&self) -> Category {
        Category::all()
            .into_iter()
            .rev()
            .find(|category| self.supports(*category))
            .expect("high card is always reachable")
    }

    /// can the wildcards be assigned so the subhand satisfies this category
    pub fn supports(&self, category: Category) -> bool {
        match category {
            Category::HighCard => true,
            Category::OnePair => self.has_n_oak(2),
            Category::TwoPair => self.has_two_pair(),
            Category::ThreeOfAKind => self.has_n_oak(3),
            Category::Straight => self.has_any_progression(2..=10, 1),
            Category::Flush => self.has_flush(),
            Category::FullHouse => self.has_full_house(),
            Category::FourOfAKind => self.has_n_oak(4),
            Category::StraightFlush => self.has_flush() && self.has_any_progression(2..=10, 1),
            Category::RoyalFlush => self.has_flush() && self.has_progression(10, 1),
            Category::FlushFour => self.has_n_identical(4),
            Category::SandwichHand => self.has_sandwich(),
            Category::OddStraight => self.has_any_progression((3..=5).step_by(2), 2),
            Category::EvenStraight => self.has_any_progression((2..=6).step_by(2), 2),
            Category::SkippingStraight => self.has_any_progression(2..=6, 2),
            Category::RainbowStraight => self.has_rainbow(),
            Category::FlushHouse => self.has_flush() && self.has_full_house(),
            Category::FiveOfAKind => self.has_n_oak(5),
            Category::FlushFive => self.has_n_identical(5),
        }
    }

    // searches for shapes

    /// n cards of one rank, suits free. zero-count ranks are fair game,
    /// which is how enough jokers invent a rank from nothing.
    fn has_n_oak(&self, n: u8) -> bool {
        self.ranks.iter().any(|&count| count + self.jokers >= n)
    }
    /// n copies of one exact card. jokers duplicate the card outright.
    fn has_n_identical(&self, n: u8) -> bool {
        self.cards.iter().any(|&count| count + self.jokers >= n)
    }
    /// concrete cards span at most one suit
    fn has_flush(&self) -> bool {
        self.suits.iter().filter(|&&count| count > 0).count() <= 1
    }
    fn has_two_pair(&self) -> bool {
        (0..13).any(|i| {
            (i + 1..13).any(|j| {
                let a = 2u8.saturating_sub(self.ranks[i]);
                let b = 2u8.saturating_sub(self.ranks[j]);
                a + b <= self.jokers
            })
        })
    }
    fn has_full_house(&self) -> bool {
        (0..13).any(|t| {
            (0..13).filter(|&p| p != t).any(|p| {
                let a = 3u8.saturating_sub(self.ranks[t]);
                let b = 2u8.saturating_sub(self.ranks[p]);
                a + b <= self.jokers
            })
        })
    }
    /// exactly three of a center rank sandwiched by its two neighbors.
    /// the caps pin the 3-1-1 shape; the sum pins every card inside it.
    fn has_sandwich(&self) -> bool {
        (3..=13).any(|center| {
            let below = self.count(center - 1);
            let level = self.count(center);
            let above = self.count(center + 1);
            below + level + above + self.jokers == 5 && level <= 3 && below <= 1 && above <= 1
        })
    }
    /// four concrete cards of four different suits, one joker to finish
    /// the run. more or fewer jokers and the suit census cannot work out.
    fn has_rainbow(&self) -> bool {
        self.jokers == 1 && self.suits == [1, 1, 1, 1] && self.has_any_progression(2..=10, 1)
    }

    // progression machinery shared by every straight flavor

    fn has_any_progression(&self, starts: impl IntoIterator<Item = u8>, step: u8) -> bool {
        starts
            .into_iter()
            .any(|start| self.has_progression(start, step))
    }
    /// five values spaced `step` apart from `start`. feasible when every
    /// concrete card lands inside the run and no value is doubled up, so
    /// the jokers are left exactly the vacant slots to fill.
    fn has_progression(&self, start: u8, step: u8) -> bool {
        let slots = || (0..5u8).map(|i| start + i * step);
        let inside = slots().map(|value| self.count(value)).sum::<u8>();
        let filled = slots().filter(|&value| self.count(value) > 0).count() as u8;
        inside + self.jokers == 5 && filled == inside
    }
    /// concrete cards at this game value. Two is 2, Ace is high at 14.
    fn count(&self, value: u8) -> u8 {
        self.ranks[value as usize - 2]
    }

    // sub-constructors for Tally

    fn rank_counts(cards: &[Card]) -> [u8; 13] {
        let mut counts = [0; 13];
        cards
            .iter()
            .filter_map(|c| c.rank())
            .map(|r| r as usize)
            .for_each(|r| counts[r] += 1);
        counts
    }
    fn suit_counts(cards: &[Card]) -> [u8; 4] {
        let mut counts = [0; 4];
        cards
            .iter()
            .filter_map(|c| c.suit())
            .map(|s| s as usize)
            .for_each(|s| counts[s] += 1);
        counts
    }
    fn card_counts(cards: &[Card]) -> [u8; 52] {
        let mut counts = [0; 52];
        cards
            .iter()
            .copied()
            .filter(|c| !c.is_joker())
            .map(|c| u8::from(c) as usize)
            .for_each(|c| counts[c] += 1);
        counts
    }
    fn joker_count(cards: &[Card]) -> u8 {
        cards.iter().filter(|c| c.is_joker()).count() as u8
    }
}

impl From<Subhand> for Tally {
    fn from(subhand: Subhand) -> Self {
        Self {
            ranks: Self::rank_counts(&subhand),
            suits: Self::suit_counts(&subhand),
            cards: Self::card_counts(&subhand),
            jokers: Self::joker_count(&subhand),
        }
    }
}

use crate::cards::card::Card;
use crate::cards::category::Category;
use crate::cards::subhands::Subhand;
