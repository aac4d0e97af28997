use super::card::Card;

/// a 5-card selection from a larger hand. classification always happens
/// at this size, whatever the hand size the table dealt.
pub type Subhand = [Card; crate::SUBHAND_SIZE];

/// Subhands iterates over every 5-card combination of a borrowed slice of cards.
/// it holds a u64 of index bits into the slice and Gosper-permutes it forward:
/// it is memory efficient because it never materializes the combinations
/// it is deterministic because it always walks the same combinatorial order
/// it is restartable because a fresh iterator from the same slice walks it again
/// it yields nothing when the slice holds fewer than 5 cards
pub struct Subhands<'a> {
    cards: &'a [Card],
    next: u64,
}

impl Subhands<'_> {
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        let k = crate::SUBHAND_SIZE;
        if n < k {
            0
        } else {
            (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
        }
    }

    fn exhausted(&self) -> bool {
        if self.next == 0 {
            true
        } else {
            (64 - self.cards.len() as u32) > self.next.leading_zeros()
        }
    }

    /// Gosper's hack: the next-larger u64 with the same popcount.
    /// the lowest run of ones carries into the bit above it, and
    /// whatever the carry swallowed packs back down to the bottom.
    fn permute(&self) -> u64 {
        let x = self.next;
        let low = x | (x - 1);
        let carry = low + 1;
        let tail = ((!low & carry) - 1) >> (x.trailing_zeros() + 1);
        carry | tail
    }

    fn current(&self) -> Subhand {
        let mut bits = self.next;
        std::array::from_fn(|_| {
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            self.cards[index]
        })
    }
}

impl Iterator for Subhands<'_> {
    type Item = Subhand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let subhand = self.current();
            self.next = self.permute();
            Some(subhand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let combos = self.combinations();
        (combos, Some(combos))
    }
}

/// the index bits are immutable and decided at construction.
/// indices live in a u64 mask, so slices of 64+ cards are out of range.
impl<'a> From<&'a [Card]> for Subhands<'a> {
    fn from(cards: &'a [Card]) -> Self {
        assert!(cards.len() < 64);
        Self {
            cards,
            next: (1 << crate::SUBHAND_SIZE) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn subhand(s: &str) -> Subhand {
        let cards = Vec::<Card>::from(Hand::try_from(s).unwrap());
        cards.try_into().unwrap()
    }

    #[test]
    fn six_choose_five() {
        let hand = Hand::try_from("2c 3c 4c 5c 6c 7c").unwrap();
        let mut iter = hand.subhands();
        assert_eq!(iter.next(), Some(subhand("2c 3c 4c 5c 6c")));
        assert_eq!(iter.next(), Some(subhand("2c 3c 4c 5c 7c")));
        assert_eq!(iter.next(), Some(subhand("2c 3c 4c 6c 7c")));
        assert_eq!(iter.next(), Some(subhand("2c 3c 5c 6c 7c")));
        assert_eq!(iter.next(), Some(subhand("2c 4c 5c 6c 7c")));
        assert_eq!(iter.next(), Some(subhand("3c 4c 5c 6c 7c")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn restarts_in_identical_order() {
        let hand = Hand::try_from("2c 2c ?? Th Th Jd Qs ??").unwrap();
        let once = hand.subhands().collect::<Vec<_>>();
        let twice = hand.subhands().collect::<Vec<_>>();
        assert_eq!(once.len(), 56);
        assert_eq!(once, twice);
    }

    #[test]
    fn short_hands_yield_nothing() {
        let hand = Hand::try_from("2c 3c 4c 5c").unwrap();
        assert_eq!(hand.subhands().combinations(), 0);
        assert_eq!(hand.subhands().next(), None);
    }

    #[test]
    fn exact_hands_yield_themselves() {
        let hand = Hand::try_from("2c 3c 4c 5c 6c").unwrap();
        let mut iter = hand.subhands();
        assert_eq!(iter.combinations(), 1);
        assert_eq!(iter.next(), Some(subhand("2c 3c 4c 5c 6c")));
        assert_eq!(iter.next(), None);
    }
}
