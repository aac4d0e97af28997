/// the category of a single 5-card subhand, taken under the best possible
/// assignment of its wildcards. scans the table from the top down and
/// stops at the first category the jokers can complete, so priority is
/// positional and never probabilistic.
pub fn classify(subhand: Subhand) -> Category {
    Tally::from(subhand).category()
}

/// the best category across every 5-card subhand of a hand. a hand with
/// fewer than five cards has no subhands and classifies to nothing at
/// all, which is not the same thing as the High Card floor.
pub fn classify_best(hand: &Hand) -> Option<Category> {
    hand.subhands().map(classify).max()
}

use super::tally::Tally;
use crate::cards::category::Category;
use crate::cards::hand::Hand;
use crate::cards::subhands::Subhand;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn best(s: &str) -> Option<Category> {
        classify_best(&Hand::try_from(s).unwrap())
    }

    #[test]
    fn natural_royal_flush() {
        assert_eq!(best("Ts Js Qs Ks As"), Some(Category::RoyalFlush));
    }

    #[test]
    fn wildcard_caps_the_run() {
        assert_eq!(best("9s Ts Js Qs ??"), Some(Category::StraightFlush));
    }

    #[test]
    fn boat_without_wildcards() {
        assert_eq!(best("7h 7d 7c 2s 2h"), Some(Category::FullHouse));
    }

    #[test]
    fn two_wildcards_complete_five_of_a_kind() {
        assert_eq!(best("3s 3h 3d ?? ??"), Some(Category::FiveOfAKind));
    }

    #[test]
    fn scattered_ranks_floor_at_trips() {
        assert_eq!(best("2s 5h 9d ?? ??"), Some(Category::ThreeOfAKind));
    }

    #[test]
    fn short_hands_classify_to_nothing() {
        assert_eq!(best("2s 3h 4d 5c"), None);
        assert_eq!(best(""), None);
    }

    #[test]
    fn best_subhand_wins() {
        assert_eq!(
            best("2c 7d Ts Js Qs Ks As 3h"),
            Some(Category::RoyalFlush)
        );
    }

    #[test]
    fn oversized_hands_still_classify() {
        // ten cards is outside the dealing rules but inside the engine
        assert_eq!(
            best("2c 7d Ts Js Qs Ks As 3h 4h 5h"),
            Some(Category::RoyalFlush)
        );
    }

    #[test]
    fn priority_is_positional() {
        // a suited even run is simultaneously a Flush, an Even Straight,
        // and a Skipping Straight; the table position decides.
        assert_eq!(best("2s 4s 6s 8s Ts"), Some(Category::SkippingStraight));
    }

    #[test]
    fn classification_is_pure() {
        let hand = Hand::try_from("2c 2c ?? Th Th Jd Qs ??").unwrap();
        assert_eq!(classify_best(&hand), classify_best(&hand));
        let subhand = Subhand::try_from(Vec::<Card>::from(
            Hand::try_from("2c 2c ?? Th Th").unwrap(),
        ))
        .unwrap();
        assert_eq!(classify(subhand), classify(subhand));
    }

    #[test]
    fn wildcards_never_classify_worse() {
        // swapping a concrete card for a joker preserves every completion
        // except a Rainbow Straight, which demands exactly one joker.
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..64 {
            let mut deck = Deck::new(1).unwrap();
            deck.shuffle(&mut rng);
            let cards = deck.take(crate::HAND_SIZE).collect::<Vec<_>>();
            let grade = classify_best(&Hand::from(cards.clone())).unwrap();
            if grade == Category::RainbowStraight {
                continue;
            }
            for i in 0..cards.len() {
                let mut wilder = cards.clone();
                wilder[i] = Card::Joker;
                let regrade = classify_best(&Hand::from(wilder)).unwrap();
                assert!(regrade >= grade, "{} fell to {}", grade, regrade);
            }
        }
    }
}
