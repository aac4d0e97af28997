use super::character::Character;
use super::character::Role;
use super::error::SimError;
use super::mods::Effect;
use super::mods::ModCard;
use crate::Chips;
use crate::Points;
use crate::cards::category::Category;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::classify::classify_best;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// one character's standing at the table. hands and held mods are
/// transient round state; chips and points persist between rounds.
#[derive(Debug, Clone)]
pub struct Seat {
    pub character: Character,
    pub hand: Hand,
    pub mods: Vec<ModCard>,
    pub chips: Chips,
    pub points: Points,
}

impl From<Character> for Seat {
    fn from(character: Character) -> Self {
        Self {
            chips: character.stack,
            points: 0,
            hand: Hand::empty(),
            mods: Vec::new(),
            character,
        }
    }
}

/// what one played round settled on: the grade each seat ended with and
/// the seat that took it, ties going to the earliest seat. a seat whose
/// hand got picked below five cards grades to nothing and cannot win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: usize,
    pub grades: Vec<Option<Category>>,
    pub winner: Option<(usize, Category)>,
}

/// the full table: seats in dealing order plus the master mod deck.
/// every round rebuilds the card deck from scratch (one copy per seat)
/// but the mod deck persists, so burned mods stay gone for good.
pub struct Table {
    seats: Vec<Seat>,
    mods: Vec<ModCard>,
    rounds: usize,
}

impl Table {
    pub fn new(characters: Vec<Character>) -> Result<Self, SimError> {
        match characters.len() {
            n if n < 2 => Err(SimError::NotEnoughSeats(n)),
            _ => Ok(Self {
                seats: characters.into_iter().map(Seat::from).collect(),
                mods: ModCard::standard_deck(),
                rounds: 0,
            }),
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// play one full round: deal, trigger mods, fire abilities, grade
    /// every hand, and settle points and chips on the winner.
    pub fn play(&mut self, rng: &mut impl Rng) -> Result<Round, SimError> {
        self.rounds += 1;
        log::info!("--- round {} ---", self.rounds);
        let mut deck = self.deal(rng)?;
        self.draws(&mut deck);
        self.swaps(rng);
        self.abilities(rng);
        self.burns();
        let grades = self.grades();
        let winner = Self::winner(&grades);
        self.payout(winner);
        Ok(Round {
            number: self.rounds,
            grades,
            winner,
        })
    }

    /// deal each seat 5 to 8 real cards off a fresh shuffled deck, then
    /// pad short hands up to full size from the shuffled mod deck.
    fn deal(&mut self, rng: &mut impl Rng) -> Result<Deck, SimError> {
        let mut deck = Deck::new(self.seats.len())?;
        deck.shuffle(rng);
        let mut mods = self.mods.clone();
        mods.shuffle(rng);
        for seat in self.seats.iter_mut() {
            seat.hand = Hand::empty();
            seat.mods.clear();
            let reals = rng.random_range(crate::DEAL_MIN..=crate::HAND_SIZE);
            let reals = std::cmp::min(reals, deck.remaining());
            for _ in 0..reals {
                if let Some(card) = deck.draw() {
                    seat.hand.add(card);
                }
            }
            let short = crate::HAND_SIZE.saturating_sub(seat.hand.size());
            let short = std::cmp::min(short, mods.len());
            for _ in 0..short {
                if let Some(card) = mods.pop() {
                    seat.mods.push(card);
                }
            }
            log::info!("{:<24}dealt   {}", seat.character.name, seat.hand);
            for card in seat.mods.iter() {
                log::info!("{:<24}holds   {}", seat.character.name, card);
            }
        }
        Ok(deck)
    }

    /// every Draw One mod pulls another card off the round's deck
    fn draws(&mut self, deck: &mut Deck) {
        for seat in self.seats.iter_mut() {
            let draws = seat.mods.iter().filter(|m| m.effect == Effect::DrawOne).count();
            for _ in 0..draws {
                if let Some(card) = deck.draw() {
                    log::info!("{:<24}draws   {}", seat.character.name, card);
                    seat.hand.add(card);
                }
            }
        }
    }

    /// every Swap Card mod trades a random card for a random opponent's.
    /// nothing happens when either side has no cards left to give.
    fn swaps(&mut self, rng: &mut impl Rng) {
        for i in 0..self.seats.len() {
            let swaps = self.seats[i].mods.iter().filter(|m| m.effect == Effect::SwapCard).count();
            for _ in 0..swaps {
                let j = self.opponent(i, rng);
                if self.seats[i].hand.is_empty() || self.seats[j].hand.is_empty() {
                    continue;
                }
                let a = rng.random_range(0..self.seats[i].hand.size());
                let b = rng.random_range(0..self.seats[j].hand.size());
                let mine = self.seats[i].hand.take(a);
                let theirs = self.seats[j].hand.take(b);
                log::info!(
                    "{:<24}swaps   {} for {}'s {}",
                    self.seats[i].character.name,
                    mine,
                    self.seats[j].character.name,
                    theirs
                );
                self.seats[i].hand.add(theirs);
                self.seats[j].hand.add(mine);
            }
        }
    }

    /// class abilities, in seat order. Rogues steal up to two cards from
    /// opponents who still have any; Knights peek at one opponent card;
    /// Paupers collect at payout instead.
    fn abilities(&mut self, rng: &mut impl Rng) {
        for i in 0..self.seats.len() {
            match self.seats[i].character.role {
                Role::Rogue => {
                    for _ in 0..crate::ROGUE_STEALS {
                        let marks = (0..self.seats.len())
                            .filter(|&j| j != i)
                            .filter(|&j| !self.seats[j].hand.is_empty())
                            .collect::<Vec<_>>();
                        let Some(&j) = marks.choose(rng) else { break };
                        let b = rng.random_range(0..self.seats[j].hand.size());
                        let stolen = self.seats[j].hand.take(b);
                        log::info!(
                            "{:<24}steals  {} from {}",
                            self.seats[i].character.name,
                            stolen,
                            self.seats[j].character.name
                        );
                        self.seats[i].hand.add(stolen);
                    }
                }
                Role::Knight => {
                    let j = self.opponent(i, rng);
                    if let Some(card) = self.seats[j].hand.cards().choose(rng) {
                        log::info!(
                            "{:<24}reveals {}'s {}",
                            self.seats[i].character.name,
                            self.seats[j].character.name,
                            card
                        );
                    }
                }
                Role::Pauper => {}
            }
        }
    }

    /// spend held burn-on-use mods out of the master deck
    fn burns(&mut self) {
        for seat in self.seats.iter() {
            for held in seat.mods.iter().filter(|m| m.burn_on_use) {
                if let Some(position) = self.mods.iter().position(|m| m == held) {
                    log::info!("{:<24}burned from the mod deck", held.name);
                    self.mods.remove(position);
                }
            }
        }
    }

    fn grades(&self) -> Vec<Option<Category>> {
        self.seats
            .iter()
            .map(|seat| {
                let grade = classify_best(&seat.hand);
                match grade {
                    Some(grade) => log::info!("{:<24}shows   {}", seat.character.name, grade),
                    None => log::info!("{:<24}cannot show a hand", seat.character.name),
                }
                grade
            })
            .collect()
    }

    fn winner(grades: &[Option<Category>]) -> Option<(usize, Category)> {
        grades
            .iter()
            .enumerate()
            .filter_map(|(i, grade)| grade.map(|g| (i, g)))
            .max_by_key(|&(i, grade)| (grade, std::cmp::Reverse(i)))
    }

    /// points to the winner, dividends on the winner's payout mods, and
    /// the blind refund to every Pauper who lost
    fn payout(&mut self, winner: Option<(usize, Category)>) {
        let Some((index, grade)) = winner else {
            log::info!("nobody could show a hand");
            return;
        };
        let points = grade.points();
        self.seats[index].points += points;
        log::info!(
            "{:<24}wins    {} point(s) with {}",
            self.seats[index].character.name,
            points,
            grade
        );
        let dividends = self.seats[index]
            .mods
            .iter()
            .filter(|m| m.effect == Effect::GainChips)
            .map(|m| m.name.clone())
            .collect::<Vec<_>>();
        for name in dividends {
            self.seats[index].chips += crate::DIVIDEND;
            log::info!(
                "{:<24}collects {} chips from {}",
                self.seats[index].character.name,
                crate::DIVIDEND,
                name
            );
        }
        for (i, seat) in self.seats.iter_mut().enumerate() {
            if seat.character.role == Role::Pauper && i != index {
                seat.chips += crate::REFUND;
                log::info!("{:<24}refunds {} blind chip", seat.character.name, crate::REFUND);
            }
        }
    }

    /// a uniformly random seat other than this one
    fn opponent(&self, index: usize, rng: &mut impl Rng) -> usize {
        let j = rng.random_range(0..self.seats.len() - 1);
        if j >= index { j + 1 } else { j }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn table() -> Table {
        Table::new(Character::standard()).unwrap()
    }

    #[test]
    fn tables_demand_company() {
        assert!(matches!(Table::new(vec![]), Err(SimError::NotEnoughSeats(0))));
        let one = vec![Character::standard().remove(0)];
        assert!(matches!(Table::new(one), Err(SimError::NotEnoughSeats(1))));
    }

    #[test]
    fn deal_pads_short_hands_with_mods() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut table = table();
        let _deck = table.deal(&mut rng).unwrap();
        for seat in table.seats() {
            assert!(seat.hand.size() >= crate::DEAL_MIN);
            assert!(seat.hand.size() <= crate::HAND_SIZE);
            assert!(seat.hand.size() + seat.mods.len() <= crate::HAND_SIZE);
        }
        let held = table.seats().iter().map(|s| s.mods.len()).sum::<usize>();
        assert!(held <= table.mods.len());
    }

    #[test]
    fn steals_and_swaps_conserve_cards() {
        let mut rng = SmallRng::seed_from_u64(13);
        let mut table = table();
        table.seats[0].mods.push(ModCard::standard_deck().remove(1));
        for (i, s) in ["2c 3c 4c 5c", "5d 6d 7d", "8h 9h Th"].iter().enumerate() {
            table.seats[i].hand = Hand::try_from(*s).unwrap();
        }
        let census = |table: &Table| {
            let mut cards = table
                .seats()
                .iter()
                .flat_map(|s| s.hand.cards().iter().copied().map(u8::from))
                .collect::<Vec<_>>();
            cards.sort();
            cards
        };
        let before = census(&table);
        table.swaps(&mut rng);
        table.abilities(&mut rng);
        assert_eq!(census(&table), before);
    }

    #[test]
    fn rounds_accumulate_points() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut table = table();
        for n in 1..=8 {
            let round = table.play(&mut rng).unwrap();
            assert_eq!(round.number, n);
            assert!(round.winner.is_some());
        }
        let points = table.seats().iter().map(|s| s.points as usize).sum::<usize>();
        assert!(points >= 8);
        assert!(points <= 16);
    }

    #[test]
    fn chips_never_fall_below_the_stack() {
        // nothing in the current rules spends chips
        let mut rng = SmallRng::seed_from_u64(11);
        let mut table = table();
        for _ in 0..12 {
            table.play(&mut rng).unwrap();
        }
        assert!(table.seats().iter().all(|s| s.chips >= crate::STACK));
    }

    #[test]
    fn payout_pays_exact_chip_amounts() {
        let mut table = table();
        let dividend = ModCard::standard_deck()
            .into_iter()
            .find(|m| m.effect == Effect::GainChips)
            .unwrap();
        table.seats[0].mods.push(dividend.clone());
        table.seats[2].mods.push(dividend); // losers collect nothing
        assert_eq!(table.seats[1].character.role, Role::Pauper);
        table.payout(Some((0, Category::OnePair)));
        assert_eq!(table.seats[0].chips, crate::STACK + crate::DIVIDEND);
        assert_eq!(table.seats[0].points, crate::POINTS_WIN);
        assert_eq!(table.seats[1].chips, crate::STACK + crate::REFUND);
        assert_eq!(table.seats[2].chips, crate::STACK);
    }

    #[test]
    fn dividends_stack_per_mod_held() {
        let mut table = table();
        let dividend = ModCard::standard_deck()
            .into_iter()
            .find(|m| m.effect == Effect::GainChips)
            .unwrap();
        table.seats[2].mods.push(dividend.clone());
        table.seats[2].mods.push(dividend);
        table.payout(Some((2, Category::Flush)));
        assert_eq!(table.seats[2].chips, crate::STACK + 2 * crate::DIVIDEND);
    }

    #[test]
    fn winning_pauper_forfeits_the_refund() {
        let mut table = table();
        assert_eq!(table.seats[1].character.role, Role::Pauper);
        table.payout(Some((1, Category::FlushFive)));
        assert_eq!(table.seats[1].chips, crate::STACK);
        assert_eq!(table.seats[1].points, crate::POINTS_TOP);
        assert_eq!(table.seats[0].chips, crate::STACK);
        assert_eq!(table.seats[2].chips, crate::STACK);
    }

    #[test]
    fn winner_takes_the_earliest_tied_seat() {
        let grades = vec![Some(Category::OnePair), Some(Category::OnePair)];
        assert_eq!(Table::winner(&grades), Some((0, Category::OnePair)));
        let grades = vec![Some(Category::HighCard), Some(Category::FlushFive)];
        assert_eq!(Table::winner(&grades), Some((1, Category::FlushFive)));
    }

    #[test]
    fn unclassified_seats_cannot_win() {
        let grades = vec![None, Some(Category::HighCard)];
        assert_eq!(Table::winner(&grades), Some((1, Category::HighCard)));
        assert_eq!(Table::winner(&[None, None]), None);
    }

    #[test]
    fn burns_spend_the_master_deck() {
        let mut table = table();
        let mut burner = ModCard::standard_deck().remove(2);
        burner.burn_on_use = true;
        table.mods.push(burner.clone());
        table.seats[0].mods.push(burner);
        let before = table.mods.len();
        table.burns();
        assert_eq!(table.mods.len(), before - 1);
        table.burns();
        assert_eq!(table.mods.len(), before - 1);
    }

    #[test]
    fn seeded_rounds_are_reproducible() {
        let mut a = table();
        let mut b = table();
        let ra = a.play(&mut SmallRng::seed_from_u64(9)).unwrap();
        let rb = b.play(&mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(ra, rb);
    }
}
