use super::error::SimError;
use crate::cards::category::Category;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::evaluation::classify::classify_best;
use rand::Rng;
use serde::Serialize;

/// Monte Carlo estimation of category frequencies. each trial shuffles a
/// fresh deck (one copy per player), deals every player a full hand, and
/// grades them all; the per-hand counts converge on the dealing odds the
/// design leans on when pricing the exotic categories.
#[derive(Debug, Clone, Copy)]
pub struct Odds {
    pub trials: usize,
    pub players: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub category: Category,
    pub count: usize,
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub trials: usize,
    pub players: usize,
    pub hands: usize,
    pub exotic_rounds: usize,
    pub exotic_rate: f64,
    pub categories: Vec<Estimate>,
}

impl Odds {
    pub fn run(&self, rng: &mut impl Rng) -> Result<Report, SimError> {
        if self.trials == 0 {
            return Err(SimError::NoTrials);
        }
        if self.players == 0 {
            return Err(SimError::NoPlayers);
        }
        let mut counts = [0usize; 19];
        let mut exotic_rounds = 0;
        for _ in 0..self.trials {
            let mut deck = Deck::new(self.players)?;
            deck.shuffle(rng);
            let mut exotic = false;
            for _ in 0..self.players {
                let cards = deck.by_ref().take(crate::HAND_SIZE).collect::<Vec<_>>();
                let grade = classify_best(&Hand::from(cards)).expect("full hands always grade");
                exotic |= grade.is_exotic();
                counts[u8::from(grade) as usize] += 1;
            }
            exotic_rounds += exotic as usize;
        }
        let hands = self.trials * self.players;
        Ok(Report {
            trials: self.trials,
            players: self.players,
            hands,
            exotic_rounds,
            exotic_rate: exotic_rounds as f64 / self.trials as f64,
            categories: Category::all()
                .into_iter()
                .zip(counts)
                .map(|(category, count)| Estimate {
                    category,
                    count,
                    frequency: count as f64 / hands as f64,
                })
                .collect(),
        })
    }
}
