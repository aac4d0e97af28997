use serde::Deserialize;
use serde::Serialize;

/// what a mod does when it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    DrawOne,
    SwapCard,
    GainChips,
}

/// when a mod triggers: during play for the holder, or at payout for the
/// round winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    Player,
    Payout,
}

/// a modifier card. short-dealt hands are padded up to full size with
/// these instead of real cards, so a weak deal comes with compensation.
/// burn-on-use mods are removed from the master deck after they trigger
/// and never come back in later rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModCard {
    pub name: String,
    pub description: String,
    pub effect: Effect,
    pub kind: Kind,
    pub flavor: String,
    pub rarity: String,
    pub burn_on_use: bool,
}

impl ModCard {
    /// the three-card starting mod deck
    pub fn standard_deck() -> Vec<Self> {
        vec![
            Self {
                name: "Extra Draw".to_string(),
                description: "Draw 1 card".to_string(),
                effect: Effect::DrawOne,
                kind: Kind::Player,
                flavor: "Pawn".to_string(),
                rarity: "Common".to_string(),
                burn_on_use: false,
            },
            Self {
                name: "Sneaky Swap".to_string(),
                description: "Swap a card with opponent".to_string(),
                effect: Effect::SwapCard,
                kind: Kind::Player,
                flavor: "Pawn".to_string(),
                rarity: "Uncommon".to_string(),
                burn_on_use: false,
            },
            Self {
                name: "Royal Dividend".to_string(),
                description: "Gain +3 chips".to_string(),
                effect: Effect::GainChips,
                kind: Kind::Payout,
                flavor: "Queen".to_string(),
                rarity: "Uncommon".to_string(),
                burn_on_use: false,
            },
        ]
    }
}

impl std::fmt::Display for ModCard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
