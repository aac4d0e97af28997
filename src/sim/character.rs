use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// a character's class decides its once-per-round table ability.
/// Rogues steal, Knights peek, Paupers get their blind back when they lose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Rogue,
    Pauper,
    Knight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: Role,
    /// flavor text on the card. never applied to the dealt deck.
    pub deck_modifier: Option<String>,
    pub ability: String,
    pub stack: Chips,
}

impl Character {
    /// the three-character starting roster
    pub fn standard() -> Vec<Self> {
        vec![
            Self {
                name: "Scruffy McMuffins".to_string(),
                role: Role::Rogue,
                deck_modifier: None,
                ability: "Steal 1 opponent card 2x per round".to_string(),
                stack: crate::STACK,
            },
            Self {
                name: "Patches".to_string(),
                role: Role::Pauper,
                deck_modifier: Some("Remove face cards".to_string()),
                ability: "Blind money refunded".to_string(),
                stack: crate::STACK,
            },
            Self {
                name: "Sir Whiskers".to_string(),
                role: Role::Knight,
                deck_modifier: None,
                ability: "Reveal opponent card once per round".to_string(),
                stack: crate::STACK,
            },
        ]
    }
}
