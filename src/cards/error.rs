use thiserror::Error;

/// Rejections raised at the parsing and deck-building boundaries.
///
/// Inside the crate malformed cards are unrepresentable, so these only
/// surface when external input (hand literals, CLI arguments) is bad.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid rank character: {0:?}")]
    BadRank(char),

    #[error("invalid suit character: {0:?}")]
    BadSuit(char),

    #[error("invalid card literal: {0:?}")]
    BadCard(String),

    #[error("a deck requires at least one copy")]
    EmptyDeck,
}
