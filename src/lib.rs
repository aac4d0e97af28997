//! Hand classification engine and round simulator for an exotic poker variant
//! played with wildcards and multiple deck copies.
//!
//! The interesting work happens in `evaluation`: every 5-card subset of a
//! dealt hand is scored against a 19-category table that extends the standard
//! poker ladder with "illegal" hands (Flush Five, Rainbow Straight, ...), and
//! wildcards are resolved by satisfiability rather than enumeration of
//! assignments. `cards` holds the domain types and `sim` drives full rounds
//! and Monte Carlo odds estimates on top of the classifier.

pub mod cards;
pub mod evaluation;
pub mod sim;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip balances and payouts.
pub type Chips = i16;
/// Round points awarded to winners.
pub type Points = u16;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK AND HAND SHAPE
// ============================================================================
/// Concrete cards in one standard deck copy.
pub const DECK_SIZE: usize = 52;
/// Wildcards shuffled into each deck copy.
pub const JOKERS_PER_DECK: usize = 2;
/// Cards in a full dealt hand.
pub const HAND_SIZE: usize = 8;
/// Cards in an evaluated subhand.
pub const SUBHAND_SIZE: usize = 5;
/// Fewest real cards a seat may be dealt in a round.
pub const DEAL_MIN: usize = 5;

// ============================================================================
// ROUND RULES
// ============================================================================
/// Chips every character starts with.
pub const STACK: Chips = 100;
/// Points for winning with Flush Five or Five of a Kind.
pub const POINTS_TOP: Points = 2;
/// Points for winning with anything else.
pub const POINTS_WIN: Points = 1;
/// Chips granted by each payout mod the winner holds.
pub const DIVIDEND: Chips = 3;
/// Blind refund for a Pauper who did not win the round.
pub const REFUND: Chips = 1;
/// Cards a Rogue may steal per round.
pub const ROGUE_STEALS: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging for the CLI binaries.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
