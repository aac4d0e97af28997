pub mod card;
pub use card::*;

pub mod category;
pub use category::*;

pub mod deck;
pub use deck::*;

pub mod error;
pub use error::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod subhands;
pub use subhands::*;

pub mod suit;
pub use suit::*;
