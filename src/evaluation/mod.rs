pub mod classify;
pub use classify::*;

pub mod tally;
pub use tally::*;
