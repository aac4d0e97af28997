pub mod character;
pub use character::*;

pub mod error;
pub use error::*;

pub mod mods;
pub use mods::*;

pub mod odds;
pub use odds::*;

pub mod round;
pub use round::*;
