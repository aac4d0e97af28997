use crate::cards::error::CardError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("a table needs at least two seats, got {0}")]
    NotEnoughSeats(usize),
    #[error("odds estimation needs at least one player")]
    NoPlayers,
    #[error("odds estimation needs at least one trial")]
    NoTrials,
    #[error(transparent)]
    Card(#[from] CardError),
}
