use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Could not reach the trivia catalog: {0}")]
    Transport(String),
    #[error("Only {found} of {needed} categories had enough clues")]
    InsufficientCategories { found: u8, needed: u8 },
    #[error("Cell does not exist on this board")]
    InvalidCell,
}

pub type Result<T> = core::result::Result<T, GameError>;
