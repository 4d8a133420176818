//! Errors reported while evaluating a guess.
//!
//! None of these are fatal. The `InvalidInput` kind (`Empty`, `NotANumber`,
//! `OutOfRange`) is recovered by re-prompting without consuming an attempt.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter a number.")]
    Empty,
    #[error("Enter a valid number!")]
    NotANumber(String),
    #[error("Number must be between 1 and 100.")]
    OutOfRange(i64),
    #[error("The round is already over")]
    RoundOver,
    #[error("No round has been started")]
    NoActiveRound,
}

impl GuessError {
    /// True for rejected user input; the caller should re-prompt.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GuessError::Empty | GuessError::NotANumber(_) | GuessError::OutOfRange(_)
        )
    }
}
