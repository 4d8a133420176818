//! Core game types: configuration, RNG, round state, outcomes, errors.
//!
//! These are plain data types. The transitions between them live in
//! `crate::rules`.

pub mod config;
pub mod error;
pub mod outcome;
pub mod rng;
pub mod state;

pub use config::{
    guess_range, Difficulty, ParseDifficultyError, SessionConfig, MAX_GUESS, MIN_GUESS,
    POINTS_PER_ATTEMPT,
};
pub use error::GuessError;
pub use outcome::{Direction, Outcome};
pub use rng::{FixedSecret, GameRng, SecretSource};
pub use state::{InvalidRoundState, RoundState, RoundStatus};
