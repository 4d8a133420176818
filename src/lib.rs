//! # number-guess
//!
//! A number guessing game: pick a difficulty, guess a secret in 1..=100,
//! get higher/lower hints until you find it or run out of attempts.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The whole game is one `RoundState` value. It is
//!    created by `start_round` and changed only by `evaluate_guess`.
//!
//! 2. **Injected Randomness**: Secrets come from a `SecretSource`. Seeded
//!    `GameRng` makes sessions reproducible; `FixedSecret` pins the secret
//!    in tests.
//!
//! 3. **Front End Agnostic**: The engine returns values. Rendering is the
//!    caller's job; `shell` is one such caller.
//!
//! ## Modules
//!
//! - `core`: Difficulty, configuration, RNG, round state, outcomes, errors
//! - `rules`: Starting rounds, evaluating and parsing guesses, scoring
//! - `session`: Score and tallies across rounds
//! - `shell`: Line-oriented terminal front end

pub mod core;
pub mod rules;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, SessionConfig,
    GameRng, SecretSource, FixedSecret,
    RoundState, RoundStatus,
    Outcome, Direction,
    GuessError,
};

pub use crate::rules::{evaluate_guess, parse_guess, round_score, start_round};

pub use crate::session::{Session, SessionSummary};

pub use crate::shell::{Shell, ShellError};
