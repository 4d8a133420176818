//! Round rules.
//!
//! - `start_round`: draw a secret and reset the attempt counter
//! - `evaluate_guess`: consume an attempt and decide Continue/Won/Lost
//! - `parse_guess`: turn raw text into a guess or an input error
//!
//! All of it is synchronous and side-effect free apart from the
//! injected `SecretSource`.

pub mod engine;
pub mod input;

pub use engine::{evaluate_guess, round_score, start_round, validate_guess};
pub use input::parse_guess;
