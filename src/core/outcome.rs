//! Result of evaluating one guess.

use serde::{Deserialize, Serialize};

/// Which way the secret lies relative to the last guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The secret is higher than the guess.
    Higher,
    /// The secret is lower than the guess.
    Lower,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Higher => write!(f, "Higher"),
            Direction::Lower => write!(f, "Lower"),
        }
    }
}

/// Outcome of a valid guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Wrong guess with attempts left.
    Continue { direction: Direction },
    /// Correct guess. `round_score` has been added to the session score.
    Won { round_score: u32, attempts_used: u32 },
    /// Last attempt used without finding the secret.
    Lost { secret: u32 },
}

impl Outcome {
    /// True if this outcome ends the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}
