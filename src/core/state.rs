//! Round state.
//!
//! `RoundState` is the whole of the game's mutable state: the secret, the
//! attempt counter and budget, the cumulative session score and the round
//! status. It is a small `Copy` value. Fields are private so the only
//! transitions are the ones in `crate::rules`.
//!
//! ## Invariants
//!
//! - `attempts_used <= max_attempts`
//! - `secret` never changes during a round
//! - `status` only moves from `InProgress` to `Won` or `Lost`
//! - `score` never decreases

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{guess_range, Difficulty};

/// Where a round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// True once the round has been won or lost.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// State of a single round plus the session's cumulative score.
///
/// Deserialization goes through `RawRoundState` and is rejected unless
/// the invariants hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundState")]
pub struct RoundState {
    pub(crate) secret: u32,
    pub(crate) attempts_used: u32,
    pub(crate) difficulty: Difficulty,
    pub(crate) score: u32,
    pub(crate) status: RoundStatus,
}

impl RoundState {
    pub(crate) fn new(difficulty: Difficulty, secret: u32, score: u32) -> Self {
        Self {
            secret,
            attempts_used: 0,
            difficulty,
            score,
            status: RoundStatus::InProgress,
        }
    }

    /// The number being guessed.
    #[must_use]
    pub fn secret(&self) -> u32 {
        self.secret
    }

    /// Valid guesses evaluated so far this round.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Attempt budget for this round.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.difficulty.max_attempts()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> u32 {
        self.max_attempts().saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Cumulative score for the session, including this round if won.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

/// Why a deserialized round was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRoundState {
    #[error("secret {0} is outside 1..=100")]
    SecretOutOfRange(u32),
    #[error("{attempts_used} attempts used of {max_attempts}")]
    TooManyAttempts { attempts_used: u32, max_attempts: u32 },
    #[error("status {status:?} does not match {attempts_used} of {max_attempts} attempts")]
    StatusMismatch {
        status: RoundStatus,
        attempts_used: u32,
        max_attempts: u32,
    },
}

/// Unchecked wire form of `RoundState`.
#[derive(Deserialize)]
struct RawRoundState {
    secret: u32,
    attempts_used: u32,
    difficulty: Difficulty,
    score: u32,
    status: RoundStatus,
}

impl TryFrom<RawRoundState> for RoundState {
    type Error = InvalidRoundState;

    fn try_from(raw: RawRoundState) -> Result<Self, Self::Error> {
        if !guess_range().contains(&raw.secret) {
            return Err(InvalidRoundState::SecretOutOfRange(raw.secret));
        }

        let max_attempts = raw.difficulty.max_attempts();
        if raw.attempts_used > max_attempts {
            return Err(InvalidRoundState::TooManyAttempts {
                attempts_used: raw.attempts_used,
                max_attempts,
            });
        }

        // The last attempt always ends the round; a loss always uses it.
        let consistent = match raw.status {
            RoundStatus::InProgress => raw.attempts_used < max_attempts,
            RoundStatus::Won => raw.attempts_used > 0,
            RoundStatus::Lost => raw.attempts_used == max_attempts,
        };
        if !consistent {
            return Err(InvalidRoundState::StatusMismatch {
                status: raw.status,
                attempts_used: raw.attempts_used,
                max_attempts,
            });
        }

        Ok(Self {
            secret: raw.secret,
            attempts_used: raw.attempts_used,
            difficulty: raw.difficulty,
            score: raw.score,
            status: raw.status,
        })
    }
}
