//! Game configuration types.
//!
//! - `Difficulty`: the three attempt-budget presets
//! - `SessionConfig`: seed and optional fixed difficulty for a session
//!
//! The guessing range and the points awarded per attempt are fixed
//! constants; they are not configurable.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest valid guess and secret.
pub const MIN_GUESS: u32 = 1;

/// Largest valid guess and secret.
pub const MAX_GUESS: u32 = 100;

/// Points awarded per attempt left over (counting the winning one).
pub const POINTS_PER_ATTEMPT: u32 = 10;

/// The inclusive range secrets are drawn from and guesses must fall in.
#[must_use]
pub fn guess_range() -> RangeInclusive<u32> {
    MIN_GUESS..=MAX_GUESS
}

/// Difficulty preset. Fixes the attempt budget for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 10 attempts.
    Easy,
    /// 7 attempts.
    Medium,
    /// 5 attempts.
    Hard,
}

impl Difficulty {
    /// All presets in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Attempt budget for this preset.
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    /// Look up the preset with the given attempt budget.
    #[must_use]
    pub fn from_max_attempts(max_attempts: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.max_attempts() == max_attempts)
    }

    /// Short name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 1-based position in the start menu.
    #[must_use]
    pub const fn menu_number(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} attempts)", self.name(), self.max_attempts())
    }
}

/// Error returned when a difficulty name can't be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty `{0}` (expected easy, medium, hard or 1-3)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Accepts `easy`/`medium`/`hard` in any case, or menu numbers `1`-`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(trimmed.to_string())),
        }
    }
}

/// Session configuration.
///
/// ```
/// use number_guess::core::{Difficulty, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_seed(7)
///     .with_difficulty(Difficulty::Hard);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Play every round at this difficulty instead of asking.
    pub difficulty: Option<Difficulty>,
}

impl SessionConfig {
    /// Use a fixed seed for reproducible secrets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Skip the difficulty menu.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}
