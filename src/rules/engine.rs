//! Round engine: starting a round and evaluating guesses.
//!
//! ```
//! use number_guess::core::{Difficulty, Direction, FixedSecret, Outcome};
//! use number_guess::rules::{evaluate_guess, start_round};
//!
//! let state = start_round(Difficulty::Easy, 0, &mut FixedSecret(50));
//! let (state, outcome) = evaluate_guess(state, 25).unwrap();
//! assert_eq!(outcome, Outcome::Continue { direction: Direction::Higher });
//! assert_eq!(state.attempts_used(), 1);
//! ```

use std::cmp::Ordering;

use crate::core::config::{guess_range, Difficulty, POINTS_PER_ATTEMPT};
use crate::core::error::GuessError;
use crate::core::outcome::{Direction, Outcome};
use crate::core::rng::SecretSource;
use crate::core::state::{RoundState, RoundStatus};

/// Start a new round.
///
/// Draws a fresh secret from `source` and carries `score` over from the
/// previous round.
pub fn start_round<S: SecretSource + ?Sized>(
    difficulty: Difficulty,
    score: u32,
    source: &mut S,
) -> RoundState {
    let secret = source.draw_secret(guess_range());
    debug_assert!(
        guess_range().contains(&secret),
        "secret {secret} outside guess range"
    );
    RoundState::new(difficulty, secret, score)
}

/// Evaluate a guess, returning the updated state and the outcome.
///
/// On error the input state is dropped unchanged; callers holding a copy
/// keep using it.
pub fn evaluate_guess(
    mut state: RoundState,
    guess: i64,
) -> Result<(RoundState, Outcome), GuessError> {
    let outcome = state.evaluate(guess)?;
    Ok((state, outcome))
}

/// Points for winning on attempt `attempts_used` out of `max_attempts`.
///
/// `(max_attempts - attempts_used + 1) * 10`, clamped at zero. A win
/// can't happen past the budget, so the clamp never fires through
/// `evaluate_guess`.
#[must_use]
pub fn round_score(max_attempts: u32, attempts_used: u32) -> u32 {
    let spare = i64::from(max_attempts) - i64::from(attempts_used) + 1;
    let points = (spare * i64::from(POINTS_PER_ATTEMPT)).max(0);
    u32::try_from(points).unwrap_or(u32::MAX)
}

/// Check that a guess is within the playable range.
pub fn validate_guess(guess: i64) -> Result<u32, GuessError> {
    u32::try_from(guess)
        .ok()
        .filter(|g| guess_range().contains(g))
        .ok_or(GuessError::OutOfRange(guess))
}

impl RoundState {
    /// Evaluate a guess in place.
    ///
    /// Invalid guesses and guesses after the round ended leave the state
    /// untouched. Every other guess consumes exactly one attempt.
    pub fn evaluate(&mut self, guess: i64) -> Result<Outcome, GuessError> {
        if self.is_finished() {
            return Err(GuessError::RoundOver);
        }
        let guess = validate_guess(guess)?;

        self.attempts_used += 1;

        let outcome = match guess.cmp(&self.secret) {
            Ordering::Equal => {
                let round_score = round_score(self.max_attempts(), self.attempts_used);
                self.score = self.score.saturating_add(round_score);
                self.status = RoundStatus::Won;
                Outcome::Won {
                    round_score,
                    attempts_used: self.attempts_used,
                }
            }
            _ if self.attempts_used >= self.max_attempts() => {
                self.status = RoundStatus::Lost;
                Outcome::Lost {
                    secret: self.secret,
                }
            }
            Ordering::Less => Outcome::Continue {
                direction: Direction::Higher,
            },
            Ordering::Greater => Outcome::Continue {
                direction: Direction::Lower,
            },
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{FixedSecret, GameRng};

    fn round(difficulty: Difficulty, secret: u32) -> RoundState {
        start_round(difficulty, 0, &mut FixedSecret(secret))
    }

    #[test]
    fn test_start_round_sets_budget() {
        let mut rng = GameRng::new(42);
        for d in Difficulty::ALL {
            let state = start_round(d, 0, &mut rng);
            assert_eq!(state.max_attempts(), d.max_attempts());
            assert_eq!(state.attempts_used(), 0);
            assert_eq!(state.status(), RoundStatus::InProgress);
            assert!((1..=100).contains(&state.secret()));
        }
    }

    #[test]
    fn test_start_round_keeps_score() {
        let state = start_round(Difficulty::Hard, 140, &mut FixedSecret(3));
        assert_eq!(state.score(), 140);
    }

    #[test]
    fn test_higher_lower_won() {
        let state = round(Difficulty::Easy, 50);

        let (state, o1) = evaluate_guess(state, 25).unwrap();
        let (state, o2) = evaluate_guess(state, 75).unwrap();
        let (state, o3) = evaluate_guess(state, 50).unwrap();

        assert_eq!(
            o1,
            Outcome::Continue {
                direction: Direction::Higher
            }
        );
        assert_eq!(
            o2,
            Outcome::Continue {
                direction: Direction::Lower
            }
        );
        assert_eq!(
            o3,
            Outcome::Won {
                round_score: 80,
                attempts_used: 3
            }
        );
        assert_eq!(state.score(), 80);
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn test_lost_after_budget() {
        let mut state = round(Difficulty::Hard, 1);

        for _ in 0..4 {
            let outcome = state.evaluate(100).unwrap();
            assert!(!outcome.is_terminal());
        }
        let last = state.evaluate(100).unwrap();

        assert_eq!(last, Outcome::Lost { secret: 1 });
        assert_eq!(state.attempts_used(), 5);
        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_out_of_range_keeps_attempts() {
        let mut state = round(Difficulty::Easy, 50);

        assert_eq!(state.evaluate(0), Err(GuessError::OutOfRange(0)));
        assert_eq!(state.evaluate(101), Err(GuessError::OutOfRange(101)));
        assert_eq!(state.evaluate(-5), Err(GuessError::OutOfRange(-5)));
        assert_eq!(
            state.evaluate(i64::MAX),
            Err(GuessError::OutOfRange(i64::MAX))
        );
        assert_eq!(state.attempts_used(), 0);
    }

    #[test]
    fn test_win_on_last_attempt_scores_ten() {
        let mut state = round(Difficulty::Hard, 60);
        for _ in 0..4 {
            state.evaluate(1).unwrap();
        }

        let outcome = state.evaluate(60).unwrap();
        assert_eq!(
            outcome,
            Outcome::Won {
                round_score: 10,
                attempts_used: 5
            }
        );
    }

    #[test]
    fn test_first_guess_scores_full_budget() {
        let mut state = round(Difficulty::Medium, 9);
        let outcome = state.evaluate(9).unwrap();
        assert_eq!(
            outcome,
            Outcome::Won {
                round_score: 70,
                attempts_used: 1
            }
        );
    }

    #[test]
    fn test_finished_round_rejects_guesses() {
        let mut state = round(Difficulty::Easy, 10);
        state.evaluate(10).unwrap();
        let snapshot = state;

        assert_eq!(state.evaluate(10), Err(GuessError::RoundOver));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_round_score_clamps() {
        assert_eq!(round_score(10, 3), 80);
        assert_eq!(round_score(5, 5), 10);
        assert_eq!(round_score(5, 6), 0);
        assert_eq!(round_score(5, 50), 0);
    }

    #[test]
    fn test_validate_guess() {
        assert_eq!(validate_guess(1), Ok(1));
        assert_eq!(validate_guess(100), Ok(100));
        assert_eq!(validate_guess(0), Err(GuessError::OutOfRange(0)));
        assert_eq!(validate_guess(101), Err(GuessError::OutOfRange(101)));
    }
}
