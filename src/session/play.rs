//! Session: the one owner of the random source, score and current round.

use tracing::{debug, info, trace};

use crate::core::config::{Difficulty, SessionConfig};
use crate::core::error::GuessError;
use crate::core::outcome::Outcome;
use crate::core::rng::{GameRng, SecretSource};
use crate::core::state::RoundState;
use crate::rules::{parse_guess, start_round};

use super::summary::SessionSummary;

/// A play session spanning any number of rounds.
///
/// Score accumulates across rounds and is only reset by creating a new
/// session.
#[derive(Clone, Debug)]
pub struct Session<S = GameRng> {
    source: S,
    round: Option<RoundState>,
    last_guess: Option<i64>,
    summary: SessionSummary,
}

impl Session<GameRng> {
    /// Build a session from configuration, seeding from entropy when no
    /// seed is given.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "session rng ready");
        Self::new(rng)
    }

    /// Seed used for this session's secrets.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: SecretSource> Session<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            round: None,
            last_guess: None,
            summary: SessionSummary::default(),
        }
    }

    /// Start a new round, replacing the current one. Score carries over.
    pub fn start_round(&mut self, difficulty: Difficulty) -> RoundState {
        if let Some(round) = self.round.filter(|r| !r.is_finished()) {
            debug!(
                attempts_used = round.attempts_used(),
                "abandoning unfinished round"
            );
        }

        let round = start_round(difficulty, self.score(), &mut self.source);
        info!(%difficulty, score = round.score(), "round started");
        trace!(secret = round.secret(), "secret drawn");

        self.round = Some(round);
        self.last_guess = None;
        round
    }

    /// Parse `text` and evaluate it against the current round.
    pub fn submit(&mut self, text: &str) -> Result<Outcome, GuessError> {
        if self.round.is_none() {
            return Err(GuessError::NoActiveRound);
        }
        let guess = parse_guess(text).map_err(|e| {
            debug!(input = text.trim(), error = %e, "guess rejected");
            e
        })?;
        self.guess(guess)
    }

    /// Evaluate an already-parsed guess against the current round.
    pub fn guess(&mut self, guess: i64) -> Result<Outcome, GuessError> {
        let round = self.round.as_mut().ok_or(GuessError::NoActiveRound)?;
        let outcome = round.evaluate(guess)?;
        let (attempts_used, max_attempts) = (round.attempts_used(), round.max_attempts());
        self.last_guess = Some(guess);

        debug!(guess, attempts_used, max_attempts, ?outcome, "guess evaluated");
        if outcome.is_terminal() {
            self.summary.record(&outcome);
            info!(?outcome, score = self.score(), "round finished");
        }
        Ok(outcome)
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.summary.total_score
    }

    /// Last guess that consumed an attempt in the current round.
    #[must_use]
    pub fn last_guess(&self) -> Option<i64> {
        self.last_guess
    }

    /// The round being played, or the last one finished.
    #[must_use]
    pub fn current_round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }
}
