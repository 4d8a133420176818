//! Per-session tallies.

use serde::{Deserialize, Serialize};

use crate::core::outcome::Outcome;

/// Totals across all finished rounds in a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Rounds that ended in a win or a loss.
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    /// Cumulative score.
    pub total_score: u32,
    /// Highest single-round score, 0 if nothing was won.
    pub best_round_score: u32,
}

impl SessionSummary {
    /// Fold a terminal outcome into the tallies. `Continue` is ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match *outcome {
            Outcome::Won { round_score, .. } => {
                self.rounds_played += 1;
                self.rounds_won += 1;
                self.total_score = self.total_score.saturating_add(round_score);
                self.best_round_score = self.best_round_score.max(round_score);
            }
            Outcome::Lost { .. } => {
                self.rounds_played += 1;
                self.rounds_lost += 1;
            }
            Outcome::Continue { .. } => {}
        }
    }

    /// Fraction of played rounds that were won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            return 0.0;
        }
        f64::from(self.rounds_won) / f64::from(self.rounds_played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outcome::Direction;

    #[test]
    fn test_record() {
        let mut summary = SessionSummary::default();

        summary.record(&Outcome::Continue {
            direction: Direction::Lower,
        });
        assert_eq!(summary, SessionSummary::default());

        summary.record(&Outcome::Won {
            round_score: 80,
            attempts_used: 3,
        });
        summary.record(&Outcome::Lost { secret: 12 });
        summary.record(&Outcome::Won {
            round_score: 30,
            attempts_used: 5,
        });

        assert_eq!(summary.rounds_played, 3);
        assert_eq!(summary.rounds_won, 2);
        assert_eq!(summary.rounds_lost, 1);
        assert_eq!(summary.total_score, 110);
        assert_eq!(summary.best_round_score, 80);
    }

    #[test]
    fn test_win_rate() {
        let mut summary = SessionSummary::default();
        assert_eq!(summary.win_rate(), 0.0);

        summary.record(&Outcome::Won {
            round_score: 10,
            attempts_used: 5,
        });
        summary.record(&Outcome::Lost { secret: 1 });
        assert!((summary.win_rate() - 0.5).abs() < 1e-9);
    }
}
