//! Terminal front end.
//!
//! Renders the difficulty menu, reads guesses line by line, prints
//! feedback and asks whether to play again. Generic over its reader and
//! writer so a scripted session can be checked against its transcript.
//!
//! ```
//! use number_guess::core::FixedSecret;
//! use number_guess::session::Session;
//! use number_guess::shell::Shell;
//!
//! let input = "1\n40\n50\nn\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let summary = Shell::new(input, &mut output, Session::new(FixedSecret(50)))
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(summary.total_score, 90);
//! let transcript = String::from_utf8(output).unwrap();
//! assert!(transcript.contains("Higher than 40"));
//! assert!(transcript.contains("Final Score: 90"));
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::{Difficulty, MAX_GUESS, MIN_GUESS};
use crate::core::error::GuessError;
use crate::core::outcome::{Direction, Outcome};
use crate::core::rng::{GameRng, SecretSource};
use crate::session::{Session, SessionSummary};

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GuessError),
}

/// How a round ended from the shell's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    InputClosed,
}

/// Interactive text shell over a `Session`.
pub struct Shell<R, W, S = GameRng> {
    input: R,
    output: W,
    session: Session<S>,
    difficulty: Option<Difficulty>,
}

impl<R: BufRead, W: Write, S: SecretSource> Shell<R, W, S> {
    pub fn new(input: R, output: W, session: Session<S>) -> Self {
        Self {
            input,
            output,
            session,
            difficulty: None,
        }
    }

    /// Play every round at `difficulty` without showing the menu.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Run rounds until the player declines to continue or input ends.
    pub fn run(mut self) -> Result<SessionSummary, ShellError> {
        loop {
            let difficulty = match self.difficulty {
                Some(d) => d,
                None => match self.choose_difficulty()? {
                    Some(d) => d,
                    None => break,
                },
            };

            if self.play_round(difficulty)? == RoundEnd::InputClosed {
                break;
            }
            if !self.play_again()? {
                break;
            }
        }

        self.farewell()?;
        Ok(self.session.summary())
    }

    /// Read one line. `None` at end of input.
    ///
    /// Bytes that aren't UTF-8 are replaced rather than failing the read,
    /// so garbage input is reported like any other bad guess.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn choose_difficulty(&mut self) -> Result<Option<Difficulty>, ShellError> {
        writeln!(self.output)?;
        writeln!(self.output, "Number Guessing Game")?;
        writeln!(self.output, "Choose Difficulty Level:")?;
        for d in Difficulty::ALL {
            writeln!(self.output, "  {}) {}", d.menu_number(), d)?;
        }

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Difficulty>() {
                Ok(d) => return Ok(Some(d)),
                Err(e) => {
                    debug!(error = %e, "bad difficulty choice");
                    writeln!(self.output, "Please choose 1, 2 or 3.")?;
                }
            }
        }
    }

    fn play_round(&mut self, difficulty: Difficulty) -> Result<RoundEnd, ShellError> {
        self.session.start_round(difficulty);

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Guess a number between {MIN_GUESS} and {MAX_GUESS}"
        )?;
        self.status_line()?;

        loop {
            self.prompt("Enter your guess: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(RoundEnd::InputClosed);
            };

            let outcome = match self.session.submit(&line) {
                Ok(outcome) => outcome,
                Err(e) if e.is_invalid_input() => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let guess = self.session.last_guess().unwrap_or_default();
            match outcome {
                Outcome::Continue {
                    direction: Direction::Higher,
                } => writeln!(self.output, "Higher than {guess}")?,
                Outcome::Continue {
                    direction: Direction::Lower,
                } => writeln!(self.output, "Lower than {guess}")?,
                Outcome::Won {
                    round_score,
                    attempts_used,
                } => {
                    writeln!(self.output, "Correct! The number was {guess}")?;
                    writeln!(
                        self.output,
                        "You guessed it in {attempts_used} tries! Score: {round_score}"
                    )?;
                }
                Outcome::Lost { secret } => {
                    writeln!(self.output, "No attempts left! The number was {secret}")?;
                    writeln!(self.output, "Out of attempts! Number was {secret}")?;
                }
            }
            self.status_line()?;

            if outcome.is_terminal() {
                return Ok(RoundEnd::Finished);
            }
        }
    }

    fn status_line(&mut self) -> Result<(), ShellError> {
        let (used, max) = self
            .session
            .current_round()
            .map_or((0, 0), |r| (r.attempts_used(), r.max_attempts()));
        writeln!(
            self.output,
            "Attempts: {used} / {max}    Score: {}",
            self.session.score()
        )?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool, ShellError> {
        loop {
            self.prompt("Play again? [y/n] ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn farewell(&mut self) -> Result<(), ShellError> {
        let summary = self.session.summary();
        info!(
            rounds_played = summary.rounds_played,
            rounds_won = summary.rounds_won,
            total_score = summary.total_score,
            "session over"
        );

        writeln!(self.output)?;
        writeln!(self.output, "Final Score: {}", summary.total_score)?;
        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        Ok(())
    }
}
