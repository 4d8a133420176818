//! Number guessing game in the terminal.

use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use number_guess::{Difficulty, Session, SessionConfig, Shell};

#[derive(Parser)]
#[command(name = "number-guess")]
#[command(about = "Guess the secret number between 1 and 100")]
struct Args {
    /// Seed for the secret numbers (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play every round at this difficulty instead of choosing from the menu
    #[arg(short, long)]
    difficulty: Option<DifficultyArg>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

impl Args {
    fn config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            difficulty: self.difficulty.map(Difficulty::from),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = args.config();
    let session = Session::from_config(&config);
    info!(seed = session.seed(), "starting session");

    let stdin = io::stdin();
    let summary = Shell::new(stdin.lock(), io::stdout(), session)
        .with_difficulty(config.difficulty)
        .run()
        .context("game session failed")?;

    info!(
        rounds_played = summary.rounds_played,
        win_rate = summary.win_rate(),
        "bye"
    );
    Ok(())
}
