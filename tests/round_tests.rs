//! Round engine integration tests.

use number_guess::core::{Difficulty, Direction, FixedSecret, GameRng, GuessError, Outcome, RoundStatus};
use number_guess::rules::{evaluate_guess, parse_guess, start_round};

// =============================================================================
// Starting Rounds
// =============================================================================

#[test]
fn test_start_round_for_every_preset() {
    let mut rng = GameRng::new(42);

    for d in Difficulty::ALL {
        let state = start_round(d, 0, &mut rng);
        assert_eq!(state.max_attempts(), d.max_attempts());
        assert_eq!(state.attempts_used(), 0);
        assert_eq!(state.difficulty(), d);
    }
}

#[test]
fn test_same_seed_same_secrets() {
    let mut rng1 = GameRng::new(7);
    let mut rng2 = GameRng::new(7);

    let secrets1: Vec<_> = (0..50)
        .map(|_| start_round(Difficulty::Easy, 0, &mut rng1).secret())
        .collect();
    let secrets2: Vec<_> = (0..50)
        .map(|_| start_round(Difficulty::Easy, 0, &mut rng2).secret())
        .collect();

    assert_eq!(secrets1, secrets2);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_easy_round_won_on_third_guess() {
    let mut state = start_round(Difficulty::Easy, 0, &mut FixedSecret(50));
    let mut outcomes = Vec::new();

    for guess in [25, 75, 50] {
        let (next, outcome) = evaluate_guess(state, guess).unwrap();
        state = next;
        outcomes.push(outcome);
    }

    assert_eq!(
        outcomes,
        vec![
            Outcome::Continue {
                direction: Direction::Higher
            },
            Outcome::Continue {
                direction: Direction::Lower
            },
            Outcome::Won {
                round_score: 80,
                attempts_used: 3
            },
        ]
    );
    assert_eq!(state.score(), 80);
}

#[test]
fn test_hard_round_lost() {
    let mut state = start_round(Difficulty::Hard, 0, &mut FixedSecret(1));
    let mut last = None;

    for _ in 0..5 {
        let (next, outcome) = evaluate_guess(state, 100).unwrap();
        assert!(!matches!(outcome, Outcome::Won { .. }));
        state = next;
        last = Some(outcome);
    }

    assert_eq!(last, Some(Outcome::Lost { secret: 1 }));
    assert_eq!(state.attempts_used(), 5);
    assert_eq!(state.status(), RoundStatus::Lost);
}

#[test]
fn test_invalid_guess_leaves_state() {
    let state = start_round(Difficulty::Medium, 20, &mut FixedSecret(33));

    assert_eq!(evaluate_guess(state, 0), Err(GuessError::OutOfRange(0)));
    assert_eq!(evaluate_guess(state, 101), Err(GuessError::OutOfRange(101)));
    assert_eq!(state.attempts_used(), 0);
    assert_eq!(state.score(), 20);
}

#[test]
fn test_lost_round_keeps_score() {
    let mut state = start_round(Difficulty::Hard, 90, &mut FixedSecret(2));
    for _ in 0..5 {
        state = evaluate_guess(state, 3).unwrap().0;
    }

    assert_eq!(state.status(), RoundStatus::Lost);
    assert_eq!(state.score(), 90);
    assert_eq!(evaluate_guess(state, 2), Err(GuessError::RoundOver));
}

#[test]
fn test_parsed_text_feeds_engine() {
    let state = start_round(Difficulty::Easy, 0, &mut FixedSecret(64));

    let guess = parse_guess(" 64 ").unwrap();
    let (_, outcome) = evaluate_guess(state, guess).unwrap();

    assert_eq!(
        outcome,
        Outcome::Won {
            round_score: 100,
            attempts_used: 1
        }
    );
}
