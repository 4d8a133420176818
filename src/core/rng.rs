//! Deterministic random number generation for drawing secrets.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Injectable**: Rounds draw from any `SecretSource`, so tests can pin
//!   the secret with `FixedSecret`
//!
//! ```
//! use number_guess::core::{GameRng, SecretSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.draw_secret(1..=100), rng2.draw_secret(1..=100));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of secret numbers for new rounds.
pub trait SecretSource {
    /// Draw a secret uniformly from `range` (inclusive on both ends).
    fn draw_secret(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local generator.
    ///
    /// The chosen seed is still recorded, so a session can be replayed
    /// by passing `seed()` back to `GameRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl SecretSource for GameRng {
    fn draw_secret(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range(range)
    }
}

/// A source that always yields the same secret.
///
/// The value is returned as-is, even if it falls outside the requested
/// range; `start_round` checks it in debug builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSecret(pub u32);

impl SecretSource for FixedSecret {
    fn draw_secret(&mut self, _range: RangeInclusive<u32>) -> u32 {
        self.0
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn draw_secret(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).draw_secret(range)
    }
}
