//! RNG module - deck shuffling
//!
//! Wraps a PCG32 generator so the rest of the core never touches `rand`
//! directly. A deck is shuffled with Fisher-Yates over unbiased bounded
//! draws, so every ordering of the 16 cards is equally likely.
//!
//! Seeding is optional: an explicit seed gives reproducible decks (tests,
//! `MEMORY_SEED`), otherwise the seed is drawn from the thread RNG.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Random source used by the deck initializer
#[derive(Debug, Clone)]
pub struct DeckRng {
    seed: u64,
    inner: Pcg32,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a value in `[0, max)` without modulo bias
    pub fn next_below(&mut self, max: usize) -> usize {
        self.inner.random_range(0..max)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
