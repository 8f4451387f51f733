//! Deterministic random number generation.
//!
//! Everything random on the table flows through `GameRng`: card colors
//! and ranks when a deck is built, the cosmetic settle angle of a played
//! card, and the opponent's thinking delay.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: A new game can branch off the previous one's stream
//! - **Context streams**: Independent sequences for different purposes
//!
//! ```
//! use uno_duel::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // The opponent draws from its own stream so that cosmetic randomness
//! // never changes what it decides.
//! let mut decisions = rng.for_context("opponent");
//! let mut again = GameRng::new(42).for_context("opponent");
//! assert_eq!(decisions.gen_range(0..100), again.gen_range(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};
use std::ops::{Range, RangeInclusive};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Used when
    /// a fresh game replaces the current one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Random integer in a half-open range.
    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Random integer in a closed range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Random duration in milliseconds, both bounds included.
    pub fn gen_millis(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range(0..1000), rng2.gen_range(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic_and_distinct() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let first = rng1.fork();
        let second = rng1.fork();
        let replay = rng2.fork();

        assert_eq!(first.seed(), replay.seed());
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("deck");
        let mut ctx2 = rng.for_context("opponent");
        let mut ctx1_again = GameRng::new(42).for_context("deck");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range(0..1000)).collect();
        let seq3: Vec<_> = (0..10).map(|_| ctx1_again.gen_range(0..1000)).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..500 {
            let angle = rng.gen_range_inclusive(-180..=180);
            assert!((-180..=180).contains(&angle));

            let delay = rng.gen_millis(750..=1500);
            assert!((750..=1500).contains(&delay));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
