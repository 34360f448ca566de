//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Reproducible**: The seed is kept so a session can be replayed
//! - **Fisher–Yates**: `shuffle` walks from the last index down to 1 and swaps
//!   with a uniformly chosen index in `[0, i]`
//!
//! ## Usage
//!
//! ```
//! use card_economy::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation
//! let mut again = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! again.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for a single game session.
///
/// Uses ChaCha8 for speed while keeping unbiased, high quality output.
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

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is still recorded, so the session can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
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
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let before = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), before.len());
        assert_ne!(data, before);

        data.sort();
        assert_eq!(data, before);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(7);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Each of the 3 values should land in slot 0 at some point.
        let mut rng = GameRng::new(3);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let mut data = [0usize, 1, 2];
            rng.shuffle(&mut data);
            seen[data[0]] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seed_is_remembered() {
        let rng = GameRng::new(1234);
        assert_eq!(rng.seed(), 1234);

        let fresh = GameRng::from_entropy();
        let mut replay = GameRng::new(fresh.seed());
        let mut first = fresh.clone();
        assert_eq!(first.gen_range_usize(0..1_000_000), replay.gen_range_usize(0..1_000_000));
    }
}
