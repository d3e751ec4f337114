//! Random number sources for deck shuffling.
//!
//! ## Key Features
//!
//! - **Pluggable**: the deck only sees the `RandomSource` trait
//! - **Deterministic**: `GameRng` with the same seed produces the same sequence
//! - **Scriptable**: `SequenceSource` replays fixed values for reproducible deals
//!
//! ## Uniformity
//!
//! The deck shuffles by sorting on random keys. That shuffle is uniform only
//! when the source returns independent, uniformly distributed values over the
//! requested range. This is a requirement on every `RandomSource`
//! implementation, not something the deck can enforce.
//!
//! ```
//! use card_round::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next(0, 100), b.next(0, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Supplies uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `min_inclusive..max_exclusive`.
    ///
    /// Implementations must be uniform over the half-open range.
    fn next(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32;
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

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
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

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }
}

impl RandomSource for GameRng {
    fn next(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        self.gen_range(min_inclusive..max_exclusive)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into the requested range. Useful for reproducing a
/// particular deal, e.g. making a known card land on top of the pile.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<i32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source replaying `values`, or `None` if there are none.
    #[must_use]
    pub fn new(values: impl Into<Vec<i32>>) -> Option<Self> {
        let values = values.into();
        if values.is_empty() {
            return None;
        }
        Some(Self { values, cursor: 0 })
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min_inclusive, max_exclusive.saturating_sub(1).max(min_inclusive))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next(&mut self, min_inclusive: i32, max_exclusive: i32) -> i32 {
        (**self).next(min_inclusive, max_exclusive)
    }
}
