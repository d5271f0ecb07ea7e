//! RNG module - seedable randomness for cards and draws
//!
//! A small LCG keeps every game reproducible from a single `u32` seed: the
//! same seed always yields the same cards and the same draw order.
//!
//! Ranges are derived from the high bits of each output (multiply-shift)
//! because the low bits of a power-of-two LCG cycle with a short period.

use crate::types::Number;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Use `seed` when given, otherwise seed from entropy.
    pub fn from_seed_or_entropy(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Pick `count` distinct numbers from `low..=high` without replacement.
    ///
    /// Selection order is random but callers that care about layout should
    /// shuffle the result themselves. Returns fewer than `count` numbers only
    /// when the range is smaller than `count`.
    pub fn sample_distinct(&mut self, low: Number, high: Number, count: usize) -> Vec<Number> {
        if low > high {
            return Vec::new();
        }
        let mut pool: Vec<Number> = (low..=high).collect();
        let take = count.min(pool.len());

        // Partial Fisher-Yates: only the first `take` slots are settled.
        for i in 0..take {
            let j = i + self.next_range((pool.len() - i) as u32) as usize;
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }

    /// Current internal state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
