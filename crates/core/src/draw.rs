//! Draw module - shared number pool without repetition
//!
//! The drawer shuffles the whole range once up front and then walks a cursor
//! through that permutation. Every number comes out exactly once; when the
//! cursor passes the end the drawer is exhausted and stays exhausted.

use std::ops::RangeInclusive;

use log::debug;

use crate::rng::SimpleRng;
use crate::types::{Number, NumberSet, NUMBER_HIGH, NUMBER_LOW};

/// Draws numbers one at a time from a fixed range.
#[derive(Debug, Clone)]
pub struct NumberDrawer {
    /// Full permutation of the range.
    order: Vec<Number>,
    /// Index of the next number to hand out.
    cursor: usize,
    drawn: NumberSet,
    seed: u32,
}

impl NumberDrawer {
    /// Create a drawer over `range`.
    ///
    /// The same seed always yields the same draw order. Without a seed the
    /// drawer seeds itself from OS entropy. An empty range is exhausted from
    /// the start.
    pub fn new(range: RangeInclusive<Number>, seed: Option<u32>) -> Self {
        let seed = seed.unwrap_or_else(|| SimpleRng::from_entropy().state());
        let mut rng = SimpleRng::new(seed);

        let mut order: Vec<Number> = range.collect();
        rng.shuffle(&mut order);

        Self {
            order,
            cursor: 0,
            drawn: NumberSet::new(),
            seed,
        }
    }

    /// Drawer over the standard 1-90 pool.
    pub fn standard(seed: Option<u32>) -> Self {
        Self::new(NUMBER_LOW..=NUMBER_HIGH, seed)
    }

    /// Draw the next number, or `None` once the pool is exhausted.
    pub fn draw_next(&mut self) -> Option<Number> {
        let number = *self.order.get(self.cursor)?;
        self.cursor += 1;
        self.drawn.insert(number);
        debug!(
            "drew {} ({} of {})",
            number,
            self.cursor,
            self.order.len()
        );
        Some(number)
    }

    /// Every number drawn so far.
    pub fn drawn(&self) -> &NumberSet {
        &self.drawn
    }

    /// Drawn numbers in draw order.
    pub fn history(&self) -> &[Number] {
        &self.order[..self.cursor]
    }

    /// The most recently drawn number.
    pub fn latest(&self) -> Option<Number> {
        self.history().last().copied()
    }

    /// Up to `n` draws preceding the latest one, most recent first.
    pub fn last_draws(&self, n: usize) -> Vec<Number> {
        let history = self.history();
        if history.len() <= 1 {
            return Vec::new();
        }
        let previous = &history[..history.len() - 1];
        previous.iter().rev().take(n).copied().collect()
    }

    /// Numbers still in the pool.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    /// Size of the full range.
    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Seed that reproduces this draw order.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Iterator for NumberDrawer {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        self.draw_next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
