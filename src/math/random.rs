//! Injectable randomness for every stochastic choice the generator makes
//!
//! All draws funnel through [`RandomSource::below`], so a test can script the
//! exact sequence of choices and assert the resulting map tile by tile.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..upper`
    ///
    /// Callers never pass `upper == 0`.
    fn below(&mut self, upper: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

/// Uniform selection helpers over a random source
pub struct RandomSelector<S = RngSource<StdRng>> {
    source: S,
}

impl RandomSelector<RngSource<StdRng>> {
    /// Create a deterministic selector from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource(StdRng::seed_from_u64(seed)))
    }
}

impl<S: RandomSource> RandomSelector<S> {
    /// Wrap an arbitrary random source
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Index in `0..len`, or `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.source.below(len))
    }

    /// Value in the inclusive range `low..=high`
    ///
    /// Returns `low` when the range is empty or inverted.
    pub fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.source.below(high - low + 1)
    }

    /// Pick one element uniformly
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.index(items.len()).and_then(|i| items.get(i))
    }

    /// Draw up to `amount` distinct elements uniformly without replacement
    ///
    /// Uses a partial Fisher-Yates shuffle so only `amount` draws are made.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let take = amount.min(pool.len());
        for i in 0..take {
            let j = i + self.source.below(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }

    /// Remove and return one element uniformly
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        self.index(items.len()).map(|i| items.swap_remove(i))
    }
}
