//! Reductions to a scalar. Each makes a single pass and never mutates its source.

use std::iter::Sum;

use crate::error::{OpError, Result};
use crate::sequence::Sequence;

impl<'a, T: 'a> Sequence<'a, T> {
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn count_where<P: Fn(&T) -> bool>(&self, predicate: P) -> usize {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// Sum of `selector` over the sequence; the additive identity when empty.
    pub fn sum<N, F>(&self, selector: F) -> N
    where
        N: Sum<N>,
        F: Fn(&T) -> N,
    {
        self.iter().map(|item| selector(&item)).sum()
    }

    /// Arithmetic mean of `selector`.
    ///
    /// Fails with `EmptyAggregation` on an empty sequence rather than returning
    /// 0 or NaN.
    pub fn average<F: Fn(&T) -> f64>(&self, selector: F) -> Result<f64> {
        let (count, total) = self
            .iter()
            .fold((0usize, 0.0f64), |(n, acc), item| (n + 1, acc + selector(&item)));
        if count == 0 {
            return Err(OpError::EmptyAggregation { op: "average" });
        }
        Ok(total / count as f64)
    }

    /// True as soon as one element satisfies `predicate`; false when empty.
    pub fn any<P: Fn(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(|item| predicate(&item))
    }

    /// True if the sequence has at least one element.
    pub fn is_nonempty(&self) -> bool {
        self.iter().next().is_some()
    }

    /// False as soon as one element fails `predicate`; true when empty.
    pub fn all<P: Fn(&T) -> bool>(&self, predicate: P) -> bool {
        self.iter().all(|item| predicate(&item))
    }

    pub fn first(&self) -> Option<T> {
        self.iter().next()
    }

    /// First element with the smallest key.
    pub fn min_by_key<K: Ord, F: Fn(&T) -> K>(&self, key: F) -> Option<T> {
        self.iter().min_by_key(|item| key(item))
    }
}
