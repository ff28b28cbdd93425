//! Stable multi-key ordering.
//!
//! The whole input is buffered and sorted once with a composite comparator
//! (per-key direction) when the result is enumerated, never at construction.

mod key;

pub use key::{Direction, SortSpec};

use crate::metrics;
use crate::sequence::Sequence;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Sort by `spec`. Stable: elements equal under every key keep input order.
    pub fn order_by(&self, spec: SortSpec<'a, T>) -> Sequence<'a, T> {
        let source = self.clone();
        Sequence::new(move || {
            let mut buf: Vec<T> = source.iter().collect();
            metrics::record_materialized("order_by", buf.len());
            buf.sort_by(|a, b| spec.compare(a, b));
            buf.into_iter()
        })
    }

    pub fn order_by_key<K, F>(&self, key: F) -> Sequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.order_by(SortSpec::new().asc(key))
    }

    pub fn order_by_key_desc<K, F>(&self, key: F) -> Sequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.order_by(SortSpec::new().desc(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn mixed_directions_in_one_pass() {
        let rows = Sequence::from_vec(vec![(1, "b"), (1, "a"), (2, "a")]);
        let sorted = rows.order_by(SortSpec::<(i32, &str)>::new().asc(|r| r.0).desc(|r| r.1));
        assert_eq!(sorted.to_vec(), vec![(1, "b"), (1, "a"), (2, "a")]);

        let flipped = rows.order_by(SortSpec::<(i32, &str)>::new().desc(|r| r.0).asc(|r| r.1));
        assert_eq!(flipped.to_vec(), vec![(2, "a"), (1, "a"), (1, "b")]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = Sequence::from_vec(vec![(1, "a"), (1, "b"), (0, "c")]);
        let sorted = rows.order_by_key(|r| r.0);
        assert_eq!(sorted.to_vec(), vec![(0, "c"), (1, "a"), (1, "b")]);

        let desc = rows.order_by_key_desc(|r| r.0);
        assert_eq!(desc.to_vec(), vec![(1, "a"), (1, "b"), (0, "c")]);
    }

    #[test]
    fn sorting_waits_for_enumeration() {
        let pulls = AtomicUsize::new(0);
        let source = Sequence::new(|| {
            pulls.fetch_add(1, Ordering::SeqCst);
            vec![3, 1, 2].into_iter()
        });
        let sorted = source.order_by_key(|n| *n);
        assert_eq!(pulls.load(Ordering::SeqCst), 0);
        assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
        assert_eq!(pulls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_spec_preserves_order() {
        let spec: SortSpec<'_, i32> = SortSpec::default();
        assert!(spec.is_empty());
        let rows = Sequence::from_vec(vec![2, 1]);
        assert_eq!(rows.order_by(spec).to_vec(), vec![2, 1]);
    }
}
