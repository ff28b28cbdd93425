//! Filter (`where`) and prefix operators. Both stream one element at a time.

use std::sync::Arc;

use crate::sequence::Sequence;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Elements satisfying `predicate`, in input order.
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        let source = self.clone();
        let predicate = Arc::new(predicate);
        Sequence::new(move || {
            let predicate = Arc::clone(&predicate);
            source.iter().filter(move |item| predicate(item))
        })
    }

    /// The first `n` elements.
    pub fn take(&self, n: usize) -> Sequence<'a, T> {
        let source = self.clone();
        Sequence::new(move || source.iter().take(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_matching_elements_in_order() {
        let numbers = [5, 4, 1, 3, 9, 8, 6, 7, 2, 0];
        let low = Sequence::from_slice(&numbers).filter(|n| **n < 5);
        assert_eq!(low.to_vec(), vec![&4, &1, &3, &2, &0]);
    }

    #[test]
    fn streams_over_unbounded_input() {
        let naturals = Sequence::new(|| 0u64..);
        let evens = naturals.filter(|n| n % 2 == 0).take(3);
        assert_eq!(evens.to_vec(), vec![0, 2, 4]);
    }

    #[test]
    fn filter_of_nothing_is_nothing() {
        let none = Sequence::<i32>::empty().filter(|_| true);
        assert!(none.to_vec().is_empty());
    }
}
