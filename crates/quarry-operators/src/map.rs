//! Projection (`select`) and flat-map.

use std::sync::Arc;

use crate::sequence::Sequence;

impl<'a, T: 'a> Sequence<'a, T> {
    /// `transform(element)` for every element; 1:1 and order-preserving.
    #[doc(alias = "select")]
    pub fn project<U, F>(&self, transform: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + Send + Sync + 'a,
    {
        let source = self.clone();
        let transform = Arc::new(transform);
        Sequence::new(move || {
            let transform = Arc::clone(&transform);
            source.iter().map(move |item| transform(item))
        })
    }

    /// Concatenation of `f(element)` over every element.
    #[doc(alias = "select_many")]
    pub fn flat_map<U, I, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        I: IntoIterator<Item = U> + 'a,
        I::IntoIter: 'a,
        F: Fn(T) -> I + Send + Sync + 'a,
    {
        let source = self.clone();
        let f = Arc::new(f);
        Sequence::new(move || {
            let f = Arc::clone(&f);
            source.iter().flat_map(move |item| f(item))
        })
    }
}
