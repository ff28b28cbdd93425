//! Cartesian product of two sequences (multi-source `from`).

use crate::sequence::Sequence;

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// Every `(a, b)` pair in row-major order: the outer loop runs over `self`,
    /// and `other` is re-enumerated for each outer element.
    pub fn cross<U: 'a>(&self, other: &Sequence<'a, U>) -> Sequence<'a, (T, U)> {
        let outer = self.clone();
        let inner = other.clone();
        Sequence::new(move || {
            let inner = inner.clone();
            outer
                .iter()
                .flat_map(move |a| inner.iter().map(move |b| (a.clone(), b)))
        })
    }
}
