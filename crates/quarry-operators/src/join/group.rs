//! Group-join: one result per outer element, paired with all of its matches.

use std::hash::Hash;
use std::sync::Arc;

use super::build_lookup;
use crate::sequence::Sequence;

impl<'a, T: 'a> Sequence<'a, T> {
    /// Exactly one `result(outer, matches)` per outer element, in outer order.
    ///
    /// `matches` is a restartable sequence of the inner elements whose key equals
    /// the outer key, in inner order, and is empty when nothing matches. Callers
    /// that only want matched outers filter on the match count afterwards.
    pub fn group_join<U, K, R, OK, IK, S>(
        &self,
        inner: &Sequence<'a, U>,
        outer_key: OK,
        inner_key: IK,
        result: S,
    ) -> Sequence<'a, R>
    where
        U: Clone + Send + Sync + 'a,
        K: Eq + Hash + 'a,
        R: 'a,
        OK: Fn(&T) -> K + Send + Sync + 'a,
        IK: Fn(&U) -> K + Send + Sync + 'a,
        S: Fn(T, Sequence<'a, U>) -> R + Send + Sync + 'a,
    {
        let outer = self.clone();
        let inner = inner.clone();
        let outer_key = Arc::new(outer_key);
        let inner_key = Arc::new(inner_key);
        let result = Arc::new(result);

        Sequence::new(move || {
            let table = build_lookup(&inner, inner_key.as_ref());
            let no_matches: Arc<[U]> = Arc::from(Vec::new());
            let outer_key = Arc::clone(&outer_key);
            let result = Arc::clone(&result);
            outer.iter().map(move |o| {
                let matches = table
                    .get(&outer_key(&o))
                    .cloned()
                    .unwrap_or_else(|| Arc::clone(&no_matches));
                result(o, Sequence::from_shared(matches))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_result_per_outer_even_without_matches() {
        let outer = Sequence::from_vec(vec!["a", "b", "c"]);
        let inner = Sequence::from_vec(vec![("a", 1), ("c", 2), ("a", 3)]);

        let grouped = outer.group_join(&inner, |o| *o, |i| i.0, |o, ms| {
            (o, ms.project(|m| m.1).to_vec())
        });

        assert_eq!(
            grouped.to_vec(),
            vec![("a", vec![1, 3]), ("b", vec![]), ("c", vec![2])]
        );
    }

    #[test]
    fn matched_only_requires_an_explicit_filter() {
        let outer = Sequence::from_vec(vec![1, 2]);
        let inner = Sequence::from_vec(vec![2, 2]);
        let all = outer.group_join(&inner, |o| *o, |i| *i, |o, ms| (o, ms));
        assert_eq!(all.count(), 2);

        let matched = all.filter(|(_, ms)| ms.count() > 0);
        let keys: Vec<i32> = matched.project(|(o, _)| o).to_vec();
        assert_eq!(keys, vec![2]);
    }
}
