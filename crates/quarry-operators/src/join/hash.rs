//! Hash equality join (inner-join semantics).

use std::hash::Hash;
use std::sync::Arc;

use super::build_lookup;
use crate::sequence::Sequence;

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// One `result(outer, inner)` per pair whose keys are equal.
    ///
    /// Outer order is preserved; for each outer element its matches appear in
    /// inner order. Outer elements without a match produce nothing. Both key
    /// selectors return the same `K`, so mismatched key shapes do not compile.
    pub fn join<U, K, R, OK, IK, S>(
        &self,
        inner: &Sequence<'a, U>,
        outer_key: OK,
        inner_key: IK,
        result: S,
    ) -> Sequence<'a, R>
    where
        U: Clone + 'a,
        K: Eq + Hash + 'a,
        R: 'a,
        OK: Fn(&T) -> K + Send + Sync + 'a,
        IK: Fn(&U) -> K + Send + Sync + 'a,
        S: Fn(T, U) -> R + Send + Sync + 'a,
    {
        let outer = self.clone();
        let inner = inner.clone();
        let outer_key = Arc::new(outer_key);
        let inner_key = Arc::new(inner_key);
        let result = Arc::new(result);

        Sequence::new(move || {
            let table = build_lookup(&inner, inner_key.as_ref());
            let outer_key = Arc::clone(&outer_key);
            let result = Arc::clone(&result);
            outer.iter().flat_map(move |o| {
                let matches = table.get(&outer_key(&o)).cloned();
                let result = Arc::clone(&result);
                matches
                    .into_iter()
                    .flat_map(|shared| (0..shared.len()).map(move |i| shared[i].clone()))
                    .map(move |u| result(o.clone(), u))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        city: &'static str,
        country: &'static str,
    }

    fn row(name: &'static str, city: &'static str, country: &'static str) -> Row {
        Row {
            name,
            city,
            country,
        }
    }

    #[test]
    fn matches_on_composite_key_in_outer_then_inner_order() {
        let customers = vec![
            row("c1", "London", "UK"),
            row("c2", "Paris", "France"),
            row("c3", "London", "Canada"),
        ];
        let suppliers = vec![
            row("s1", "London", "UK"),
            row("s2", "Paris", "France"),
            row("s3", "London", "UK"),
        ];

        let pairs = Sequence::from_slice(&customers).join(
            &Sequence::from_slice(&suppliers),
            |c| (c.city, c.country),
            |s| (s.city, s.country),
            |c, s| (c.name, s.name),
        );

        assert_eq!(
            pairs.to_vec(),
            vec![("c1", "s1"), ("c1", "s3"), ("c2", "s2")]
        );
    }

    #[test]
    fn build_side_is_rebuilt_per_enumeration() {
        let left = Sequence::from_vec(vec![1, 2, 3]);
        let right = Sequence::from_vec(vec![2, 3, 3]);
        let joined = left.join(&right, |l| *l, |r| *r, |l, r| l * 10 + r);
        assert_eq!(joined.to_vec(), vec![22, 33, 33]);
        assert_eq!(joined.to_vec(), joined.to_vec());
    }
}
