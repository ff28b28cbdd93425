//! Equality joins.
//!
//! - `hash`: inner join; zero or more results per outer element.
//! - `group`: group-join; exactly one result per outer element.
//! - `fields`: both of the above keyed by field names on `Record` types, with the
//!   key shape checked when the pipeline is built.
//!
//! The inner side is the build side: it is materialized into a hash table when
//! enumeration starts. The outer side streams.

pub mod fields;
pub mod group;
pub mod hash;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::metrics;
use crate::sequence::Sequence;

/// Build-side table: key -> matching inner elements in inner order.
pub(crate) type Lookup<K, U> = HashMap<K, Arc<[U]>>;

pub(crate) fn build_lookup<'a, U, K, F>(inner: &Sequence<'a, U>, key: &F) -> Lookup<K, U>
where
    U: 'a,
    K: Eq + Hash,
    F: Fn(&U) -> K + ?Sized,
{
    let mut buckets: HashMap<K, Vec<U>> = HashMap::new();
    let mut rows = 0usize;
    for item in inner.iter() {
        rows += 1;
        buckets.entry(key(&item)).or_default().push(item);
    }
    metrics::record_materialized("join_build", rows);
    buckets
        .into_iter()
        .map(|(k, v)| (k, Arc::from(v)))
        .collect()
}
