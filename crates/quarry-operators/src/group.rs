//! Group-by with first-occurrence group order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metrics;
use crate::sequence::Sequence;

/// One group: its key and its members in input order.
///
/// Members form an ordinary restartable `Sequence`, so a group can be filtered,
/// ordered, aggregated or grouped again.
pub struct Grouping<'a, K, T> {
    key: K,
    members: Sequence<'a, T>,
    len: usize,
}

impl<'a, K, T: Clone + Send + Sync + 'a> Grouping<'a, K, T> {
    fn new(key: K, members: Vec<T>) -> Self {
        let len = members.len();
        Self {
            key,
            members: Sequence::from_vec(members),
            len,
        }
    }
}

impl<'a, K, T> Grouping<'a, K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn members(&self) -> &Sequence<'a, T> {
        &self.members
    }

    pub fn into_parts(self) -> (K, Sequence<'a, T>) {
        (self.key, self.members)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for groups produced by `group_by`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: Clone, T> Clone for Grouping<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            members: self.members.clone(),
            len: self.len,
        }
    }
}

impl<'a, K: fmt::Debug, T: fmt::Debug + 'a> fmt::Debug for Grouping<'a, K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.key)
            .field("members", &self.members)
            .finish()
    }
}

impl<'a, K: Serialize, T: Serialize + 'a> Serialize for Grouping<'a, K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Grouping", 2)?;
        s.serialize_field("key", &self.key)?;
        s.serialize_field("members", &self.members)?;
        s.end()
    }
}

impl<'a, T: Clone + Send + Sync + 'a> Sequence<'a, T> {
    /// Partition by `key`.
    ///
    /// Groups come out in the order their key is first seen; members keep input
    /// order. The input is materialized when the result is enumerated.
    pub fn group_by<K, F>(&self, key: F) -> Sequence<'a, Grouping<'a, K, T>>
    where
        K: Eq + Hash + Clone + 'a,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        let source = self.clone();
        let key = Arc::new(key);
        Sequence::new(move || {
            let mut slots: HashMap<K, usize> = HashMap::new();
            let mut groups: Vec<(K, Vec<T>)> = Vec::new();
            let mut rows = 0usize;
            for item in source.iter() {
                rows += 1;
                let k = key(&item);
                match slots.get(&k) {
                    Some(&slot) => groups[slot].1.push(item),
                    None => {
                        slots.insert(k.clone(), groups.len());
                        groups.push((k, vec![item]));
                    }
                }
            }
            metrics::record_materialized("group_by", rows);
            groups
                .into_iter()
                .map(|(k, members)| Grouping::new(k, members))
        })
    }
}
