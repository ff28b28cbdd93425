//! Multi-key sort specification.

use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

type Comparator<'a, T> = dyn Fn(&T, &T) -> Ordering + Send + Sync + 'a;

/// Ordered list of sort keys, primary first. Each key carries its own direction;
/// `compare` falls through to the next key on ties and returns `Equal` when all
/// keys tie, which leaves input order to the stable sort.
pub struct SortSpec<'a, T> {
    keys: Vec<Arc<Comparator<'a, T>>>,
}

impl<'a, T: 'a> SortSpec<'a, T> {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn then_by<K, F>(mut self, key: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.keys
            .push(Arc::new(move |a: &T, b: &T| direction.apply(key(a).cmp(&key(b)))));
        self
    }

    pub fn asc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.then_by(key, Direction::Ascending)
    }

    pub fn desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'a,
    {
        self.then_by(key, Direction::Descending)
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for cmp in &self.keys {
            match cmp(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a, T: 'a> Default for SortSpec<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SortSpec<'_, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}
