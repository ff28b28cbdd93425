//! `Sequence`: a lazy, ordered, restartable stream.
//!
//! A sequence is a shared factory that produces a fresh iterator on every
//! enumeration. Cloning is an `Arc` bump. Operators (see sibling modules) wrap the
//! factory of their input in a new factory, so building a pipeline costs nothing
//! until someone iterates it.

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Boxed iterator handed out by `Sequence::iter`.
pub type BoxIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

type Factory<'a, T> = dyn Fn() -> BoxIter<'a, T> + Send + Sync + 'a;

pub struct Sequence<'a, T> {
    factory: Arc<Factory<'a, T>>,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Wrap a factory. `factory` must yield the same elements on every call for
    /// the sequence to be restartable.
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'a,
        I: Iterator<Item = T> + 'a,
    {
        Self {
            factory: Arc::new(move || Box::new(factory()) as BoxIter<'a, T>),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty::<T>)
    }

    /// Start a new enumeration.
    pub fn iter(&self) -> BoxIter<'a, T> {
        (self.factory)()
    }

    /// Enumerate once into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<'a, T: Sync + 'a> Sequence<'a, &'a T> {
    /// Borrowing view over a slice; yields `&T` in slice order.
    pub fn from_slice(items: &'a [T]) -> Self {
        Self::new(move || items.iter())
    }
}

impl<'a, T: Clone + Send + Sync + 'a> Sequence<'a, T> {
    /// Owning sequence over `items`. The buffer is shared by every clone.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_shared(Arc::from(items))
    }

    pub fn from_shared(items: Arc<[T]>) -> Self {
        Self::new(move || SharedIter {
            buf: Arc::clone(&items),
            pos: 0,
        })
    }
}

/// Cursor over a shared buffer; clones each element out.
struct SharedIter<T> {
    buf: Arc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.buf.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.buf.len().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = BoxIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, 'a, T: 'a> IntoIterator for &'s Sequence<'a, T> {
    type Item = T;
    type IntoIter = BoxIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Clone + Send + Sync + 'a> FromIterator<T> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Serializes as a sequence, enumerating on demand. Nested sequences inside
/// result rows are walked the same way.
impl<'a, T: Serialize + 'a> Serialize for Sequence<'a, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Sequence<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
