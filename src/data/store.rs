use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::{Atom, Clause};

/// Insertion-ordered set that can only grow.
///
/// There is no removal API: clause sets and fact sets built on top of it
/// never retract anything once it has been derived.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Hash + Eq",
    deserialize = "T: Deserialize<'de> + Hash + Eq"
))]
pub struct AppendSet<T: Hash + Eq> {
    items: IndexSet<T>,
}

/// Working set of the resolution prover.
pub type ClauseSet = AppendSet<Clause>;

/// Facts known to the forward chainer.
pub type FactSet = AppendSet<Atom>;

impl<T: Hash + Eq> AppendSet<T> {
    pub fn new() -> Self {
        Self { items: IndexSet::new() }
    }

    /// Returns `true` if the value was not present yet.
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &AppendSet<T>) -> bool {
        self.items.is_subset(&other.items)
    }
}

impl<T: Hash + Eq> Default for AppendSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> Extend<T> for AppendSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Hash + Eq> FromIterator<T> for AppendSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T: Hash + Eq> IntoIterator for AppendSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a AppendSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
