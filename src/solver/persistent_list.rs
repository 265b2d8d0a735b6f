use std::fmt::{self, Debug};

use im::vector::Vector;

pub use im::vector::Iter;

/// An immutable, ordered sequence with cheap append.
///
/// Every `add` returns a new handle sharing its nodes with the receiver, so older handles
/// stay valid (and unchanged) for as long as anyone holds them. Backed by an RRB vector:
/// append and indexing are effectively constant time and traversal runs oldest-first
/// without allocating.
pub struct PersistentList<T: Clone> {
    items: Vector<T>,
}

impl<T: Clone> PersistentList<T> {
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Returns a new list with `value` appended.
    pub fn add(&self, value: T) -> Self {
        let mut items = self.items.clone();
        items.push_back(value);
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First element in insertion order.
    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    /// Most recently added element.
    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.iter().any(|v| v == value)
    }

    /// Returns a list without the first occurrence of `value`. If `value` is absent, the
    /// receiver is returned as is.
    pub fn remove(&self, value: &T) -> Self
    where
        T: PartialEq,
    {
        let Some(idx) = self.items.iter().position(|v| v == value) else {
            return self.clone();
        };
        let mut items = self.items.clone();
        items.remove(idx);
        Self { items }
    }

    /// Returns a list holding the receiver's elements followed by `other`'s.
    pub fn concat(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        items.append(other.items.clone());
        Self { items }
    }
}

impl<T: Clone> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: Clone> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Clone + Eq> Eq for PersistentList<T> {}

impl<T: Clone + Debug> Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Clone> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
