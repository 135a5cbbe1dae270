//! Fixed-capacity accumulators
//!
//! Both containers silently ignore inserts once they reach their cap, so
//! memory per field stays bounded no matter how many records are profiled.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Ordered set that stops accepting new values at `cap`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSet<T: Ord> {
    items: BTreeSet<T>,
    cap: usize,
}

impl<T: Ord> BoundedSet<T> {
    /// Create an empty set with the given capacity
    pub fn new(cap: usize) -> Self {
        Self {
            items: BTreeSet::new(),
            cap,
        }
    }

    /// Insert a value if the set is below its cap
    ///
    /// Returns true if the value was newly added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.insert(value)
    }

    /// Check whether the cap has been reached
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Iterate in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Ord + Serialize> Serialize for BoundedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

/// Insertion-ordered list that stops accepting values at `cap`
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedList<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> BoundedList<T> {
    /// Create an empty list with the given capacity
    pub fn new(cap: usize) -> Self {
        Self {
            items: Vec::new(),
            cap,
        }
    }

    /// Append a value if the list is below its cap
    ///
    /// Returns true if the value was stored.
    pub fn push(&mut self, value: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Check whether the cap has been reached
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for BoundedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
