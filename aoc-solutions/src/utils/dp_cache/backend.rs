//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// State of a single cache entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    /// Dependencies are being resolved; seeing this again means a cycle.
    Pending,
    Done(K),
}

/// A storage backend for the DP cache.
///
/// Absent entries have not been visited yet. The cache moves an entry from
/// absent to [`Slot::Pending`] to [`Slot::Done`], and only removes entries
/// to roll back a failed resolution.
pub trait Backend<I, K> {
    fn get(&self, index: &I) -> Option<&Slot<K>>;

    /// Store `slot` at `index`, replacing whatever was there.
    fn set(&mut self, index: I, slot: Slot<K>);

    fn remove(&mut self, index: &I);
}

/// A Vec-based backend for `usize` indices.
///
/// Efficient for dense indices starting from 0; grows on demand.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<Slot<K>>>,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&Slot<K>> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn set(&mut self, index: usize, slot: Slot<K>) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index] = Some(slot);
    }

    fn remove(&mut self, index: &usize) {
        if let Some(entry) = self.data.get_mut(*index) {
            *entry = None;
        }
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse or non-integer index types such as grid positions.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, Slot<K>>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&Slot<K>> {
        self.data.get(index)
    }

    fn set(&mut self, index: I, slot: Slot<K>) {
        self.data.insert(index, slot);
    }

    fn remove(&mut self, index: &I) {
        self.data.remove(index);
    }
}
