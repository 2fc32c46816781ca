//! Bounded map from a source message to the bot's latest response
//!
//! When a user edits a command message, the host edits its earlier reply
//! instead of posting a new one. Entries are kept in insertion order in a
//! fixed-capacity buffer; inserting a new key into a full cache evicts the
//! oldest entry.

use arrayvec::ArrayVec;

/// Default number of remembered responses
pub const RESPONSE_CACHE_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct ResponseCache<K, V, const N: usize = RESPONSE_CACHE_CAPACITY> {
    /// Oldest first
    entries: ArrayVec<(K, V), N>,
}

impl<K: PartialEq, V, const N: usize> ResponseCache<K, V, N> {
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remember `value` as the response to `key`.
    ///
    /// An existing key keeps its age and gets the new value. Returns the evicted
    /// entry, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
            return None;
        }

        let evicted = if self.entries.is_full() {
            self.entries.pop_at(0)
        } else {
            None
        };
        self.entries.push((key, value));
        evicted
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<K: PartialEq, V, const N: usize> Default for ResponseCache<K, V, N> {
    fn default() -> Self {
        Self::new()
    }
}
