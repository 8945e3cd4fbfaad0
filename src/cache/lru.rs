//! LRU Cache Module
//!
//! Fixed-capacity cache combining a key index with the recency ordering list.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::Handle;
use crate::cache::list::OrderingList;

// == LRU Cache ==
/// In-memory byte cache that evicts the least recently used entry.
///
/// Both [`set`](LruCache::set) and [`get`](LruCache::get) promote the touched
/// entry to most recently used. A capacity of `0` disables eviction.
///
/// The cache is not synchronized; share it behind a single lock.
#[derive(Debug)]
pub struct LruCache {
    /// Key -> slot in `list`
    index: HashMap<String, Handle>,
    /// Entries in recency order, owns keys and values
    list: OrderingList,
    /// Maximum number of entries, 0 = unbounded
    capacity: usize,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum entry count, `0` for no limit
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::new(),
            list: OrderingList::new(),
            capacity,
        }
    }

    // == Set ==
    /// Stores `value` under `key` and marks it most recently used.
    ///
    /// An existing key has its value replaced in place and never triggers
    /// eviction. A new key that pushes the cache past its capacity evicts
    /// exactly one entry, the least recently used one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();

        if let Some(&handle) = self.index.get(&key) {
            self.list.set_value(handle, value);
            self.list.move_to_head(handle);
            return;
        }

        let handle = self.list.push_head(key.clone(), value);
        self.index.insert(key, handle);

        if self.capacity != 0 && self.list.len() > self.capacity {
            self.evict_oldest();
        }
    }

    // == Get ==
    /// Returns the value stored under `key` and marks it most recently used.
    ///
    /// Returns None if the key is absent. A key stored with an empty value
    /// yields `Some(&[])`, so the two cases stay distinguishable.
    pub fn get(&mut self, key: &str) -> Option<&[u8]> {
        let handle = *self.index.get(key)?;
        self.list.move_to_head(handle);
        self.list.get(handle).map(|entry| entry.value.as_slice())
    }

    // == Evict Oldest ==
    /// Drops the tail entry and its index slot, returning the evicted key.
    fn evict_oldest(&mut self) -> Option<String> {
        let entry = self.list.pop_tail()?;
        self.index.remove(&entry.key);
        debug!(key = %entry.key, capacity = self.capacity, "Evicted least recently used entry");
        Some(entry.key)
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the configured capacity (0 = unbounded).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used, without promoting anything.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<String> {
        self.list.iter().map(|entry| entry.key.clone()).collect()
    }
}
