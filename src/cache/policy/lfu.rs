//! LFU Policy
//!
//! Least frequently used eviction with least-recently-used tie breaking.

use std::collections::{BTreeMap, HashMap};

use super::{AccessOrder, CacheKey, EvictionPolicy};

// == LFU ==
/// Counts puts and reads per key and evicts the lowest count.
///
/// A newly inserted key starts at a count of 1. Keys sharing a count live in
/// one [`AccessOrder`] bucket, so the victim is the oldest key of the lowest
/// non-empty bucket. Empty buckets are dropped.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    counts: HashMap<K, u64>,
    buckets: BTreeMap<u64, AccessOrder<K>>,
}

impl<K: CacheKey> LfuPolicy<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }

    /// Returns the current use count of a key, 0 if untracked.
    pub fn frequency(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn place(&mut self, key: &K, count: u64) {
        self.counts.insert(key.clone(), count);
        self.buckets.entry(count).or_default().touch(key);
    }

    fn unplace(&mut self, key: &K, count: u64) {
        if let Some(bucket) = self.buckets.get_mut(&count) {
            bucket.remove(key);
            if bucket.is_empty() {
                self.buckets.remove(&count);
            }
        }
    }

    fn bump(&mut self, key: &K) {
        let count = self.frequency(key);
        if count > 0 {
            self.unplace(key, count);
        }
        self.place(key, count + 1);
    }
}

impl<K: CacheKey> Default for LfuPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> EvictionPolicy<K> for LfuPolicy<K> {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn select_victim(&self) -> Option<K> {
        self.buckets
            .values()
            .next()
            .and_then(|bucket| bucket.oldest())
            .cloned()
    }

    fn on_insert(&mut self, key: &K) {
        if let Some(count) = self.counts.remove(key) {
            self.unplace(key, count);
        }
        self.place(key, 1);
    }

    fn on_update(&mut self, key: &K) {
        self.bump(key);
    }

    fn on_access(&mut self, key: &K) {
        self.bump(key);
    }

    fn on_remove(&mut self, key: &K) {
        if let Some(count) = self.counts.remove(key) {
            self.unplace(key, count);
        }
    }

    fn tracks_access(&self) -> bool {
        true
    }
}
