//! Order-Based Policies
//!
//! FIFO, LIFO, LRU and MRU all keep an [`AccessOrder`] and differ only in
//! which events move a key to the front and which end the victim comes from.

use super::{AccessOrder, CacheKey, EvictionPolicy};

// == FIFO ==
/// Evicts the key that was inserted first. Overwrites keep their position.
#[derive(Debug)]
pub struct FifoPolicy<K> {
    order: AccessOrder<K>,
}

impl<K: CacheKey> FifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }
}

impl<K: CacheKey> Default for FifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> EvictionPolicy<K> for FifoPolicy<K> {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn select_victim(&self) -> Option<K> {
        self.order.oldest().cloned()
    }

    fn on_insert(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }
}

// == LIFO ==
/// Evicts the key that was put last. An overwrite counts as a put.
#[derive(Debug)]
pub struct LifoPolicy<K> {
    order: AccessOrder<K>,
}

impl<K: CacheKey> LifoPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }
}

impl<K: CacheKey> Default for LifoPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> EvictionPolicy<K> for LifoPolicy<K> {
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn select_victim(&self) -> Option<K> {
        self.order.newest().cloned()
    }

    fn on_insert(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_update(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }
}

// == LRU ==
/// Evicts the key that was put or read longest ago.
#[derive(Debug)]
pub struct LruPolicy<K> {
    order: AccessOrder<K>,
}

impl<K: CacheKey> LruPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }
}

impl<K: CacheKey> Default for LruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> EvictionPolicy<K> for LruPolicy<K> {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn select_victim(&self) -> Option<K> {
        self.order.oldest().cloned()
    }

    fn on_insert(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_update(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn tracks_access(&self) -> bool {
        true
    }
}

// == MRU ==
/// Evicts the key that was put or read most recently.
#[derive(Debug)]
pub struct MruPolicy<K> {
    order: AccessOrder<K>,
}

impl<K: CacheKey> MruPolicy<K> {
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }
}

impl<K: CacheKey> Default for MruPolicy<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey> EvictionPolicy<K> for MruPolicy<K> {
    fn name(&self) -> &'static str {
        "mru"
    }

    fn select_victim(&self) -> Option<K> {
        self.order.newest().cloned()
    }

    fn on_insert(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_update(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn tracks_access(&self) -> bool {
        true
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn insert_all<P: EvictionPolicy<&'static str>>(policy: &mut P, keys: &[&'static str]) {
        for key in keys {
            policy.on_insert(key);
        }
    }

    #[test]
    fn test_fifo_ignores_updates_and_reads() {
        let mut policy: FifoPolicy<&str> = FifoPolicy::new();
        insert_all(&mut policy, &["a", "b", "c"]);
        policy.on_update(&"a");
        policy.on_access(&"a");

        assert_eq!(policy.select_victim(), Some("a"));
        assert!(!policy.tracks_access());
    }

    #[test]
    fn test_fifo_after_removal() {
        let mut policy: FifoPolicy<&str> = FifoPolicy::new();
        insert_all(&mut policy, &["a", "b", "c"]);
        policy.on_remove(&"a");

        assert_eq!(policy.select_victim(), Some("b"));
    }

    #[test]
    fn test_lifo_picks_last_put() {
        let mut policy: LifoPolicy<&str> = LifoPolicy::new();
        insert_all(&mut policy, &["a", "b", "c"]);
        assert_eq!(policy.select_victim(), Some("c"));

        policy.on_update(&"a");
        assert_eq!(policy.select_victim(), Some("a"));

        // Reads do not count as puts
        policy.on_access(&"b");
        assert_eq!(policy.select_victim(), Some("a"));
    }

    #[test]
    fn test_lru_picks_least_recent() {
        let mut policy: LruPolicy<&str> = LruPolicy::new();
        insert_all(&mut policy, &["a", "b", "c"]);
        policy.on_access(&"a");

        assert_eq!(policy.select_victim(), Some("b"));
        assert!(policy.tracks_access());
    }

    #[test]
    fn test_mru_picks_most_recent() {
        let mut policy: MruPolicy<&str> = MruPolicy::new();
        insert_all(&mut policy, &["a", "b", "c"]);
        assert_eq!(policy.select_victim(), Some("c"));

        policy.on_access(&"a");
        assert_eq!(policy.select_victim(), Some("a"));
    }

    #[test]
    fn test_empty_policies_have_no_victim() {
        assert_eq!(FifoPolicy::<&str>::new().select_victim(), None);
        assert_eq!(LifoPolicy::<&str>::new().select_victim(), None);
        assert_eq!(LruPolicy::<&str>::new().select_victim(), None);
        assert_eq!(MruPolicy::<&str>::new().select_victim(), None);
    }
}
