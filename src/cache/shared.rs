//! Shared Cache Module
//!
//! Thread-safe handle around a [`Cache`] for concurrent callers.

use std::fmt;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{Cache, CacheKey, CacheStats};

// == Shared Cache ==
/// Cloneable handle to a cache behind an `Arc<RwLock<_>>`.
///
/// `put` holds the write lock across eviction and insertion, so readers never
/// see a half-evicted store. Reads share the read lock unless the policy
/// records accesses, in which case they need the write lock too.
pub struct SharedCache<K, V> {
    inner: Arc<RwLock<Cache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: CacheKey, V: Clone> SharedCache<K, V> {
    /// Wraps an existing cache.
    pub fn new(cache: Cache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    // == Put ==
    /// Stores `value` under `key`, evicting first if needed.
    pub async fn put(&self, key: Option<K>, value: Option<V>) {
        let mut cache = self.inner.write().await;
        cache.put(key, value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    pub async fn get(&self, key: Option<&K>) -> Option<V> {
        {
            let cache = self.inner.read().await;
            if !cache.tracks_access() {
                return cache.peek(key).cloned();
            }
        }

        let mut cache = self.inner.write().await;
        cache.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn capacity(&self) -> Option<usize> {
        self.inner.read().await.capacity()
    }

    pub async fn policy_name(&self) -> &'static str {
        self.inner.read().await.policy_name()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }
}

impl<K, V> SharedCache<K, V>
where
    K: CacheKey + Ord + fmt::Display,
    V: Clone + fmt::Display,
{
    /// Renders the cache contents, one sorted `key: value` line per entry.
    pub async fn dump(&self) -> String {
        self.inner.read().await.to_string()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PolicyKind;

    #[tokio::test]
    async fn test_shared_put_and_get() {
        let cache = SharedCache::new(Cache::new());
        cache.put(Some("a".to_string()), Some(1)).await;

        assert_eq!(cache.get(Some(&"a".to_string())).await, Some(1));
        assert_eq!(cache.get(Some(&"missing".to_string())).await, None);
        assert_eq!(cache.get(None).await, None);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_shared_get_updates_lru_order() {
        let cache = SharedCache::new(Cache::with_policy(PolicyKind::Lru, 2).unwrap());
        cache.put(Some("a".to_string()), Some(1)).await;
        cache.put(Some("b".to_string()), Some(2)).await;
        cache.get(Some(&"a".to_string())).await;
        cache.put(Some("c".to_string()), Some(3)).await;

        assert_eq!(cache.get(Some(&"a".to_string())).await, Some(1));
        assert_eq!(cache.get(Some(&"b".to_string())).await, None);
        assert_eq!(cache.policy_name().await, "lru");
        assert_eq!(cache.capacity().await, Some(2));
    }

    #[tokio::test]
    async fn test_concurrent_puts_respect_capacity() {
        let cache = SharedCache::new(Cache::with_policy(PolicyKind::Fifo, 8).unwrap());

        let mut handles = Vec::new();
        for task in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    cache.put(Some(format!("t{}-{}", task, i)), Some(i)).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let stats = cache.stats().await;
        assert_eq!(cache.len().await, 8);
        assert_eq!(stats.evictions, 8 * 50 - 8);
    }

    #[tokio::test]
    async fn test_shared_dump() {
        let cache = SharedCache::new(Cache::new());
        cache.put(Some("x".to_string()), Some("1".to_string())).await;

        assert_eq!(cache.dump().await, "Current cache:\nx: 1");
        assert!(!cache.is_empty().await);
    }
}
