//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction policy.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::cache::{is_admissible, CacheKey, CacheStats, EvictionPolicy, PolicyKind, StatsRecorder};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// In-memory key-value cache.
///
/// The store owns its entries exclusively. A capacity and an eviction policy
/// are fixed at construction; without a capacity the cache grows without limit
/// and `put` never evicts.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Eviction policy consulted when a new key arrives at a full store
    policy: Box<dyn EvictionPolicy<K>>,
    /// Maximum number of entries, None = unbounded
    max_items: Option<usize>,
    /// Performance statistics
    stats: StatsRecorder,
}

impl<K: CacheKey, V> Cache<K, V> {
    // == Constructors ==
    /// Creates an empty cache with no size limit.
    pub fn new() -> Self {
        Self::unbounded()
    }

    /// Creates an empty cache with no size limit.
    pub fn unbounded() -> Self {
        Self::with_eviction(PolicyKind::Unbounded.build(), None)
    }

    /// Creates an empty cache using one of the built-in policies.
    ///
    /// `max_items` is ignored for [`PolicyKind::Unbounded`] and must be
    /// non-zero for every bounded policy.
    pub fn with_policy(kind: PolicyKind, max_items: usize) -> Result<Self> {
        if !kind.is_bounded() {
            return Ok(Self::unbounded());
        }
        if max_items == 0 {
            return Err(CacheError::InvalidCapacity(format!(
                "{} cache needs room for at least one entry",
                kind
            )));
        }
        Ok(Self::with_eviction(kind.build(), Some(max_items)))
    }

    /// Creates an empty cache around a caller-supplied policy.
    pub fn with_eviction(policy: Box<dyn EvictionPolicy<K>>, max_items: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            max_items,
            stats: StatsRecorder::new(),
        }
    }

    /// Creates an empty cache from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_policy(config.policy, config.max_items)
    }

    // == Put ==
    /// Stores `value` under `key`.
    ///
    /// A missing key or value makes the call a no-op. An existing key is
    /// overwritten in place. A new key arriving at a full store first evicts
    /// the one entry chosen by the policy.
    pub fn put(&mut self, key: Option<K>, value: Option<V>) {
        if !is_admissible(key.as_ref(), value.as_ref()) {
            self.stats.record_rejection();
            trace!("Put rejected: missing key or value");
            return;
        }
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.policy.on_update(&key);
            return;
        }

        if self.is_full() && !self.evict_one() {
            warn!(
                "{} policy found nothing to evict at capacity {:?}, dropping put for {:?}",
                self.policy.name(),
                self.max_items,
                key
            );
            return;
        }

        self.policy.on_insert(&key);
        self.entries.insert(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`.
    ///
    /// A missing key and an absent entry both yield None. Policies that track
    /// reads are told about hits.
    pub fn get(&mut self, key: Option<&K>) -> Option<&V> {
        let Some(key) = key else {
            self.stats.record_miss();
            return None;
        };
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                self.policy.on_access(key);
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Looks up `key` without informing the policy.
    pub fn peek(&self, key: Option<&K>) -> Option<&V> {
        let value = key.and_then(|key| self.entries.get(key));
        if value.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        value
    }

    fn is_full(&self) -> bool {
        self.max_items
            .is_some_and(|max_items| self.entries.len() >= max_items)
    }

    /// Removes the policy's chosen victim.
    ///
    /// Returns false if no victim was chosen or the chosen key is not stored.
    fn evict_one(&mut self) -> bool {
        let Some(victim) = self.policy.select_victim() else {
            return false;
        };
        if self.entries.remove(&victim).is_none() {
            warn!(
                "{} policy chose {:?} for eviction, but it is not stored",
                self.policy.name(),
                victim
            );
            return false;
        }
        self.policy.on_remove(&victim);
        self.stats.record_eviction();
        debug!("DISCARD: {:?} ({} policy)", victim, self.policy.name());
        true
    }

    // == Introspection ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries, None when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.max_items
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates the stored entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Whether reads change eviction order.
    pub fn tracks_access(&self) -> bool {
        self.policy.tracks_access()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }
}

impl<K: CacheKey, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::unbounded()
    }
}

// == Dump ==
/// Prints `Current cache:` followed by one `key: value` line per entry, sorted by key.
impl<K, V> fmt::Display for Cache<K, V>
where
    K: CacheKey + Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "Current cache:")?;
        for (key, value) in entries {
            write!(f, "\n{}: {}", key, value)?;
        }
        Ok(())
    }
}
