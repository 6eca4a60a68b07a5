//! Eviction Policy Module
//!
//! A cache holds one policy object chosen at construction time. The cache
//! reports inserts, overwrites, reads and removals to the policy, and asks it
//! for a single victim whenever a new key arrives at a full store.

mod lfu;
mod order;
mod ordered;
mod unbounded;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::CacheError;

pub use lfu::LfuPolicy;
pub use order::AccessOrder;
pub use ordered::{FifoPolicy, LifoPolicy, LruPolicy, MruPolicy};
pub use unbounded::UnboundedPolicy;

// == Cache Key ==
/// Bounds every cache key must satisfy.
pub trait CacheKey: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> CacheKey for T where T: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

// == Eviction Policy ==
/// Chooses which key leaves a full cache.
///
/// Only [`select_victim`](EvictionPolicy::select_victim) is required. The
/// notification hooks default to no-ops for policies that keep no bookkeeping.
pub trait EvictionPolicy<K>: fmt::Debug + Send + Sync {
    /// Short lowercase policy name.
    fn name(&self) -> &'static str;

    /// Picks exactly one tracked key to evict, or None if nothing is tracked.
    fn select_victim(&self) -> Option<K>;

    /// A new key was stored.
    fn on_insert(&mut self, _key: &K) {}

    /// An existing key received a new value.
    fn on_update(&mut self, _key: &K) {}

    /// An existing key was read.
    fn on_access(&mut self, _key: &K) {}

    /// A key left the store.
    fn on_remove(&mut self, _key: &K) {}

    /// Whether reads change the policy's state.
    fn tracks_access(&self) -> bool {
        false
    }
}

// == Policy Kind ==
/// The built-in eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// No capacity limit, never evicts
    #[default]
    Unbounded,
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
    /// Least recently used
    Lru,
    /// Most recently used
    Mru,
    /// Least frequently used, ties broken by least recently used
    Lfu,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unbounded => "basic",
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Lru => "lru",
            Self::Mru => "mru",
            Self::Lfu => "lfu",
        }
    }

    /// Returns true for every policy that enforces a capacity.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, Self::Unbounded)
    }

    // == Build ==
    /// Creates a fresh policy object of this kind.
    pub fn build<K: CacheKey>(&self) -> Box<dyn EvictionPolicy<K>> {
        match self {
            Self::Unbounded => Box::new(UnboundedPolicy),
            Self::Fifo => Box::new(FifoPolicy::new()),
            Self::Lifo => Box::new(LifoPolicy::new()),
            Self::Lru => Box::new(LruPolicy::new()),
            Self::Mru => Box::new(MruPolicy::new()),
            Self::Lfu => Box::new(LfuPolicy::new()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" | "none" | "unbounded" => Ok(Self::Unbounded),
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "lru" => Ok(Self::Lru),
            "mru" => Ok(Self::Mru),
            "lfu" => Ok(Self::Lfu),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
