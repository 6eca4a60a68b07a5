//! Cache Module
//!
//! Provides an in-memory key-value cache with pluggable eviction policies.

mod admission;
mod policy;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use admission::is_admissible;
pub use policy::{
    AccessOrder, CacheKey, EvictionPolicy, FifoPolicy, LfuPolicy, LifoPolicy, LruPolicy,
    MruPolicy, PolicyKind, UnboundedPolicy,
};
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsRecorder};
pub use store::Cache;

// == Public Constants ==
/// Default capacity for bounded policies
pub const DEFAULT_MAX_ITEMS: usize = 4;
