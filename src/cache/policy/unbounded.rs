//! Unbounded Policy
//!
//! The policy of a cache without a size limit.

use super::EvictionPolicy;

/// Never evicts and keeps no bookkeeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnboundedPolicy;

impl<K> EvictionPolicy<K> for UnboundedPolicy {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn select_victim(&self) -> Option<K> {
        None
    }
}
