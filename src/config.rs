//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::{PolicyKind, DEFAULT_MAX_ITEMS};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Eviction policy applied when the cache is full
    pub policy: PolicyKind,
    /// Maximum number of entries for bounded policies
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - One of basic, fifo, lifo, lru, mru, lfu (default: basic)
    /// - `CACHE_MAX_ITEMS` - Capacity for bounded policies (default: 4)
    pub fn from_env() -> Self {
        Self {
            policy: env::var("CACHE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            max_items: env::var("CACHE_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ITEMS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Unbounded,
            max_items: DEFAULT_MAX_ITEMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.policy, PolicyKind::Unbounded);
        assert_eq!(config.max_items, 4);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env vars so parallel tests cannot race on them
        env::remove_var("CACHE_POLICY");
        env::remove_var("CACHE_MAX_ITEMS");

        let config = Config::from_env();
        assert_eq!(config.policy, PolicyKind::Unbounded);
        assert_eq!(config.max_items, 4);

        env::set_var("CACHE_POLICY", "LRU");
        env::set_var("CACHE_MAX_ITEMS", "16");
        let config = Config::from_env();
        assert_eq!(config.policy, PolicyKind::Lru);
        assert_eq!(config.max_items, 16);

        env::set_var("CACHE_POLICY", "random");
        env::set_var("CACHE_MAX_ITEMS", "lots");
        let config = Config::from_env();
        assert_eq!(config.policy, PolicyKind::Unbounded);
        assert_eq!(config.max_items, 4);

        env::remove_var("CACHE_POLICY");
        env::remove_var("CACHE_MAX_ITEMS");
    }
}
