//! Stats report printed by the `stats` shell command.

use serde::Serialize;

use crate::cache::CacheStats;

/// Snapshot of cache counters plus policy details.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Eviction policy name
    pub policy: String,
    /// Maximum entries, null when unbounded
    pub capacity: Option<usize>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of puts dropped for a missing key or value
    pub rejected: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Time the report was taken, RFC 3339
    pub timestamp: String,
}

impl StatsReport {
    /// Creates a new StatsReport stamped with the current time
    pub fn new(policy: impl Into<String>, capacity: Option<usize>, stats: &CacheStats) -> Self {
        Self {
            policy: policy.into(),
            capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            rejected: stats.rejected,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            rejected: 0,
            total_entries: 4,
        };
        let report = StatsReport::new("lru", Some(4), &stats);
        assert!((report.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(report.evictions, 5);
    }

    #[test]
    fn test_report_serialize() {
        let report = StatsReport::new("basic", None, &CacheStats::new());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["policy"], "basic");
        assert!(json["capacity"].is_null());
        assert_eq!(json["hit_rate"], 0.0);
        assert!(json["timestamp"].is_string());
    }
}
