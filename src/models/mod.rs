//! Reply models for the cache shell
//!
//! Serializable views of cache state printed by shell commands.

pub mod report;

pub use report::StatsReport;
