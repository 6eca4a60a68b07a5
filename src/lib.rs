//! Policy Cache - An in-memory key-value cache
//!
//! Provides a single-process cache whose capacity limit and eviction policy
//! (FIFO, LIFO, LRU, MRU, LFU, or none) are chosen at construction.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;

pub use cache::{Cache, PolicyKind, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
