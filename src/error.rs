//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! `put` and `get` never fail: rejected admissions and missing keys are normal
//! outcomes. These errors cover construction, configuration and the shell.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Eviction policy name not recognised
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Capacity unusable for the requested policy
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    /// Shell input could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Reading or writing the shell streams failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CacheError::UnknownPolicy("arc".to_string());
        assert_eq!(err.to_string(), "Unknown eviction policy: arc");

        let err = CacheError::InvalidCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "Invalid command: frobnicate");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CacheError = io.into();
        assert!(matches!(err, CacheError::Io(_)));
    }
}
