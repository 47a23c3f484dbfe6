//! Error types for policycache

use std::fmt;

/// Result type alias for policycache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Capacity must be at least one entry
    ZeroCapacity,

    /// Policy name did not match any built-in policy
    UnknownPolicy(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "Cache capacity must be greater than 0"),
            Error::UnknownPolicy(name) => write!(
                f,
                "Unknown eviction policy: {} (expected fifo, lru, lifo or random)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
