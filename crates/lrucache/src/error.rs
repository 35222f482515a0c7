//! Error types for lrucache

use std::fmt;

/// Result type alias for cache lookups
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key not found (never inserted, evicted, or cleared)
    KeyNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "Invalid get. Key not found."),
        }
    }
}

impl std::error::Error for Error {}
