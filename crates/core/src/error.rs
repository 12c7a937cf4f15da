//! Error types for leapjoin.

use crate::table::Key;
use alloc::string::String;
use core::fmt;

/// Result type alias for leapjoin operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while building relations or configuring a run.
///
/// Misuse of a cursor during a join is not represented here: that is a
/// contract violation and panics at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dense relation was not strictly increasing.
    NotSorted {
        position: usize,
        previous: Key,
        key: Key,
    },
    /// A key was inserted twice into an ordered index.
    DuplicateKey {
        key: Key,
    },
    /// Invalid configuration value.
    InvalidConfig {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotSorted {
                position,
                previous,
                key,
            } => {
                write!(
                    f,
                    "Relation not strictly increasing at position {}: {} follows {}",
                    position, key, previous
                )
            }
            Error::DuplicateKey { key } => {
                write!(f, "Duplicate key: {}", key)
            }
            Error::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a not-sorted error.
    pub fn not_sorted(position: usize, previous: Key, key: Key) -> Self {
        Error::NotSorted {
            position,
            previous,
            key,
        }
    }

    /// Creates a duplicate key error.
    pub fn duplicate_key(key: Key) -> Self {
        Error::DuplicateKey { key }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
