//! Error types for lazy stream operations
//!
//! Absence is structural in this crate: an out-of-range `get` is `None` and a
//! combinator over an empty stream is empty. The errors below only come from
//! the fallible consumers and from rejected configuration.

/// Main error type for stream operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// `try_get` ran off the end of a finite stream
    #[error("Index {index} out of range for stream of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// `collect_bounded` saw more elements than it was allowed to hold
    #[error("Stream has more than {max} elements")]
    BoundExceeded { max: usize },
    /// The prime sieve only yields primes when started at 2 or above
    #[error("Prime sieve cannot start at {0}, start must be at least 2")]
    InvalidSieveStart(u64),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for stream operations
pub type StreamResult<T> = Result<T, StreamError>;
