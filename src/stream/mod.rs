//! Lazy node chains and the functions that build and consume them
//!
//! This module works on raw [`Link`]s. [`crate::Stream`] wraps the same
//! functions as chained methods.

pub mod core;
pub mod combinators;
pub mod constructors;
pub mod specialized;

// Re-export core types
pub use self::core::{LazyNode, Link, Tail};

// Re-export combinators
pub use combinators::{
    collect_bounded, filter, for_each, for_each_indexed, get, join, join_optional, limit,
    map, memoize, skip, try_for_each, try_get, Iter, JoinFn, MapFn, OptionalJoinFn,
    Predicate,
};

// Re-export constructors
pub use constructors::{empty, from_iter, once, Iterate, Recurrence, StepFn};

// Re-export specialized generators
pub use specialized::{naturals, prime_sieve, primes, sieve};
