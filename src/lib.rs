//! Lazy, potentially infinite streams in the SICP style.
//!
//! A stream is a chain of [`stream::LazyNode`]s: each node holds a value and a
//! deferred continuation producing the rest. Combinators build new chains
//! without forcing them; only `get`, `for_each` and the other consumers
//! evaluate a prefix.

pub mod error;
pub mod lazy_stream;
pub mod stream;
pub mod stream_configuration;

// Re-export the facade at the crate root
pub use error::{StreamError, StreamResult};
pub use lazy_stream::*;
pub use stream::Recurrence;
pub use stream_configuration::{NaturalsConfig, StreamConfig, TailPolicy};
