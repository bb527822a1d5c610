//! Configuration types for stream generators

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// Whether a node re-runs its continuation every time its tail is forced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// Recompute the successor on every traversal
    #[default]
    Recompute,
    /// Cache the first successor and hand it out on later traversals
    Memoize,
}

impl TailPolicy {
    /// Memoize when either policy does
    pub fn or(self, other: TailPolicy) -> TailPolicy {
        if self == TailPolicy::Memoize || other == TailPolicy::Memoize {
            TailPolicy::Memoize
        } else {
            TailPolicy::Recompute
        }
    }
}

/// Start and step of the natural-number generator.
///
/// The generated stream is finite when `step > 0`: it stops at the last
/// value representable as a `u64` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalsConfig {
    pub start: u64,
    pub step: u64,
}

impl Default for NaturalsConfig {
    fn default() -> Self {
        Self { start: 0, step: 1 }
    }
}

impl NaturalsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 2, 3, 4, ... the candidate sequence a trial-division sieve walks
    pub fn from_two() -> Self {
        Self { start: 2, step: 1 }
    }

    pub fn start(mut self, start: u64) -> Self {
        self.start = start;
        self
    }

    pub fn step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    /// Value at absolute position `index`, `None` once it would overflow
    pub fn checked_nth(&self, index: usize) -> Option<u64> {
        let index = u64::try_from(index).ok()?;
        self.step
            .checked_mul(index)
            .and_then(|offset| self.start.checked_add(offset))
    }

    /// Number of values before overflow, `None` when step is 0 or the count
    /// itself does not fit in a `u64`
    pub fn max_len(&self) -> Option<u64> {
        if self.step == 0 {
            return None;
        }
        ((u64::MAX - self.start) / self.step).checked_add(1)
    }
}

/// Configuration shared by the generator constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub tail_policy: TailPolicy,
    pub naturals: NaturalsConfig,
    pub sieve_start: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            tail_policy: TailPolicy::Recompute,
            naturals: NaturalsConfig::default(),
            sieve_start: 2,
        }
    }
}

impl StreamConfig {
    /// Create a new stream configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tail policy used by generated nodes
    pub fn tail_policy(mut self, tail_policy: TailPolicy) -> Self {
        self.tail_policy = tail_policy;
        self
    }

    /// Set the natural-number generator's start and step
    pub fn naturals(mut self, naturals: NaturalsConfig) -> Self {
        self.naturals = naturals;
        self
    }

    /// Set the first candidate of the prime sieve
    pub fn sieve_start(mut self, sieve_start: u64) -> Self {
        self.sieve_start = sieve_start;
        self
    }

    pub fn validate(&self) -> StreamResult<()> {
        if self.sieve_start < 2 {
            return Err(StreamError::InvalidConfig(format!(
                "sieve_start must be at least 2, got {}",
                self.sieve_start
            )));
        }
        Ok(())
    }
}
