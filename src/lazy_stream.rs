//! Stream facade: a cheap, immutable handle on a lazy node chain
//!
//! Every method takes `&self` and returns a new `Stream`; the receiver's
//! chain is never changed, so a stream can be reused after deriving others
//! from it.
//!
//! ```
//! use sicp_stream::Stream;
//!
//! let odd_squares = Stream::new()
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * n)
//!     .limit(4);
//! assert_eq!(odd_squares.iter().collect::<Vec<_>>(), vec![1, 9, 25, 49]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::error::StreamResult;
use crate::stream::{self, Iter, Iterate, LazyNode, Link, Recurrence};
use crate::stream_configuration::{NaturalsConfig, StreamConfig, TailPolicy};

/// A lazy, possibly infinite sequence
pub struct Stream<T> {
    head: Link<T>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self { head: self.head.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("head", &self.head())
            .finish_non_exhaustive()
    }
}

impl<T> Stream<T> {
    pub fn from_link(head: Link<T>) -> Self {
        Self { head }
    }

    pub fn into_link(self) -> Link<T> {
        self.head
    }

    /// First node of the chain, if any
    pub fn node(&self) -> Option<&Rc<LazyNode<T>>> {
        self.head.as_ref()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| node.value())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drain the stream, calling `visitor` on every element
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        stream::for_each(self.head.clone(), visitor)
    }

    /// Drain the stream, calling `visitor` on every element and its position
    pub fn for_each_indexed<F>(&self, visitor: F)
    where
        F: FnMut(&T, usize),
    {
        stream::for_each_indexed(self.head.clone(), visitor)
    }

    pub fn try_for_each<E, F>(&self, visitor: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        stream::try_for_each(self.head.clone(), visitor)
    }

    /// Everything from position `n` on
    pub fn skip(&self, n: usize) -> Self {
        Self::from_link(stream::skip(self.head.clone(), n))
    }
}

// ================================
// Construction
// ================================

impl<T: Clone + 'static> Stream<T> {
    pub fn empty() -> Self {
        Self::from_link(stream::empty())
    }

    pub fn once(value: T) -> Self {
        Self::from_link(stream::once(value))
    }

    /// Seedless recurrence, e.g. `Recurrence::index(|i| i * i)`
    pub fn recurrence(recurrence: Recurrence<T>) -> Self {
        Self::seeded(Vec::new(), recurrence)
    }

    /// Replays `seeds`, then continues with `recurrence` over a window of
    /// the last `seeds.len()` values
    pub fn seeded<I>(seeds: I, recurrence: Recurrence<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::seeded_with(seeds, recurrence, &StreamConfig::default())
    }

    pub fn seeded_with<I>(seeds: I, recurrence: Recurrence<T>, config: &StreamConfig) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_link(
            Iterate::new(seeds, recurrence)
                .with_policy(config.tail_policy)
                .into_link(),
        )
    }
}

impl<T: Clone + 'static> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_link(stream::from_iter(iter))
    }
}

impl Stream<u64> {
    /// 0, 1, 2, ...
    pub fn new() -> Self {
        Self::naturals(NaturalsConfig::default())
    }

    pub fn naturals(config: NaturalsConfig) -> Self {
        Self::from_link(stream::naturals(config, TailPolicy::default()))
    }

    pub fn naturals_with(config: &StreamConfig) -> Self {
        Self::from_link(stream::naturals(config.naturals, config.tail_policy))
    }

    pub fn primes() -> Self {
        Self::from_link(stream::primes(TailPolicy::default()))
    }

    pub fn prime_sieve(start: u64) -> StreamResult<Self> {
        stream::prime_sieve(start, TailPolicy::default()).map(Self::from_link)
    }

    /// Sieve from `config.sieve_start` using the configured tail policy
    pub fn primes_with(config: &StreamConfig) -> StreamResult<Self> {
        config.validate()?;
        stream::prime_sieve(config.sieve_start, config.tail_policy).map(Self::from_link)
    }
}

impl Default for Stream<u64> {
    fn default() -> Self {
        Self::new()
    }
}

// ================================
// Combinators and consumers
// ================================

impl<T: Clone + 'static> Stream<T> {
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::from_link(stream::filter(self.head.clone(), Rc::new(predicate)))
    }

    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        Stream::from_link(stream::map(self.head.clone(), Rc::new(f)))
    }

    /// Element-wise combination, as long as the shorter stream
    pub fn join<U, V, F>(&self, other: &Stream<U>, combiner: F) -> Stream<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(&T, &U) -> V + 'static,
    {
        Stream::from_link(stream::join(
            self.head.clone(),
            other.head.clone(),
            Rc::new(combiner),
        ))
    }

    /// Element-wise combination that keeps going past the shorter stream,
    /// passing its side as `None`, until `combiner` returns `None`
    pub fn join_optional<U, V, F>(&self, other: &Stream<U>, combiner: F) -> Stream<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(Option<&T>, Option<&U>) -> Option<V> + 'static,
    {
        Stream::from_link(stream::join_optional(
            self.head.clone(),
            other.head.clone(),
            Rc::new(combiner),
        ))
    }

    pub fn limit(&self, n: usize) -> Self {
        Self::from_link(stream::limit(self.head.clone(), n))
    }

    /// Same values, with each tail computed once and shared afterwards.
    ///
    /// Only the returned layer caches; chains built from other chains (the
    /// prime sieve's filter layers, for one) still recompute underneath. For
    /// a fully cached sieve use [`Stream::primes_with`] with
    /// `StreamConfig::new().tail_policy(TailPolicy::Memoize)`.
    pub fn memoize(&self) -> Self {
        Self::from_link(stream::memoize(self.head.clone()))
    }

    pub fn get(&self, index: usize) -> Option<T> {
        stream::get(self.head.clone(), index)
    }

    pub fn try_get(&self, index: usize) -> StreamResult<T> {
        stream::try_get(self.head.clone(), index)
    }

    pub fn collect_bounded(&self, max: usize) -> StreamResult<Vec<T>> {
        stream::collect_bounded(self.head.clone(), max)
    }

    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.head.clone())
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.head)
    }
}

impl<T: Clone> IntoIterator for &Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.head.clone())
    }
}
