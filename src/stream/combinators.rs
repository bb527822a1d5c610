//! Combinators over lazy node chains: filter, map, join, limit, get/skip, for_each
//!
//! Every transforming combinator returns a new chain without forcing more of
//! its input than it needs for the head. Output nodes inherit the tail policy
//! of the node they wrap; joins memoize when either input does. Terminal
//! consumers (`for_each`, `collect_bounded`, ...) drain eagerly and only
//! terminate on finite chains.

use std::rc::Rc;

use super::core::{LazyNode, Link};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::TailPolicy;

pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;
pub type MapFn<T, U> = Rc<dyn Fn(&T) -> U>;
pub type JoinFn<A, B, C> = Rc<dyn Fn(&A, &B) -> C>;
pub type OptionalJoinFn<A, B, C> = Rc<dyn Fn(Option<&A>, Option<&B>) -> Option<C>>;

// ================================
// Transforming combinators
// ================================

/// Keep the elements satisfying `predicate`.
///
/// Diverges when no remaining element ever matches.
pub fn filter<T>(mut link: Link<T>, predicate: Predicate<T>) -> Link<T>
where
    T: Clone + 'static,
{
    loop {
        let node = link?;
        if predicate(node.value()) {
            let value = node.value().clone();
            let policy = node.policy();
            return LazyNode::link(value, policy, move || {
                filter(node.force_tail(), Rc::clone(&predicate))
            });
        }
        link = node.force_tail();
    }
}

pub fn map<T, U>(link: Link<T>, f: MapFn<T, U>) -> Link<U>
where
    T: 'static,
    U: 'static,
{
    let node = link?;
    let value = f(node.value());
    let policy = node.policy();
    LazyNode::link(value, policy, move || map(node.force_tail(), Rc::clone(&f)))
}

/// Pairwise combination, ending as soon as either side ends.
pub fn join<A, B, C>(a: Link<A>, b: Link<B>, combiner: JoinFn<A, B, C>) -> Link<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    let (a, b) = (a?, b?);
    let value = combiner(a.value(), b.value());
    let policy = a.policy().or(b.policy());
    LazyNode::link(value, policy, move || {
        join(a.force_tail(), b.force_tail(), Rc::clone(&combiner))
    })
}

/// Pairwise combination that lets the combiner see an exhausted side as `None`.
///
/// The result ends when the combiner returns `None` or both sides are
/// exhausted.
pub fn join_optional<A, B, C>(a: Link<A>, b: Link<B>, combiner: OptionalJoinFn<A, B, C>) -> Link<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    if a.is_none() && b.is_none() {
        return None;
    }
    let value = combiner(
        a.as_deref().map(|node| node.value()),
        b.as_deref().map(|node| node.value()),
    )?;
    let policy = [
        a.as_ref().map(|node| node.policy()),
        b.as_ref().map(|node| node.policy()),
    ]
    .into_iter()
    .flatten()
    .fold(TailPolicy::Recompute, TailPolicy::or);
    LazyNode::link(value, policy, move || {
        join_optional(
            a.as_ref().and_then(|node| node.force_tail()),
            b.as_ref().and_then(|node| node.force_tail()),
            Rc::clone(&combiner),
        )
    })
}

/// The first `n` elements.
///
/// The last node's tail ends the stream without forcing the input any
/// further, so limiting a filter never searches past the final match.
pub fn limit<T>(link: Link<T>, n: usize) -> Link<T>
where
    T: Clone + 'static,
{
    if n == 0 {
        return None;
    }
    let node = link?;
    let value = node.value().clone();
    let policy = node.policy();
    LazyNode::link(value, policy, move || {
        if n == 1 {
            None
        } else {
            limit(node.force_tail(), n - 1)
        }
    })
}

/// Re-link a chain so every tail is computed once and then shared.
pub fn memoize<T>(link: Link<T>) -> Link<T>
where
    T: Clone + 'static,
{
    let node = link?;
    if node.policy() == TailPolicy::Memoize {
        return Some(node);
    }
    let value = node.value().clone();
    LazyNode::link(value, TailPolicy::Memoize, move || memoize(node.force_tail()))
}

// ================================
// Indexed access
// ================================

/// Drop the first `n` nodes, `None` if the chain ends first.
pub fn skip<T>(mut link: Link<T>, n: usize) -> Link<T> {
    for _ in 0..n {
        link = link?.force_tail();
    }
    link
}

pub fn get<T: Clone>(link: Link<T>, index: usize) -> Option<T> {
    skip(link, index).map(|node| node.value().clone())
}

/// Like [`get`], but reports how long the stream was when `index` is out of range.
pub fn try_get<T: Clone>(mut link: Link<T>, index: usize) -> StreamResult<T> {
    for position in 0..index {
        link = match link {
            Some(node) => node.force_tail(),
            None => return Err(StreamError::IndexOutOfRange { index, len: position }),
        };
    }
    link.map(|node| node.value().clone())
        .ok_or(StreamError::IndexOutOfRange { index, len: index })
}

// ================================
// Terminal consumers
// ================================

pub fn for_each<T, F>(mut link: Link<T>, mut visitor: F)
where
    F: FnMut(&T),
{
    while let Some(node) = link {
        visitor(node.value());
        link = node.force_tail();
    }
}

/// Like [`for_each`], also passing each element's position.
pub fn for_each_indexed<T, F>(mut link: Link<T>, mut visitor: F)
where
    F: FnMut(&T, usize),
{
    let mut index = 0;
    while let Some(node) = link {
        visitor(node.value(), index);
        index += 1;
        link = node.force_tail();
    }
}

/// Drain the chain until the visitor fails, returning that error.
pub fn try_for_each<T, E, F>(mut link: Link<T>, mut visitor: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    while let Some(node) = link {
        visitor(node.value())?;
        link = node.force_tail();
    }
    Ok(())
}

/// Collect at most `max` elements, failing rather than diverging on a longer chain.
pub fn collect_bounded<T: Clone>(mut link: Link<T>, max: usize) -> StreamResult<Vec<T>> {
    let mut items = Vec::new();
    while let Some(node) = link {
        if items.len() == max {
            log::warn!("collect_bounded: stream exceeds bound of {} elements", max);
            return Err(StreamError::BoundExceeded { max });
        }
        items.push(node.value().clone());
        link = node.force_tail();
    }
    log::debug!("collect_bounded: collected {} elements", items.len());
    Ok(items)
}

// ================================
// Iterator adapter
// ================================

/// Std iterator over a chain, cloning each value out of its node.
///
/// A tail is only forced when the following item is requested, so taking a
/// prefix never evaluates past it.
pub struct Iter<T> {
    pending: Link<T>,
    last: Link<T>,
}

impl<T> Iter<T> {
    pub fn new(link: Link<T>) -> Self {
        Self { pending: link, last: None }
    }
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(last) = self.last.take() {
            self.pending = last.force_tail();
        }
        let node = self.pending.take()?;
        let value = node.value().clone();
        self.last = Some(node);
        Some(value)
    }
}
