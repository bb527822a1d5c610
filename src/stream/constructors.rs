//! Stream constructors: empty, once, from_iter and the Iterate recurrence generator

use std::fmt;
use std::rc::Rc;

use super::core::{LazyNode, Link};
use crate::stream_configuration::TailPolicy;

// ================================
// Basic Constructors
// ================================

pub fn empty<T>() -> Link<T> {
    None
}

pub fn once<T: 'static>(value: T) -> Link<T> {
    LazyNode::link(value, TailPolicy::Recompute, || None)
}

/// A finite chain over the items of `iter`, collected up front.
pub fn from_iter<T, I>(iter: I) -> Link<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    let items: Rc<[T]> = iter.into_iter().collect();
    from_shared(items, 0)
}

fn from_shared<T: Clone + 'static>(items: Rc<[T]>, position: usize) -> Link<T> {
    let value = items.get(position)?.clone();
    LazyNode::link(value, TailPolicy::Recompute, move || {
        from_shared(Rc::clone(&items), position + 1)
    })
}

// ================================
// Recurrence generator
// ================================

/// Step function in its general `(window, absolute index)` form
pub type StepFn<T> = Rc<dyn Fn(&[T], usize) -> T>;

/// A recurrence step in one of the three accepted shapes, normalized to
/// `(window, index) -> T`.
pub struct Recurrence<T> {
    step: StepFn<T>,
}

impl<T> Clone for Recurrence<T> {
    fn clone(&self) -> Self {
        Self { step: Rc::clone(&self.step) }
    }
}

impl<T> fmt::Debug for Recurrence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recurrence").finish_non_exhaustive()
    }
}

impl<T: 'static> Recurrence<T> {
    /// Next value from the sliding window alone
    pub fn window<F>(f: F) -> Self
    where
        F: Fn(&[T]) -> T + 'static,
    {
        Self { step: Rc::new(move |window: &[T], _: usize| f(window)) }
    }

    /// Next value from its absolute position alone
    pub fn index<F>(f: F) -> Self
    where
        F: Fn(usize) -> T + 'static,
    {
        Self { step: Rc::new(move |_: &[T], index: usize| f(index)) }
    }

    pub fn full<F>(f: F) -> Self
    where
        F: Fn(&[T], usize) -> T + 'static,
    {
        Self { step: Rc::new(f) }
    }

    pub fn apply(&self, window: &[T], index: usize) -> T {
        (self.step)(window, index)
    }

    pub fn into_step(self) -> StepFn<T> {
        self.step
    }
}

/// Recurrence state for one position of an infinite sequence.
///
/// Positions below the seed count replay the seeds verbatim. Every later
/// position is `step(window, index)`, after which the window drops its oldest
/// value and appends the new one. Each produced node owns the snapshot its
/// tail continues from, so forcing a tail never disturbs an earlier node.
pub struct Iterate<T> {
    window: Rc<[T]>,
    step: StepFn<T>,
    index: usize,
    policy: TailPolicy,
}

impl<T> Clone for Iterate<T> {
    fn clone(&self) -> Self {
        Self {
            window: Rc::clone(&self.window),
            step: Rc::clone(&self.step),
            index: self.index,
            policy: self.policy,
        }
    }
}

impl<T: Clone + 'static> Iterate<T> {
    pub fn new<I>(seeds: I, recurrence: Recurrence<T>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let window: Rc<[T]> = seeds.into_iter().collect();
        log::debug!("Iterate generator created with {} seeds", window.len());
        Self {
            window,
            step: recurrence.into_step(),
            index: 0,
            policy: TailPolicy::default(),
        }
    }

    /// Set the tail policy of every node this generator produces
    pub fn with_policy(mut self, policy: TailPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn window(&self) -> &[T] {
        &self.window
    }

    /// The node at this state's position; its tail continues from the next state.
    pub fn node(&self) -> Rc<LazyNode<T>> {
        let (value, window) = if self.index < self.window.len() {
            (self.window[self.index].clone(), Rc::clone(&self.window))
        } else {
            let value = (self.step)(&self.window[..], self.index);
            log::trace!("Iterate computed position {}", self.index);
            let window = self.slide(value.clone());
            (value, window)
        };
        let next = Self {
            window,
            step: Rc::clone(&self.step),
            index: self.index + 1,
            policy: self.policy,
        };
        LazyNode::with_policy(value, self.policy, move || Some(next.node()))
    }

    pub fn into_link(self) -> Link<T> {
        Some(self.node())
    }

    fn slide(&self, newest: T) -> Rc<[T]> {
        if self.window.is_empty() {
            return Rc::clone(&self.window);
        }
        self.window[1..]
            .iter()
            .cloned()
            .chain(std::iter::once(newest))
            .collect()
    }
}
