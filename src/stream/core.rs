//! Lazy node and the deferred-continuation protocol every stream is built on.
//!
//! A [`LazyNode`] is an immutable `(value, tail)` pair. The tail is a closure
//! that is not run when the node is built; forcing it yields the successor
//! node, or `None` at the end of the stream. Emptiness is never a node: an
//! empty stream is a `None` [`Link`].

use once_cell::unsync::OnceCell;
use std::fmt;
use std::rc::Rc;

use crate::stream_configuration::TailPolicy;

/// A reference to the rest of a stream, `None` meaning end of stream
pub type Link<T> = Option<Rc<LazyNode<T>>>;

/// Deferred continuation producing the successor of a node
pub struct Tail<T> {
    thunk: Box<dyn Fn() -> Link<T>>,
    memo: Option<OnceCell<Link<T>>>,
}

impl<T> Tail<T> {
    pub fn new<F>(policy: TailPolicy, thunk: F) -> Self
    where
        F: Fn() -> Link<T> + 'static,
    {
        let memo = match policy {
            TailPolicy::Recompute => None,
            TailPolicy::Memoize => Some(OnceCell::new()),
        };
        Self { thunk: Box::new(thunk), memo }
    }

    pub fn policy(&self) -> TailPolicy {
        if self.memo.is_some() {
            TailPolicy::Memoize
        } else {
            TailPolicy::Recompute
        }
    }

    /// Run the continuation, or hand out the cached successor when memoizing
    pub fn force(&self) -> Link<T> {
        match &self.memo {
            None => (self.thunk)(),
            Some(cell) => {
                if let Some(link) = cell.get() {
                    log::trace!("tail memo hit");
                    return link.clone();
                }
                log::trace!("tail memo miss");
                cell.get_or_init(|| (self.thunk)()).clone()
            }
        }
    }

    fn take_memo(&mut self) -> Link<T> {
        self.memo.as_mut().and_then(OnceCell::take).flatten()
    }
}

/// The atomic unit of a stream
pub struct LazyNode<T> {
    value: T,
    tail: Tail<T>,
}

impl<T> LazyNode<T> {
    /// Build a node whose tail recomputes on every traversal
    pub fn new<F>(value: T, thunk: F) -> Rc<Self>
    where
        F: Fn() -> Link<T> + 'static,
    {
        Self::with_policy(value, TailPolicy::Recompute, thunk)
    }

    pub fn with_policy<F>(value: T, policy: TailPolicy, thunk: F) -> Rc<Self>
    where
        F: Fn() -> Link<T> + 'static,
    {
        Rc::new(Self {
            value,
            tail: Tail::new(policy, thunk),
        })
    }

    /// Build a node and wrap it as a non-empty link
    pub fn link<F>(value: T, policy: TailPolicy, thunk: F) -> Link<T>
    where
        F: Fn() -> Link<T> + 'static,
    {
        Some(Self::with_policy(value, policy, thunk))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn policy(&self) -> TailPolicy {
        self.tail.policy()
    }

    /// Force the deferred continuation
    pub fn force_tail(&self) -> Link<T> {
        self.tail.force()
    }
}

// Unlinks memoized successors one at a time so a long forced chain does not
// drop recursively.
impl<T> Drop for LazyNode<T> {
    fn drop(&mut self) {
        let mut link = self.tail.take_memo();
        while let Some(node) = link {
            link = match Rc::try_unwrap(node) {
                Ok(mut node) => node.tail.take_memo(),
                Err(_) => None,
            };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyNode")
            .field("value", &self.value)
            .field("policy", &self.policy())
            .finish()
    }
}
