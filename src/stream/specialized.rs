//! Specialized generators: natural numbers and the trial-division prime sieve

use std::rc::Rc;

use super::combinators::{filter, limit};
use super::constructors::{Iterate, Recurrence};
use super::core::{LazyNode, Link};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::{NaturalsConfig, TailPolicy};

/// `start, start + step, start + 2 * step, ...` as a seedless recurrence.
///
/// The stream ends at the last value that fits in a `u64`.
pub fn naturals(config: NaturalsConfig, policy: TailPolicy) -> Link<u64> {
    log::debug!(
        "naturals generator: start={}, step={}",
        config.start,
        config.step
    );
    // positions past max_len are never produced, so the fallback is unreachable
    let unbounded = Iterate::new(
        Vec::new(),
        Recurrence::index(move |index| config.checked_nth(index).unwrap_or(u64::MAX)),
    )
    .with_policy(policy)
    .into_link();
    match config.max_len().and_then(|len| usize::try_from(len).ok()) {
        Some(len) => limit(unbounded, len),
        None => unbounded,
    }
}

/// 2, 3, 5, 7, 11, ...
pub fn primes(policy: TailPolicy) -> Link<u64> {
    sieve(naturals(NaturalsConfig::from_two(), policy))
}

/// Sieve over the naturals from `start`.
///
/// Only a start of 2 yields exactly the primes; a higher start also lets
/// through composites whose factors lie below it. Starts below 2 are
/// rejected because every integer is a multiple of 1.
pub fn prime_sieve(start: u64, policy: TailPolicy) -> StreamResult<Link<u64>> {
    if start < 2 {
        return Err(StreamError::InvalidSieveStart(start));
    }
    Ok(sieve(naturals(NaturalsConfig::new().start(start), policy)))
}

/// Keep the head, then sieve the rest with the head's multiples removed.
///
/// Only values that survive every earlier layer add a layer of their own.
pub fn sieve(link: Link<u64>) -> Link<u64> {
    let node = link?;
    let prime = *node.value();
    log::trace!("sieve layer for {}", prime);
    let policy = node.policy();
    LazyNode::link(prime, policy, move || {
        sieve(filter(
            node.force_tail(),
            Rc::new(move |x: &u64| x % prime != 0),
        ))
    })
}
