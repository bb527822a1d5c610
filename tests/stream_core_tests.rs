use sicp_stream::stream::{LazyNode, Link, Tail};
use sicp_stream::{Stream, TailPolicy};
use std::cell::Cell;
use std::rc::Rc;

fn counted_chain(calls: Rc<Cell<usize>>, policy: TailPolicy) -> Link<i32> {
    let tail_calls = Rc::clone(&calls);
    LazyNode::link(1, policy, move || {
        tail_calls.set(tail_calls.get() + 1);
        LazyNode::link(2, TailPolicy::Recompute, || None)
    })
}

#[test]
fn test_continuation_not_run_at_construction() {
    let calls = Rc::new(Cell::new(0));
    let link = counted_chain(Rc::clone(&calls), TailPolicy::Recompute);
    assert_eq!(calls.get(), 0);
    assert_eq!(link.as_deref().map(|node| *node.value()), Some(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_recompute_runs_continuation_every_time() {
    let calls = Rc::new(Cell::new(0));
    let node = counted_chain(Rc::clone(&calls), TailPolicy::Recompute).unwrap();

    let first = node.force_tail().unwrap();
    let second = node.force_tail().unwrap();

    assert_eq!(calls.get(), 2);
    assert_eq!(first.value(), second.value());
}

#[test]
fn test_memoize_runs_continuation_once() {
    let calls = Rc::new(Cell::new(0));
    let node = counted_chain(Rc::clone(&calls), TailPolicy::Memoize).unwrap();

    let first = node.force_tail().unwrap();
    let second = node.force_tail().unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(first.value(), second.value());
    assert_eq!(node.policy(), TailPolicy::Memoize);
}

#[test]
fn test_tail_policy_reported() {
    let recompute: Tail<i32> = Tail::new(TailPolicy::Recompute, || None);
    let memoize: Tail<i32> = Tail::new(TailPolicy::Memoize, || None);
    assert_eq!(recompute.policy(), TailPolicy::Recompute);
    assert_eq!(memoize.policy(), TailPolicy::Memoize);
    assert!(memoize.force().is_none());
}

#[test]
fn test_empty_stream_has_no_node() {
    let stream: Stream<i32> = Stream::empty();
    assert!(stream.is_empty());
    assert!(stream.node().is_none());
    assert_eq!(stream.head(), None);
}

#[test]
fn test_stream_combinators_do_not_mutate_receiver() {
    let base = Stream::new();
    let evens = base.filter(|n| n % 2 == 0);
    let shifted = base.skip(5);

    assert_eq!(base.get(3), Some(3));
    assert_eq!(evens.get(3), Some(6));
    assert_eq!(shifted.get(0), Some(5));
    assert_eq!(base.head(), Some(&0));
}

#[test]
fn test_memoized_stream_stops_recomputing_upstream() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let source = Stream::new().map(move |n| {
        counter.set(counter.get() + 1);
        *n
    });

    let plain = source.limit(10);
    plain.for_each(|_| {});
    plain.for_each(|_| {});
    let plain_calls = calls.get();

    calls.set(0);
    let cached = source.memoize().limit(10);
    cached.for_each(|_| {});
    let first_pass = calls.get();
    cached.for_each(|_| {});

    assert!(plain_calls > 10);
    assert_eq!(calls.get(), first_pass);
}

#[test]
fn test_long_memoized_chain_drops_without_overflow() {
    let stream = Stream::new().memoize().limit(200_000);
    let mut count = 0usize;
    stream.for_each(|_| count += 1);
    assert_eq!(count, 200_000);
    drop(stream);
}

#[test]
fn test_debug_shows_head_only() {
    let stream = Stream::new();
    let rendered = format!("{:?}", stream);
    assert!(rendered.contains("Some(0)"));
}
