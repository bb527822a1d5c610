use sicp_stream::stream::sieve;
use sicp_stream::{NaturalsConfig, Stream, StreamConfig, StreamError, TailPolicy};

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

#[test]
fn test_default_stream_is_naturals_from_zero() {
    let naturals = Stream::default();
    assert_eq!(naturals.limit(5).iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(naturals.get(1000), Some(1000));
}

#[test]
fn test_naturals_from_two() {
    let naturals = Stream::naturals(NaturalsConfig::from_two());
    assert_eq!(naturals.get(0), Some(2));
    assert_eq!(naturals.limit(4).iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn test_naturals_custom_step() {
    let by_fives = Stream::naturals(NaturalsConfig::new().start(10).step(5));
    assert_eq!(by_fives.limit(4).iter().collect::<Vec<_>>(), vec![10, 15, 20, 25]);
    for i in 0..50 {
        assert_eq!(by_fives.get(i + 1), by_fives.get(i).map(|v| v + 5));
    }
}

#[test]
fn test_first_ten_primes() {
    let primes = Stream::primes();
    assert_eq!(
        primes.limit(10).iter().collect::<Vec<_>>(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
}

#[test]
fn test_primes_have_no_smaller_divisor() {
    let mut emitted = Vec::new();
    Stream::primes().limit(25).for_each(|p| emitted.push(*p));
    assert_eq!(emitted.len(), 25);
    assert!(emitted.iter().all(|&p| is_prime(p)));
    assert_eq!(emitted.last(), Some(&97));
}

#[test]
fn test_primes_are_every_prime_in_range() {
    let expected: Vec<u64> = (2..60).filter(|&n| is_prime(n)).collect();
    let primes: Vec<u64> = Stream::primes().iter().take(expected.len()).collect();
    assert_eq!(primes, expected);
}

#[test]
fn test_memoized_primes_match() {
    let plain: Vec<u64> = Stream::primes().limit(15).iter().collect();
    let memoized: Vec<u64> = Stream::primes().memoize().limit(15).iter().collect();
    assert_eq!(plain, memoized);
}

#[test]
fn test_prime_sieve_rejects_small_start() {
    assert_eq!(
        Stream::prime_sieve(1).map(|s| s.head().copied()),
        Err(StreamError::InvalidSieveStart(1))
    );
    assert!(Stream::prime_sieve(0).is_err());
}

#[test]
fn test_prime_sieve_from_higher_start() {
    // 4 has no layer below it to remove it; later composites all do
    let sieve = Stream::prime_sieve(3).unwrap();
    assert_eq!(sieve.limit(6).iter().collect::<Vec<_>>(), vec![3, 4, 5, 7, 11, 13]);
}

#[test]
fn test_prime_sieve_from_two_equals_primes() {
    let sieve = Stream::prime_sieve(2).unwrap();
    assert_eq!(sieve.get(9), Stream::primes().get(9));
}

#[test]
fn test_deep_prime_index() {
    let primes = Stream::primes();
    // zero-based: position 999 is the thousandth prime
    assert_eq!(primes.get(999), Some(7919));
    assert_eq!(primes.get(1000), Some(7927));
}

#[test]
fn test_deep_prime_index_memoized_config() {
    let config = StreamConfig::new().tail_policy(TailPolicy::Memoize);
    let primes = Stream::primes_with(&config).unwrap();
    assert_eq!(primes.get(999), Some(7919));
    // second lookup walks the cached chain
    assert_eq!(primes.get(999), Some(7919));
}

#[test]
fn test_memoized_config_caches_every_sieve_layer() {
    let config = StreamConfig::new().tail_policy(TailPolicy::Memoize);
    let primes = Stream::primes_with(&config).unwrap();
    let deep = primes.skip(50);
    assert_eq!(deep.head(), Some(&233));
    assert_eq!(deep.node().map(|node| node.policy()), Some(TailPolicy::Memoize));

    // wrapping the plain sieve only caches the outer layer
    let outer_only = Stream::primes().memoize();
    assert_eq!(outer_only.node().map(|node| node.policy()), Some(TailPolicy::Memoize));
    assert_eq!(outer_only.get(50), Some(233));
}

#[test]
fn test_sieve_over_custom_candidates() {
    let odd_candidates = Stream::naturals(NaturalsConfig::new().start(3).step(2));
    let sieved = Stream::from_link(sieve(odd_candidates.into_link()));
    assert_eq!(
        sieved.limit(6).iter().collect::<Vec<_>>(),
        vec![3, 5, 7, 11, 13, 17]
    );
}
