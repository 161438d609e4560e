//! Test harness helpers.

use std::collections::HashSet;

use cachesim_core::{AccessResult, Cache, Policy};

/// Installs a test subscriber so `tracing` output shows up on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Builds a cache, panicking on invalid geometry.
pub fn cache(total_size: u64, block_size: u64, associativity: u32, policy: Policy) -> Cache {
    init_tracing();
    Cache::new(total_size, block_size, associativity, policy).expect("valid test geometry")
}

/// Feeds every address and returns the outcomes in order.
pub fn outcomes(cache: &mut Cache, addresses: &[u64]) -> Vec<AccessResult> {
    addresses.iter().map(|&a| cache.access(a)).collect()
}

/// Feeds every address, discarding outcomes.
pub fn feed(cache: &mut Cache, addresses: &[u64]) {
    for &address in addresses {
        let _ = cache.access(address);
    }
}

/// Shorthand for building expected outcome vectors: `'H'` / `'M'`.
pub fn expect(pattern: &str) -> Vec<AccessResult> {
    pattern
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'H' => AccessResult::Hit,
            'M' => AccessResult::Miss,
            other => panic!("bad outcome pattern character {other:?}"),
        })
        .collect()
}

/// Asserts that no set holds two valid lines with the same tag.
pub fn assert_no_duplicate_residency(cache: &Cache) {
    for set in 0..cache.geometry().num_sets() as usize {
        let mut seen = HashSet::new();
        for line in cache.set(set).iter().filter(|l| l.is_valid()) {
            assert!(
                seen.insert(line.tag()),
                "set {set} holds tag {:#x} twice",
                line.tag()
            );
        }
    }
}
