//! Statistics Tests.
//!
//! Rates, derived counters, and the text report produced by `CacheStats`.

use cachesim_core::Policy;
use cachesim_core::stats::CacheStats;

use crate::common::harness::{cache, feed};

#[test]
fn empty_run_rates_are_zero() {
    let stats = CacheStats::default();
    assert!(stats.hit_rate().abs() < f64::EPSILON);
    assert!(stats.miss_rate().abs() < f64::EPSILON);
}

#[test]
fn rates_sum_to_one() {
    let stats = CacheStats {
        accesses: 8,
        hits: 6,
        misses: 2,
        evictions: 1,
    };
    assert!((stats.hit_rate() - 0.75).abs() < 1e-12);
    assert!((stats.miss_rate() - 0.25).abs() < 1e-12);
    assert_eq!(stats.fills(), 1);
}

#[test]
fn counters_from_cache() {
    let mut c = cache(16, 4, 1, Policy::lru());
    // 0 and 16 conflict in set 0.
    feed(&mut c, &[0, 16, 0, 4, 4]);
    let stats = c.counters();
    assert_eq!(
        stats,
        CacheStats {
            accesses: 5,
            hits: 1,
            misses: 4,
            evictions: 2,
        }
    );
    assert_eq!(stats.fills(), 2);
}

#[test]
fn report_layout() {
    let stats = CacheStats {
        accesses: 4,
        hits: 1,
        misses: 3,
        evictions: 0,
    };
    let text = stats.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "accesses                 4");
    assert_eq!(lines[1], "hits                     1 (25.00%)");
    assert_eq!(lines[2], "misses                   3 (75.00%)");
    assert_eq!(lines[3], "  misses.fill            3");
    assert_eq!(lines[4], "  misses.evict           0");
}
