//! Simulator and Sweep Tests.
//!
//! Runs address streams through `Simulator`, checks access limits, outcome
//! recording, trace error propagation, and the associativity sweep.

use std::io::Cursor;

use cachesim_core::common::{ConfigError, SimError, TraceError};
use cachesim_core::config::{CacheConfig, Config, GeneralConfig, ReplacementPolicy};
use cachesim_core::sim::{Simulator, TraceReader, sweep};
use cachesim_core::{AccessResult, Cache, Policy};
use pretty_assertions::assert_eq;

use crate::common::harness::init_tracing;

fn config(size: u64, block: u64, ways: u32) -> Config {
    Config {
        general: GeneralConfig::default(),
        cache: CacheConfig {
            size_bytes: size,
            block_bytes: block,
            ways,
            ..CacheConfig::default()
        },
    }
}

#[test]
fn run_reports_counters() {
    init_tracing();
    let mut sim = Simulator::new(&config(16, 4, 1)).unwrap();
    let report = sim.run([0u64, 4, 8, 12, 0, 4]);
    assert_eq!(report.stats.accesses, 6);
    assert_eq!(report.stats.hits, 2);
    assert_eq!(report.stats.misses, 4);
    assert_eq!(report.policy, ReplacementPolicy::Lru);
    assert_eq!(report.geometry.num_sets(), 4);
    assert!(report.outcomes.is_empty());
}

#[test]
fn run_records_outcomes_when_enabled() {
    let mut cfg = config(16, 4, 1);
    cfg.general.trace_accesses = true;
    let mut sim = Simulator::new(&cfg).unwrap();
    let report = sim.run([0u64, 0, 16]);
    assert_eq!(
        report.outcomes,
        vec![
            (0, AccessResult::Miss),
            (0, AccessResult::Hit),
            (16, AccessResult::Miss),
        ]
    );
}

#[test]
fn max_accesses_truncates_run() {
    let mut cfg = config(16, 4, 1);
    cfg.general.max_accesses = Some(3);
    let mut sim = Simulator::new(&cfg).unwrap();
    let report = sim.run(0u64..100);
    assert_eq!(report.stats.accesses, 3);
}

#[test]
fn runs_accumulate() {
    let mut sim = Simulator::new(&config(16, 4, 1)).unwrap();
    let _ = sim.run([0u64]);
    let report = sim.run([0u64]);
    assert_eq!((report.stats.hits, report.stats.misses), (1, 1));
}

#[test]
fn run_trace_decodes_hex() {
    let mut sim = Simulator::new(&config(16, 4, 1)).unwrap();
    let report = sim
        .run_trace(TraceReader::new(Cursor::new("0\n4\n0x8\nC\n0\n")))
        .unwrap();
    assert_eq!((report.stats.hits, report.stats.misses), (1, 4));
}

#[test]
fn run_trace_stops_at_bad_entry() {
    let mut sim = Simulator::new(&config(16, 4, 1)).unwrap();
    let err = sim
        .run_trace(TraceReader::new(Cursor::new("0\n0\nnope\n0\n")))
        .unwrap_err();
    match err {
        SimError::Trace(TraceError::InvalidAddress { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "nope");
        }
        other => panic!("unexpected {other:?}"),
    }
    // The two entries before the failure were simulated.
    assert_eq!(sim.cache.stats(), (1, 1));
}

#[test]
fn run_trace_limit_skips_trailing_garbage() {
    let mut cfg = config(16, 4, 1);
    cfg.general.max_accesses = Some(2);
    let mut sim = Simulator::new(&cfg).unwrap();
    let report = sim
        .run_trace(TraceReader::new(Cursor::new("0\n0\nnope\n")))
        .unwrap();
    assert_eq!(report.stats.accesses, 2);
}

#[test]
fn invalid_config_is_rejected() {
    let err = Simulator::new(&config(10, 4, 1)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGeometry { .. }));
}

#[test]
fn with_cache_wraps_existing_engine() {
    let cache = Cache::new(16, 4, 2, Policy::random(11)).unwrap();
    let mut sim = Simulator::with_cache(cache, GeneralConfig::default());
    let report = sim.run([0u64, 8, 16]);
    assert_eq!(report.policy, ReplacementPolicy::Random);
    assert_eq!(report.stats.misses, 3);
}

#[test]
fn report_display_contains_summary() {
    let mut cfg = config(16, 4, 1);
    cfg.general.trace_accesses = true;
    let mut sim = Simulator::new(&cfg).unwrap();
    let text = sim.run([0u64, 0]).to_string();
    assert!(text.contains("CACHE SIMULATION STATISTICS"), "{text}");
    assert!(text.contains("direct-mapped"), "{text}");
    assert!(text.contains("policy                   LRU"), "{text}");
    assert!(text.contains("0x00000000             hit"), "{text}");
    assert!(text.contains("hits                     1 (50.00%)"), "{text}");
}

// ══════════════════════════════════════════════════════════
// Sweep
// ══════════════════════════════════════════════════════════

#[test]
fn sweep_covers_all_power_of_two_ways() {
    let trace: Vec<u64> = (0..64).map(|i| (i * 4) % 96).collect();
    let reports = sweep(&config(32, 4, 1), &trace).unwrap();
    // 8 lines: ways 1, 2, 4, 8 under two policies each.
    let shape: Vec<(u32, ReplacementPolicy)> = reports
        .iter()
        .map(|r| (r.geometry.associativity(), r.policy))
        .collect();
    assert_eq!(
        shape,
        vec![
            (1, ReplacementPolicy::Lru),
            (1, ReplacementPolicy::Random),
            (2, ReplacementPolicy::Lru),
            (2, ReplacementPolicy::Random),
            (4, ReplacementPolicy::Lru),
            (4, ReplacementPolicy::Random),
            (8, ReplacementPolicy::Lru),
            (8, ReplacementPolicy::Random),
        ]
    );
    for report in &reports {
        assert_eq!(report.stats.accesses, trace.len() as u64);
        assert_eq!(report.geometry.total_size(), 32);
    }
}

#[test]
fn sweep_skips_inexact_ways() {
    // 12 lines of 4 bytes: 8 ways does not divide, 1/2/4 do.
    let reports = sweep(&config(48, 4, 1), &[0, 4, 8]).unwrap();
    let ways: Vec<u32> = reports.iter().map(|r| r.geometry.associativity()).collect();
    assert_eq!(ways, vec![1, 1, 2, 2, 4, 4]);
}

#[test]
fn sweep_direct_mapped_policies_agree() {
    let trace: Vec<u64> = (0..200).map(|i| (i * 12) % 160).collect();
    let reports = sweep(&config(32, 4, 1), &trace).unwrap();
    assert_eq!(reports[0].stats, reports[1].stats);
}

#[test]
fn sweep_rejects_invalid_base() {
    let err = sweep(&config(30, 4, 1), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGeometry { .. }));
}
