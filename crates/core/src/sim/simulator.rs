//! Simulator: drives a cache with an address stream and collects a report.

use std::fmt;

use tracing::info;

use crate::cache::Cache;
use crate::cache::geometry::Geometry;
use crate::common::{AccessResult, ConfigError, SimError, TraceError};
use crate::config::{CacheConfig, Config, GeneralConfig, ReplacementPolicy};
use crate::stats::CacheStats;

/// Summary of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    /// Geometry of the simulated cache.
    pub geometry: Geometry,
    /// Replacement policy of the simulated cache.
    pub policy: ReplacementPolicy,
    /// Counters at the end of the run.
    pub stats: CacheStats,
    /// Per-access outcomes, recorded only when `trace_accesses` is enabled.
    pub outcomes: Vec<(u64, AccessResult)>,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "geometry                 {}", self.geometry)?;
        writeln!(f, "policy                   {}", self.policy)?;
        writeln!(f, "----------------------------------------------------------")?;
        if !self.outcomes.is_empty() {
            for (address, outcome) in &self.outcomes {
                writeln!(f, "  {address:#010x}             {outcome}")?;
            }
            writeln!(f, "----------------------------------------------------------")?;
        }
        writeln!(f, "{}", self.stats)?;
        write!(f, "==========================================================")
    }
}

/// Top-level simulator: one cache plus run options.
#[derive(Debug)]
pub struct Simulator {
    /// The simulated cache.
    pub cache: Cache,
    general: GeneralConfig,
}

impl Simulator {
    /// Builds a simulator from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] for an inconsistent cache geometry.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::with_cache(
            Cache::from_config(&config.cache)?,
            config.general.clone(),
        ))
    }

    /// Wraps an existing cache.
    pub const fn with_cache(cache: Cache, general: GeneralConfig) -> Self {
        Self { cache, general }
    }

    /// Feeds `addresses` to the cache, honouring `max_accesses`.
    ///
    /// Counters accumulate across runs; the returned stats are cumulative.
    pub fn run<I>(&mut self, addresses: I) -> SimReport
    where
        I: IntoIterator<Item = u64>,
    {
        let mut outcomes = Vec::new();
        self.begin();
        for address in addresses.into_iter().take(self.limit()) {
            self.step(address, &mut outcomes);
        }
        self.finish(outcomes)
    }

    /// Feeds a fallible address stream (such as a [`TraceReader`](super::TraceReader)).
    ///
    /// Entries past `max_accesses` are never read.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] at the first malformed or unreadable entry.
    /// Accesses made before the failure remain counted in the cache.
    pub fn run_trace<I>(&mut self, trace: I) -> Result<SimReport, SimError>
    where
        I: IntoIterator<Item = Result<u64, TraceError>>,
    {
        let mut outcomes = Vec::new();
        self.begin();
        for entry in trace.into_iter().take(self.limit()) {
            self.step(entry?, &mut outcomes);
        }
        Ok(self.finish(outcomes))
    }

    fn limit(&self) -> usize {
        self.general.max_accesses.unwrap_or(usize::MAX)
    }

    fn begin(&self) {
        info!(
            geometry = %self.cache.geometry(),
            policy = %self.cache.policy_kind(),
            "simulation started"
        );
    }

    fn step(&mut self, address: u64, outcomes: &mut Vec<(u64, AccessResult)>) {
        let outcome = self.cache.access(address);
        if self.general.trace_accesses {
            outcomes.push((address, outcome));
        }
    }

    fn finish(&self, outcomes: Vec<(u64, AccessResult)>) -> SimReport {
        let stats = self.cache.counters();
        info!(
            accesses = stats.accesses,
            hits = stats.hits,
            misses = stats.misses,
            "simulation finished"
        );
        SimReport {
            geometry: *self.cache.geometry(),
            policy: self.cache.policy_kind(),
            stats,
            outcomes,
        }
    }
}

/// Runs `addresses` through every power-of-two associativity the configured
/// cache admits (direct-mapped up to fully associative), under each policy.
///
/// Each configuration gets a fresh, independent cache. Reports are ordered by
/// associativity, then policy.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidGeometry`] if the configured size and block
/// size do not form a valid direct-mapped cache.
pub fn sweep(config: &Config, addresses: &[u64]) -> Result<Vec<SimReport>, ConfigError> {
    let base = &config.cache;
    let direct = Geometry::new(base.size_bytes, base.block_bytes, 1)?;
    let max_ways = direct.num_sets();

    let mut reports = Vec::new();
    let mut ways: u32 = 1;
    while u64::from(ways) <= max_ways {
        if Geometry::new(base.size_bytes, base.block_bytes, ways).is_ok() {
            for policy in ReplacementPolicy::ALL {
                let cache = Cache::from_config(&CacheConfig {
                    ways,
                    policy,
                    ..base.clone()
                })?;
                let mut sim = Simulator::with_cache(cache, config.general.clone());
                reports.push(sim.run(addresses.iter().copied()));
            }
        }
        match ways.checked_mul(2) {
            Some(next) => ways = next,
            None => break,
        }
    }
    Ok(reports)
}
