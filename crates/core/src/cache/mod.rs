//! Set-Associative Cache Simulator.
//!
//! This module implements a configurable set-associative cache. It supports
//! LRU and Random replacement and counts hits, misses, and evictions over an
//! address trace. Direct-mapped and fully-associative caches are the
//! `associativity == 1` and `num_sets == 1` corners of the same model.
//!
//! An access runs in O(associativity):
//! 1. Split the address into `(set_index, tag)`.
//! 2. Look the tag up in its set. A hit refreshes the line's recency.
//! 3. A miss fills the first free way or, when the set is full, evicts the
//!    victim chosen by the replacement policy.

/// Geometry validation and address decomposition.
pub mod geometry;

/// Cache replacement policy implementations (LRU, Random).
pub mod policies;

/// Flat line storage grouped into sets.
pub mod store;

use tracing::{debug, trace};

use self::geometry::Geometry;
use self::policies::Policy;
use self::store::{CacheLine, LineStore};
use crate::common::{AccessResult, ConfigError};
use crate::config::{CacheConfig, ReplacementPolicy as PolicyKind};
use crate::stats::CacheStats;

/// Cache simulator implementing a set-associative cache with a configurable policy.
#[derive(Debug)]
pub struct Cache {
    geometry: Geometry,
    lines: LineStore,
    policy: Policy,
    /// Logical clock, advanced once per access.
    clock: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Cache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    ///
    /// * `total_size` - Capacity in bytes
    /// * `block_size` - Line size in bytes
    /// * `associativity` - Ways per set
    /// * `policy` - Replacement policy used when a set is full
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] when `total_size` is not a
    /// positive multiple of `associativity * block_size`, or when either of
    /// those is zero.
    pub fn new(
        total_size: u64,
        block_size: u64,
        associativity: u32,
        policy: Policy,
    ) -> Result<Self, ConfigError> {
        let geometry = Geometry::new(total_size, block_size, associativity)?;
        Ok(Self::with_geometry(geometry, policy))
    }

    /// Creates an empty cache from a validated geometry.
    pub fn with_geometry(geometry: Geometry, policy: Policy) -> Self {
        debug!(%geometry, policy = %policy.kind(), "cache constructed");
        Self {
            lines: LineStore::new(geometry.num_sets() as usize, geometry.ways()),
            geometry,
            policy,
            clock: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Creates an empty cache from a configuration block.
    ///
    /// Random replacement is seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] for an inconsistent geometry.
    pub fn from_config(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.size_bytes,
            config.block_bytes,
            config.ways,
            Policy::from_kind(config.policy, config.seed),
        )
    }

    /// Accesses the cache for the specified address.
    ///
    /// Updates recency on a hit. On a miss, installs the block into the first
    /// free way of its set, or evicts the policy's victim when the set is full.
    pub fn access(&mut self, address: u64) -> AccessResult {
        self.clock += 1;
        let now = self.clock;
        let (set, tag) = self.geometry.decompose(address);

        if let Some(way) = self.lines.lookup(set, tag) {
            self.hits += 1;
            self.lines.touch(set, way, now);
            trace!(address, set, tag, way, "hit");
            return AccessResult::Hit;
        }

        self.misses += 1;
        let way = match self.lines.find_free(set) {
            Some(way) => way,
            None => {
                let way = self.policy.select_victim(self.lines.set(set));
                let victim_tag = self.lines.set(set)[way].tag();
                if self.lines.invalidate(set, way) {
                    self.evictions += 1;
                    debug!(
                        address,
                        set,
                        way,
                        evicted = self.geometry.block_address(set, victim_tag),
                        "evict"
                    );
                }
                way
            }
        };
        self.lines.install(set, way, tag, now);
        trace!(address, set, tag, way, "miss");
        AccessResult::Miss
    }

    /// Checks if the block containing `address` is resident.
    ///
    /// Does not count as an access and does not touch recency.
    pub fn contains(&self, address: u64) -> bool {
        let (set, tag) = self.geometry.decompose(address);
        self.lines.lookup(set, tag).is_some()
    }

    /// Returns `(hits, misses)` accumulated so far.
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Returns the full counter set accumulated so far.
    pub const fn counters(&self) -> CacheStats {
        CacheStats {
            accesses: self.hits + self.misses,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    /// Invalidates every line and zeroes all counters. Geometry and policy are kept.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.clock = 0;
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }

    /// Validated geometry of this cache.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Replacement policy in use.
    pub const fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Read-only view of the lines of set `set_index`, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `set_index >= num_sets`.
    pub fn set(&self, set_index: usize) -> &[CacheLine] {
        self.lines.set(set_index)
    }

    /// Number of valid lines.
    pub fn occupancy(&self) -> usize {
        self.lines.occupancy()
    }
}
