//! Configuration system for the cache simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a simulation run. It provides:
//! 1. **Defaults:** Baseline cache geometry (32-byte direct-mapped cache, 4-byte blocks, LRU).
//! 2. **Structures:** `GeneralConfig` for run options and `CacheConfig` for geometry and policy.
//! 3. **Enums:** Replacement policy selection.
//!
//! Configuration is supplied as JSON (`Config::from_json` / `Config::from_file`) or built
//! from `Config::default()` and overridden field by field, as the CLI does.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default total cache size in bytes.
    pub const CACHE_SIZE: u64 = 32;

    /// Default block (line) size in bytes.
    pub const BLOCK_SIZE: u64 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const CACHE_WAYS: u32 = 1;

    /// Default seed for the random replacement source.
    ///
    /// Any non-zero value works; xorshift state must never be zero.
    pub const RANDOM_SEED: u64 = 0x2545_F491_4F6C_DD1D;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which cache line to evict
/// when a new line must be installed in a full cache set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the valid line whose last access is the oldest.
    #[default]
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Random replacement policy.
    ///
    /// Evicts a uniformly chosen slot of the set.
    #[serde(alias = "Random", alias = "random")]
    Random,
}

impl ReplacementPolicy {
    /// All supported policies, in reporting order.
    pub const ALL: [Self; 2] = [Self::Lru, Self::Random];
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => f.write_str("LRU"),
            Self::Random => f.write_str("Random"),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Run options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Cache geometry and policy.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// field has the wrong type. Geometry is not validated here; see
    /// [`Cache::from_config`](crate::cache::Cache::from_config).
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Record the outcome of every access in the run report.
    #[serde(default)]
    pub trace_accesses: bool,

    /// Stop after this many accesses (whole trace when `None`).
    #[serde(default)]
    pub max_accesses: Option<usize>,
}

/// Cache geometry and replacement configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: u64,

    /// Block (line) size in bytes
    #[serde(default = "CacheConfig::default_block")]
    pub block_bytes: u64,

    /// Associativity (number of ways)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: u32,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// Seed for the random replacement source (ignored by LRU)
    #[serde(default = "CacheConfig::default_seed")]
    pub seed: u64,
}

impl CacheConfig {
    /// Returns the default cache size in bytes.
    const fn default_size() -> u64 {
        defaults::CACHE_SIZE
    }

    /// Returns the default block size in bytes.
    const fn default_block() -> u64 {
        defaults::BLOCK_SIZE
    }

    /// Returns the default associativity.
    const fn default_ways() -> u32 {
        defaults::CACHE_WAYS
    }

    /// Returns the default random seed.
    const fn default_seed() -> u64 {
        defaults::RANDOM_SEED
    }
}

impl Default for CacheConfig {
    /// Creates a default cache configuration.
    ///
    /// A 32-byte direct-mapped cache with 4-byte blocks and LRU replacement.
    fn default() -> Self {
        Self {
            size_bytes: defaults::CACHE_SIZE,
            block_bytes: defaults::BLOCK_SIZE,
            ways: defaults::CACHE_WAYS,
            policy: ReplacementPolicy::default(),
            seed: defaults::RANDOM_SEED,
        }
    }
}
