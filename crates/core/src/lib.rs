//! Trace-driven cache simulator library.
//!
//! This crate models a single hardware cache fed by a stream of memory addresses:
//! 1. **Cache:** Geometry validation, address decomposition, line storage, and the access engine.
//! 2. **Policies:** LRU and Random replacement, the latter driven by an injected random source.
//! 3. **Simulation:** Hexadecimal trace decoding, run driver, and associativity sweeps.
//! 4. **Configuration & Statistics:** JSON configuration and hit/miss reporting.

/// Set-associative cache engine (geometry, line store, replacement policies).
pub mod cache;
/// Common types (errors, access outcomes).
pub mod common;
/// Simulator configuration (defaults, policy enum, config structures).
pub mod config;
/// Trace reading and simulation driver.
pub mod sim;
/// Hit/miss statistics collection and reporting.
pub mod stats;

/// Cache engine; construct with `Cache::new` or `Cache::from_config`.
pub use crate::cache::Cache;
/// Replacement policy selector passed to `Cache::new`.
pub use crate::cache::policies::Policy;
/// Outcome of a single access.
pub use crate::common::AccessResult;
/// Construction-time error.
pub use crate::common::ConfigError;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
