//! Cache Replacement Policies.
//!
//! Selects the victim way when a miss lands in a full set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by the per-line recency stamps kept in
//!   the line store.
//! - `Random`: Uniform choice among all ways of the set, drawn from an
//!   injected [`RandomSource`].

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy and its random sources.
pub mod random;

pub use random::{RandomPolicy, RandomSource, XorShift64};

use super::store::CacheLine;
use crate::config::ReplacementPolicy as PolicyKind;

/// Replacement policy, dispatched by variant.
#[derive(Debug)]
pub enum Policy {
    /// Evict the valid line with the oldest recency.
    Lru,
    /// Evict a uniformly random way.
    Random(RandomPolicy),
}

impl Policy {
    /// LRU replacement.
    pub const fn lru() -> Self {
        Self::Lru
    }

    /// Random replacement backed by an [`XorShift64`] seeded with `seed`.
    pub fn random(seed: u64) -> Self {
        Self::Random(RandomPolicy::new(Box::new(XorShift64::new(seed))))
    }

    /// Random replacement backed by a caller-supplied source.
    pub fn random_with(source: Box<dyn RandomSource>) -> Self {
        Self::Random(RandomPolicy::new(source))
    }

    /// Builds the policy named by a configuration value.
    pub fn from_kind(kind: PolicyKind, seed: u64) -> Self {
        match kind {
            PolicyKind::Lru => Self::lru(),
            PolicyKind::Random => Self::random(seed),
        }
    }

    /// The configuration value naming this policy.
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Lru => PolicyKind::Lru,
            Self::Random(_) => PolicyKind::Random,
        }
    }

    /// Selects the way to evict from a full set.
    ///
    /// # Arguments
    ///
    /// * `set` - The lines of the target set, in way order. Must be non-empty.
    ///
    /// # Returns
    ///
    /// The way index of the victim, always `< set.len()`.
    pub fn select_victim(&mut self, set: &[CacheLine]) -> usize {
        match self {
            Self::Lru => lru::select_victim(set),
            Self::Random(policy) => policy.select_victim(set.len()),
        }
    }
}
