//! Random Replacement Policy.
//!
//! This policy evicts a uniformly chosen way of the target set, regardless of
//! validity or recency. The randomness comes from a [`RandomSource`] handed to
//! the policy at construction, so runs are reproducible whenever the source is.
//!
//! The stock source is [`XorShift64`], a 64-bit xorshift generator: cheap,
//! fully deterministic for a given seed, and good enough for victim choice.

use std::fmt;

/// Seed substituted for zero, which is a fixed point of xorshift.
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A source of pseudo-random 64-bit values.
pub trait RandomSource: fmt::Debug + Send {
    /// Returns the next value of the stream.
    fn next_u64(&mut self) -> u64;

    /// Returns a value uniformly distributed in `0..bound`.
    ///
    /// Uses rejection sampling so that no residue class is favoured.
    /// `bound` must be non-zero.
    fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "bound must be non-zero");
        // 2^64 mod bound: the size of the biased tail to reject.
        let tail = (u64::MAX % bound + 1) % bound;
        loop {
            let x = self.next_u64();
            if tail == 0 || x <= u64::MAX - tail {
                return x % bound;
            }
        }
    }
}

/// 64-bit xorshift generator (shifts 13, 7, 17).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator from `seed`. A zero seed is replaced by a fixed
    /// non-zero constant.
    pub const fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Random Policy state.
#[derive(Debug)]
pub struct RandomPolicy {
    source: Box<dyn RandomSource>,
}

impl RandomPolicy {
    /// Creates a Random policy drawing from `source`.
    pub fn new(source: Box<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Picks a way in `0..ways`.
    pub fn select_victim(&mut self, ways: usize) -> usize {
        self.source.next_below(ways as u64) as usize
    }
}
