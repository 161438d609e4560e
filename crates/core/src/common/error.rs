//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Configuration errors:** Inconsistent cache geometry and malformed config files.
//! 2. **Trace errors:** Undecodable addresses and I/O failures while reading a trace.
//! 3. **Simulation errors:** A single type wrapping both for the simulator entry points.
//!
//! Cache accesses themselves never fail; every `u64` is a valid address.

use std::io;

use thiserror::Error;

/// Errors raised while building a cache or loading its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The size, block size, and associativity do not describe a whole number of sets.
    ///
    /// Raised once, at construction. No cache is produced.
    #[error(
        "invalid cache geometry (size={total_size}, block={block_size}, ways={associativity}): {reason}"
    )]
    InvalidGeometry {
        /// Requested total capacity in bytes.
        total_size: u64,
        /// Requested block (line) size in bytes.
        block_size: u64,
        /// Requested number of ways per set.
        associativity: u32,
        /// Which relationship was violated.
        reason: GeometryViolation,
    },

    /// A configuration document could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),
}

/// The specific geometry rule a rejected configuration broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryViolation {
    /// Block size of zero bytes.
    #[error("block size must be non-zero")]
    ZeroBlockSize,
    /// Zero ways per set.
    #[error("associativity must be at least 1")]
    ZeroAssociativity,
    /// `associativity * block_size` does not fit in 64 bits.
    #[error("bytes per set overflow a 64-bit integer")]
    SetSizeOverflow,
    /// Total size is not a multiple of the bytes per set.
    #[error("total size is not a multiple of associativity * block size")]
    InexactDivision,
    /// The derived set count is zero.
    #[error("geometry yields zero sets")]
    NoSets,
    /// The line array would not be addressable on this host.
    #[error("line count exceeds the host address space")]
    TooManyLines,
}

/// Errors raised while decoding a memory-reference trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A token is not a hexadecimal address that fits in 64 bits.
    #[error("line {line}: invalid address `{token}`")]
    InvalidAddress {
        /// 1-based line number of the offending token (0 when parsed standalone).
        line: usize,
        /// The token as it appeared in the trace.
        token: String,
    },

    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),
}

/// Any error surfaced by a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Malformed or unreadable trace.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
