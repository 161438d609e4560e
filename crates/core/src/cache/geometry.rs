//! Cache Geometry and Address Decomposition.
//!
//! A cache is described by three user-chosen quantities (total size, block
//! size, associativity) and one derived quantity, the number of sets:
//!
//! ```text
//! total_size = num_sets * associativity * block_size
//! ```
//!
//! Every address is split the same way regardless of cache shape:
//!
//! ```text
//! block_number = address / block_size
//! set_index    = block_number % num_sets
//! tag          = block_number / num_sets
//! ```
//!
//! Direct-mapped (`associativity == 1`) and fully-associative (`num_sets == 1`)
//! caches are special cases of this one model and need no separate path.

use std::fmt;

use crate::common::{ConfigError, GeometryViolation};

/// Shape classification of a cache, derived from its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One way per set.
    DirectMapped,
    /// Several sets of several ways.
    SetAssociative,
    /// A single set holding every line.
    FullyAssociative,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectMapped => f.write_str("direct-mapped"),
            Self::SetAssociative => f.write_str("set-associative"),
            Self::FullyAssociative => f.write_str("fully-associative"),
        }
    }
}

/// Validated cache geometry.
///
/// Construction is the only place geometry can fail; once a `Geometry`
/// exists its invariant holds and decomposition is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    total_size: u64,
    block_size: u64,
    associativity: u32,
    num_sets: u64,
}

impl Geometry {
    /// Validates a geometry and derives its set count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] when the block size or
    /// associativity is zero, when the bytes per set overflow, when the total
    /// size is not an exact multiple of the bytes per set, when that yields
    /// zero sets, or when the line count does not fit in `usize`.
    pub fn new(total_size: u64, block_size: u64, associativity: u32) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidGeometry {
            total_size,
            block_size,
            associativity,
            reason,
        };

        if block_size == 0 {
            return Err(invalid(GeometryViolation::ZeroBlockSize));
        }
        if associativity == 0 {
            return Err(invalid(GeometryViolation::ZeroAssociativity));
        }
        let set_bytes = block_size
            .checked_mul(u64::from(associativity))
            .ok_or_else(|| invalid(GeometryViolation::SetSizeOverflow))?;
        if total_size % set_bytes != 0 {
            return Err(invalid(GeometryViolation::InexactDivision));
        }
        let num_sets = total_size / set_bytes;
        if num_sets == 0 {
            return Err(invalid(GeometryViolation::NoSets));
        }
        let lines = num_sets
            .checked_mul(u64::from(associativity))
            .and_then(|n| usize::try_from(n).ok());
        if lines.is_none() {
            return Err(invalid(GeometryViolation::TooManyLines));
        }

        Ok(Self {
            total_size,
            block_size,
            associativity,
            num_sets,
        })
    }

    /// Splits an address into `(set_index, tag)`.
    #[inline]
    pub const fn decompose(&self, address: u64) -> (usize, u64) {
        let block_number = address / self.block_size;
        // num_sets * associativity fits in usize, so any set index does too.
        let set_index = (block_number % self.num_sets) as usize;
        let tag = block_number / self.num_sets;
        (set_index, tag)
    }

    /// Rebuilds the address of the first byte of the block `(set_index, tag)`.
    #[inline]
    pub const fn block_address(&self, set_index: usize, tag: u64) -> u64 {
        (tag * self.num_sets + set_index as u64) * self.block_size
    }

    /// Total capacity in bytes.
    #[inline]
    pub const fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Block (line) size in bytes.
    #[inline]
    pub const fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Ways per set.
    #[inline]
    pub const fn associativity(&self) -> u32 {
        self.associativity
    }

    /// Ways per set as an index bound.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.associativity as usize
    }

    /// Number of sets.
    #[inline]
    pub const fn num_sets(&self) -> u64 {
        self.num_sets
    }

    /// Total number of lines (`num_sets * associativity`).
    #[inline]
    pub const fn num_lines(&self) -> usize {
        self.num_sets as usize * self.ways()
    }

    /// Classifies the geometry.
    ///
    /// A single-line cache is both direct-mapped and fully-associative; it is
    /// reported as direct-mapped.
    pub const fn shape(&self) -> Shape {
        if self.associativity == 1 {
            Shape::DirectMapped
        } else if self.num_sets == 1 {
            Shape::FullyAssociative
        } else {
            Shape::SetAssociative
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} B, {} B blocks, {}-way, {} sets ({})",
            self.total_size,
            self.block_size,
            self.associativity,
            self.num_sets,
            self.shape()
        )
    }
}
