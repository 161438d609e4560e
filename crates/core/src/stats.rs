//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome counters of a cache run. It provides:
//! 1. **Counters:** Accesses, hits, misses, and evictions of valid lines.
//! 2. **Derived metrics:** Hit and miss rates.
//! 3. **Reporting:** A fixed-width `name  value` block for terminal output.

use std::fmt;

/// Outcome counters of a cache run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Addresses processed.
    pub accesses: u64,
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that had to install their block.
    pub misses: u64,
    /// Misses that displaced a valid line.
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of accesses that hit, or `0.0` for an empty run.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, or `0.0` for an empty run.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }

    /// Misses that filled a free line instead of evicting (cold and
    /// never-displaced fills).
    pub const fn fills(&self) -> u64 {
        self.misses - self.evictions
    }

    /// Prints the report to standard output.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "accesses                 {}", self.accesses)?;
        writeln!(
            f,
            "hits                     {} ({:.2}%)",
            self.hits,
            self.hit_rate() * 100.0
        )?;
        writeln!(
            f,
            "misses                   {} ({:.2}%)",
            self.misses,
            self.miss_rate() * 100.0
        )?;
        writeln!(f, "  misses.fill            {}", self.fills())?;
        write!(f, "  misses.evict           {}", self.evictions)
    }
}
