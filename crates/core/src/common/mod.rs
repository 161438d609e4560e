//! Common types shared across the simulator.
//!
//! This module provides:
//! 1. **Error Handling:** Configuration, trace, and simulation error types.
//! 2. **Access Outcomes:** The hit/miss result returned by every cache access.

/// Error types.
pub mod error;

/// Per-access outcome type.
pub mod outcome;

pub use error::{ConfigError, GeometryViolation, SimError, TraceError};
pub use outcome::AccessResult;
