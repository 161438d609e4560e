//! Trace-driven simulation.
//!
//! Provides the collaborator layer around the cache engine: decoding address
//! traces, running them through a cache, and sweeping associativities.

/// Run driver, reports, and associativity sweeps.
pub mod simulator;

/// Hexadecimal trace decoding.
pub mod trace;

pub use simulator::{SimReport, Simulator, sweep};
pub use trace::{TraceReader, parse_address, read_trace};
