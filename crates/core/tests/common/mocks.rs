//! Mock random sources.

use cachesim_core::cache::policies::RandomSource;

/// Replays a fixed list of raw values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u64>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
