//! Cache Line Storage.
//!
//! Lines live in one flat vector laid out set by set: the line for way `w`
//! of set `s` sits at index `s * ways + w`. Every lookup is confined to the
//! `ways` consecutive entries of a single set.

/// A single cache line: validity, tag, and the recency marker used by LRU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheLine {
    valid: bool,
    tag: u64,
    recency: u64,
}

impl CacheLine {
    /// Whether the line currently holds a block.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Tag of the held block. Meaningless when the line is invalid.
    #[inline]
    pub const fn tag(&self) -> u64 {
        self.tag
    }

    /// Logical time of the last install or hit. Stale when the line is invalid.
    #[inline]
    pub const fn recency(&self) -> u64 {
        self.recency
    }
}

/// Fixed-capacity array of cache lines organized into sets.
#[derive(Debug, Clone)]
pub struct LineStore {
    lines: Vec<CacheLine>,
    ways: usize,
}

impl LineStore {
    /// Creates a store of `num_sets * ways` invalid lines.
    pub fn new(num_sets: usize, ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); num_sets * ways],
            ways,
        }
    }

    /// Number of ways per set.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Number of sets.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.lines.len() / self.ways
    }

    /// Read-only view of the lines of one set, in way order.
    ///
    /// # Panics
    ///
    /// Panics if `set` is out of range.
    #[inline]
    pub fn set(&self, set: usize) -> &[CacheLine] {
        let base = set * self.ways;
        &self.lines[base..base + self.ways]
    }

    /// Returns the way holding a valid copy of `tag` in `set`, if any.
    pub fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        self.set(set)
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }

    /// Returns the lowest-numbered invalid way in `set`, if any.
    pub fn find_free(&self, set: usize) -> Option<usize> {
        self.set(set).iter().position(|line| !line.valid)
    }

    /// Places `tag` into `(set, way)`, marking it valid and most recent.
    pub fn install(&mut self, set: usize, way: usize, tag: u64, now: u64) {
        let line = self.line_mut(set, way);
        line.valid = true;
        line.tag = tag;
        line.recency = now;
    }

    /// Refreshes the recency of a resident line.
    pub fn touch(&mut self, set: usize, way: usize, now: u64) {
        self.line_mut(set, way).recency = now;
    }

    /// Drops the block held at `(set, way)`.
    ///
    /// Returns whether the line was valid beforehand.
    pub fn invalidate(&mut self, set: usize, way: usize) -> bool {
        let line = self.line_mut(set, way);
        let was_valid = line.valid;
        line.valid = false;
        was_valid
    }

    /// Invalidates every line and clears recency.
    pub fn clear(&mut self) {
        self.lines.fill(CacheLine::default());
    }

    /// Number of valid lines across the whole store.
    pub fn occupancy(&self) -> usize {
        self.lines.iter().filter(|line| line.valid).count()
    }

    #[inline]
    fn line_mut(&mut self, set: usize, way: usize) -> &mut CacheLine {
        debug_assert!(way < self.ways, "way {way} out of range");
        &mut self.lines[set * self.ways + way]
    }
}
