//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been accessed for the longest time.
//! Every install and every hit stamps the line with the cache's logical clock, so
//! the victim is simply the valid line with the smallest stamp.
//!
//! # Performance
//!
//! - **Time Complexity:** `select_victim()` is O(W) where W is the associativity
//! - **Space Complexity:** one `u64` per line, stored in the line itself
//! - **Best Case:** Working sets that fit in a set, good temporal locality
//! - **Worst Case:** Cyclic scans one block larger than the set (every access misses)

use crate::cache::store::CacheLine;

/// Returns the way holding the least recently used valid line.
///
/// Ties on recency go to the lowest way. Invalid lines are skipped; if the set
/// holds no valid line at all, way 0 is returned.
pub fn select_victim(set: &[CacheLine]) -> usize {
    set.iter()
        .enumerate()
        .filter(|(_, line)| line.is_valid())
        .min_by_key(|&(way, line)| (line.recency(), way))
        .map_or(0, |(way, _)| way)
}
