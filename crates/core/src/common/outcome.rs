//! Cache access outcome.

use std::fmt;

/// Result of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessResult {
    /// The block was resident.
    Hit,
    /// The block was not resident and has now been installed.
    Miss,
}

impl AccessResult {
    /// Returns `true` for [`AccessResult::Hit`].
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Returns `true` for [`AccessResult::Miss`].
    #[inline]
    pub const fn is_miss(self) -> bool {
        matches!(self, Self::Miss)
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Miss => f.write_str("miss"),
        }
    }
}
