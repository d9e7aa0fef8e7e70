//! Typed indices into the molecule's atom/bond/ring arrays

use std::fmt;

/// Index of an atom within a molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomIndex(pub u32);

/// Index of a bond within a molecule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BondIndex(pub u32);

/// Index of a ring within a ring lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingIndex(pub u32);

impl AtomIndex {
    /// Convert to a usize for array indexing
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl BondIndex {
    /// Convert to a usize for array indexing
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl RingIndex {
    /// Convert to a usize for array indexing
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AtomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BondIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RingIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
