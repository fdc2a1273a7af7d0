use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tiles::PatternId;

/// Fixed-size bitset holding the patterns still possible at one cell
///
/// Uses 0-based pattern IDs matching the catalogue. Provides O(1)
/// membership testing and cheap filtering during propagation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSet {
    bits: BitVec,
}

impl PatternSet {
    /// Create a set with no patterns present
    pub fn empty(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![0; pattern_count],
        }
    }

    /// Create a set containing every pattern
    pub fn all(pattern_count: usize) -> Self {
        Self {
            bits: bitvec![1; pattern_count],
        }
    }

    /// Create a set holding exactly one pattern
    pub fn singleton(pattern_count: usize, pattern: PatternId) -> Self {
        let mut set = Self::empty(pattern_count);
        set.insert(pattern);
        set
    }

    /// Insert a pattern, ignoring IDs outside the catalogue
    pub fn insert(&mut self, pattern: PatternId) {
        if pattern < self.bits.len() {
            self.bits.set(pattern, true);
        }
    }

    /// Test pattern membership
    pub fn contains(&self, pattern: PatternId) -> bool {
        self.bits.get(pattern).as_deref() == Some(&true)
    }

    /// Keep only the patterns accepted by `keep`
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(PatternId) -> bool) -> Self {
        let mut result = Self::empty(self.bits.len());
        for pattern in self.iter() {
            if keep(pattern) {
                result.insert(pattern);
            }
        }
        result
    }

    /// Test if no patterns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of patterns in the set (the cell's entropy)
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining pattern, if the set is decided
    pub fn only(&self) -> Option<PatternId> {
        let mut ones = self.bits.iter_ones();
        match (ones.next(), ones.next()) {
            (Some(pattern), None) => Some(pattern),
            _ => None,
        }
    }

    /// Iterate over the contained pattern IDs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PatternId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all pattern IDs as a vector
    pub fn to_vec(&self) -> Vec<PatternId> {
        self.iter().collect()
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternSet({} patterns: {:?})", self.len(), self.to_vec())
    }
}
