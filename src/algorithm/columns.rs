use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of column indices
///
/// Tracks which columns a symbol may still occupy, or which columns of the
/// row being filled are still free. Uses 0-based column indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    bits: BitVec,
}

impl ColumnSet {
    /// Create a set with no columns present
    pub fn empty(width: usize) -> Self {
        Self {
            bits: bitvec![0; width],
        }
    }

    /// Create a set containing every column `0..width`
    pub fn full(width: usize) -> Self {
        Self {
            bits: bitvec![1; width],
        }
    }

    /// Number of columns the set ranges over
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Add a column; out-of-range columns are ignored
    pub fn insert(&mut self, column: usize) {
        if column < self.bits.len() {
            self.bits.set(column, true);
        }
    }

    /// Remove a column; out-of-range columns are ignored
    pub fn remove(&mut self, column: usize) {
        if column < self.bits.len() {
            self.bits.set(column, false);
        }
    }

    /// Test column membership
    pub fn contains(&self, column: usize) -> bool {
        self.bits.get(column).as_deref() == Some(&true)
    }

    /// Create a new set containing the columns present in both
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.bits &= &other.bits;
        result
    }

    /// Count columns in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no columns are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate over present columns in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Present columns in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnSet({} columns: {:?})", self.count(), self.to_vec())
    }
}
