use crate::io::error::{LatinError, Result, dimension_mismatch};
use bitvec::prelude::*;
use rand::{Rng, seq::SliceRandom};
use std::fmt;

/// Bijection of `0..n` stored as its image sequence
///
/// Immutable after construction. Equality, ordering and hashing follow the
/// full value sequence, so permutations work as map keys and set members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation {
    values: Vec<usize>,
}

impl Permutation {
    /// Validate and wrap a value sequence
    ///
    /// # Errors
    ///
    /// Returns [`LatinError::InvalidPermutation`] unless `values` contains every
    /// integer in `0..values.len()` exactly once
    pub fn new(values: Vec<usize>) -> Result<Self> {
        if Self::is_bijection(&values) {
            Ok(Self { values })
        } else {
            Err(LatinError::InvalidPermutation { values })
        }
    }

    /// Identity permutation `[0, 1, ..., n-1]`
    pub fn identity(n: usize) -> Self {
        Self {
            values: (0..n).collect(),
        }
    }

    /// Uniformly random permutation of `0..n`
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut values: Vec<usize> = (0..n).collect();
        values.shuffle(rng);
        Self { values }
    }

    /// Caller guarantees `values` is a bijection
    pub(crate) const fn from_bijection(values: Vec<usize>) -> Self {
        Self { values }
    }

    fn is_bijection(values: &[usize]) -> bool {
        let n = values.len();
        let mut seen = bitvec![0; n];
        for &value in values {
            let Some(mut slot) = seen.get_mut(value) else {
                return false;
            };
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }

    /// Image sequence
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Number of points permuted
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if this permutes zero points
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Image of `index`, if in range
    pub fn get(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    /// Test if every point maps to itself
    pub fn is_identity(&self) -> bool {
        self.values.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Inverse permutation `q` with `q[p[i]] = i`
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inverse = vec![0; self.values.len()];
        for (i, &v) in self.values.iter().enumerate() {
            if let Some(slot) = inverse.get_mut(v) {
                *slot = i;
            }
        }
        Self::from_bijection(inverse)
    }

    /// Right composition `r[i] = self[other[i]]`
    ///
    /// # Errors
    ///
    /// Returns [`LatinError::DimensionMismatch`] if the permutations have
    /// different lengths
    pub fn apply(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(dimension_mismatch("apply", self.len(), other.len()));
        }
        let values = other
            .values
            .iter()
            .filter_map(|&i| self.values.get(i).copied())
            .collect();
        Ok(Self::from_bijection(values))
    }

    /// Owned copy of the value sequence
    pub fn to_vec(&self) -> Vec<usize> {
        self.values.clone()
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = LatinError;

    fn try_from(values: Vec<usize>) -> Result<Self> {
        Self::new(values)
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.values
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}
