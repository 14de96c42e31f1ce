use crate::algebra::{Permutation, PermutationChain};
use crate::algorithm::generation;
use crate::io::error::{LatinError, Result};
use crate::square::transformation::{permute_columns, permute_rows, transpose};
use rand::Rng;
use std::fmt;

/// Permutation chain whose columns are also permutations
///
/// Wraps a validated chain; the Latin property is checked once at
/// construction and every constructor in this module preserves it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatinSquare {
    chain: PermutationChain,
}

impl LatinSquare {
    /// Build a square from its rows
    ///
    /// # Errors
    ///
    /// Returns [`LatinError::InvalidLatinSquare`] if the rows are not square
    /// or some column is not a permutation
    pub fn new(rows: Vec<Permutation>) -> Result<Self> {
        Self::try_from(PermutationChain::new(rows))
    }

    /// Build a square from raw rows
    ///
    /// # Errors
    ///
    /// Returns [`LatinError::InvalidPermutation`] for a malformed row and
    /// [`LatinError::InvalidLatinSquare`] if the columns fail the check
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        Self::try_from(PermutationChain::from_rows(rows)?)
    }

    /// Cyclic square `L[r][c] = (r + c) mod n`
    pub fn cyclic(n: usize) -> Self {
        let rows = (0..n)
            .map(|r| Permutation::from_bijection((0..n).map(|c| (r + c) % n).collect()))
            .collect();
        Self {
            chain: PermutationChain::new(rows),
        }
    }

    /// Random square of order `n`
    ///
    /// Restarts after dead ends are internal and never reported.
    ///
    /// # Errors
    ///
    /// Returns [`LatinError::InvalidParameter`] if `n` is zero
    pub fn generate_random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        generation::generate(n, rng).map(|generated| generated.square)
    }

    /// Canonical form with ascending first row and first column
    ///
    /// Columns are permuted so the first row reads `0..n`, then rows are
    /// permuted by the resulting first column.
    ///
    /// # Errors
    ///
    /// Propagates a size mismatch from the row or column permutation, which
    /// a validated square cannot produce
    pub fn reduce(&self) -> Result<Self> {
        let Some(first_row) = self.chain.get(0) else {
            return Ok(self.clone());
        };
        let by_columns = permute_columns(&self.chain, first_row)?;

        let first_column = by_columns
            .iter()
            .filter_map(|row| row.get(0))
            .collect::<Vec<_>>();
        let reduced = permute_rows(&by_columns, &Permutation::new(first_column)?)?;

        Ok(Self { chain: reduced })
    }

    /// Test if both the first row and first column read `0..n`
    pub fn is_reduced(&self) -> bool {
        let row_ascending = self.chain.get(0).is_none_or(Permutation::is_identity);
        let column_ascending = self
            .chain
            .iter()
            .enumerate()
            .all(|(r, row)| row.get(0) == Some(r));
        row_ascending && column_ascending
    }

    /// Order `n` of the square
    pub const fn size(&self) -> usize {
        self.chain.len()
    }

    /// Entry at row `r`, column `c`
    pub fn get(&self, r: usize, c: usize) -> Option<usize> {
        self.chain.get(r).and_then(|row| row.get(c))
    }

    /// Row `r`
    pub fn row(&self, r: usize) -> Option<&Permutation> {
        self.chain.get(r)
    }

    /// Underlying permutation chain
    pub const fn chain(&self) -> &PermutationChain {
        &self.chain
    }

    /// Consume into the underlying chain
    pub fn into_chain(self) -> PermutationChain {
        self.chain
    }

    /// Rows as nested vectors
    pub fn to_array(&self) -> Vec<Vec<usize>> {
        self.chain.to_array()
    }
}

impl TryFrom<PermutationChain> for LatinSquare {
    type Error = LatinError;

    fn try_from(chain: PermutationChain) -> Result<Self> {
        if transpose(&chain).is_some() {
            Ok(Self { chain })
        } else {
            let reason = if chain.is_square() {
                "a column is not a permutation"
            } else {
                "rows and columns differ in count"
            };
            Err(LatinError::InvalidLatinSquare {
                size: chain.len(),
                reason: reason.to_string(),
            })
        }
    }
}

impl From<LatinSquare> for PermutationChain {
    fn from(square: LatinSquare) -> Self {
        square.chain
    }
}

impl AsRef<PermutationChain> for LatinSquare {
    fn as_ref(&self) -> &PermutationChain {
        &self.chain
    }
}

impl fmt::Display for LatinSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chain)
    }
}
