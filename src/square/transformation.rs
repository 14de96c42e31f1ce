//! Structure-preserving maps on permutation chains
//!
//! Every operation is pure and returns a new chain. Row and column
//! permutations report malformed arguments as errors; `transpose` and
//! `rotate` return `None` when the chain is not square or the result has a
//! row that is not a permutation.

use crate::algebra::{Permutation, PermutationChain};
use crate::io::error::{LatinError, Result, dimension_mismatch, invalid_parameter};
use ndarray::{Array2, Axis};
use std::fmt;
use std::str::FromStr;

/// Sense of a quarter turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `new[i][j] = old[n - 1 - j][i]`
    Clockwise,
    /// `new[i][j] = old[j][n - 1 - i]`
    Counterclockwise,
}

impl Direction {
    /// The opposite sense
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
}

impl FromStr for Direction {
    type Err = LatinError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "clockwise" => Ok(Self::Clockwise),
            "counterclockwise" => Ok(Self::Counterclockwise),
            other => Err(invalid_parameter(
                "direction",
                &other,
                &"expected \"clockwise\" or \"counterclockwise\"",
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => write!(f, "clockwise"),
            Self::Counterclockwise => write!(f, "counterclockwise"),
        }
    }
}

fn check_index(operation: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LatinError::IndexOutOfBounds {
            operation,
            index,
            len,
        })
    }
}

/// Exchange the rows at positions `i` and `j`
///
/// # Errors
///
/// Returns [`LatinError::IndexOutOfBounds`] if either index is not a row
pub fn swap_rows(chain: &PermutationChain, i: usize, j: usize) -> Result<PermutationChain> {
    check_index("swap_rows", i, chain.len())?;
    check_index("swap_rows", j, chain.len())?;

    let mut rows = chain.permutations().to_vec();
    rows.swap(i, j);
    Ok(PermutationChain::new(rows))
}

/// Exchange the entries at columns `i` and `j` in every row
///
/// Swapping two entries of a permutation keeps it a permutation.
///
/// # Errors
///
/// Returns [`LatinError::IndexOutOfBounds`] if either index is not a
/// column of some row
pub fn swap_columns(chain: &PermutationChain, i: usize, j: usize) -> Result<PermutationChain> {
    chain
        .iter()
        .map(|row| {
            check_index("swap_columns", i, row.len())?;
            check_index("swap_columns", j, row.len())?;
            let mut values = row.to_vec();
            values.swap(i, j);
            Permutation::new(values)
        })
        .collect::<Result<Vec<_>>>()
        .map(PermutationChain::new)
}

/// Move the row at position `k` to position `perm[k]`
///
/// # Errors
///
/// Returns [`LatinError::DimensionMismatch`] if `perm` does not have one
/// entry per row
pub fn permute_rows(chain: &PermutationChain, perm: &Permutation) -> Result<PermutationChain> {
    if perm.len() != chain.len() {
        return Err(dimension_mismatch("permute_rows", chain.len(), perm.len()));
    }

    // Slot i receives the row that perm sends to i
    perm.inverse()
        .values()
        .iter()
        .map(|&source| {
            chain.get(source).cloned().ok_or(LatinError::IndexOutOfBounds {
                operation: "permute_rows",
                index: source,
                len: chain.len(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(PermutationChain::new)
}

/// Move the entry at column `k` of every row to column `perm[k]`
///
/// # Errors
///
/// Returns [`LatinError::DimensionMismatch`] if some row's length differs
/// from `perm`'s
pub fn permute_columns(chain: &PermutationChain, perm: &Permutation) -> Result<PermutationChain> {
    let inverse = perm.inverse();
    chain
        .iter()
        .map(|row| {
            if row.len() == perm.len() {
                row.apply(&inverse)
            } else {
                Err(dimension_mismatch("permute_columns", perm.len(), row.len()))
            }
        })
        .collect::<Result<Vec<_>>>()
        .map(PermutationChain::new)
}

/// Square chains as an `n x n` grid of values
fn to_grid(chain: &PermutationChain) -> Option<Array2<usize>> {
    if !chain.is_square() {
        return None;
    }
    let n = chain.len();
    let cells = chain
        .iter()
        .flat_map(|row| row.values().iter().copied())
        .collect();
    Array2::from_shape_vec((n, n), cells).ok()
}

/// Read grid rows back as permutations, `None` if any row is not one
fn from_grid(grid: &Array2<usize>) -> Option<PermutationChain> {
    grid.rows()
        .into_iter()
        .map(|row| Permutation::new(row.to_vec()).ok())
        .collect::<Option<Vec<_>>>()
        .map(PermutationChain::new)
}

/// Transpose a square chain, reading its columns as rows
///
/// Returns `None` if the chain is not square or a column is not a
/// permutation, so `transpose(chain).is_some()` holds exactly when the chain
/// is a Latin square.
pub fn transpose(chain: &PermutationChain) -> Option<PermutationChain> {
    let grid = to_grid(chain)?;
    from_grid(&grid.reversed_axes())
}

/// Clockwise flips rows then transposes; counterclockwise flips columns
fn quarter_turn(grid: &Array2<usize>, direction: Direction) -> Array2<usize> {
    let axis = match direction {
        Direction::Clockwise => Axis(0),
        Direction::Counterclockwise => Axis(1),
    };
    let mut turned = grid.clone();
    turned.invert_axis(axis);
    turned.reversed_axes()
}

/// Rotate a square chain by `rotations` quarter turns
///
/// The turn count is taken modulo 4. Returns `None` if the chain is not
/// square or a rotated row is not a permutation.
pub fn rotate(
    chain: &PermutationChain,
    direction: Direction,
    rotations: usize,
) -> Option<PermutationChain> {
    let mut grid = to_grid(chain)?;
    for _ in 0..rotations % 4 {
        grid = quarter_turn(&grid, direction);
    }
    from_grid(&grid)
}
