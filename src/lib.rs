//! Latin squares as chains of permutations under the difference operator D
//!
//! Each square is read as the sequence of its rows. D replaces every row by
//! its difference with the next row, cyclically, and the order of a square
//! is the length of the cycle that repeated application of D falls into.
//! The crate provides the permutation algebra, the symmetries that preserve
//! Latin squares, a randomized generator, and a parallel experiment harness.

#![forbid(unsafe_code)]

/// Permutations and permutation chains
pub mod algebra;
/// Difference operator, column bitsets and random generation
pub mod algorithm;
/// Experiment harness producing per-trial records
pub mod experiment;
/// Command line, configuration, errors, logging and progress display
pub mod io;
/// Latin squares and structure-preserving transformations
pub mod square;

pub use algebra::{Permutation, PermutationChain};
pub use io::error::{LatinError, Result};
pub use square::{Direction, LatinSquare};
