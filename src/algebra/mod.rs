//! Permutation algebra underlying the square model
//!
//! This module contains:
//! - Validated permutations with inverse and composition
//! - Permutation chains, the row-sequence view of a square array

/// Ordered permutation sequences with structural equality
pub mod chain;
/// Bijections of `0..n` with inverse and right composition
pub mod permutation;

pub use chain::PermutationChain;
pub use permutation::Permutation;
