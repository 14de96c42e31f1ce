//! Latin squares and the symmetries acting on them
//!
//! This module contains:
//! - The validated Latin square type with generation and reduction
//! - Row/column permutations, transpose and rotation of chains

/// Latin square wrapper, random generation and canonical reduction
pub mod latin;
/// Latin-square-preserving transformations on permutation chains
pub mod transformation;

pub use latin::LatinSquare;
pub use transformation::Direction;
