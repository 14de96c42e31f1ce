//! Experiment harness around the combinatorial core
//!
//! This module contains:
//! - A parallel trial runner with progress reporting
//! - Trial functions producing plain per-trial records
//! - Grouping of records into order classes and distinct reduced forms

/// Order classes and distinct reduced forms of a run
pub mod classes;
/// Plain per-trial result records
pub mod records;
/// Parallel trial execution with reproducible per-trial seeds
pub mod runner;
/// Trial functions over random Latin squares
pub mod trials;

pub use runner::{Experiment, RunConfig, TrialParams};
