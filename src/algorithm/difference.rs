//! Difference operator D on permutation chains and its iteration order

use crate::algebra::{Permutation, PermutationChain};
use crate::io::error::{LatinError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// Difference of two permutations, `p2⁻¹ ∘ p1`
///
/// Computed as `p2.inverse().apply(p1)`, so `r[i] = p2⁻¹[p1[i]]`.
///
/// # Errors
///
/// Returns [`LatinError::DimensionMismatch`] if the permutations have
/// different lengths
pub fn difference(p1: &Permutation, p2: &Permutation) -> Result<Permutation> {
    p2.inverse().apply(p1)
}

/// Cyclic finite difference of a chain
///
/// Entry `i` of the result is `difference(chain[i], chain[(i + 1) mod n])`.
/// The empty chain maps to the empty chain.
///
/// # Errors
///
/// Returns [`LatinError::DimensionMismatch`] if neighbouring rows have
/// different lengths
pub fn derivative(chain: &PermutationChain) -> Result<PermutationChain> {
    let rows = chain.permutations();
    rows.iter()
        .zip(rows.iter().cycle().skip(1))
        .map(|(current, next)| difference(current, next))
        .collect::<Result<Vec<_>>>()
        .map(PermutationChain::new)
}

/// How the sequence `chain, D(chain), D²(chain), ...` ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orbit {
    /// The all-identity chain was reached after `steps` derivatives
    Identity {
        /// Derivatives taken, counted from the input chain
        steps: usize,
    },
    /// A previously seen chain came back
    Cycle {
        /// Step at which the repeated chain first appeared
        first_seen: usize,
        /// Steps between the two occurrences
        period: usize,
    },
}

impl Orbit {
    /// Order of the chain under D
    ///
    /// Steps to the identity, or the cycle length when a repeat came first.
    /// A transient tail before the cycle is not counted.
    pub const fn order(self) -> usize {
        match self {
            Self::Identity { steps } => steps,
            Self::Cycle { period, .. } => period,
        }
    }
}

/// Memo of chains already visited while iterating D
///
/// Maps each chain to the step at which it first appeared.
#[derive(Default)]
pub struct SeenStates {
    first_seen: HashMap<PermutationChain, usize>,
}

impl SeenStates {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `chain` at `step`, returning the earlier step if it was seen before
    pub fn visit(&mut self, chain: PermutationChain, step: usize) -> Option<usize> {
        match self.first_seen.entry(chain) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(step);
                None
            }
        }
    }

    /// Number of distinct chains recorded
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    /// Test if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }
}

/// Iterate D from `chain` until the identity or a repeated chain appears
///
/// Terminates because chains of `m` permutations on `n` points form a finite
/// state space of `(n!)^m` elements.
///
/// # Errors
///
/// Returns [`LatinError::EmptyChain`] for a chain without permutations, and
/// [`LatinError::DimensionMismatch`] if the rows have different lengths
pub fn orbit(chain: &PermutationChain) -> Result<Orbit> {
    let Some(first) = chain.get(0) else {
        warn!("order requested for an empty permutation chain");
        return Err(LatinError::EmptyChain { operation: "order" });
    };
    let identity = PermutationChain::identity(chain.len(), first.len());

    let mut seen = SeenStates::new();
    let mut current = chain.clone();
    let mut step = 0;

    loop {
        if current == identity {
            debug!(steps = step, "reached identity chain");
            return Ok(Orbit::Identity { steps: step });
        }
        let next = derivative(&current)?;
        if let Some(first_seen) = seen.visit(current, step) {
            let period = step - first_seen;
            debug!(first_seen, period, "derivative sequence entered a cycle");
            return Ok(Orbit::Cycle { first_seen, period });
        }
        current = next;
        step += 1;
    }
}

/// Order of `chain` under repeated application of D
///
/// # Errors
///
/// Returns [`LatinError::EmptyChain`] when `chain` is empty; the order is
/// undefined there and the warning is logged. Mixed row lengths yield
/// [`LatinError::DimensionMismatch`].
pub fn order(chain: &PermutationChain) -> Result<usize> {
    orbit(chain).map(Orbit::order)
}
