//! Single-trial functions run by the experiment harness
//!
//! Each trial draws one random square from the supplied generator and
//! returns a plain record.

use crate::algorithm::difference;
use crate::experiment::records::{OrderRecord, ReducedFormRecord, ReductionRecord};
use crate::experiment::runner::TrialParams;
use crate::io::error::Result;
use crate::square::LatinSquare;
use rand::rngs::StdRng;

/// Generate a square and record its order
///
/// # Errors
///
/// Returns an error if the square order in `params` is invalid
pub fn sample_order(params: &TrialParams, rng: &mut StdRng) -> Result<OrderRecord> {
    let square = LatinSquare::generate_random(params.n, rng)?;
    let order = difference::order(square.chain()).ok();
    Ok(OrderRecord {
        n: params.n,
        order,
        square,
    })
}

/// Record whether reducing a square changes its order
///
/// # Errors
///
/// Returns an error if the square order in `params` is invalid
pub fn check_reduction_order(params: &TrialParams, rng: &mut StdRng) -> Result<ReductionRecord> {
    let square = LatinSquare::generate_random(params.n, rng)?;
    let reduced = square.reduce()?;
    Ok(ReductionRecord {
        n: params.n,
        original_order: difference::order(square.chain()).ok(),
        reduced_order: difference::order(reduced.chain()).ok(),
    })
}

/// Record the order of a square together with its reduced form
///
/// # Errors
///
/// Returns an error if the square order in `params` is invalid
pub fn order_vs_reduced_form(params: &TrialParams, rng: &mut StdRng) -> Result<ReducedFormRecord> {
    let square = LatinSquare::generate_random(params.n, rng)?;
    Ok(ReducedFormRecord {
        n: params.n,
        order: difference::order(square.chain()).ok(),
        reduced: square.reduce()?,
    })
}
