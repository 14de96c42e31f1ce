//! Randomized most-constrained-first construction of Latin squares
//!
//! Each attempt draws a random first row, then fills every later row symbol
//! by symbol: the symbol with the fewest legal columns goes first and takes
//! one of them uniformly at random. A symbol left with no legal column ends
//! the attempt, and the caller starts over from a fresh first row. The
//! resulting distribution over squares is not uniform.

use crate::algebra::Permutation;
use crate::algorithm::columns::ColumnSet;
use crate::io::error::{Result, invalid_parameter};
use crate::square::LatinSquare;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;

/// A generated square together with the dead ends hit on the way
#[derive(Clone, Debug)]
pub struct Generated {
    /// The Latin square produced by the successful attempt
    pub square: LatinSquare,
    /// Attempts abandoned before it
    pub restarts: usize,
}

/// Generate a random Latin square of order `n`, restarting on dead ends
///
/// # Errors
///
/// Returns [`crate::LatinError::InvalidParameter`] if `n` is zero
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Generated> {
    if n == 0 {
        return Err(invalid_parameter("n", &n, &"square order must be at least 1"));
    }

    let mut restarts = 0;
    loop {
        if let Some(rows) = attempt(n, rng) {
            let square = LatinSquare::new(rows)?;
            return Ok(Generated { square, restarts });
        }
        restarts += 1;
        trace!(n, restarts, "generation hit a dead end, restarting");
    }
}

/// One construction attempt; `None` when some symbol runs out of columns
pub fn attempt<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Option<Vec<Permutation>> {
    let first = Permutation::random(n, rng);

    // open[v] holds the columns symbol v has not used in any earlier row
    let mut open = vec![ColumnSet::full(n); n];
    for (column, &value) in first.values().iter().enumerate() {
        open.get_mut(value)?.remove(column);
    }

    let mut rows = Vec::with_capacity(n);
    rows.push(first);
    for _ in 1..n {
        rows.push(fill_row(&mut open, rng)?);
    }
    Some(rows)
}

fn fill_row<R: Rng + ?Sized>(open: &mut [ColumnSet], rng: &mut R) -> Option<Permutation> {
    let n = open.len();
    let mut free = ColumnSet::full(n);
    let mut row: Vec<Option<usize>> = vec![None; n];
    let mut pending: Vec<usize> = (0..n).collect();

    while !pending.is_empty() {
        let legal: Vec<(usize, ColumnSet)> = pending
            .iter()
            .enumerate()
            .filter_map(|(slot, &value)| {
                open.get(value)
                    .map(|columns| (slot, columns.intersection(&free)))
            })
            .collect();

        let fewest = legal.iter().map(|(_, columns)| columns.count()).min()?;
        if fewest == 0 {
            return None;
        }

        let tied: Vec<&(usize, ColumnSet)> = legal
            .iter()
            .filter(|(_, columns)| columns.count() == fewest)
            .collect();
        let (slot, columns) = tied.choose(rng)?;
        let column = *columns.to_vec().choose(rng)?;

        let value = pending.swap_remove(*slot);
        *row.get_mut(column)? = Some(value);
        free.remove(column);
        open.get_mut(value)?.remove(column);
    }

    let values = row.into_iter().collect::<Option<Vec<_>>>()?;
    Permutation::new(values).ok()
}

/// Seeded generator that keeps a running count of restarts
pub struct LatinSquareGenerator {
    rng: StdRng,
    restarts: usize,
}

impl LatinSquareGenerator {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator around an existing random source
    pub const fn from_rng(rng: StdRng) -> Self {
        Self { rng, restarts: 0 }
    }

    /// Dead ends hit across every square generated so far
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Generate the next random Latin square of order `n`
    ///
    /// # Errors
    ///
    /// Returns [`crate::LatinError::InvalidParameter`] if `n` is zero
    pub fn generate(&mut self, n: usize) -> Result<LatinSquare> {
        let generated = generate(n, &mut self.rng)?;
        self.restarts += generated.restarts;
        Ok(generated.square)
    }
}
