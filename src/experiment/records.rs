use crate::algebra::PermutationChain;
use crate::square::LatinSquare;
use std::fmt;

/// Value reported in place of an order that could not be computed
pub const INVALID_ORDER: i64 = -1;

/// Order as a signed value, [`INVALID_ORDER`] when absent
pub fn order_value(order: Option<usize>) -> i64 {
    order.map_or(INVALID_ORDER, |o| i64::try_from(o).unwrap_or(i64::MAX))
}

/// Rows in nested tuple notation, e.g. `((0, 1), (1, 0))`
pub fn canonical_tuple(chain: &PermutationChain) -> String {
    let rows = chain
        .iter()
        .map(|row| {
            let cells = row
                .values()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("({cells})")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("({rows})")
}

/// One random square and its order under D
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRecord {
    /// Order of the square
    pub n: usize,
    /// Order under D, `None` if undefined
    pub order: Option<usize>,
    /// The generated square
    pub square: LatinSquare,
}

/// Orders of a random square before and after reduction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionRecord {
    /// Order of the square
    pub n: usize,
    /// Order under D of the generated square
    pub original_order: Option<usize>,
    /// Order under D of its reduced form
    pub reduced_order: Option<usize>,
}

/// Order of a random square alongside its reduced form
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReducedFormRecord {
    /// Order of the square
    pub n: usize,
    /// Order under D of the generated square
    pub order: Option<usize>,
    /// Reduced form of the generated square
    pub reduced: LatinSquare,
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} order={} square={}",
            self.n,
            order_value(self.order),
            canonical_tuple(self.square.chain())
        )
    }
}

impl fmt::Display for ReductionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} original_order={} reduced_order={}",
            self.n,
            order_value(self.original_order),
            order_value(self.reduced_order)
        )
    }
}

impl fmt::Display for ReducedFormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} order={} reduced={}",
            self.n,
            order_value(self.order),
            canonical_tuple(self.reduced.chain())
        )
    }
}
