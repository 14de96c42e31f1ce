//! Grouping of experiment records into order classes and reduced forms

use crate::algorithm::difference;
use crate::experiment::records::{ReducedFormRecord, ReductionRecord};
use crate::square::LatinSquare;
use std::collections::{BTreeMap, BTreeSet};

/// Fold a set of related orders into a list of disjoint classes
///
/// Every class overlapping `pair` is unioned with it into one class; the
/// others are kept as they are. Pairwise disjoint input stays pairwise
/// disjoint.
pub fn merge_order_classes(
    classes: Vec<BTreeSet<usize>>,
    pair: BTreeSet<usize>,
) -> Vec<BTreeSet<usize>> {
    let (overlapping, mut disjoint): (Vec<_>, Vec<_>) = classes
        .into_iter()
        .partition(|class| !class.is_disjoint(&pair));

    let merged = overlapping
        .into_iter()
        .fold(pair, |mut acc, class| {
            acc.extend(class);
            acc
        });
    disjoint.push(merged);
    disjoint
}

/// Classes of orders linked by reduction, sorted by smallest member
///
/// Two orders share a class when some square has one as its order and the
/// other as the order of its reduced form, closed transitively. Records with
/// an undefined order contribute only their defined side.
pub fn order_classes(records: &[ReductionRecord]) -> Vec<BTreeSet<usize>> {
    let mut classes = records
        .iter()
        .map(|record| {
            [record.original_order, record.reduced_order]
                .into_iter()
                .flatten()
                .collect::<BTreeSet<_>>()
        })
        .filter(|pair| !pair.is_empty())
        .fold(Vec::new(), merge_order_classes);
    classes.sort();
    classes
}

/// Distinct reduced squares of a run, each with its own order under D
pub fn distinct_reduced_forms(records: &[ReducedFormRecord]) -> BTreeMap<LatinSquare, Option<usize>> {
    let forms: BTreeSet<&LatinSquare> = records.iter().map(|record| &record.reduced).collect();
    forms
        .into_iter()
        .map(|square| (square.clone(), difference::order(square.chain()).ok()))
        .collect()
}
