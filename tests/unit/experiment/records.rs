//! Tests for record rendering

#[cfg(test)]
mod tests {
    use latindiff::LatinSquare;
    use latindiff::algebra::PermutationChain;
    use latindiff::experiment::records::{
        INVALID_ORDER, OrderRecord, ReducedFormRecord, ReductionRecord, canonical_tuple,
        order_value,
    };

    // Tests undefined orders render as the sentinel
    #[test]
    fn test_order_value() {
        assert_eq!(order_value(Some(3)), 3);
        assert_eq!(order_value(None), INVALID_ORDER);
        assert_eq!(INVALID_ORDER, -1);
    }

    // Tests nested tuple notation of rows
    #[test]
    fn test_canonical_tuple() {
        let square = LatinSquare::cyclic(2);
        assert_eq!(canonical_tuple(square.chain()), "((0, 1), (1, 0))");
        assert_eq!(canonical_tuple(&PermutationChain::default()), "()");
    }

    // Tests each record prints its fields in key=value form
    #[test]
    fn test_record_display() {
        let order = OrderRecord {
            n: 2,
            order: Some(1),
            square: LatinSquare::cyclic(2),
        };
        assert_eq!(order.to_string(), "n=2 order=1 square=((0, 1), (1, 0))");

        let reduction = ReductionRecord {
            n: 5,
            original_order: Some(4),
            reduced_order: None,
        };
        assert_eq!(
            reduction.to_string(),
            "n=5 original_order=4 reduced_order=-1"
        );

        let reduced = ReducedFormRecord {
            n: 1,
            order: Some(0),
            reduced: LatinSquare::cyclic(1),
        };
        assert_eq!(reduced.to_string(), "n=1 order=0 reduced=((0))");
    }
}
