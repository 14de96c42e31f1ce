//! Tests for the difference operator, derivative chains and order detection

#[cfg(test)]
mod tests {
    use latindiff::algebra::{Permutation, PermutationChain};
    use latindiff::algorithm::difference::{
        Orbit, SeenStates, derivative, difference, orbit, order,
    };
    use latindiff::{LatinError, LatinSquare};

    fn perm(values: &[usize]) -> Permutation {
        Permutation::new(values.to_vec()).unwrap_or_else(|_| Permutation::identity(0))
    }

    fn chain(rows: &[&[usize]]) -> PermutationChain {
        PermutationChain::from_rows(rows.iter().map(|row| row.to_vec()).collect())
            .unwrap_or_default()
    }

    // Tests the difference p2⁻¹ ∘ p1 on a known pair
    // Verified by computing p1⁻¹ ∘ p2 instead
    #[test]
    fn test_difference() {
        let result = difference(&perm(&[2, 0, 1]), &perm(&[1, 2, 0]));
        assert_eq!(result, Ok(perm(&[1, 2, 0])));
    }

    // Tests a permutation minus itself is the identity
    #[test]
    fn test_difference_with_self() {
        let p = perm(&[3, 0, 2, 1]);
        assert_eq!(difference(&p, &p), Ok(Permutation::identity(4)));
    }

    // Tests the cyclic derivative wraps the last row onto the first
    #[test]
    fn test_derivative() {
        let c = chain(&[&[0, 1, 2], &[2, 0, 1], &[1, 2, 0]]);
        let expected = chain(&[&[1, 2, 0], &[1, 2, 0], &[1, 2, 0]]);
        assert_eq!(derivative(&c), Ok(expected));
    }

    // Tests the derivative of the empty chain is empty
    #[test]
    fn test_derivative_of_empty_chain() {
        let empty = PermutationChain::default();
        assert_eq!(derivative(&empty), Ok(PermutationChain::default()));
    }

    // Tests a chain of identical rows differentiates to the identity chain
    #[test]
    fn test_derivative_of_constant_chain() {
        let row = perm(&[2, 3, 0, 1]);
        let constant = PermutationChain::new(vec![row; 3]);
        assert_eq!(derivative(&constant), Ok(PermutationChain::identity(3, 4)));
    }

    // Tests rows of different sizes are reported, not truncated
    #[test]
    fn test_derivative_size_mismatch() {
        let mixed = PermutationChain::new(vec![perm(&[0, 1]), perm(&[0, 1, 2])]);
        assert!(matches!(
            derivative(&mixed),
            Err(LatinError::DimensionMismatch { .. })
        ));
    }

    // Tests the reference chain reaches the identity after two derivatives
    #[test]
    fn test_order() {
        let c = chain(&[&[0, 1, 2], &[2, 0, 1], &[1, 2, 0]]);
        assert_eq!(order(&c), Ok(2));
        assert_eq!(orbit(&c), Ok(Orbit::Identity { steps: 2 }));
    }

    // Tests the identity chain has order zero
    #[test]
    fn test_identity_order() {
        let identity = PermutationChain::identity(3, 3);
        assert_eq!(order(&identity), Ok(0));
    }

    // Tests the empty chain is a soft failure rather than a panic
    #[test]
    fn test_empty_chain() {
        let result = order(&PermutationChain::default());
        assert_eq!(result, Err(LatinError::EmptyChain { operation: "order" }));
    }

    // Tests a chain that never reaches the identity reports its cycle length
    // Verified by returning the step count instead of the period
    #[test]
    fn test_cycle_without_identity() {
        // D([a, b]) = [b⁻¹a, a⁻¹b]; from [e, x] with x a 3-cycle the chain
        // alternates between [x⁻¹, x] and [x, x⁻¹]
        let x = perm(&[1, 2, 0]);
        let c = PermutationChain::new(vec![Permutation::identity(3), x]);
        let result = orbit(&c);
        assert!(matches!(result, Ok(Orbit::Cycle { period: 2, .. })));
        assert_eq!(order(&c), Ok(2));
    }

    // Tests orbit outcome maps to the reported order
    #[test]
    fn test_orbit_order() {
        assert_eq!(Orbit::Identity { steps: 3 }.order(), 3);
        assert_eq!(
            Orbit::Cycle {
                first_seen: 4,
                period: 6
            }
            .order(),
            6
        );
    }

    // Tests orders of the cyclic demo squares are finite and non-negative
    #[test]
    fn test_cyclic_square_orders_terminate() {
        for n in 1..=6 {
            let square = LatinSquare::cyclic(n);
            assert!(order(square.chain()).is_ok());
        }
    }

    // Tests the memo returns the first step a chain was seen at
    #[test]
    fn test_seen_states() {
        let mut seen = SeenStates::new();
        assert!(seen.is_empty());
        assert_eq!(seen.visit(PermutationChain::identity(2, 2), 0), None);
        assert_eq!(seen.visit(chain(&[&[1, 0], &[0, 1]]), 1), None);
        assert_eq!(seen.visit(PermutationChain::identity(2, 2), 5), Some(0));
        assert_eq!(seen.len(), 2);
    }
}
