//! Tests for Latin square validation and reduction

#[cfg(test)]
mod tests {
    use latindiff::algebra::PermutationChain;
    use latindiff::{LatinError, LatinSquare};
    use rand::{SeedableRng, rngs::StdRng};

    fn square(rows: &[&[usize]]) -> Option<LatinSquare> {
        LatinSquare::from_rows(rows.iter().map(|row| row.to_vec()).collect()).ok()
    }

    // Tests a valid square is accepted with its entries intact
    #[test]
    fn test_valid_square() {
        let valid = square(&[&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]]);
        assert!(valid.is_some_and(|s| s.size() == 3 && s.get(1, 2) == Some(0)));
    }

    // Tests a repeated column value is rejected
    // Verified by checking rows only
    #[test]
    fn test_invalid_square() {
        let result = LatinSquare::from_rows(vec![vec![0, 1, 2], vec![0, 2, 1], vec![2, 1, 0]]);
        assert!(matches!(
            result,
            Err(LatinError::InvalidLatinSquare { size: 3, .. })
        ));
    }

    // Tests a non-square chain is rejected
    #[test]
    fn test_non_square_rejected() {
        let chain = PermutationChain::from_rows(vec![vec![0, 1, 2], vec![1, 2, 0]])
            .unwrap_or_default();
        assert!(LatinSquare::try_from(chain).is_err());
    }

    // Tests the cyclic square is Latin and already reduced
    #[test]
    fn test_cyclic() {
        let cyclic = LatinSquare::cyclic(4);
        assert_eq!(cyclic.get(1, 3), Some(0));
        assert_eq!(cyclic.row(3).and_then(|r| r.get(1)), Some(0));
        assert!(cyclic.is_reduced());
        assert!(LatinSquare::try_from(cyclic.into_chain()).is_ok());
    }

    // Tests reduction sorts the first row and column
    // Verified by permuting rows before columns
    #[test]
    fn test_reduce() {
        let reduced = square(&[&[1, 2, 0], &[0, 1, 2], &[2, 0, 1]])
            .and_then(|s| s.reduce().ok())
            .map(|r| r.to_array());
        assert_eq!(
            reduced,
            Some(vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]])
        );
    }

    // Tests reduction keeps the square Latin and is idempotent
    #[test]
    fn test_reduce_random_squares() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..=7 {
            let reduced = LatinSquare::generate_random(n, &mut rng).and_then(|s| s.reduce());
            assert!(reduced.as_ref().is_ok_and(LatinSquare::is_reduced));
            assert!(reduced.as_ref().is_ok_and(|r| {
                LatinSquare::try_from(r.chain().clone()).is_ok() && r.reduce().as_ref() == Ok(r)
            }));
        }
    }

    // Tests consuming a square yields its rows as a chain
    #[test]
    fn test_into_chain() {
        let chain = LatinSquare::cyclic(3).into_chain();
        assert_eq!(chain.to_array(), vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1]]);
        assert_eq!(PermutationChain::from(LatinSquare::cyclic(3)), chain);
    }

    // Tests a square with a shuffled first row is not reduced
    #[test]
    fn test_is_reduced() {
        let swapped = square(&[&[1, 0], &[0, 1]]);
        assert!(swapped.is_some_and(|s| !s.is_reduced()));
    }

    // Tests the empty square reduces to itself
    #[test]
    fn test_empty_square() {
        let empty = LatinSquare::new(vec![]);
        assert!(empty.is_ok_and(|s| s.size() == 0 && s.reduce() == Ok(s.clone())));
    }

    // Tests display prints the underlying rows
    #[test]
    fn test_display() {
        assert_eq!(LatinSquare::cyclic(2).to_string(), "[0, 1]\n[1, 0]");
    }
}
