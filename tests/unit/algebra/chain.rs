//! Tests for permutation chain access, export and structural equality

#[cfg(test)]
mod tests {
    use latindiff::algebra::{Permutation, PermutationChain};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn chain(rows: &[&[usize]]) -> PermutationChain {
        PermutationChain::from_rows(rows.iter().map(|row| row.to_vec()).collect())
            .unwrap_or_default()
    }

    fn hash_of(chain: &PermutationChain) -> u64 {
        let mut hasher = DefaultHasher::new();
        chain.hash(&mut hasher);
        hasher.finish()
    }

    // Tests export to nested vectors keeps row order
    #[test]
    fn test_to_array() {
        let c = chain(&[&[0, 1, 2], &[2, 0, 1]]);
        assert_eq!(c.to_array(), vec![vec![0, 1, 2], vec![2, 0, 1]]);
    }

    // Tests chains with the same rows are equal and hash alike
    #[test]
    fn test_equality_and_hashing() {
        let a = chain(&[&[0, 1, 2], &[2, 0, 1]]);
        let b = chain(&[&[0, 1, 2], &[2, 0, 1]]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    // Tests a single differing row or a different order breaks equality
    // Verified by comparing only chain lengths
    #[test]
    fn test_inequality() {
        let a = chain(&[&[0, 1, 2], &[2, 0, 1]]);
        assert_ne!(a, chain(&[&[0, 1, 2], &[1, 2, 0]]));
        assert_ne!(a, chain(&[&[2, 0, 1], &[0, 1, 2]]));
    }

    // Tests indexed access and length
    #[test]
    fn test_get_and_len() {
        let p1 = Permutation::identity(3);
        let p2 = Permutation::new(vec![2, 0, 1]).unwrap_or_else(|_| Permutation::identity(3));
        let c = PermutationChain::new(vec![p1.clone(), p2.clone()]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(0), Some(&p1));
        assert_eq!(c.get(1), Some(&p2));
        assert_eq!(c.get(2), None);
    }

    // Tests malformed rows are rejected when building from raw rows
    #[test]
    fn test_from_rows_rejects_invalid_row() {
        let result = PermutationChain::from_rows(vec![vec![0, 1], vec![1, 1]]);
        assert!(result.is_err());
    }

    // Tests the identity chain and its detection
    #[test]
    fn test_identity_chain() {
        let id = PermutationChain::identity(2, 4);
        assert_eq!(id.len(), 2);
        assert!(id.is_identity());
        assert!(!chain(&[&[0, 1], &[1, 0]]).is_identity());
    }

    // Tests squareness compares row width to row count
    #[test]
    fn test_is_square() {
        assert!(chain(&[&[0, 1], &[1, 0]]).is_square());
        assert!(!chain(&[&[0, 1, 2], &[1, 2, 0]]).is_square());
        assert!(PermutationChain::default().is_square());
    }

    // Tests rows print one per line
    #[test]
    fn test_display() {
        let c = chain(&[&[0, 1], &[1, 0]]);
        assert_eq!(c.to_string(), "[0, 1]\n[1, 0]");
        assert_eq!(PermutationChain::default().to_string(), "");
    }

    // Tests collecting permutations into a chain
    #[test]
    fn test_from_iterator() {
        let c: PermutationChain = (0..3).map(|_| Permutation::identity(2)).collect();
        assert_eq!(c, PermutationChain::identity(3, 2));
        assert_eq!((&c).into_iter().count(), 3);
    }
}
