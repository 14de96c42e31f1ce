use crate::algebra::permutation::Permutation;
use crate::io::error::Result;
use std::fmt;

/// Ordered sequence of permutations, read as the rows of an array
///
/// Row lengths are not checked here; consumers that need a square shape
/// verify it themselves. Equality and hashing are structural over every row,
/// which makes a chain usable as the key of a seen-state map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermutationChain {
    permutations: Vec<Permutation>,
}

impl PermutationChain {
    /// Wrap permutations as a chain
    pub const fn new(permutations: Vec<Permutation>) -> Self {
        Self { permutations }
    }

    /// Build a chain from raw rows, validating each as a permutation
    ///
    /// # Errors
    ///
    /// Returns [`crate::LatinError::InvalidPermutation`] for the first row that is
    /// not a bijection
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        rows.into_iter()
            .map(Permutation::new)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// `rows` copies of the identity permutation on `width` points
    pub fn identity(rows: usize, width: usize) -> Self {
        Self::new(vec![Permutation::identity(width); rows])
    }

    /// Number of permutations in the chain
    pub const fn len(&self) -> usize {
        self.permutations.len()
    }

    /// Test if the chain holds no permutations
    pub const fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }

    /// Permutation at `index`
    pub fn get(&self, index: usize) -> Option<&Permutation> {
        self.permutations.get(index)
    }

    /// All permutations in order
    pub fn permutations(&self) -> &[Permutation] {
        &self.permutations
    }

    /// Iterate over the rows
    pub fn iter(&self) -> std::slice::Iter<'_, Permutation> {
        self.permutations.iter()
    }

    /// Test if every row has exactly as many entries as there are rows
    pub fn is_square(&self) -> bool {
        let n = self.len();
        self.permutations.iter().all(|p| p.len() == n)
    }

    /// Test if every row is the identity
    pub fn is_identity(&self) -> bool {
        self.permutations.iter().all(Permutation::is_identity)
    }

    /// Rows as nested vectors
    pub fn to_array(&self) -> Vec<Vec<usize>> {
        self.permutations.iter().map(Permutation::to_vec).collect()
    }
}

impl FromIterator<Permutation> for PermutationChain {
    fn from_iter<I: IntoIterator<Item = Permutation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PermutationChain {
    type Item = &'a Permutation;
    type IntoIter = std::slice::Iter<'a, Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.permutations.iter()
    }
}

impl fmt::Display for PermutationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = self.permutations.iter();
        if let Some(first) = rows.next() {
            write!(f, "{first}")?;
        }
        for row in rows {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}
