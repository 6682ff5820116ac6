use super::messages::PathBits;
use std::collections::BTreeMap;

/// An incrementally built basis for the cycle space of a graph, over GF(2).
///
/// Every row is stored under its highest bond. A candidate is reduced by XORing it with the row
/// that has the same highest bond until either no such row exists, in which case it's
/// independent and becomes a new row, or it vanishes, in which case it's a sum of rings already
/// in the basis.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Basis {
    rows: BTreeMap<usize, PathBits>,
}
impl Basis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of independent rings added so far.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn clear(&mut self) {
        self.rows.clear();
    }
    /// Iterate over the reduced rows, highest pivot first.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &PathBits)> + '_ {
        self.rows.iter().rev().map(|(&k, v)| (k, v))
    }

    /// Reduce a bond set against the basis, returning what's left.
    pub fn reduce(&self, mut bits: PathBits) -> PathBits {
        while let Some(pivot) = bits.last_one() {
            let Some(row) = self.rows.get(&pivot) else {
                break;
            };
            bits ^= row;
        }
        bits
    }
    /// Check if a bond set can't be made from rings already in the basis.
    pub fn is_independent(&self, bits: &PathBits) -> bool {
        !self.reduce(bits.clone()).all_zero()
    }

    /// Add a bond set to the basis, returning whether it was independent. Dependent sets leave
    /// the basis unchanged.
    pub fn insert(&mut self, bits: PathBits) -> bool {
        let reduced = self.reduce(bits);
        if let Some(pivot) = reduced.last_one() {
            self.rows.insert(pivot, reduced);
            true
        } else {
            false
        }
    }
}

impl Extend<PathBits> for Basis {
    fn extend<I: IntoIterator<Item = PathBits>>(&mut self, iter: I) {
        for bits in iter {
            self.insert(bits);
        }
    }
}
impl FromIterator<PathBits> for Basis {
    fn from_iter<I: IntoIterator<Item = PathBits>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}
