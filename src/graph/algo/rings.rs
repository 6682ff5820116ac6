use super::basis::Basis;
use super::crs::CompleteRingSet;
use super::fragment::Ring;
use super::sssr::Sssr;
use crate::error::RingError;
use crate::graph::adapter::RingGraph;
use std::collections::BTreeMap;
use std::ops::Index;

/// Something that can find rings in a graph.
pub trait RingPerception {
    /// Find the rings in `graph`. The graph isn't modified, and the result doesn't borrow from
    /// it.
    fn perceive<G: RingGraph>(&mut self, graph: &G) -> Result<RingSet, RingError>;
}

/// Find the smallest set of smallest rings with the default configuration.
pub fn sssr<G: RingGraph>(graph: &G) -> Result<RingSet, RingError> {
    Sssr::new().perceive(graph)
}
/// Find every elementary ring with the default configuration.
pub fn complete_ring_set<G: RingGraph>(graph: &G) -> Result<RingSet, RingError> {
    CompleteRingSet::new().perceive(graph)
}

/// The rings found in a graph.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RingSet {
    rings: Vec<Ring>,
}
impl RingSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub(crate) fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }

    pub fn is_ring_atom(&self, atom: usize) -> bool {
        self.rings.iter().any(|r| r.contains_atom(atom))
    }
    pub fn is_ring_bond(&self, bond: usize) -> bool {
        self.rings.iter().any(|r| r.contains_bond(bond))
    }
    /// Size of the smallest ring containing `atom`.
    pub fn smallest_ring_size(&self, atom: usize) -> Option<usize> {
        self.atom_rings(atom).map(Ring::len).min()
    }
    pub fn atom_rings(&self, atom: usize) -> impl Iterator<Item = &Ring> + '_ {
        self.rings.iter().filter(move |r| r.contains_atom(atom))
    }
    /// Count the rings of each size.
    pub fn size_counts(&self) -> BTreeMap<usize, usize> {
        let mut out = BTreeMap::new();
        for ring in &self.rings {
            *out.entry(ring.len()).or_default() += 1;
        }
        out
    }
    /// Sort smallest first, breaking ties by bond indices.
    pub fn sort_by_size(&mut self) {
        self.rings.sort_by(|a, b| {
            a.len()
                .cmp(&b.len())
                .then_with(|| a.bits().ones().cmp(b.bits().ones()))
        });
    }
    /// Reduce these rings to a cycle-space basis.
    pub fn basis(&self) -> Basis {
        self.rings.iter().map(|r| r.bits().clone()).collect()
    }
}

impl Index<usize> for RingSet {
    type Output = Ring;

    fn index(&self, index: usize) -> &Ring {
        &self.rings[index]
    }
}
impl IntoIterator for RingSet {
    type Item = Ring;
    type IntoIter = std::vec::IntoIter<Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.into_iter()
    }
}
impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}
