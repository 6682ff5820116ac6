//! Turning a ring's bond set back into an ordered walk around it.

use super::messages::PathBits;
use crate::graph::adapter::RingGraph;
use smallvec::{smallvec, SmallVec};

/// A ring, as an ordered cycle of atoms and bonds.
///
/// `bonds()[i]` connects `atoms()[i]` and `atoms()[(i + 1) % len]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    atoms: SmallVec<usize, 8>,
    bonds: SmallVec<usize, 8>,
    bits: PathBits,
}
impl Ring {
    /// Number of atoms (and bonds) in the ring.
    pub fn len(&self) -> usize {
        self.bonds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }
    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }
    /// The set of bonds in this ring.
    pub fn bits(&self) -> &PathBits {
        &self.bits
    }
    pub fn contains_atom(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }
    pub fn contains_bond(&self, bond: usize) -> bool {
        self.bits.get(bond)
    }
}

/// Walk the bonds in `bits`, starting from `start`, following the first unused bond each time
/// until we're back where we started.
///
/// `bits` must be a simple cycle through `start`. Nothing is checked, and anything else gives
/// a partial or meaningless ring; see [`materialize_checked`].
pub fn materialize<G: RingGraph>(graph: &G, bits: PathBits, start: usize) -> Ring {
    walk(graph, bits, start).0
}

fn walk<G: RingGraph>(graph: &G, bits: PathBits, start: usize) -> (Ring, bool) {
    let mut used = PathBits::with_capacity(graph.bond_count());
    let mut atoms: SmallVec<usize, 8> = smallvec![start];
    let mut bonds = SmallVec::new();
    let mut cur = start;
    let mut closed = false;
    loop {
        let bond = graph
            .incident_bonds(cur)
            .find(|&b| bits.get(b) && !used.get(b));
        let Some(bond) = bond else {
            break;
        };
        let Some(next) = graph.other_atom(bond, cur) else {
            break;
        };
        used.set(bond, true);
        bonds.push(bond);
        if next == start {
            closed = true;
            break;
        }
        atoms.push(next);
        cur = next;
    }
    (Ring { atoms, bonds, bits }, closed)
}

/// Like [`materialize`], but starts from the lowest bond and returns `None` unless `bits` is
/// a simple cycle: the walk has to close, use every bond, and never revisit an atom.
pub fn materialize_checked<G: RingGraph>(graph: &G, bits: PathBits) -> Option<Ring> {
    let first = bits.nth(0)?;
    let (start, _) = graph.bond_atoms(first)?;
    let count = bits.count_ones();
    let (ring, closed) = walk(graph, bits, start);
    if !closed || ring.bonds.len() != count || ring.atoms.len() != count {
        return None;
    }
    let mut seen = PathBits::with_capacity(graph.atom_count());
    for &atom in &ring.atoms {
        if seen.get(atom) {
            return None;
        }
        seen.set(atom, true);
    }
    Some(ring)
}
