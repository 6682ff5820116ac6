//! The view of a molecule that ring perception needs: contiguous atom and bond indices, the
//! endpoints of each bond, and the bonds around each atom.

use crate::error::{GraphInconsistency, RingError};
use crate::graph::algo::messages::PathBits;
use petgraph::graph::{EdgeIndex, Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use smallvec::SmallVec;

/// Build a [`Topology`] from an atom count and a list of bonds.
///
/// ```
/// let triangle = annulus::topology!(3; 0-1, 1-2, 2-0);
/// assert_eq!(annulus::graph::RingGraph::bond_count(&triangle), 3);
/// ```
#[macro_export]
macro_rules! topology {
    ($atoms:expr; $($a:literal - $b:literal),* $(,)?) => {
        $crate::graph::adapter::Topology::new($atoms, [$(($a, $b)),*])
    };
}

/// A molecular graph, as seen by ring perception.
///
/// Atoms are `0..atom_count()` and bonds are `0..bond_count()`. Self-loop bonds are allowed, and
/// are ignored by everything in this crate.
pub trait RingGraph {
    fn atom_count(&self) -> usize;
    fn bond_count(&self) -> usize;
    /// The endpoints of a bond, or `None` if it doesn't exist.
    fn bond_atoms(&self, bond: usize) -> Option<(usize, usize)>;
    /// The bonds touching an atom.
    fn incident_bonds(&self, atom: usize) -> impl Iterator<Item = usize> + '_;

    /// The atom on the other side of `bond` from `atom`.
    fn other_atom(&self, bond: usize, atom: usize) -> Option<usize> {
        match self.bond_atoms(bond)? {
            (a, b) if a == atom => Some(b),
            (a, b) if b == atom => Some(a),
            _ => None,
        }
    }
}

impl<N, E, Ix: IndexType> RingGraph for Graph<N, E, Undirected, Ix> {
    fn atom_count(&self) -> usize {
        self.node_count()
    }
    fn bond_count(&self) -> usize {
        self.edge_count()
    }
    fn bond_atoms(&self, bond: usize) -> Option<(usize, usize)> {
        if bond >= self.edge_count() {
            return None;
        }
        self.edge_endpoints(EdgeIndex::new(bond))
            .map(|(a, b)| (a.index(), b.index()))
    }
    fn incident_bonds(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        let atom = (atom < self.node_count()).then(|| NodeIndex::new(atom));
        atom.into_iter()
            .flat_map(move |a| self.edges(a).map(|e| e.id().index()))
    }
}

/// A bare topology: an atom count and a list of bonds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Topology {
    atoms: usize,
    bonds: Vec<(usize, usize)>,
    incidence: Vec<SmallVec<usize, 4>>,
}
impl Topology {
    /// Create a topology. Bonds referencing atoms past `atoms` are kept so that they can be
    /// reported by [`validate`], but they aren't listed as incident to anything.
    pub fn new<I: IntoIterator<Item = (usize, usize)>>(atoms: usize, bonds: I) -> Self {
        let mut out = Self {
            atoms,
            bonds: Vec::new(),
            incidence: vec![SmallVec::new(); atoms],
        };
        for (a, b) in bonds {
            out.add_bond(a, b);
        }
        out
    }

    pub fn add_atom(&mut self) -> usize {
        self.incidence.push(SmallVec::new());
        self.atoms += 1;
        self.atoms - 1
    }
    pub fn add_bond(&mut self, a: usize, b: usize) -> usize {
        let bond = self.bonds.len();
        self.bonds.push((a, b));
        if a < self.atoms && b < self.atoms {
            self.incidence[a].push(bond);
            if a != b {
                self.incidence[b].push(bond);
            }
        }
        bond
    }

    pub fn bonds(&self) -> &[(usize, usize)] {
        &self.bonds
    }
}

impl RingGraph for Topology {
    fn atom_count(&self) -> usize {
        self.atoms
    }
    fn bond_count(&self) -> usize {
        self.bonds.len()
    }
    fn bond_atoms(&self, bond: usize) -> Option<(usize, usize)> {
        self.bonds.get(bond).copied()
    }
    fn incident_bonds(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.incidence
            .get(atom)
            .map_or(&[][..], |b| b.as_slice())
            .iter()
            .copied()
    }
}

impl<N, E, Ix: IndexType> From<&Graph<N, E, Undirected, Ix>> for Topology {
    fn from(graph: &Graph<N, E, Undirected, Ix>) -> Self {
        Self::new(
            graph.node_count(),
            graph
                .raw_edges()
                .iter()
                .map(|e| (e.source().index(), e.target().index())),
        )
    }
}

/// Get the endpoints of a bond, checking them against the atom count.
pub(crate) fn checked_bond<G: RingGraph>(
    graph: &G,
    bond: usize,
) -> Result<(usize, usize), RingError> {
    let (a, b) = graph
        .bond_atoms(bond)
        .ok_or(GraphInconsistency::MissingBond { bond })?;
    let atom_count = graph.atom_count();
    if a >= atom_count || b >= atom_count {
        return Err(GraphInconsistency::BondOutOfRange {
            bond,
            atoms: (a, b),
            atom_count,
        }
        .into());
    }
    Ok((a, b))
}

/// Check that a graph is internally consistent: every bond has in-range endpoints, every bond
/// listed around an atom actually touches it, and every bond is listed around both of its
/// endpoints.
pub fn validate<G: RingGraph>(graph: &G) -> Result<(), RingError> {
    let bonds = graph.bond_count();
    for bond in 0..bonds {
        checked_bond(graph, bond)?;
    }
    // bonds seen around their first and second endpoint
    let mut first = PathBits::with_capacity(bonds);
    let mut second = PathBits::with_capacity(bonds);
    for atom in 0..graph.atom_count() {
        for bond in graph.incident_bonds(atom) {
            let (a, b) = graph
                .bond_atoms(bond)
                .filter(|&(a, b)| a == atom || b == atom)
                .ok_or(GraphInconsistency::IncidenceMismatch { atom, bond })?;
            if a == atom {
                first.set(bond, true);
            }
            if b == atom {
                second.set(bond, true);
            }
        }
    }
    for bond in 0..bonds {
        let (a, b) = checked_bond(graph, bond)?;
        let atom = if !first.get(bond) {
            a
        } else if !second.get(bond) {
            b
        } else {
            continue;
        };
        return Err(GraphInconsistency::MissingIncidence { atom, bond }.into());
    }
    Ok(())
}
