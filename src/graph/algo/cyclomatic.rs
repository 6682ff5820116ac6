use crate::error::{InvariantViolation, RingError};
use crate::graph::adapter::{checked_bond, RingGraph};
use petgraph::unionfind::UnionFind;
use tracing::*;

/// The number of connected components in a graph. Isolated atoms count as their own component.
pub fn connected_components<G: RingGraph>(graph: &G) -> Result<usize, RingError> {
    let atoms = graph.atom_count();
    let mut union = UnionFind::new(atoms);
    let mut merges = 0;
    for bond in 0..graph.bond_count() {
        let (a, b) = checked_bond(graph, bond)?;
        if union.union(a, b) {
            merges += 1;
        }
    }
    Ok(atoms - merges)
}

/// Find the number of independent cycles in a graph: bonds − atoms + components, not counting
/// self-loops.
pub fn cyclomatic_number<G: RingGraph>(graph: &G) -> Result<usize, RingError> {
    let atoms = graph.atom_count();
    let mut union = UnionFind::new(atoms);
    let mut bonds = 0;
    let mut merges = 0;
    for bond in 0..graph.bond_count() {
        let (a, b) = checked_bond(graph, bond)?;
        if a == b {
            continue;
        }
        bonds += 1;
        if union.union(a, b) {
            merges += 1;
        }
    }
    let components = atoms - merges;
    let nullity = (bonds + components).checked_sub(atoms);
    nullity.ok_or_else(|| {
        warn!(atoms, bonds, components, "negative nullity");
        InvariantViolation::NegativeNullity {
            atoms,
            bonds,
            components,
        }
        .into()
    })
}
