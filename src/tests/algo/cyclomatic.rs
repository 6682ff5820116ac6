use super::*;

#[test]
fn fixtures() {
    for (name, graph, nullity, _) in all() {
        assert_eq!(cyclomatic_number(&graph), Ok(nullity), "{name}");
    }
}

#[test]
fn components() {
    assert_eq!(connected_components(&Topology::new(0, [])), Ok(0));
    assert_eq!(connected_components(&Topology::new(4, [])), Ok(4));
    assert_eq!(connected_components(&benzene()), Ok(1));
    assert_eq!(connected_components(&biscyclohexane()), Ok(2));
    assert_eq!(connected_components(&topology!(5; 0-1, 2-3)), Ok(3));
    assert_eq!(connected_components(&looped_chain()), Ok(1));
}

#[test]
fn isolated_atoms() {
    let graph = topology!(9; 0-1, 1-2, 2-0);
    assert_eq!(cyclomatic_number(&graph), Ok(1));
    assert_eq!(sssr(&graph).unwrap().len(), 1);
}

#[test]
fn parallel_bonds() {
    assert_eq!(cyclomatic_number(&topology!(2; 0-1, 0-1, 1-0)), Ok(2));
    assert_eq!(cyclomatic_number(&topology!(2; 0-1, 0-0, 1-1)), Ok(0));
}

#[test]
fn bad_bond() {
    assert_eq!(
        cyclomatic_number(&topology!(2; 0-1, 0-2)),
        Err(GraphInconsistency::BondOutOfRange {
            bond: 1,
            atoms: (0, 2),
            atom_count: 2
        }
        .into())
    );
}
