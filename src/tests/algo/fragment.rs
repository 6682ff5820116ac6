use super::*;

#[test]
fn walk_from_any_atom() {
    let graph = naphthalene();
    let ring = materialize(&graph, bits([4, 6, 7, 8, 9, 10]), 9);
    assert_eq!(ring.atoms()[0], 9);
    assert_ring_eq(ring.atoms(), &mut [4, 5, 9, 8, 7, 6]);
    assert_simple_ring(&graph, &ring);
}

#[test]
fn unchecked_gives_partial_rings() {
    let graph = naphthalene();
    let ring = materialize(&graph, bits([0, 1]), 0);
    assert_eq!(ring.atoms(), [0, 1, 2]);
    assert_eq!(ring.bonds(), [0, 1]);
    assert_eq!(materialize_checked(&graph, bits([0, 1])), None);
}

#[test]
fn checked() {
    let graph = naphthalene();
    let ring = materialize_checked(&graph, bits([0, 1, 2, 3, 5, 6, 7, 8, 9, 10])).unwrap();
    assert_eq!(ring.len(), 10);
    assert_simple_ring(&graph, &ring);
    assert_eq!(materialize_checked(&graph, bits([])), None);
    // two hexagons, not one ring
    assert_eq!(materialize_checked(&biscyclohexane(), bits(0..12)), None);
    // figure eight through the spiro atom
    assert_eq!(materialize_checked(&spiropentane(), bits(0..6)), None);
}

#[test]
fn checked_follows_incidence() {
    // the bonds form a triangle, but it can't be walked
    assert_eq!(materialize_checked(&HiddenBond, bits([0, 1, 2])), None);
}
