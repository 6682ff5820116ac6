use super::*;

fn sizes(rings: &RingSet) -> Vec<(usize, usize)> {
    rings.size_counts().into_iter().collect()
}

#[test]
fn acyclic() {
    trace_capture!();
    assert!(complete_ring_set(&pentane()).unwrap().is_empty());
    assert!(complete_ring_set(&looped_chain()).unwrap().is_empty());
    assert!(complete_ring_set(&Topology::new(3, [])).unwrap().is_empty());
}

#[test]
fn monocycles() {
    trace_capture!();
    let graph = benzene();
    let rings = complete_ring_set(&graph).unwrap();
    assert_eq!(rings.len(), 1);
    assert_ring_eq(rings[0].atoms(), &mut [0, 1, 2, 3, 4, 5]);
    assert_simple_ring(&graph, &rings[0]);

    let rings = complete_ring_set(&ethylcyclopropane()).unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].bits(), &bits([0, 1, 2]));
}

#[test]
fn naphthalene_envelope() {
    trace_capture!();
    let graph = naphthalene();
    let mut rings = complete_ring_set(&graph).unwrap();
    rings.sort_by_size();
    assert_eq!(sizes(&rings), [(6, 2), (10, 1)]);
    assert_eq!(rings[0].bits(), &bits(0..6));
    assert_eq!(rings[1].bits(), &bits([4, 6, 7, 8, 9, 10]));
    assert_eq!(rings[2].bits(), &bits([0, 1, 2, 3, 5, 6, 7, 8, 9, 10]));
    assert!(!rings[2].contains_bond(4));
    assert_ring_eq(rings[2].atoms(), &mut [0, 1, 2, 3, 4, 6, 7, 8, 9, 5]);
    for ring in &rings {
        assert_simple_ring(&graph, ring);
    }
}

#[test]
fn polycycles() {
    trace_capture!();
    assert_eq!(sizes(&complete_ring_set(&anthracene()).unwrap()), [(6, 3), (10, 2), (14, 1)]);
    assert_eq!(sizes(&complete_ring_set(&cubane()).unwrap()), [(4, 6), (6, 16), (8, 6)]);
    assert_eq!(sizes(&complete_ring_set(&propellane()).unwrap()), [(3, 3), (4, 3)]);
    assert_eq!(sizes(&complete_ring_set(&tetrahedrane()).unwrap()), [(3, 4), (4, 3)]);
    assert_eq!(sizes(&complete_ring_set(&bicyclooctane()).unwrap()), [(6, 3)]);
    assert_eq!(sizes(&complete_ring_set(&adamantane()).unwrap()), [(6, 4), (8, 3)]);
}

#[test]
fn spiro() {
    trace_capture!();
    // the figure eight through atom 0 isn't a simple ring
    let rings = complete_ring_set(&spiropentane()).unwrap();
    assert_eq!(sizes(&rings), [(3, 2)]);
}

#[test]
fn multigraph() {
    trace_capture!();
    let rings = complete_ring_set(&double_bond()).unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].bits(), &bits([0, 1]));

    let rings = complete_ring_set(&looped_triangle()).unwrap();
    assert_eq!(rings.len(), 1);
    assert_eq!(rings[0].bits(), &bits([0, 2, 3]));
}

#[test]
fn max_ring_size() {
    trace_capture!();
    let perceive = |graph: &Topology, max| {
        let config = PerceptionConfig::new().with_max_ring_size(max);
        sizes(&CompleteRingSet::with_config(config).perceive(graph).unwrap())
    };
    assert!(perceive(&cubane(), Some(3)).is_empty());
    assert_eq!(perceive(&cubane(), Some(4)), [(4, 6)]);
    assert_eq!(perceive(&cubane(), Some(6)), [(4, 6), (6, 16)]);
    assert_eq!(perceive(&cubane(), Some(8)), [(4, 6), (6, 16), (8, 6)]);
    assert_eq!(perceive(&naphthalene(), Some(8)), [(6, 2)]);
    assert_eq!(perceive(&anthracene(), Some(10)), [(6, 3), (10, 2)]);
    assert_eq!(perceive(&adamantane(), Some(6)), [(6, 4)]);
}

#[test]
fn without_dedup() {
    trace_capture!();
    let config = PerceptionConfig::new().with_dedup(false);
    let mut engine = CompleteRingSet::with_config(config);
    for (name, graph, _, count) in all() {
        assert_eq!(engine.perceive(&graph).unwrap().len(), count, "{name}");
    }
}

#[test]
fn pool_exhausted() {
    trace_capture!();
    // one message per bond fits, but the first spliced path doesn't
    let mut engine = CompleteRingSet::with_config(PerceptionConfig::new().with_pool_capacity(12));
    assert_eq!(
        engine.perceive(&cubane()),
        Err(RingError::ResourceExceeded { capacity: 12 })
    );
    assert!(engine.pool().is_empty());
    engine.config_mut().set_pool_capacity(64);
    assert_eq!(engine.perceive(&cubane()).unwrap().len(), 28);
    assert!(engine.pool().is_empty());
}

#[test]
fn covers_sssr() {
    for (name, graph, nullity, count) in all() {
        let complete = complete_ring_set(&graph).unwrap();
        assert_eq!(complete.len(), count, "{name}");
        assert_eq!(complete.basis().rank(), nullity, "{name}");
        let basis = complete.basis();
        for ring in &sssr(&graph).unwrap() {
            assert!(!basis.is_independent(ring.bits()), "{name}: {ring:?}");
            assert!(
                complete.iter().any(|r| r.bits() == ring.bits()),
                "{name}: {ring:?} missing"
            );
        }
        for ring in &complete {
            assert_simple_ring(&graph, ring);
        }
    }
}

#[test]
fn unwalkable_ring() {
    trace_capture!();
    assert!(CompleteRingSet::new().perceive(&HiddenBond).is_err());
    let config = PerceptionConfig::new().with_validation(false);
    let rings = CompleteRingSet::with_config(config)
        .perceive(&HiddenBond)
        .unwrap();
    assert!(rings.is_empty(), "{rings:?}");
}
