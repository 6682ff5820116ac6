use super::*;
use crate::graph::algo::messages::*;

#[test]
fn alloc_and_extend() {
    let mut pool = MessagePool::new(8);
    let a = pool.alloc(0, 3, 1).unwrap();
    {
        let msg = pool.get(a);
        assert_eq!(msg.bonds, bits([3]));
        assert_eq!(msg.atoms, bits([0, 1]));
        assert_eq!((msg.origin, msg.origin_bond, msg.terminal), (0, 3, 1));
        assert_eq!((msg.max_bond, msg.len), (3, 1));
        assert!(msg.can_extend(4, 2));
        assert!(!msg.can_extend(3, 2));
        assert!(!msg.can_extend(4, 0));
    }
    let b = pool.extend(a, 1, 2).unwrap();
    let msg = pool.get(b);
    assert_eq!(msg.bonds, bits([1, 3]));
    assert_eq!(msg.atoms, bits([0, 1, 2]));
    assert_eq!((msg.origin, msg.origin_bond, msg.terminal), (0, 3, 2));
    assert_eq!((msg.max_bond, msg.len), (3, 2));
    // the parent is untouched
    assert_eq!(pool.get(a).len, 1);
    assert_eq!(pool.len(), 2);
}

#[test]
fn join() {
    let mut pool = MessagePool::new(16);
    // two paths around a square from atom 0, meeting at atom 2
    let a = pool.alloc(0, 0, 1).unwrap();
    let a = pool.extend(a, 1, 2).unwrap();
    let b = pool.alloc(0, 3, 3).unwrap();
    let b = pool.extend(b, 2, 2).unwrap();
    assert_eq!(pool.join(a, b, 0, 2), Some(bits([0, 1, 2, 3])));
    assert_eq!(pool.join(a, b, 1, 3), None);
    // two paths that share a bond
    let c = pool.alloc(0, 0, 1).unwrap();
    let c = pool.extend(c, 4, 4).unwrap();
    assert!(pool.get(a).joinable(pool.get(c), 1, 2));
    assert!(!pool.get(a).joinable(pool.get(c), 0, 2));
}

#[test]
fn concat() {
    let mut pool = MessagePool::new(16);
    let a = pool.alloc(1, 0, 0).unwrap();
    let b = pool.alloc(0, 5, 2).unwrap();
    let c = pool.concat(a, b, 1, 2).unwrap();
    let msg = pool.get(c);
    assert_eq!(msg.bonds, bits([0, 5]));
    assert_eq!(msg.atoms, bits([0, 1, 2]));
    assert_eq!((msg.origin, msg.terminal), (1, 2));
    assert_eq!((msg.max_bond, msg.len), (5, 2));
}

#[test]
fn capacity() {
    trace_capture!();
    let mut pool = MessagePool::new(2);
    let a = pool.alloc(0, 0, 1).unwrap();
    let b = pool.extend(a, 1, 2).unwrap();
    assert_eq!(
        pool.alloc(2, 2, 3),
        Err(RingError::ResourceExceeded { capacity: 2 })
    );
    assert_eq!(
        pool.extend(b, 2, 3),
        Err(RingError::ResourceExceeded { capacity: 2 })
    );
    pool.free(a);
    assert!(pool.alloc(2, 2, 3).is_ok());
    pool.set_capacity(3);
    assert_eq!(pool.capacity(), 3);
    assert!(pool.alloc(3, 3, 4).is_ok());
}

#[test]
fn reuse() {
    let mut pool = MessagePool::new(8);
    let ids = (0..4)
        .map(|i| pool.alloc(i, i, i + 1).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.spare(), 0);
    pool.free(ids[1]);
    pool.free(ids[1]);
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.spare(), 1);
    // freed messages come back fully reset
    let big = pool.alloc(0, 200, 100).unwrap();
    pool.free(big);
    let small = pool.alloc(1, 2, 3).unwrap();
    assert_eq!(pool.get(small).bonds, bits([2]));
    assert_eq!(pool.get(small).atoms, bits([1, 3]));
    assert!(!pool.get(small).collided);
    pool.clear();
    assert!(pool.is_empty());
    assert_eq!(pool.spare(), 4);
}

#[test]
fn node_links() {
    let mut pool = MessagePool::default();
    assert_eq!(pool.capacity(), crate::graph::algo::config::DEFAULT_POOL_CAPACITY);
    let m = pool.alloc(0, 0, 1).unwrap();
    let mut node = Node::default();
    node.links.push(Link {
        neighbor: 1,
        bond: Some(0),
        message: Some(m),
    });
    node.links.push(Link {
        neighbor: 2,
        bond: None,
        message: None,
    });
    assert_eq!(node.degree(), 2);
    assert!(node.unlink(m));
    assert!(!node.unlink(m));
    assert_eq!(node.degree(), 1);
    assert_eq!(node.links[0].neighbor, 2);
}
