//! Complete ring set, found by reducing the graph one atom at a time.
//!
//! Every bond starts out as a path between its two atoms. Atoms are then removed, lowest degree
//! first. Removing an atom splices every pair of paths through it into a longer path between
//! its neighbors, or into a ring if both paths lead to the same neighbor. Once every atom is
//! gone, every elementary ring has been closed exactly once.

use super::config::PerceptionConfig;
use super::fragment::materialize_checked;
use super::messages::*;
use super::rings::{RingPerception, RingSet};
use crate::error::RingError;
use crate::graph::adapter::{checked_bond, validate, RingGraph};
use ahash::AHashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::*;

/// Finds every elementary ring in a graph.
///
/// The number of rings can grow exponentially with the number of fused rings; the pool
/// capacity and [`max_ring_size`](PerceptionConfig::max_ring_size) bound the work.
#[derive(Debug, Clone, Default)]
pub struct CompleteRingSet {
    config: PerceptionConfig,
    pool: MessagePool,
    nodes: Vec<Node>,
    /// Atoms waiting to be removed, by degree then index. Entries go stale when an atom's
    /// degree changes, and are skipped when popped.
    queue: BinaryHeap<Reverse<(usize, usize)>>,
    links: Vec<Link>,
}
impl CompleteRingSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: PerceptionConfig) -> Self {
        Self {
            pool: MessagePool::new(config.pool_capacity),
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PerceptionConfig {
        &self.config
    }
    pub fn config_mut(&mut self) -> &mut PerceptionConfig {
        &mut self.config
    }
    pub fn pool(&self) -> &MessagePool {
        &self.pool
    }

    fn reset<G: RingGraph>(&mut self, graph: &G) -> Result<(), RingError> {
        reset_nodes(&mut self.nodes, graph.atom_count());
        self.pool.clear();
        self.pool.set_capacity(self.config.pool_capacity);
        self.queue.clear();
        for bond in 0..graph.bond_count() {
            let (a, b) = checked_bond(graph, bond)?;
            if a == b {
                trace!(bond, "skipping self-loop");
                continue;
            }
            let message = Some(self.pool.alloc(a, bond, b)?);
            self.nodes[a].links.push(Link {
                neighbor: b,
                bond: Some(bond),
                message,
            });
            self.nodes[b].links.push(Link {
                neighbor: a,
                bond: Some(bond),
                message,
            });
        }
        self.queue.extend(
            self.nodes
                .iter()
                .enumerate()
                .map(|(n, node)| Reverse((node.degree(), n))),
        );
        Ok(())
    }

    /// Pop the atom with the lowest current degree, skipping stale entries.
    fn next_atom(&mut self, removed: &PathBits) -> Option<usize> {
        while let Some(Reverse((degree, atom))) = self.queue.pop() {
            if !removed.get(atom) && self.nodes[atom].degree() == degree {
                return Some(atom);
            }
        }
        None
    }

    /// Remove an atom, splicing the paths through it.
    fn eliminate<G: RingGraph>(
        &mut self,
        graph: &G,
        atom: usize,
        seen: &mut AHashSet<PathBits>,
        out: &mut RingSet,
    ) -> Result<(), RingError> {
        let mut links = std::mem::take(&mut self.links);
        links.clear();
        links.extend(self.nodes[atom].links.drain(..));
        trace!(atom, degree = links.len(), "eliminating atom");
        let max_size = self.config.max_ring_size.unwrap_or(usize::MAX);
        for (i, l1) in links.iter().enumerate() {
            let Some(m1) = l1.message else { continue };
            for l2 in &links[(i + 1)..] {
                let Some(m2) = l2.message else { continue };
                if l1.neighbor == l2.neighbor {
                    let Some(bits) = self.pool.join(m1, m2, 0, 2) else {
                        continue;
                    };
                    if bits.count_ones() > max_size {
                        continue;
                    }
                    if self.config.dedup && !seen.insert(bits.clone()) {
                        trace!(?bits, "duplicate ring");
                        continue;
                    }
                    let Some(ring) = materialize_checked(graph, bits) else {
                        trace!(neighbor = l1.neighbor, "closed path isn't a simple ring");
                        continue;
                    };
                    out.push(ring);
                } else {
                    let (p1, p2) = (self.pool.get(m1), self.pool.get(m2));
                    // a path of n bonds can only close rings of n + 1 or more
                    if p1.len + p2.len >= max_size || !p1.joinable(p2, 0, 1) {
                        continue;
                    }
                    let message = Some(self.pool.concat(m1, m2, l1.neighbor, l2.neighbor)?);
                    self.nodes[l1.neighbor].links.push(Link {
                        neighbor: l2.neighbor,
                        bond: None,
                        message,
                    });
                    self.nodes[l2.neighbor].links.push(Link {
                        neighbor: l1.neighbor,
                        bond: None,
                        message,
                    });
                }
            }
        }
        for link in &links {
            if let Some(msg) = link.message {
                self.nodes[link.neighbor].unlink(msg);
                self.pool.free(msg);
            }
        }
        for link in &links {
            let degree = self.nodes[link.neighbor].degree();
            self.queue.push(Reverse((degree, link.neighbor)));
        }
        self.links = links;
        Ok(())
    }
}

impl RingPerception for CompleteRingSet {
    #[instrument(level = "debug", name = "complete_ring_set", skip_all, fields(atoms = graph.atom_count(), bonds = graph.bond_count()))]
    fn perceive<G: RingGraph>(&mut self, graph: &G) -> Result<RingSet, RingError> {
        if self.config.validate {
            validate(graph)?;
        }
        let mut out = RingSet::new();
        let res = self.run(graph, &mut out);
        self.pool.clear();
        res.map(|_| out)
    }
}
impl CompleteRingSet {
    fn run<G: RingGraph>(&mut self, graph: &G, out: &mut RingSet) -> Result<(), RingError> {
        self.reset(graph)?;
        let mut removed = PathBits::with_capacity(graph.atom_count());
        let mut seen = AHashSet::new();
        while let Some(atom) = self.next_atom(&removed) {
            removed.set(atom, true);
            self.eliminate(graph, atom, &mut seen, out)?;
        }
        debug!(rings = out.len(), "found complete ring set");
        Ok(())
    }
}
