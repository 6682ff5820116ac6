//! Smallest set of smallest rings, found by flooding paths out from every atom at once.
//!
//! Every atom starts by sending a one-bond path down each of its bonds. Each round, every path
//! is extended by one bond in every direction it can go without doubling back on itself. When
//! two paths meet at an atom in the same round, they might close a ring:
//!
//! - same origin and same first bond: two routes for the same path, only the first to arrive
//!   is kept
//! - same origin, different first bond: an even ring, checked once the round is over
//! - different origin, same first bond: an odd ring, checked right away
//!
//! Odd rings found in round `n` have `2n + 1` bonds and even ones have `2n + 2`, so rings reach
//! the basis in order of size. Perception stops once the basis has as many rings as the graph
//! has independent cycles.

use super::basis::Basis;
use super::config::PerceptionConfig;
use super::cyclomatic::cyclomatic_number;
use super::fragment::materialize_checked;
use super::messages::*;
use super::rings::{RingPerception, RingSet};
use crate::error::{InvariantViolation, RingError};
use crate::graph::adapter::{checked_bond, validate, RingGraph};
use tracing::*;

/// Finds a smallest set of smallest rings.
#[derive(Debug, Clone, Default)]
pub struct Sssr {
    config: PerceptionConfig,
    pool: MessagePool,
    nodes: Vec<Node>,
    basis: Basis,
    /// Even ring candidates found this round.
    even: Vec<(MsgId, MsgId)>,
    scratch: Vec<MsgId>,
}
impl Sssr {
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
    /// The basis built by the last call to `perceive`.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    fn reset<G: RingGraph>(&mut self, graph: &G) -> Result<(), RingError> {
        reset_nodes(&mut self.nodes, graph.atom_count());
        self.pool.clear();
        self.pool.set_capacity(self.config.pool_capacity);
        self.basis.clear();
        self.even.clear();
        for bond in 0..graph.bond_count() {
            let (a, b) = checked_bond(graph, bond)?;
            if a == b {
                trace!(bond, "skipping self-loop");
                continue;
            }
            self.nodes[a].links.push(Link {
                neighbor: b,
                bond: Some(bond),
                message: None,
            });
            self.nodes[b].links.push(Link {
                neighbor: a,
                bond: Some(bond),
                message: None,
            });
            let ab = self.pool.alloc(a, bond, b)?;
            self.nodes[b].inbox.push(ab);
            let ba = self.pool.alloc(b, bond, a)?;
            self.nodes[a].inbox.push(ba);
        }
        Ok(())
    }

    /// Offer a candidate ring to the basis, keeping it if it's independent.
    fn offer<G: RingGraph>(&mut self, graph: &G, bits: PathBits, out: &mut RingSet) {
        if !self.basis.is_independent(&bits) {
            return;
        }
        let Some(ring) = materialize_checked(graph, bits.clone()) else {
            trace!(?bits, "candidate isn't a simple ring");
            return;
        };
        if self.basis.insert(bits) {
            trace!(size = ring.len(), atoms = ?ring.atoms(), "accepted ring");
            out.push(ring);
        }
    }

    /// Forward every queued message to every neighbor it can reach.
    fn send(&mut self) -> Result<(), RingError> {
        let mut outbox = std::mem::take(&mut self.scratch);
        for atom in 0..self.nodes.len() {
            outbox.clear();
            outbox.append(&mut self.nodes[atom].outbox);
            for &msg in &outbox {
                for li in 0..self.nodes[atom].links.len() {
                    let Link { neighbor, bond, .. } = self.nodes[atom].links[li];
                    let Some(bond) = bond else { continue };
                    if !self.pool.get(msg).can_extend(bond, neighbor) {
                        continue;
                    }
                    let next = self.pool.extend(msg, bond, neighbor)?;
                    self.nodes[neighbor].inbox.push(next);
                }
                self.pool.free(msg);
            }
        }
        outbox.clear();
        self.scratch = outbox;
        Ok(())
    }

    /// Look at everything that arrived at `atom` this round. Returns `true` once the basis is
    /// complete.
    fn receive<G: RingGraph>(
        &mut self,
        graph: &G,
        atom: usize,
        target: usize,
        out: &mut RingSet,
    ) -> bool {
        let mut inbox = std::mem::take(&mut self.nodes[atom].inbox);
        // only the first of several routes for the same path survives
        for (i, &a) in inbox.iter().enumerate() {
            if self.pool.get(a).collided {
                continue;
            }
            for &b in &inbox[(i + 1)..] {
                let (ma, mb) = (self.pool.get(a), self.pool.get(b));
                if !mb.collided && ma.origin == mb.origin && ma.origin_bond == mb.origin_bond {
                    self.pool.get_mut(b).collided = true;
                }
            }
        }
        let mut done = false;
        'outer: for (i, &a) in inbox.iter().enumerate() {
            if self.pool.get(a).collided {
                continue;
            }
            for &b in &inbox[(i + 1)..] {
                let (ma, mb) = (self.pool.get(a), self.pool.get(b));
                if mb.collided {
                    continue;
                }
                if ma.origin == mb.origin {
                    self.even.push((a, b));
                } else if ma.origin_bond == mb.origin_bond {
                    let Some(bits) = ma.join(mb, 1, 3) else {
                        continue;
                    };
                    self.offer(graph, bits, out);
                    if self.basis.rank() == target {
                        done = true;
                        break 'outer;
                    }
                }
            }
        }
        for &msg in &inbox {
            if self.pool.get(msg).collided {
                self.pool.free(msg);
            } else {
                self.nodes[atom].outbox.push(msg);
            }
        }
        inbox.clear();
        self.nodes[atom].inbox = inbox;
        done
    }

    /// Check the even ring candidates from this round, lowest highest-bond first. Returns `true`
    /// once the basis is complete.
    fn resolve_even<G: RingGraph>(&mut self, graph: &G, target: usize, out: &mut RingSet) -> bool {
        let mut candidates = self
            .even
            .drain(..)
            .filter_map(|(a, b)| {
                let max = self.pool.get(a).max_bond.max(self.pool.get(b).max_bond);
                self.pool.join(a, b, 0, 2).map(|bits| (max, bits))
            })
            .collect::<Vec<_>>();
        candidates.sort_by_key(|c| c.0);
        for (_, bits) in candidates {
            self.offer(graph, bits, out);
            if self.basis.rank() == target {
                return true;
            }
        }
        false
    }

    fn in_flight(&self) -> usize {
        self.nodes.iter().map(|n| n.outbox.len()).sum()
    }
}

impl RingPerception for Sssr {
    #[instrument(level = "debug", name = "sssr", skip_all, fields(atoms = graph.atom_count(), bonds = graph.bond_count()))]
    fn perceive<G: RingGraph>(&mut self, graph: &G) -> Result<RingSet, RingError> {
        if self.config.validate {
            validate(graph)?;
        }
        let nullity = cyclomatic_number(graph)?;
        debug!(nullity, "computed cyclomatic number");
        let mut out = RingSet::new();
        if nullity == 0 {
            return Ok(out);
        }
        let res = self.run(graph, nullity, &mut out);
        self.pool.clear();
        res.map(|_| out)
    }
}
impl Sssr {
    fn run<G: RingGraph>(
        &mut self,
        graph: &G,
        nullity: usize,
        out: &mut RingSet,
    ) -> Result<(), RingError> {
        self.reset(graph)?;
        for round in 0.. {
            for atom in 0..self.nodes.len() {
                if self.receive(graph, atom, nullity, out) {
                    debug!(round, "found all rings");
                    return Ok(());
                }
            }
            if self.resolve_even(graph, nullity, out) {
                debug!(round, "found all rings");
                return Ok(());
            }
            let in_flight = self.in_flight();
            trace!(round, in_flight, rings = self.basis.rank(), "round finished");
            if in_flight == 0 {
                break;
            }
            self.send()?;
        }
        warn!(
            found = self.basis.rank(),
            expected = nullity,
            "ran out of paths before finding every ring"
        );
        Err(InvariantViolation::BasisIncomplete {
            found: self.basis.rank(),
            expected: nullity,
        }
        .into())
    }
}
