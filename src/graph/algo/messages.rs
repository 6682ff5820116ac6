//! Paths passed between atoms while perceiving rings, and the pool they're allocated from.
//!
//! Both perception algorithms work by building up paths through the graph. A path is stored as a
//! pair of bitsets (bonds and atoms on the path), along with where it started and where it
//! currently ends. Paths are addressed by a [`MsgId`] into a [`MessagePool`], which recycles
//! freed messages so that their bitsets' storage gets reused.

use crate::error::RingError;
use crate::utils::bitset::BitSet;
use slab::Slab;
use smallvec::SmallVec;
use tracing::*;

/// Bitset over bond or atom indices. Two words inline covers most molecules.
pub type PathBits = BitSet<u64, 2>;

/// Handle to a message in a [`MessagePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MsgId(usize);
impl MsgId {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A partial path through the graph.
#[derive(Debug, Default, Clone)]
pub struct PathMessage {
    /// Bonds used by this path.
    pub bonds: PathBits,
    /// Atoms on this path, including both ends.
    pub atoms: PathBits,
    /// The atom this path started from.
    pub origin: usize,
    /// The first bond taken from `origin`. Together with `origin`, this identifies the family of
    /// paths this one belongs to.
    pub origin_bond: usize,
    /// The atom this path currently ends at.
    pub terminal: usize,
    /// Highest bond index on the path.
    pub max_bond: usize,
    /// Number of bonds on the path.
    pub len: usize,
    pub collided: bool,
}
impl PathMessage {
    /// Reset this message to a single bond from `origin` to `terminal`.
    fn reset(&mut self, origin: usize, bond: usize, terminal: usize) {
        self.bonds.clear();
        self.atoms.clear();
        self.bonds.set(bond, true);
        self.atoms.set(origin, true);
        self.atoms.set(terminal, true);
        self.origin = origin;
        self.origin_bond = bond;
        self.terminal = terminal;
        self.max_bond = bond;
        self.len = 1;
        self.collided = false;
    }
    fn copy_from(&mut self, other: &Self) {
        self.bonds.copy_from(&other.bonds);
        self.atoms.copy_from(&other.atoms);
        self.origin = other.origin;
        self.origin_bond = other.origin_bond;
        self.terminal = other.terminal;
        self.max_bond = other.max_bond;
        self.len = other.len;
        self.collided = other.collided;
    }

    /// Whether extending this path along `bond` to `atom` would still give a simple path.
    #[inline]
    pub fn can_extend(&self, bond: usize, atom: usize) -> bool {
        !self.bonds.get(bond) && !self.atoms.get(atom)
    }

    /// Try to combine this path with another one.
    ///
    /// Succeeds if the paths share exactly `shared_bonds` bonds and `shared_atoms` atoms, which
    /// the caller knows must be in common (the bond both paths started from, the atom they
    /// meet at, and so on). Anything else in common would make the result self-intersecting.
    /// Returns the union of the two bond sets.
    pub fn join(&self, other: &Self, shared_bonds: usize, shared_atoms: usize) -> Option<PathBits> {
        self.joinable(other, shared_bonds, shared_atoms)
            .then(|| &self.bonds | &other.bonds)
    }
    /// The check done by [`join`](Self::join), without building the result.
    pub fn joinable(&self, other: &Self, shared_bonds: usize, shared_atoms: usize) -> bool {
        self.bonds.intersection_count(&other.bonds) == shared_bonds
            && self.atoms.intersection_count(&other.atoms) == shared_atoms
    }
}

/// Arena of [`PathMessage`]s with a hard limit on how many can be live at once.
#[derive(Debug, Clone)]
pub struct MessagePool {
    live: Slab<PathMessage>,
    spare: Vec<PathMessage>,
    capacity: usize,
}
impl MessagePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            live: Slab::new(),
            spare: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }
    /// Number of live messages.
    pub fn len(&self) -> usize {
        self.live.len()
    }
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
    /// Number of freed messages waiting to be reused.
    pub fn spare(&self) -> usize {
        self.spare.len()
    }

    fn take(&mut self) -> Result<PathMessage, RingError> {
        if self.live.len() >= self.capacity {
            debug!(capacity = self.capacity, "message pool exhausted");
            return Err(RingError::ResourceExceeded {
                capacity: self.capacity,
            });
        }
        Ok(self.spare.pop().unwrap_or_default())
    }

    /// Allocate a single-bond message going from `origin` to `terminal` along `bond`.
    pub fn alloc(&mut self, origin: usize, bond: usize, terminal: usize) -> Result<MsgId, RingError> {
        let mut msg = self.take()?;
        msg.reset(origin, bond, terminal);
        Ok(MsgId(self.live.insert(msg)))
    }

    /// Allocate a copy of `parent` extended along `bond` to `atom`. The caller is expected to
    /// have checked [`PathMessage::can_extend`].
    pub fn extend(&mut self, parent: MsgId, bond: usize, atom: usize) -> Result<MsgId, RingError> {
        let mut msg = self.take()?;
        msg.copy_from(&self.live[parent.0]);
        msg.bonds.set(bond, true);
        msg.atoms.set(atom, true);
        msg.terminal = atom;
        msg.max_bond = msg.max_bond.max(bond);
        msg.len += 1;
        msg.collided = false;
        Ok(MsgId(self.live.insert(msg)))
    }

    /// Allocate a message joining `a` and `b`, which must share exactly one atom. The result
    /// goes from `a`'s far end to `b`'s far end.
    pub fn concat(
        &mut self,
        a: MsgId,
        b: MsgId,
        origin: usize,
        terminal: usize,
    ) -> Result<MsgId, RingError> {
        let mut msg = self.take()?;
        let (ma, mb) = (&self.live[a.0], &self.live[b.0]);
        msg.copy_from(ma);
        msg.bonds |= &mb.bonds;
        msg.atoms |= &mb.atoms;
        msg.origin = origin;
        msg.terminal = terminal;
        msg.max_bond = ma.max_bond.max(mb.max_bond);
        msg.len = ma.len + mb.len;
        msg.collided = false;
        Ok(MsgId(self.live.insert(msg)))
    }

    /// Return a message to the pool.
    pub fn free(&mut self, id: MsgId) {
        if let Some(msg) = self.live.try_remove(id.0) {
            self.spare.push(msg);
        }
    }
    /// Free every live message.
    pub fn clear(&mut self) {
        self.spare.extend(self.live.drain());
    }

    pub fn get(&self, id: MsgId) -> &PathMessage {
        &self.live[id.0]
    }
    pub fn get_mut(&mut self, id: MsgId) -> &mut PathMessage {
        &mut self.live[id.0]
    }
    /// Join two live messages, see [`PathMessage::join`].
    pub fn join(
        &self,
        a: MsgId,
        b: MsgId,
        shared_bonds: usize,
        shared_atoms: usize,
    ) -> Option<PathBits> {
        self.live[a.0].join(&self.live[b.0], shared_bonds, shared_atoms)
    }
}
impl Default for MessagePool {
    fn default() -> Self {
        Self::new(crate::graph::algo::config::DEFAULT_POOL_CAPACITY)
    }
}

/// One entry in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub neighbor: usize,
    /// The bond to the neighbor, if this link is a single bond of the input graph.
    pub bond: Option<usize>,
    /// The path this link stands for, if any.
    pub message: Option<MsgId>,
}

/// Per-atom state during perception.
#[derive(Debug, Default, Clone)]
pub struct Node {
    pub links: SmallVec<Link, 4>,
    /// Messages that arrived this round.
    pub inbox: Vec<MsgId>,
    /// Messages to forward next round.
    pub outbox: Vec<MsgId>,
}
impl Node {
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.links.len()
    }
    /// Remove the link carrying `msg`, returning whether one was found.
    pub fn unlink(&mut self, msg: MsgId) -> bool {
        if let Some(pos) = self.links.iter().position(|l| l.message == Some(msg)) {
            self.links.swap_remove(pos);
            true
        } else {
            false
        }
    }
    pub fn clear(&mut self) {
        self.links.clear();
        self.inbox.clear();
        self.outbox.clear();
    }
}

/// Reset `nodes` to `count` empty nodes, keeping their allocations where possible.
pub(crate) fn reset_nodes(nodes: &mut Vec<Node>, count: usize) {
    nodes.truncate(count);
    for node in nodes.iter_mut() {
        node.clear();
    }
    nodes.resize_with(count, Node::default);
}
