//! Ring perception for molecular graphs.
//!
//! Two algorithms are provided: [`Sssr`](graph::Sssr) finds a smallest set of smallest rings, a
//! basis for the graph's cycle space biased towards small rings, and
//! [`CompleteRingSet`](graph::CompleteRingSet) finds every elementary ring. Both work on
//! anything implementing [`RingGraph`](graph::RingGraph), including petgraph's undirected
//! `Graph`.
//!
//! ```
//! use annulus::prelude::*;
//!
//! // naphthalene
//! let graph = topology!(10; 0-1, 1-2, 2-3, 3-4, 4-5, 5-0, 4-6, 6-7, 7-8, 8-9, 9-5);
//! assert_eq!(sssr(&graph).unwrap().len(), 2);
//! assert_eq!(complete_ring_set(&graph).unwrap().len(), 3);
//! ```

pub mod error;
pub mod graph;
pub mod prelude;
pub mod utils;
