//! Graph utilities.

pub mod adapter;
pub mod algo;

pub use adapter::{validate, RingGraph, Topology};
pub use algo::*;
