//! Small data structures shared by the perception algorithms.

pub mod bitset;

pub use bitset::BitSet;
