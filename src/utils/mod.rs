//! Data structures shared by the algorithms.
//!
//! - [`BitSet`] - Fixed-capacity set of vertex indices
//! - [`DisjointSet`] - Union-find with path compression and union by rank
//!
//! A min-priority heap entry used by Dijkstra and Prim stays crate-private.

mod bitset;
mod disjoint_set;
mod scored;

pub use bitset::{BitSet, Iter as BitSetIter};
pub use disjoint_set::DisjointSet;

pub(crate) use scored::MinScored;
