//! Graph representation shared by every algorithm in the crate.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], [`Edge`], [`Adjacency`] and [`Graph`]
//! - **Weights**: the [`Weight`] trait, implemented for primitive numbers
//! - **Traits**: [`GraphBase`] and [`Successors`], which the structural
//!   algorithms are written against
//! - **Keyed construction**: [`IndexedGraph`] maps caller keys to dense vertices
//!
//! # Design Principles
//!
//! ## Dense Vertices
//!
//! Vertices are the indices `[0, V)` fixed when the graph is created. There is
//! no vertex object and no vertex removal, so per-vertex working state in the
//! algorithms is always a plain `Vec` indexed by [`NodeId::index`].
//!
//! ## Immutable After Construction
//!
//! Graphs are built with [`Graph::add_edge`], then handed to algorithms by
//! shared reference. No algorithm mutates its input.
//!
//! ## Deterministic Adjacency
//!
//! Neighbours are reported in insertion order. Traversal orders, tie-breaks and
//! therefore every algorithm result are a pure function of the edge insertion
//! sequence.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphscope::{Graph, NodeId};
//!
//! // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
//! let graph = Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])?;
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.out_degree(NodeId::new(0))?, 2);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod adjacency;
mod edge;
mod indexed;
mod node;
mod traits;
mod weight;

pub use adjacency::Graph;
pub use edge::{Adjacency, Edge, EdgeId};
pub use indexed::IndexedGraph;
pub use node::NodeId;
pub use traits::{GraphBase, Successors};
pub use weight::Weight;

pub(crate) use weight::compare as compare_weights;
