// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphscope
//!
//! An in-memory engine of classical graph algorithms over one generic
//! directed or undirected graph type.
//!
//! ## Features
//!
//! - **Traversal** - BFS, DFS, pre/post orders and a fully classified depth-first forest
//! - **Connectivity** - Tarjan and Kosaraju SCCs with condensation, bridges,
//!   articulation points, connected components and bipartition
//! - **Shortest paths** - Dijkstra, Bellman-Ford, SPFA and Floyd-Warshall with
//!   path reconstruction and negative-cycle detection
//! - **Spanning trees** - Kruskal and Prim
//! - **Orders** - Kahn, lexicographic Kahn and DFS topological sorts, cycle extraction
//!
//! Every depth-first algorithm keeps an explicit stack, so graphs with
//! millions of vertices in a single chain are fine. No algorithm mutates the
//! graph; a built graph can be shared across threads and queried concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph: Graph<u32> = Graph::directed(4);
//! for (u, v, w) in [(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)] {
//!     graph.add_edge(NodeId::new(u), NodeId::new(v), w)?;
//! }
//!
//! let paths = shortest_paths(&graph, NodeId::new(0), ShortestPathAlgorithm::Dijkstra)?;
//! assert_eq!(paths.distance(NodeId::new(3)), Some(9));
//!
//! let order = topological_sort(&graph, TopoAlgorithm::Kahn)?;
//! assert_eq!(order.len(), 4);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Errors
//!
//! Fallible entry points return [`Result`]. Beyond invalid vertex indices and
//! violated preconditions, [`Error::NegativeCycleDetected`] and
//! [`Error::CycleDetected`] report that the requested answer does not exist.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and
//! `trace` level and never installs a subscriber.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let graph = Graph::from_edges(3, false, [(0, 1, 1), (1, 2, 2)])?;
/// let mst = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal)?;
/// assert_eq!(mst.total_weight, 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

/// The graph type, its identifiers and the traits algorithms are written against.
pub mod graph;

/// Every algorithm as a free function over a shared graph reference.
pub mod algorithms;

/// Configuration of the [`Engine`] façade.
pub mod config;

/// The [`Engine`] façade dispatching on an [`EngineConfig`].
pub mod engine;

/// Union-find and vertex sets.
pub mod utils;

/// `graphscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// See [`Error`] for the variants and when each one is produced.
pub use error::Error;

pub use algorithms::{
    all_pairs_shortest_paths, bellman_ford, bfs, bfs_tree, bipartition,
    bridges_and_articulation_points, connected_components, depth_first_forest, dfs, dfs_order,
    dijkstra, find_any_cycle, find_cycle, floyd_warshall, has_cycle, kahn, kahn_lexicographic,
    kosaraju, kruskal, minimum_spanning_tree, multi_source_bfs, postorder, prim,
    reverse_postorder, shortest_paths, spfa, strongly_connected_components, tarjan,
    topological_sort, Bfs, BfsTree, BridgesAndArticulation, ClassifiedEdge, Condensation, Dfs,
    DfsForest, DistanceMatrix, EdgeKind, MstAlgorithm, MstResult, SccAlgorithm, SccResult,
    ShortestPathAlgorithm, ShortestPaths, TopoAlgorithm, TopoOrder,
};
pub use config::EngineConfig;
pub use engine::Engine;
pub use graph::{Adjacency, Edge, EdgeId, Graph, GraphBase, IndexedGraph, NodeId, Successors, Weight};
pub use utils::{BitSet, DisjointSet};
