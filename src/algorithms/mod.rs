//! Graph algorithms.
//!
//! Every algorithm is a free function taking the graph by shared reference
//! and returning an owned result. Working storage (distance arrays, heaps,
//! disjoint sets, DFS frames) lives only for the duration of the call, so
//! any number of algorithms may run against the same graph concurrently.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`], [`bfs_tree`], [`multi_source_bfs`] - Breadth-first search
//! - [`dfs`], [`postorder`], [`reverse_postorder`] - Depth-first search
//! - [`depth_first_forest`] - Timestamps and edge classification over all vertices
//!
//! ## Connectivity
//!
//! - [`strongly_connected_components`] - Tarjan or Kosaraju, see [`SccAlgorithm`]
//! - [`bridges_and_articulation_points`] - Cut edges and cut vertices
//! - [`connected_components`], [`bipartition`]
//!
//! ## Shortest Paths
//!
//! - [`shortest_paths`] - Dijkstra, Bellman-Ford or SPFA, see [`ShortestPathAlgorithm`]
//! - [`all_pairs_shortest_paths`] - Floyd-Warshall
//!
//! ## Spanning Trees and Orders
//!
//! - [`minimum_spanning_tree`] - Kruskal or Prim, see [`MstAlgorithm`]
//! - [`topological_sort`] - Kahn, lexicographic Kahn or DFS, see [`TopoAlgorithm`]
//! - [`has_cycle`], [`find_cycle`], [`find_any_cycle`]
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Precondition |
//! |-----------|-----------------|--------------|
//! | BFS / DFS / topological sort | O(V + E) | topological sort: directed |
//! | Tarjan / Kosaraju | O(V + E) | none |
//! | Bridges and articulation points | O(V + E) | undirected |
//! | Dijkstra | O((V + E) log V) | non-negative weights |
//! | Bellman-Ford / SPFA | O(V·E) | none |
//! | Floyd-Warshall | O(V³) | none |
//! | Kruskal | O(E log E) | undirected |
//! | Prim | O(E log V) | undirected |
//!
//! All depth-first algorithms keep an explicit stack. Stack depth never
//! depends on the size of the graph.

mod connectivity;
mod cycles;
mod dfs;
mod mst;
mod scc;
mod shortest_path;
mod topological;
mod traversal;

pub use connectivity::{
    bipartition, bridges_and_articulation_points, connected_components, BridgesAndArticulation,
};
pub use cycles::{find_any_cycle, find_cycle, has_cycle};
pub use dfs::{depth_first_forest, ClassifiedEdge, DfsForest, EdgeKind};
pub use mst::{kruskal, minimum_spanning_tree, prim, MstAlgorithm, MstResult};
pub use scc::{kosaraju, strongly_connected_components, tarjan, Condensation, SccAlgorithm, SccResult};
pub use shortest_path::{
    all_pairs_shortest_paths, bellman_ford, dijkstra, floyd_warshall, shortest_paths, spfa,
    DistanceMatrix, ShortestPathAlgorithm, ShortestPaths,
};
pub use topological::{
    dfs_order, kahn, kahn_lexicographic, topological_sort, TopoAlgorithm, TopoOrder,
};
pub use traversal::{
    bfs, bfs_tree, dfs, multi_source_bfs, postorder, reverse_postorder, Bfs, BfsTree, Dfs,
};

pub(crate) use shortest_path::run as run_shortest_paths;

use crate::{
    graph::{GraphBase, NodeId},
    Error, Result,
};

/// Validates `node` against any graph implementing [`GraphBase`].
pub(crate) fn check_node<G: GraphBase>(graph: &G, node: NodeId) -> Result<()> {
    if node.index() < graph.node_count() {
        Ok(())
    } else {
        Err(Error::out_of_range(node.index(), graph.node_count()))
    }
}
