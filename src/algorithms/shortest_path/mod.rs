//! Single-source and all-pairs shortest paths.
//!
//! # Algorithms
//!
//! | Algorithm | Weights | Time | Entry point |
//! |-----------|---------|------|-------------|
//! | Dijkstra | non-negative | O((V + E) log V) | [`dijkstra`] |
//! | Bellman-Ford | any | O(V·E) | [`bellman_ford`] |
//! | SPFA | any | O(V·E) worst case, usually far less | [`spfa`] |
//! | Floyd-Warshall | any | O(V³) | [`floyd_warshall`] |
//!
//! [`shortest_paths`] selects one of the single-source algorithms with a
//! [`ShortestPathAlgorithm`]; [`all_pairs_shortest_paths`] runs Floyd-Warshall.
//!
//! # Unreachable Vertices and Overflow
//!
//! Distances are `Option<W>`: `None` means unreachable, so no "infinity"
//! sentinel ever takes part in arithmetic. Every relaxation adds with
//! [`Weight::checked_sum`]; a sum that overflows does not relax.
//!
//! # Negative Cycles
//!
//! Bellman-Ford and SPFA report [`Error::NegativeCycleDetected`](crate::Error::NegativeCycleDetected)
//! when a negative cycle is reachable from the source. Floyd-Warshall reports
//! it when any negative cycle exists. On an undirected graph a single negative
//! edge already forms a negative cycle (walk it back and forth).

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::{bellman_ford, spfa};
pub use dijkstra::dijkstra;
pub(crate) use dijkstra::dijkstra_unchecked;
pub use floyd_warshall::{all_pairs_shortest_paths, floyd_warshall, DistanceMatrix};

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{
    graph::{Graph, NodeId, Weight},
    utils::BitSet,
    Result,
};

/// Single-source shortest path algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum ShortestPathAlgorithm {
    /// Binary-heap Dijkstra; requires non-negative weights
    #[default]
    Dijkstra,
    /// Round-based relaxation of every edge
    BellmanFord,
    /// Queue-based Bellman-Ford (Shortest Path Faster Algorithm)
    Spfa,
}

/// Shortest distances and a shortest-path tree from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: NodeId,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<NodeId>>,
    reachable: BitSet,
}

impl<W: Copy> ShortestPaths<W> {
    pub(crate) fn new(
        source: NodeId,
        distances: Vec<Option<W>>,
        predecessors: Vec<Option<NodeId>>,
    ) -> Self {
        let mut reachable = BitSet::new(distances.len());
        for (index, distance) in distances.iter().enumerate() {
            if distance.is_some() {
                reachable.insert(index);
            }
        }
        ShortestPaths {
            source,
            distances,
            predecessors,
            reachable,
        }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the shortest distance to `node`, or `None` if it is unreachable.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Returns the distance of every vertex, indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[Option<W>] {
        &self.distances
    }

    /// Returns the vertex preceding `node` on a shortest path from the source.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.reachable.contains_node(node)
    }

    /// Returns the set of reachable vertices, the source included.
    #[must_use]
    pub fn reachable(&self) -> &BitSet {
        &self.reachable
    }

    /// Returns the vertices of a shortest path from the source to `node`, both included.
    ///
    /// Returns `None` if `node` is unreachable.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(node) {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.distances.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Computes shortest paths from `source` with the selected algorithm.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source` is not a vertex
/// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) for Dijkstra on a
///   graph with a negative weight
/// - [`Error::NegativeCycleDetected`](crate::Error::NegativeCycleDetected) for Bellman-Ford
///   and SPFA when a negative cycle is reachable from `source`
///
/// # Examples
///
/// ```rust
/// use graphscope::{shortest_paths, Graph, NodeId, ShortestPathAlgorithm};
///
/// let graph = Graph::from_edges(4, true, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 5)])?;
/// let paths = shortest_paths(&graph, NodeId::new(0), ShortestPathAlgorithm::Dijkstra)?;
///
/// assert_eq!(paths.distance(NodeId::new(1)), Some(3));
/// assert_eq!(paths.distance(NodeId::new(3)), Some(8));
/// let route: Vec<usize> = paths.path_to(NodeId::new(3)).unwrap().into_iter().map(NodeId::index).collect();
/// assert_eq!(route, vec![0, 2, 1, 3]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn shortest_paths<W: Weight>(
    graph: &Graph<W>,
    source: NodeId,
    algorithm: ShortestPathAlgorithm,
) -> Result<ShortestPaths<W>> {
    run(graph, source, algorithm, true)
}

/// Dispatches to a single-source algorithm, optionally skipping the weight-sign scan.
pub(crate) fn run<W: Weight>(
    graph: &Graph<W>,
    source: NodeId,
    algorithm: ShortestPathAlgorithm,
    check_preconditions: bool,
) -> Result<ShortestPaths<W>> {
    debug!(
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        %source,
        algorithm = %algorithm,
        "computing single-source shortest paths"
    );
    match algorithm {
        ShortestPathAlgorithm::Dijkstra if check_preconditions => dijkstra(graph, source),
        ShortestPathAlgorithm::Dijkstra => dijkstra_unchecked(graph, source),
        ShortestPathAlgorithm::BellmanFord => bellman_ford(graph, source),
        ShortestPathAlgorithm::Spfa => spfa(graph, source),
    }
}

/// Outcome of relaxing one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relaxation<W> {
    /// The edge gives a shorter distance
    Improved(W),
    /// The edge gives no improvement, or its sum overflows upwards
    Unchanged,
    /// The sum falls below the smallest value of `W`
    BelowRange,
}

/// Relaxes the edge `u -> v` of weight `weight` given `dist[u]`.
///
/// A sum below the range of `W` is smaller than every stored distance, so it
/// always improves; since it cannot be stored it comes back as
/// [`Relaxation::BelowRange`].
#[inline]
pub(crate) fn relax<W: Weight>(current: Option<W>, from: W, weight: W) -> Relaxation<W> {
    let Some(candidate) = from.checked_sum(weight) else {
        return if from.sum_underflows(weight) {
            Relaxation::BelowRange
        } else {
            Relaxation::Unchanged
        };
    };
    match current {
        Some(best) if candidate >= best => Relaxation::Unchanged,
        _ => Relaxation::Improved(candidate),
    }
}
