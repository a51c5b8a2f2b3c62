//! Minimum spanning trees of undirected graphs.
//!
//! - [`kruskal`] - Sort edges by weight, keep each one that joins two
//!   components (union-find). Disconnected input yields a minimum spanning forest.
//! - [`prim`] - Grow one tree from vertex 0 with a min-heap of crossing edges.
//!   Disconnected input yields the minimum spanning tree of vertex 0's component.
//!
//! On a connected graph both return a minimum spanning tree with the same
//! total weight; with tied weights the chosen edges may differ.
//! [`MstResult::is_spanning_tree`] tells a tree from a forest or partial tree.

use std::collections::BinaryHeap;

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{
    graph::{compare_weights, EdgeId, Graph, NodeId, Weight},
    utils::{BitSet, DisjointSet, MinScored},
    Result,
};

/// Minimum spanning tree algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum MstAlgorithm {
    /// Sorted edges plus union-find; spanning forest on disconnected graphs
    #[default]
    Kruskal,
    /// Heap-driven growth from vertex 0
    Prim,
}

/// Edges of a minimum spanning tree (or forest) and their total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<W> {
    /// Chosen edges as `(smaller, larger, weight)`, in the order they were chosen
    pub edges: Vec<(NodeId, NodeId, W)>,
    /// Sum of the chosen weights; zero for no edges
    pub total_weight: W,
}

impl<W: Weight> MstResult<W> {
    fn empty() -> Self {
        MstResult {
            edges: Vec::new(),
            total_weight: W::zero(),
        }
    }

    fn push(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<()> {
        self.total_weight = self
            .total_weight
            .checked_sum(weight)
            .ok_or_else(|| precondition_error!("spanning tree weight is not representable"))?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.edges.push((lo, hi, weight));
        Ok(())
    }

    /// Returns `true` if the edges connect all `node_count` vertices.
    #[must_use]
    pub fn is_spanning_tree(&self, node_count: usize) -> bool {
        self.edges.len() + 1 == node_count.max(1)
    }

    /// Returns the number of chosen edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Computes a minimum spanning tree with the selected algorithm.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) if the graph
///   is directed, or if the total weight overflows `W`
///
/// # Examples
///
/// ```rust
/// use graphscope::{minimum_spanning_tree, Graph, MstAlgorithm};
///
/// let graph = Graph::from_edges(4, false, [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)])?;
///
/// let kruskal = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal)?;
/// let prim = minimum_spanning_tree(&graph, MstAlgorithm::Prim)?;
/// assert_eq!(kruskal.total_weight, 19);
/// assert_eq!(prim.total_weight, 19);
/// assert!(kruskal.is_spanning_tree(graph.node_count()));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn minimum_spanning_tree<W: Weight>(graph: &Graph<W>, algorithm: MstAlgorithm) -> Result<MstResult<W>> {
    debug!(
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        algorithm = %algorithm,
        "computing minimum spanning tree"
    );
    match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim => prim(graph),
    }
}

fn require_undirected<W: Copy>(graph: &Graph<W>) -> Result<()> {
    if graph.is_directed() {
        debug!("spanning tree rejected: graph is directed");
        Err(precondition_error!(
            "minimum spanning tree requires an undirected graph"
        ))
    } else {
        Ok(())
    }
}

/// Kruskal's algorithm.
///
/// Logical edges are stably sorted by weight, so equal weights keep insertion
/// order. Each edge whose endpoints lie in different union-find sets is kept.
/// The scan stops once `V - 1` edges are chosen or the edges run out; in the
/// latter case the result is a minimum spanning forest. Self-loops are never chosen.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) if the graph
///   is directed, or if the total weight overflows `W`
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
pub fn kruskal<W: Weight>(graph: &Graph<W>) -> Result<MstResult<W>> {
    require_undirected(graph)?;
    let node_count = graph.node_count();
    let target = node_count.saturating_sub(1);

    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|a, b| compare_weights(&a.weight, &b.weight));

    let mut sets = DisjointSet::new(node_count);
    let mut result = MstResult::empty();
    for edge in edges {
        if result.edges.len() == target {
            break;
        }
        if sets.union(edge.source.index(), edge.target.index()) {
            result.push(edge.source, edge.target, edge.weight)?;
        }
    }
    Ok(result)
}

/// Prim's algorithm from vertex 0.
///
/// A min-heap holds edges leaving the tree, ties broken by edge insertion
/// order. Entries whose far end has joined the tree in the meantime are
/// stale and skipped. Stops at `V - 1` edges or when the heap empties, which
/// on a disconnected graph leaves only vertex 0's component spanned.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) if the graph
///   is directed, or if the total weight overflows `W`
///
/// # Complexity
///
/// - Time: O(E log V)
/// - Space: O(V + E)
pub fn prim<W: Weight>(graph: &Graph<W>) -> Result<MstResult<W>> {
    require_undirected(graph)?;
    let node_count = graph.node_count();
    let mut result = MstResult::empty();
    if node_count == 0 {
        return Ok(result);
    }

    let mut in_tree = BitSet::new(node_count);
    let mut heap: BinaryHeap<MinScored<W, (EdgeId, NodeId, NodeId)>> = BinaryHeap::new();
    let start = NodeId::new(0);

    in_tree.insert(start.index());
    for entry in graph.adjacency_of(start) {
        heap.push(MinScored(entry.weight, (entry.edge, start, entry.target)));
    }

    while result.edges.len() + 1 < node_count {
        let Some(MinScored(weight, (_, from, to))) = heap.pop() else {
            break;
        };
        if !in_tree.insert(to.index()) {
            continue;
        }
        result.push(from, to, weight)?;
        for entry in graph.adjacency_of(to) {
            if !in_tree.contains(entry.target.index()) {
                heap.push(MinScored(entry.weight, (entry.edge, to, entry.target)));
            }
        }
    }

    Ok(result)
}
