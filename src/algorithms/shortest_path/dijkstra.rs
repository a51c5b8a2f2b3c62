//! Dijkstra's single-source shortest paths over non-negative weights.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::{
    algorithms::shortest_path::{relax, Relaxation, ShortestPaths},
    graph::{Graph, NodeId, Weight},
    utils::MinScored,
    Result,
};

/// Dijkstra's algorithm with a binary min-heap.
///
/// Tentative distances are pushed onto the heap every time they improve;
/// entries that are worse than the vertex's current best when popped are
/// stale and skipped. Every vertex is therefore expanded once.
///
/// The O(E) weight-sign scan runs before the search. Use
/// [`Engine`](crate::Engine) with [`EngineConfig::trusted`](crate::EngineConfig::trusted)
/// to skip it when weights are known to be non-negative.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source` is not a vertex
/// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) if any edge weight
///   is negative
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the lazy-deletion heap
pub fn dijkstra<W: Weight>(graph: &Graph<W>, source: NodeId) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    if let Some(edge) = graph.find_negative_edge() {
        debug!(edge = %edge.id, weight = ?edge.weight, "dijkstra rejected: negative edge weight");
        return Err(precondition_error!(
            "dijkstra requires non-negative weights, edge {} ({} -> {}) weighs {:?}",
            edge.id,
            edge.source,
            edge.target,
            edge.weight
        ));
    }
    dijkstra_unchecked(graph, source)
}

/// Dijkstra without the weight-sign scan. Negative weights give unspecified distances.
pub(crate) fn dijkstra_unchecked<W: Weight>(
    graph: &Graph<W>,
    source: NodeId,
) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    let node_count = graph.node_count();
    let mut distances: Vec<Option<W>> = vec![None; node_count];
    let mut predecessors = vec![None; node_count];
    let mut heap = BinaryHeap::new();

    distances[source.index()] = Some(W::zero());
    heap.push(MinScored(W::zero(), source));

    while let Some(MinScored(distance, u)) = heap.pop() {
        if distances[u.index()].is_some_and(|best| distance > best) {
            continue;
        }
        for entry in graph.adjacency_of(u) {
            let v = entry.target;
            if let Relaxation::Improved(improved) = relax(distances[v.index()], distance, entry.weight) {
                distances[v.index()] = Some(improved);
                predecessors[v.index()] = Some(u);
                heap.push(MinScored(improved, v));
            }
        }
    }

    Ok(ShortestPaths::new(source, distances, predecessors))
}
