//! Bellman-Ford and SPFA: single-source shortest paths with negative weights.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    algorithms::shortest_path::{relax, Relaxation, ShortestPaths},
    graph::{Graph, NodeId, Weight},
    utils::BitSet,
    Error, Result,
};

/// Bellman-Ford shortest paths; negative weights allowed.
///
/// Runs up to `V - 1` rounds, each relaxing every adjacency entry whose tail
/// is already reachable, and stops early after a round that changed nothing.
/// A final pass then looks for an edge that could still be relaxed: one
/// exists iff a negative cycle is reachable from `source`.
///
/// Negative cycles that cannot be reached from `source` do not affect the result.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `source` is not a vertex
/// - [`Error::NegativeCycleDetected`] if a negative cycle is reachable from `source`,
///   or a distance falls below the smallest value of `W`
///
/// # Complexity
///
/// - Time: O(V·E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphscope::{bellman_ford, Error, Graph, NodeId};
///
/// let graph = Graph::from_edges(3, true, [(0, 1, 4), (0, 2, 5), (2, 1, -3)])?;
/// let paths = bellman_ford(&graph, NodeId::new(0))?;
/// assert_eq!(paths.distance(NodeId::new(1)), Some(2));
///
/// let cycle = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, -1), (2, 0, -1)])?;
/// assert_eq!(bellman_ford(&cycle, NodeId::new(0)), Err(Error::NegativeCycleDetected));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn bellman_ford<W: Weight>(graph: &Graph<W>, source: NodeId) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    let node_count = graph.node_count();
    let mut distances: Vec<Option<W>> = vec![None; node_count];
    let mut predecessors = vec![None; node_count];
    distances[source.index()] = Some(W::zero());

    for round in 1..node_count {
        let mut changed = false;
        for u in graph.node_ids() {
            let Some(from) = distances[u.index()] else {
                continue;
            };
            for entry in graph.adjacency_of(u) {
                let v = entry.target;
                match relax(distances[v.index()], from, entry.weight) {
                    Relaxation::Improved(improved) => {
                        distances[v.index()] = Some(improved);
                        predecessors[v.index()] = Some(u);
                        changed = true;
                    }
                    Relaxation::BelowRange => return Err(below_range(u, v)),
                    Relaxation::Unchanged => {}
                }
            }
        }
        trace!(round, changed, "bellman-ford round complete");
        if !changed {
            break;
        }
    }

    verify(graph, &distances)?;
    Ok(ShortestPaths::new(source, distances, predecessors))
}

/// Shortest Path Faster Algorithm: Bellman-Ford driven by a work queue.
///
/// Only vertices whose distance just improved are re-examined. A vertex sits
/// in the FIFO queue at most once at a time. Each vertex also records the
/// number of edges on its current best path; a simple path has at most
/// `V - 1` edges, so reaching `V` proves a negative cycle and guarantees
/// termination. A final verification pass runs as in [`bellman_ford`].
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `source` is not a vertex
/// - [`Error::NegativeCycleDetected`] if a negative cycle is reachable from `source`
///
/// # Complexity
///
/// - Time: O(V·E) worst case
/// - Space: O(V)
pub fn spfa<W: Weight>(graph: &Graph<W>, source: NodeId) -> Result<ShortestPaths<W>> {
    graph.check_node(source)?;
    let node_count = graph.node_count();
    let mut distances: Vec<Option<W>> = vec![None; node_count];
    let mut predecessors = vec![None; node_count];
    let mut hops = vec![0usize; node_count];
    let mut queued = BitSet::new(node_count);
    let mut queue = VecDeque::new();

    distances[source.index()] = Some(W::zero());
    queued.insert(source.index());
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        queued.remove(u.index());
        let Some(from) = distances[u.index()] else {
            continue;
        };
        for entry in graph.adjacency_of(u) {
            let v = entry.target;
            let improved = match relax(distances[v.index()], from, entry.weight) {
                Relaxation::Improved(improved) => improved,
                Relaxation::BelowRange => return Err(below_range(u, v)),
                Relaxation::Unchanged => continue,
            };
            distances[v.index()] = Some(improved);
            predecessors[v.index()] = Some(u);
            hops[v.index()] = hops[u.index()] + 1;
            if hops[v.index()] >= node_count {
                debug!(vertex = %v, hops = hops[v.index()], "negative cycle detected by spfa");
                return Err(Error::NegativeCycleDetected);
            }
            if queued.insert(v.index()) {
                queue.push_back(v);
            }
        }
    }

    verify(graph, &distances)?;
    Ok(ShortestPaths::new(source, distances, predecessors))
}

/// Fails if any edge leaving a reachable vertex can still be relaxed.
fn verify<W: Weight>(graph: &Graph<W>, distances: &[Option<W>]) -> Result<()> {
    for u in graph.node_ids() {
        let Some(from) = distances[u.index()] else {
            continue;
        };
        for entry in graph.adjacency_of(u) {
            let outcome = relax(distances[entry.target.index()], from, entry.weight);
            if outcome != Relaxation::Unchanged {
                debug!(
                    from = %u,
                    to = %entry.target,
                    edge = %entry.edge,
                    "negative cycle detected"
                );
                return Err(Error::NegativeCycleDetected);
            }
        }
    }
    Ok(())
}

/// Reports a relaxation whose sum fell below the range of `W`.
fn below_range(from: NodeId, to: NodeId) -> Error {
    debug!(%from, %to, "distance fell below the weight range");
    Error::NegativeCycleDetected
}
