//! Floyd-Warshall all-pairs shortest paths and the distance matrix it fills.

use tracing::debug;

use crate::{
    graph::{Graph, NodeId, Weight},
    Error, Result,
};

/// All-pairs shortest distances with next-hop path reconstruction.
///
/// Produced by [`floyd_warshall`]. Cells are stored row-major; `None` means
/// the target is unreachable from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    size: usize,
    distances: Vec<Option<W>>,
    /// First vertex after `i` on a shortest `i -> j` path
    next: Vec<Option<NodeId>>,
}

impl<W: Copy> DistanceMatrix<W> {
    /// Returns the number of vertices (rows and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, from: NodeId, to: NodeId) -> Option<usize> {
        (from.index() < self.size && to.index() < self.size)
            .then(|| from.index() * self.size + to.index())
    }

    /// Returns the shortest distance from `from` to `to`.
    ///
    /// `None` if `to` is unreachable from `from` or either vertex is out of range.
    #[must_use]
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<W> {
        self.distances[self.cell(from, to)?]
    }

    /// Returns `true` if `to` is reachable from `from`.
    #[must_use]
    pub fn is_reachable(&self, from: NodeId, to: NodeId) -> bool {
        self.distance(from, to).is_some()
    }

    /// Returns the distances from `from` to every vertex.
    #[must_use]
    pub fn row(&self, from: NodeId) -> Option<&[Option<W>]> {
        let start = from.index().checked_mul(self.size)?;
        (from.index() < self.size).then(|| &self.distances[start..start + self.size])
    }

    /// Returns the next vertex after `from` on a shortest path to `to`.
    #[must_use]
    pub fn next_hop(&self, from: NodeId, to: NodeId) -> Option<NodeId> {
        self.next[self.cell(from, to)?]
    }

    /// Returns the vertices of a shortest path from `from` to `to`, both included.
    ///
    /// `None` if `to` is unreachable from `from`.
    #[must_use]
    pub fn path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        self.distance(from, to)?;
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next_hop(current, to)?;
            path.push(current);
            if path.len() > self.size {
                return None;
            }
        }
        Some(path)
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Initialises `dist[i][i] = 0` and `dist[u][v]` to the lightest `u -> v`
/// edge, then for every intermediate vertex `k` in index order tries
/// `dist[i][k] + dist[k][j]`. The sum is skipped when either operand is
/// unreachable and when it overflows upwards, so no sentinel value is ever
/// added. A negative cycle exists iff some `dist[i][i]` ends up negative.
/// A sum below the smallest value of `W` stops the run: no distance matrix
/// can hold it.
///
/// Negative weights are allowed. A negative self-loop is a negative cycle,
/// as is any negative edge of an undirected graph.
///
/// # Errors
///
/// Returns [`Error::NegativeCycleDetected`] if the graph contains a negative cycle,
/// or a distance falls below the smallest value of `W`.
///
/// # Complexity
///
/// - Time: O(V³)
/// - Space: O(V²)
///
/// # Examples
///
/// ```rust
/// use graphscope::{floyd_warshall, Graph, NodeId};
///
/// let graph = Graph::from_edges(4, true, [(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)])?;
/// let matrix = floyd_warshall(&graph)?;
///
/// let n = NodeId::new;
/// assert_eq!(matrix.distance(n(0), n(3)), Some(9));
/// assert_eq!(matrix.distance(n(3), n(0)), None);
/// assert_eq!(matrix.path(n(0), n(3)), Some(vec![n(0), n(1), n(2), n(3)]));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn floyd_warshall<W: Weight>(graph: &Graph<W>) -> Result<DistanceMatrix<W>> {
    let size = graph.node_count();
    debug!(
        vertices = size,
        edges = graph.edge_count(),
        "computing all-pairs shortest paths"
    );

    let mut distances: Vec<Option<W>> = vec![None; size * size];
    let mut next: Vec<Option<NodeId>> = vec![None; size * size];

    for i in graph.node_ids() {
        let cell = i.index() * size + i.index();
        distances[cell] = Some(W::zero());
        next[cell] = Some(i);
    }
    for u in graph.node_ids() {
        for entry in graph.adjacency_of(u) {
            let cell = u.index() * size + entry.target.index();
            if distances[cell].map_or(true, |current| entry.weight < current) {
                distances[cell] = Some(entry.weight);
                next[cell] = Some(entry.target);
            }
        }
    }

    for k in 0..size {
        for i in 0..size {
            let Some(to_k) = distances[i * size + k] else {
                continue;
            };
            for j in 0..size {
                let Some(from_k) = distances[k * size + j] else {
                    continue;
                };
                let Some(through) = to_k.checked_sum(from_k) else {
                    if to_k.sum_underflows(from_k) {
                        debug!(from = i, via = k, to = j, "distance fell below the weight range");
                        return Err(Error::NegativeCycleDetected);
                    }
                    continue;
                };
                let cell = i * size + j;
                if distances[cell].map_or(true, |current| through < current) {
                    distances[cell] = Some(through);
                    next[cell] = next[i * size + k];
                }
            }
        }
    }

    if let Some(vertex) =
        (0..size).find(|&i| distances[i * size + i].is_some_and(|d| d.is_negative()))
    {
        debug!(vertex, "negative cycle detected by floyd-warshall");
        return Err(Error::NegativeCycleDetected);
    }

    Ok(DistanceMatrix {
        size,
        distances,
        next,
    })
}

/// All-pairs shortest paths; the Floyd-Warshall entry point.
///
/// # Errors
///
/// Returns [`Error::NegativeCycleDetected`] if the graph contains a negative cycle.
pub fn all_pairs_shortest_paths<W: Weight>(graph: &Graph<W>) -> Result<DistanceMatrix<W>> {
    floyd_warshall(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::shortest_path::dijkstra;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    fn create_sample_graph() -> Graph<i64> {
        Graph::from_edges(4, true, [(0, 1, 5), (0, 3, 10), (1, 2, 3), (2, 3, 1)]).unwrap()
    }

    #[test]
    fn test_sample_distances() {
        let matrix = floyd_warshall(&create_sample_graph()).unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(
            matrix.row(n(0)).unwrap(),
            &[Some(0), Some(5), Some(8), Some(9)]
        );
        assert_eq!(matrix.row(n(3)).unwrap(), &[None, None, None, Some(0)]);
        assert_eq!(matrix.row(n(4)), None);
        assert_eq!(matrix.distance(n(0), n(7)), None);
        assert_eq!(matrix.next_hop(n(0), n(3)), Some(n(1)));
    }

    #[test]
    fn test_unreachable_sentinel_never_added() {
        // (i32::MAX - 1) + 5 is not representable
        let graph: Graph<i32> =
            Graph::from_edges(3, true, [(0, 1, i32::MAX - 1), (1, 2, 5)]).unwrap();
        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix.distance(n(0), n(1)), Some(i32::MAX - 1));
        assert_eq!(matrix.distance(n(0), n(2)), None);
        assert_eq!(matrix.distance(n(2), n(0)), None);
    }

    #[test]
    fn test_parallel_edges_keep_minimum() {
        let graph: Graph<i64> = Graph::from_edges(2, true, [(0, 1, 7), (0, 1, 2), (0, 1, 4)]).unwrap();
        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix.distance(n(0), n(1)), Some(2));
    }

    #[test]
    fn test_positive_self_loop_keeps_zero_diagonal() {
        let graph: Graph<i64> = Graph::from_edges(1, true, [(0, 0, 3)]).unwrap();
        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix.distance(n(0), n(0)), Some(0));
        assert_eq!(matrix.path(n(0), n(0)), Some(vec![n(0)]));
    }

    #[test]
    fn test_negative_cycle() {
        let graph: Graph<i64> =
            Graph::from_edges(3, true, [(0, 1, 1), (1, 2, -1), (2, 0, -1)]).unwrap();
        assert_eq!(floyd_warshall(&graph), Err(Error::NegativeCycleDetected));

        let looped: Graph<i64> = Graph::from_edges(2, true, [(1, 1, -2)]).unwrap();
        assert_eq!(all_pairs_shortest_paths(&looped), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn test_negative_cycle_past_weight_range() {
        // dist[0][0] would need -200, which an i8 cannot hold
        let narrow: Graph<i8> = Graph::from_edges(2, true, [(0, 1, -100), (1, 0, -100)]).unwrap();
        assert_eq!(floyd_warshall(&narrow), Err(Error::NegativeCycleDetected));

        let wide: Graph<i64> =
            Graph::from_edges(2, true, [(0, 1, i64::MIN / 2 - 1), (1, 0, i64::MIN / 2)]).unwrap();
        assert_eq!(floyd_warshall(&wide), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn test_negative_edges_without_cycle() {
        let graph: Graph<i64> =
            Graph::from_edges(3, true, [(0, 1, 4), (0, 2, 5), (2, 1, -3)]).unwrap();
        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix.distance(n(0), n(1)), Some(2));
        assert_eq!(matrix.path(n(0), n(1)), Some(vec![n(0), n(2), n(1)]));
    }

    #[test]
    fn test_rows_match_dijkstra() {
        let graph: Graph<u32> = Graph::from_edges(
            6,
            false,
            [(0, 1, 7), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)],
        )
        .unwrap();
        let matrix = floyd_warshall(&graph).unwrap();
        for source in graph.node_ids() {
            let single = dijkstra(&graph, source).unwrap();
            assert_eq!(matrix.row(source).unwrap(), single.distances());
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<i64> = Graph::directed(0);
        let matrix = floyd_warshall(&graph).unwrap();
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.distance(n(0), n(0)), None);
    }
}
