//! Breadth-first and depth-first traversal.
//!
//! # Algorithms
//!
//! - [`bfs`] - Lazy breadth-first iterator
//! - [`bfs_tree`] - Breadth-first search recording hop distances and parents
//! - [`multi_source_bfs`] - Breadth-first search seeded from several vertices at once
//! - [`dfs`] - Lazy depth-first iterator (pre-order)
//! - [`postorder`] - Depth-first post-order
//! - [`reverse_postorder`] - Reverse post-order (a topological order on a DAG)
//!
//! All traversals use an explicit queue or stack; none of them recurse.
//! Neighbours are explored in the order reported by [`Successors::successors`],
//! so the visitation order is deterministic.

use std::collections::VecDeque;

use crate::{
    algorithms::check_node,
    graph::{NodeId, Successors},
    utils::BitSet,
    Result,
};

/// Breadth-first iterator over the vertices reachable from a source.
///
/// Created by [`bfs`]. Every vertex is enqueued at most once.
pub struct Bfs<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    discovered: BitSet,
}

impl<G: Successors> Iterator for Bfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.queue.pop_front()?;
        for next in self.graph.successors(node) {
            if self.discovered.insert(next.index()) {
                self.queue.push_back(next);
            }
        }
        Some(node)
    }
}

/// Returns a breadth-first iterator starting at `source`.
///
/// Vertices are yielded in order of non-decreasing hop distance from the source.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source`
/// is not a vertex of the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{bfs, Graph, NodeId};
///
/// let graph = Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])?;
/// let order: Vec<usize> = bfs(&graph, NodeId::new(0))?.map(NodeId::index).collect();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn bfs<G: Successors>(graph: &G, source: NodeId) -> Result<Bfs<'_, G>> {
    check_node(graph, source)?;
    let mut discovered = BitSet::new(graph.node_count());
    discovered.insert(source.index());
    Ok(Bfs {
        graph,
        queue: VecDeque::from([source]),
        discovered,
    })
}

/// Result of a breadth-first search: visitation order, hop distances and the BFS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    /// Vertices in the order they were dequeued
    pub order: Vec<NodeId>,
    /// Hop count from the nearest source, `None` for unreached vertices
    pub distance: Vec<Option<usize>>,
    /// Vertex each vertex was discovered from; `None` for sources and unreached vertices
    pub parent: Vec<Option<NodeId>>,
}

impl BfsTree {
    /// Returns the hop distance of `node`, or `None` if it was not reached.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<usize> {
        self.distance.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` was reached.
    #[must_use]
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Returns the BFS tree parent of `node`.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    /// Returns a fewest-hops path from a source to `node`, source first.
    ///
    /// Returns `None` if `node` was not reached.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.distance(node)?;
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Groups the visitation order by hop distance.
    ///
    /// `layers()[d]` holds the vertices at distance `d`, in visitation order.
    #[must_use]
    pub fn layers(&self) -> Vec<Vec<NodeId>> {
        let mut layers: Vec<Vec<NodeId>> = Vec::new();
        for &node in &self.order {
            let Some(depth) = self.distance(node) else {
                continue;
            };
            if layers.len() <= depth {
                layers.resize_with(depth + 1, Vec::new);
            }
            layers[depth].push(node);
        }
        layers
    }
}

/// Runs a breadth-first search from `source` and records the BFS tree.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source`
/// is not a vertex of the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{bfs_tree, Graph, NodeId};
///
/// // 0 - 1 - 2, and an isolated 3
/// let graph = Graph::from_edges(4, false, [(0, 1, 1), (1, 2, 1)])?;
/// let tree = bfs_tree(&graph, NodeId::new(0))?;
///
/// assert_eq!(tree.distance(NodeId::new(2)), Some(2));
/// assert_eq!(tree.distance(NodeId::new(3)), None);
/// assert_eq!(tree.path_to(NodeId::new(2)).unwrap().len(), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn bfs_tree<G: Successors>(graph: &G, source: NodeId) -> Result<BfsTree> {
    multi_source_bfs(graph, [source])
}

/// Runs a breadth-first search seeded with every vertex in `sources` at distance 0.
///
/// Each vertex ends up with its hop distance to the nearest source. Duplicate
/// sources are ignored.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if any source
/// is not a vertex of the graph. Sources are validated before the search starts.
pub fn multi_source_bfs<G, I>(graph: &G, sources: I) -> Result<BfsTree>
where
    G: Successors,
    I: IntoIterator<Item = NodeId>,
{
    let node_count = graph.node_count();
    let mut distance = vec![None; node_count];
    let mut parent = vec![None; node_count];
    let mut queue = VecDeque::new();

    let sources: Vec<NodeId> = sources.into_iter().collect();
    for &source in &sources {
        check_node(graph, source)?;
    }
    for source in sources {
        if distance[source.index()].is_none() {
            distance[source.index()] = Some(0);
            queue.push_back(source);
        }
    }

    let mut order = Vec::new();
    while let Some(node) = queue.pop_front() {
        order.push(node);
        let next_depth = distance[node.index()].map_or(0, |d| d + 1);
        for next in graph.successors(node) {
            if distance[next.index()].is_none() {
                distance[next.index()] = Some(next_depth);
                parent[next.index()] = Some(node);
                queue.push_back(next);
            }
        }
    }

    Ok(BfsTree {
        order,
        distance,
        parent,
    })
}

/// Depth-first pre-order iterator over the vertices reachable from a source.
///
/// Created by [`dfs`]. A vertex is yielded the first time it is popped from
/// the explicit stack, which matches the order a recursive DFS would visit.
pub struct Dfs<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: BitSet,
}

impl<G: Successors> Iterator for Dfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        while let Some(node) = self.stack.pop() {
            if !self.visited.insert(node.index()) {
                continue;
            }
            // reversed so the first successor is explored first
            let successors: Vec<NodeId> = self.graph.successors(node).collect();
            self.stack.extend(
                successors
                    .into_iter()
                    .rev()
                    .filter(|s| !self.visited.contains(s.index())),
            );
            return Some(node);
        }
        None
    }
}

/// Returns a depth-first pre-order iterator starting at `source`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source`
/// is not a vertex of the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{dfs, Graph, NodeId};
///
/// let graph = Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])?;
/// let order: Vec<usize> = dfs(&graph, NodeId::new(0))?.map(NodeId::index).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, source: NodeId) -> Result<Dfs<'_, G>> {
    check_node(graph, source)?;
    Ok(Dfs {
        graph,
        stack: vec![source],
        visited: BitSet::new(graph.node_count()),
    })
}

/// Returns the vertices reachable from `source` in depth-first post-order.
///
/// A vertex appears after every vertex first discovered through it.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source`
/// is not a vertex of the graph.
pub fn postorder<G: Successors>(graph: &G, source: NodeId) -> Result<Vec<NodeId>> {
    check_node(graph, source)?;
    let mut visited = BitSet::new(graph.node_count());
    let mut order = Vec::new();
    postorder_from(graph, source, &mut visited, &mut order);
    Ok(order)
}

/// Returns the vertices reachable from `source` in reverse post-order.
///
/// On a DAG this is a topological order of the reachable subgraph.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `source`
/// is not a vertex of the graph.
pub fn reverse_postorder<G: Successors>(graph: &G, source: NodeId) -> Result<Vec<NodeId>> {
    let mut order = postorder(graph, source)?;
    order.reverse();
    Ok(order)
}

/// Appends the post-order of the unvisited part reachable from `start` to `order`.
///
/// Shared by [`postorder`] and the first pass of Kosaraju, which runs it from
/// every vertex with one `visited` set.
pub(crate) fn postorder_from<G: Successors>(
    graph: &G,
    start: NodeId,
    visited: &mut BitSet,
    order: &mut Vec<NodeId>,
) {
    if !visited.insert(start.index()) {
        return;
    }

    let mut stack = vec![(start, graph.successors(start))];
    while let Some((node, successors)) = stack.last_mut() {
        let node = *node;
        match successors.find(|next| !visited.contains(next.index())) {
            Some(next) => {
                visited.insert(next.index());
                stack.push((next, graph.successors(next)));
            }
            None => {
                order.push(node);
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Graph};

    fn create_linear_graph() -> Graph<i64> {
        Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)]).unwrap()
    }

    fn create_diamond_graph() -> Graph<i64> {
        Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap()
    }

    fn create_cyclic_graph() -> Graph<i64> {
        // 0 -> 1 -> 2 -> 0, 2 -> 3
        Graph::from_edges(4, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 1)]).unwrap()
    }

    fn ids(nodes: &[usize]) -> Vec<NodeId> {
        nodes.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_bfs_order() {
        let graph = create_diamond_graph();
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).unwrap().collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_unreachable_not_visited() {
        let graph = create_linear_graph();
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(1)).unwrap().collect();
        assert_eq!(order, ids(&[1, 2]));
    }

    #[test]
    fn test_bfs_invalid_source() {
        let graph = create_linear_graph();
        assert!(matches!(
            bfs(&graph, NodeId::new(3)),
            Err(Error::IndexOutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_bfs_tree_distances_and_parents() {
        let graph = create_diamond_graph();
        let tree = bfs_tree(&graph, NodeId::new(0)).unwrap();
        assert_eq!(tree.distance, vec![Some(0), Some(1), Some(1), Some(2)]);
        assert_eq!(tree.parent(NodeId::new(3)), Some(NodeId::new(1)));
        assert_eq!(tree.parent(NodeId::new(0)), None);
        assert_eq!(tree.path_to(NodeId::new(3)).unwrap(), ids(&[0, 1, 3]));
        assert_eq!(
            tree.layers(),
            vec![ids(&[0]), ids(&[1, 2]), ids(&[3])]
        );
    }

    #[test]
    fn test_bfs_tree_unreached() {
        let graph = create_linear_graph();
        let tree = bfs_tree(&graph, NodeId::new(2)).unwrap();
        assert!(tree.is_reached(NodeId::new(2)));
        assert!(!tree.is_reached(NodeId::new(0)));
        assert_eq!(tree.path_to(NodeId::new(0)), None);
        assert_eq!(tree.order, ids(&[2]));
    }

    #[test]
    fn test_multi_source_bfs() {
        // Path 0 - 1 - 2 - 3 - 4, sources at both ends
        let graph: Graph<i64> =
            Graph::from_edges(5, false, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]).unwrap();
        let tree =
            multi_source_bfs(&graph, [NodeId::new(0), NodeId::new(4), NodeId::new(0)]).unwrap();
        assert_eq!(
            tree.distance,
            vec![Some(0), Some(1), Some(2), Some(1), Some(0)]
        );
        assert_eq!(tree.layers()[0], ids(&[0, 4]));

        assert!(multi_source_bfs(&graph, [NodeId::new(0), NodeId::new(5)]).is_err());
    }

    #[test]
    fn test_dfs_preorder() {
        let graph = create_diamond_graph();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).unwrap().collect();
        assert_eq!(order, ids(&[0, 1, 3, 2]));
    }

    #[test]
    fn test_dfs_matches_recursive_order() {
        // 0 -> 1, 0 -> 2, 1 -> 2: recursive DFS visits 2 through 1
        let graph: Graph<i64> = Graph::from_edges(3, true, [(0, 1, 1), (0, 2, 1), (1, 2, 1)]).unwrap();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).unwrap().collect();
        assert_eq!(order, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_dfs_with_cycle_terminates() {
        let graph = create_cyclic_graph();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).unwrap().collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_postorder() {
        let graph = create_linear_graph();
        assert_eq!(postorder(&graph, NodeId::new(0)).unwrap(), ids(&[2, 1, 0]));

        let diamond = create_diamond_graph();
        assert_eq!(
            postorder(&diamond, NodeId::new(0)).unwrap(),
            ids(&[3, 1, 2, 0])
        );
    }

    #[test]
    fn test_reverse_postorder() {
        let graph = create_diamond_graph();
        let rpo = reverse_postorder(&graph, NodeId::new(0)).unwrap();
        assert_eq!(rpo, ids(&[0, 2, 1, 3]));
    }

    #[test]
    fn test_postorder_self_loop() {
        let graph: Graph<i64> = Graph::from_edges(1, true, [(0, 0, 1)]).unwrap();
        assert_eq!(postorder(&graph, NodeId::new(0)).unwrap(), ids(&[0]));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let graph: Graph<i64> =
            Graph::from_edges(n, true, (1..n).map(|i| (i - 1, i, 1))).unwrap();
        assert_eq!(postorder(&graph, NodeId::new(0)).unwrap().len(), n);
        assert_eq!(dfs(&graph, NodeId::new(0)).unwrap().count(), n);
    }
}
