//! Topological sorting of directed graphs.
//!
//! A topological order lists every vertex before all vertices it has an edge
//! to. It exists exactly when the graph is acyclic; otherwise every algorithm
//! here reports [`Error::CycleDetected`] and no partial order.
//!
//! # Algorithms
//!
//! - [`kahn`] - Repeatedly removes vertices of in-degree zero, FIFO order
//! - [`kahn_lexicographic`] - Same, but always removes the smallest ready vertex
//! - [`dfs_order`] - Reverse completion order of an iterative three-colour DFS
//!
//! All three agree on whether an order exists. The orders themselves may differ.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{
    graph::{GraphBase, NodeId, Successors},
    Error, Result,
};

/// Topological sort algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum TopoAlgorithm {
    /// In-degree elimination with a FIFO queue
    #[default]
    Kahn,
    /// In-degree elimination with a min-heap; lexicographically smallest order
    KahnLexicographic,
    /// Reverse DFS completion order
    Dfs,
}

/// A topological order of every vertex of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder {
    order: Vec<NodeId>,
    /// Position of each vertex in `order`
    positions: Vec<usize>,
}

impl TopoOrder {
    fn new(order: Vec<NodeId>) -> Self {
        let mut positions = vec![0; order.len()];
        for (position, node) in order.iter().enumerate() {
            positions[node.index()] = position;
        }
        TopoOrder { order, positions }
    }

    /// Returns the vertices in topological order.
    #[must_use]
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Consumes the result, returning the order.
    #[must_use]
    pub fn into_vec(self) -> Vec<NodeId> {
        self.order
    }

    /// Returns the position of `node` in the order.
    #[must_use]
    pub fn position_of(&self, node: NodeId) -> Option<usize> {
        self.positions.get(node.index()).copied()
    }

    /// Returns the number of vertices in the order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the order is empty (the graph has no vertices).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the vertices in order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Returns `true` if every edge of `graph` goes from an earlier to a later position.
    #[must_use]
    pub fn respects<G: Successors>(&self, graph: &G) -> bool {
        self.order.len() == graph.node_count()
            && graph.node_ids().all(|u| {
                graph
                    .successors(u)
                    .all(|v| self.positions[u.index()] < self.positions[v.index()])
            })
    }
}

/// Computes a topological order with the selected algorithm.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`] if the graph is undirected
/// - [`Error::CycleDetected`] if the graph has a directed cycle (self-loops included)
///
/// # Examples
///
/// ```rust
/// use graphscope::{topological_sort, Error, Graph, NodeId, TopoAlgorithm};
///
/// let graph = Graph::from_edges(6, true, [(5, 2, 1), (5, 0, 1), (4, 0, 1), (4, 1, 1), (2, 3, 1), (3, 1, 1)])?;
/// let order = topological_sort(&graph, TopoAlgorithm::Kahn)?;
/// assert_eq!(order.len(), 6);
/// assert!(order.position_of(NodeId::new(5)) < order.position_of(NodeId::new(2)));
///
/// let cyclic = Graph::from_edges(2, true, [(0, 1, 1), (1, 0, 1)])?;
/// assert_eq!(topological_sort(&cyclic, TopoAlgorithm::Dfs), Err(Error::CycleDetected));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn topological_sort<G: Successors>(graph: &G, algorithm: TopoAlgorithm) -> Result<TopoOrder> {
    debug!(
        vertices = graph.node_count(),
        algorithm = %algorithm,
        "computing topological order"
    );
    match algorithm {
        TopoAlgorithm::Kahn => kahn(graph),
        TopoAlgorithm::KahnLexicographic => kahn_lexicographic(graph),
        TopoAlgorithm::Dfs => dfs_order(graph),
    }
}

fn require_directed<G: GraphBase>(graph: &G) -> Result<()> {
    if graph.is_directed() {
        Ok(())
    } else {
        debug!("topological sort rejected: graph is undirected");
        Err(precondition_error!(
            "topological sort requires a directed graph"
        ))
    }
}

fn in_degrees<G: Successors>(graph: &G) -> Vec<usize> {
    let mut degrees = vec![0; graph.node_count()];
    for node in graph.node_ids() {
        for next in graph.successors(node) {
            degrees[next.index()] += 1;
        }
    }
    degrees
}

fn finish(order: Vec<NodeId>, node_count: usize) -> Result<TopoOrder> {
    if order.len() == node_count {
        Ok(TopoOrder::new(order))
    } else {
        debug!(
            ordered = order.len(),
            vertices = node_count,
            "cycle detected during topological sort"
        );
        Err(Error::CycleDetected)
    }
}

/// Kahn's algorithm with a FIFO queue.
///
/// The queue is seeded with the in-degree-zero vertices in index order. If
/// fewer than `V` vertices are ever dequeued, the rest lie on or behind a cycle.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`] if the graph is undirected
/// - [`Error::CycleDetected`] if the graph has a directed cycle
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn kahn<G: Successors>(graph: &G) -> Result<TopoOrder> {
    require_directed(graph)?;
    let node_count = graph.node_count();
    let mut degrees = in_degrees(graph);

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|node| degrees[node.index()] == 0)
        .collect();

    let mut order = Vec::with_capacity(node_count);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        for next in graph.successors(node) {
            degrees[next.index()] -= 1;
            if degrees[next.index()] == 0 {
                queue.push_back(next);
            }
        }
    }

    finish(order, node_count)
}

/// Kahn's algorithm that always picks the smallest ready vertex.
///
/// Produces the lexicographically smallest topological order, at the cost of
/// a heap: O((V + E) log V).
///
/// # Errors
///
/// - [`Error::PreconditionViolated`] if the graph is undirected
/// - [`Error::CycleDetected`] if the graph has a directed cycle
pub fn kahn_lexicographic<G: Successors>(graph: &G) -> Result<TopoOrder> {
    require_directed(graph)?;
    let node_count = graph.node_count();
    let mut degrees = in_degrees(graph);

    let mut ready: BinaryHeap<Reverse<NodeId>> = graph
        .node_ids()
        .filter(|node| degrees[node.index()] == 0)
        .map(Reverse)
        .collect();

    let mut order = Vec::with_capacity(node_count);
    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for next in graph.successors(node) {
            degrees[next.index()] -= 1;
            if degrees[next.index()] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    finish(order, node_count)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Topological order from an iterative three-colour DFS.
///
/// Roots are taken in index order. Reaching an `InProgress` vertex means a
/// back edge, hence a cycle. The order is the reverse of completion order.
///
/// # Errors
///
/// - [`Error::PreconditionViolated`] if the graph is undirected
/// - [`Error::CycleDetected`] if the graph has a directed cycle
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn dfs_order<G: Successors>(graph: &G) -> Result<TopoOrder> {
    require_directed(graph)?;
    let node_count = graph.node_count();
    let mut color = vec![Color::Unvisited; node_count];
    let mut completed = Vec::with_capacity(node_count);

    for root in graph.node_ids() {
        if color[root.index()] != Color::Unvisited {
            continue;
        }
        color[root.index()] = Color::InProgress;

        let mut stack = vec![(root, graph.successors(root))];
        while let Some((node, successors)) = stack.last_mut() {
            let node = *node;
            let Some(next) = successors.next() else {
                color[node.index()] = Color::Done;
                completed.push(node);
                stack.pop();
                continue;
            };
            match color[next.index()] {
                Color::Unvisited => {
                    color[next.index()] = Color::InProgress;
                    stack.push((next, graph.successors(next)));
                }
                Color::InProgress => {
                    debug!(from = %node, to = %next, "back edge found during topological sort");
                    return Err(Error::CycleDetected);
                }
                Color::Done => {}
            }
        }
    }

    completed.reverse();
    finish(completed, node_count)
}
