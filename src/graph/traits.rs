//! Trait definitions for graph abstractions.
//!
//! The purely structural algorithms (traversal, strongly connected components,
//! topological sorting and cycle detection) never look at weights. They are
//! written against these traits so that callers with their own adjacency
//! structure can reuse them without first copying into a [`Graph`](crate::Graph).
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: vertex count, vertex iteration, directedness
//! - [`Successors`] - Forward adjacency (outgoing neighbours in insertion order)

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, GraphBase};
///
/// let graph: Graph<i64> = Graph::directed(2);
/// assert_eq!(graph.node_count(), 2);
/// assert!(graph.is_directed());
/// assert_eq!(graph.node_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if edges have a direction.
    ///
    /// Undirected graphs list every edge in the successor lists of both endpoints.
    fn is_directed(&self) -> bool {
        true
    }
}

/// Trait for graphs that support forward edge traversal.
///
/// Successors must be yielded in a stable order (for [`Graph`](crate::Graph),
/// insertion order): the traversal orders produced by the algorithms are only
/// deterministic if this order is.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor vertices of `node`.
    ///
    /// Parallel edges yield the same successor more than once.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid vertex of the graph. The public entry
    /// points of this crate validate vertices before calling into traversal code.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph, to make sure the defaults do the right thing
    // for implementations that only provide the required methods.
    struct EdgeListGraph {
        node_count: usize,
        edges: Vec<(usize, usize)>,
    }

    impl GraphBase for EdgeListGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }
    }

    impl Successors for EdgeListGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.edges
                .iter()
                .filter(move |(src, _)| *src == node.index())
                .map(|&(_, dst)| NodeId::new(dst))
        }
    }

    #[test]
    fn test_default_node_ids() {
        let graph = EdgeListGraph {
            node_count: 4,
            edges: vec![],
        };
        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids, (0..4).map(NodeId::new).collect::<Vec<_>>());
        assert!(graph.is_directed());
    }

    #[test]
    fn test_successors_keep_edge_order() {
        let graph = EdgeListGraph {
            node_count: 4,
            edges: vec![(0, 3), (0, 1), (1, 2), (0, 3)],
        };
        let succ: Vec<NodeId> = graph.successors(NodeId::new(0)).collect();
        assert_eq!(succ, vec![NodeId::new(3), NodeId::new(1), NodeId::new(3)]);
        assert_eq!(graph.successors(NodeId::new(2)).count(), 0);
    }
}
