//! Edge identifier and borrowed edge view.
//!
//! Every call to [`Graph::add_edge`](crate::Graph::add_edge) creates exactly one
//! logical edge, numbered sequentially by [`EdgeId`]. In an undirected graph the
//! logical edge is reachable from both endpoints' adjacency lists under the same
//! id, which is what lets the low-link algorithms tell "the edge I arrived
//! through" apart from a parallel edge between the same two vertices.

use std::fmt;

use crate::graph::NodeId;

/// A strongly-typed identifier for a logical edge.
///
/// Edge ids are assigned in insertion order starting from 0. Sorting by
/// `EdgeId` therefore reproduces insertion order, which Kruskal relies on for
/// deterministic tie-breaking.
///
/// # Examples
///
/// ```rust
/// use graphscope::{EdgeId, Graph, NodeId};
///
/// let mut graph: Graph<i64> = Graph::undirected(2);
/// let first = graph.add_edge(NodeId::new(0), NodeId::new(1), 7)?;
/// let second = graph.add_edge(NodeId::new(0), NodeId::new(1), 3)?;
///
/// assert_eq!(first, EdgeId::new(0));
/// assert!(first < second);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A logical edge as stored by the graph: endpoints plus weight.
///
/// For undirected graphs `source`/`target` record the order in which the
/// endpoints were passed to `add_edge`; the edge itself has no direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    /// Identifier of the edge
    pub id: EdgeId,
    /// First endpoint (tail for directed graphs)
    pub source: NodeId,
    /// Second endpoint (head for directed graphs)
    pub target: NodeId,
    /// Edge weight
    pub weight: W,
}

impl<W> Edge<W> {
    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoints ordered smaller index first.
    #[must_use]
    pub fn normalized(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// One entry of a vertex's adjacency list.
///
/// Entries appear in insertion order. For undirected graphs the same
/// [`EdgeId`] shows up in the adjacency lists of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency<W> {
    /// The neighbouring vertex this entry leads to
    pub target: NodeId,
    /// The logical edge this entry belongs to
    pub edge: EdgeId,
    /// Weight of the edge
    pub weight: W,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(9);
        assert_eq!(format!("{edge:?}"), "EdgeId(9)");
        assert_eq!(format!("{edge}"), "e9");
        assert_eq!(usize::from(edge), 9);
        assert_eq!(EdgeId::from(4).index(), 4);
    }

    #[test]
    fn test_edge_normalized_and_self_loop() {
        let edge = Edge {
            id: EdgeId::new(0),
            source: NodeId::new(5),
            target: NodeId::new(2),
            weight: 1,
        };
        assert_eq!(edge.normalized(), (NodeId::new(2), NodeId::new(5)));
        assert!(!edge.is_self_loop());

        let lp = Edge {
            id: EdgeId::new(1),
            source: NodeId::new(3),
            target: NodeId::new(3),
            weight: 1,
        };
        assert!(lp.is_self_loop());
        assert_eq!(lp.normalized(), (NodeId::new(3), NodeId::new(3)));
    }
}
