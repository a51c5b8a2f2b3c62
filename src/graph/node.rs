//! Vertex identifier.
//!
//! Vertices of a [`Graph`](crate::Graph) are dense indices in `[0, V)`. The
//! [`NodeId`] newtype keeps those indices from being confused with weights, edge
//! ids, timestamps or any of the other integers the algorithms juggle.

use std::fmt;

/// A strongly-typed identifier for a vertex of a [`Graph`](crate::Graph).
///
/// `NodeId` wraps the dense vertex index. Unlike edges, vertices are never
/// "added": a graph is created with a fixed vertex count and every index in
/// `[0, V)` is a valid vertex from the start. Indices outside that range are
/// rejected by the graph with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
///
/// There is no vertex payload. Callers that need one keep it in parallel
/// storage indexed by [`NodeId::index`], or use [`IndexedGraph`](crate::IndexedGraph).
///
/// # Examples
///
/// ```rust
/// use graphscope::NodeId;
///
/// let v = NodeId::new(3);
/// assert_eq!(v.index(), 3);
/// assert_eq!(v.to_string(), "n3");
///
/// let labels = ["a", "b", "c", "d"];
/// assert_eq!(labels[v.index()], "d");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw vertex index.
    ///
    /// No range check happens here; the graph validates the index when the id is
    /// passed to one of its operations.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw vertex index, suitable for indexing per-vertex arrays.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
