//! Core adjacency-list graph.
//!
//! This module provides [`Graph`], the single graph representation every
//! algorithm in the crate consumes. Vertices are the dense indices `[0, V)`
//! fixed at construction; edges are appended with [`Graph::add_edge`] and kept
//! both as a flat list of logical edges (indexed by [`EdgeId`]) and as
//! per-vertex adjacency lists in insertion order.
//!
//! Undirected graphs are a construction-time decision: `add_edge(u, v, w)`
//! inserts an adjacency entry on both endpoints, sharing one `EdgeId`. The
//! algorithms never branch on directedness while walking adjacency lists.

use crate::{
    graph::{
        edge::{Adjacency, Edge, EdgeId},
        node::NodeId,
        traits::{GraphBase, Successors},
        weight::Weight,
    },
    Error, Result,
};

/// Internal storage for a logical edge.
#[derive(Debug, Clone)]
struct EdgeData<W> {
    /// First endpoint of the edge
    source: NodeId,
    /// Second endpoint of the edge
    target: NodeId,
    /// Edge weight
    weight: W,
}

/// A directed or undirected graph with weighted edges.
///
/// `Graph` supports:
///
/// - A fixed vertex count and directedness, chosen at construction
/// - Self-loops and parallel edges (a multigraph)
/// - Generic weights (`W`, default `i64`); unweighted edges weigh [`One::one`](num_traits::One::one)
/// - Deterministic adjacency order: neighbours are listed in insertion order
///
/// # Memory Layout
///
/// - Logical edges live in one contiguous vector indexed by [`EdgeId`]
/// - Each vertex owns a vector of [`Adjacency`] entries `(target, edge, weight)`
///
/// # Thread Safety
///
/// `Graph<W>` is [`Send`] and [`Sync`] when `W` is. Build it on one thread, then
/// run any number of algorithms against it concurrently: none of them mutate it.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Graph, NodeId};
///
/// let mut graph: Graph<i64> = Graph::undirected(3);
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
///
/// graph.add_edge(a, b, 4)?;
/// graph.add_edge(a, c, 1)?;
///
/// // Undirected: the edge shows up on both endpoints, in insertion order
/// let from_a: Vec<_> = graph.neighbors(a)?.collect();
/// assert_eq!(from_a, vec![(b, 4), (c, 1)]);
/// let from_b: Vec<_> = graph.neighbors(b)?.collect();
/// assert_eq!(from_b, vec![(a, 4)]);
///
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<W = i64> {
    /// Whether edges have a direction
    directed: bool,
    /// Logical edges, indexed by `EdgeId`
    edges: Vec<EdgeData<W>>,
    /// Adjacency entries per vertex, insertion ordered
    adjacency: Vec<Vec<Adjacency<W>>>,
}

impl<W: Copy> Graph<W> {
    /// Creates a graph with `node_count` vertices and no edges.
    ///
    /// # Arguments
    ///
    /// * `node_count` - Number of vertices; valid vertices are `0..node_count`
    /// * `directed` - Whether edges have a direction
    #[must_use]
    pub fn new(node_count: usize, directed: bool) -> Self {
        Graph {
            directed,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates a directed graph with `node_count` vertices.
    #[must_use]
    pub fn directed(node_count: usize) -> Self {
        Self::new(node_count, true)
    }

    /// Creates an undirected graph with `node_count` vertices.
    #[must_use]
    pub fn undirected(node_count: usize) -> Self {
        Self::new(node_count, false)
    }

    /// Builds a graph from raw `(u, v, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for the first triple naming a vertex
    /// outside `0..node_count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::Graph;
    ///
    /// let graph = Graph::from_edges(3, true, [(0, 1, 2), (1, 2, 5)])?;
    /// assert_eq!(graph.edge_count(), 2);
    ///
    /// assert!(Graph::from_edges(3, true, [(0, 3, 1)]).is_err());
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn from_edges<I>(node_count: usize, directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(node_count, directed);
        for (u, v, w) in edges {
            graph.add_edge(NodeId::new(u), NodeId::new(v), w)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical edges.
    ///
    /// An undirected edge counts once even though it appears in two adjacency lists.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if edges have a direction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `node` is a vertex of this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.adjacency.len()
    }

    /// Validates a vertex index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `node` is not in `[0, V)`.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::out_of_range(node.index(), self.adjacency.len()))
        }
    }

    /// Adds an edge from `source` to `target` with the given weight.
    ///
    /// Appends `(target, weight)` to the adjacency of `source`; for undirected
    /// graphs it also appends `(source, weight)` to the adjacency of `target`.
    /// Self-loops and parallel edges are accepted. On an undirected graph a
    /// self-loop therefore appears twice in its vertex's adjacency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex. The
    /// graph is left unchanged.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: W) -> Result<EdgeId> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.push_edge(source, target, weight))
    }

    /// Appends an edge between two vertices already known to be valid.
    pub(crate) fn push_edge(&mut self, source: NodeId, target: NodeId, weight: W) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            weight,
        });

        self.adjacency[source.index()].push(Adjacency {
            target,
            edge: id,
            weight,
        });
        if !self.directed {
            self.adjacency[target.index()].push(Adjacency {
                target: source,
                edge: id,
                weight,
            });
        }
        id
    }

    /// Appends a new isolated vertex. Only keyed construction grows a graph.
    pub(crate) fn push_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        NodeId::new(self.adjacency.len() - 1)
    }

    /// Returns the neighbours of `node` together with the edge weight, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `node` is not a vertex.
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = (NodeId, W)> + '_> {
        Ok(self.adjacent(node)?.iter().map(|a| (a.target, a.weight)))
    }

    /// Returns the full adjacency entries of `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `node` is not a vertex.
    pub fn adjacent(&self, node: NodeId) -> Result<&[Adjacency<W>]> {
        self.check_node(node)?;
        Ok(&self.adjacency[node.index()])
    }

    /// Adjacency of a vertex already known to be valid.
    #[inline]
    pub(crate) fn adjacency_of(&self, node: NodeId) -> &[Adjacency<W>] {
        &self.adjacency[node.index()]
    }

    /// Returns the number of adjacency entries of `node`.
    ///
    /// For undirected graphs this is the degree, with self-loops counted twice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `node` is not a vertex.
    pub fn out_degree(&self, node: NodeId) -> Result<usize> {
        Ok(self.adjacent(node)?.len())
    }

    /// Returns the number of adjacency entries pointing at each vertex.
    ///
    /// For directed graphs this is the in-degree; for undirected graphs it equals
    /// the degree.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.adjacency.len()];
        for entries in &self.adjacency {
            for entry in entries {
                degrees[entry.target.index()] += 1;
            }
        }
        degrees
    }

    /// Returns the logical edge with the given id, if it exists.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<Edge<W>> {
        self.edges.get(edge.index()).map(|data| Edge {
            id: edge,
            source: data.source,
            target: data.target,
            weight: data.weight,
        })
    }

    /// Returns an iterator over all logical edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.edges.iter().enumerate().map(|(i, data)| Edge {
            id: EdgeId::new(i),
            source: data.source,
            target: data.target,
            weight: data.weight,
        })
    }

    /// Returns an iterator over all vertex identifiers in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len()).map(NodeId::new)
    }

    /// Returns the edge-reversed graph.
    ///
    /// Every logical edge keeps its id and weight with its endpoints swapped.
    /// Adjacency order in the result follows edge insertion order. For
    /// undirected graphs the reversal is the graph itself.
    #[must_use]
    pub fn reversed(&self) -> Self {
        if !self.directed {
            return self.clone();
        }

        let mut reversed = Self::new(self.adjacency.len(), true);
        reversed.edges.reserve(self.edges.len());
        for data in &self.edges {
            let id = EdgeId::new(reversed.edges.len());
            reversed.edges.push(EdgeData {
                source: data.target,
                target: data.source,
                weight: data.weight,
            });
            reversed.adjacency[data.target.index()].push(Adjacency {
                target: data.source,
                edge: id,
                weight: data.weight,
            });
        }
        reversed
    }
}

impl<W: Weight> Graph<W> {
    /// Adds an edge with the implicit unit weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either endpoint is not a vertex.
    pub fn add_unweighted_edge(&mut self, source: NodeId, target: NodeId) -> Result<EdgeId> {
        self.add_edge(source, target, W::one())
    }

    /// Returns the first edge with a strictly negative weight, if any.
    #[must_use]
    pub fn find_negative_edge(&self) -> Option<Edge<W>> {
        self.edges().find(|edge| edge.weight.is_negative())
    }

    /// Returns `true` if any edge has a strictly negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.find_negative_edge().is_some()
    }
}

impl<W: Copy> GraphBase for Graph<W> {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<W: Copy> Successors for Graph<W> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.adjacency[node.index()].iter().map(|entry| entry.target)
    }
}
