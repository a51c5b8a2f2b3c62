//! Depth-first forest with timestamps and edge classification.
//!
//! [`depth_first_forest`] runs an iterative DFS over every vertex of a
//! [`Graph`], roots taken in ascending index order. Each vertex gets a
//! discovery and a finish time drawn from one monotonic clock, so for any two
//! vertices the intervals `[discovery, finish]` are either nested or disjoint
//! (the parenthesis theorem).
//!
//! The explicit stack frame used here, [`Frame`], is shared with the
//! bridge/articulation engine: a vertex, a cursor into its adjacency list, and
//! the [`EdgeId`] the search arrived through.

use crate::{
    graph::{EdgeId, Graph, NodeId},
    utils::BitSet,
};

/// Classification of an edge relative to a depth-first forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// The edge discovered its target
    Tree,
    /// The target was an ancestor still on the stack (includes self-loops)
    Back,
    /// The target was an already finished descendant
    Forward,
    /// The target was finished and not a descendant
    Cross,
}

/// One classified edge of a [`DfsForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedEdge {
    /// The logical edge
    pub edge: EdgeId,
    /// Vertex the edge was traversed from
    pub source: NodeId,
    /// Vertex the edge was traversed to
    pub target: NodeId,
    /// Classification at traversal time
    pub kind: EdgeKind,
}

/// Result of [`depth_first_forest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsForest {
    /// Discovery time of each vertex
    pub discovery: Vec<usize>,
    /// Finish time of each vertex
    pub finish: Vec<usize>,
    /// Tree parent of each vertex; `None` for roots
    pub parent: Vec<Option<NodeId>>,
    /// Root of each DFS tree, in the order the trees were grown
    pub roots: Vec<NodeId>,
    /// Every traversed edge in traversal order
    pub edges: Vec<ClassifiedEdge>,
}

impl DfsForest {
    /// Returns the discovery time of `node`.
    #[must_use]
    pub fn discovery(&self, node: NodeId) -> Option<usize> {
        self.discovery.get(node.index()).copied()
    }

    /// Returns the finish time of `node`.
    #[must_use]
    pub fn finish(&self, node: NodeId) -> Option<usize> {
        self.finish.get(node.index()).copied()
    }

    /// Returns `true` if `ancestor` is an ancestor of `node` in the forest.
    ///
    /// Every vertex is its own ancestor.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        match (
            self.discovery(ancestor),
            self.finish(ancestor),
            self.discovery(node),
            self.finish(node),
        ) {
            (Some(da), Some(fa), Some(dn), Some(fn_)) => da <= dn && fn_ <= fa,
            _ => false,
        }
    }

    /// Returns the traversed edges of one kind.
    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &ClassifiedEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.kind == kind)
    }

    /// Returns `true` if the search found a back edge.
    ///
    /// On a directed graph this holds exactly when the graph has a cycle.
    #[must_use]
    pub fn has_back_edge(&self) -> bool {
        self.edges_of_kind(EdgeKind::Back).next().is_some()
    }
}

/// Explicit DFS stack frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    /// Vertex being expanded
    pub vertex: NodeId,
    /// Next adjacency entry to examine
    pub cursor: usize,
    /// Edge the search arrived through; `None` at a root
    pub arrival: Option<EdgeId>,
}

impl Frame {
    pub(crate) fn new(vertex: NodeId, arrival: Option<EdgeId>) -> Self {
        Frame {
            vertex,
            cursor: 0,
            arrival,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Builds the depth-first forest of `graph`.
///
/// Roots are taken in ascending index order and neighbours in insertion order.
/// Directed graphs report every edge with one of the four [`EdgeKind`]s. On
/// an undirected graph every logical edge is reported once, from the side it
/// is first traversed; only [`EdgeKind::Tree`] and [`EdgeKind::Back`] occur.
///
/// # Examples
///
/// ```rust
/// use graphscope::{depth_first_forest, EdgeKind, Graph, NodeId};
///
/// let graph = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)])?;
/// let forest = depth_first_forest(&graph);
///
/// assert_eq!(forest.roots, vec![NodeId::new(0)]);
/// assert_eq!(forest.discovery, vec![0, 1, 2]);
/// assert_eq!(forest.finish, vec![5, 4, 3]);
/// assert_eq!(forest.edges[2].kind, EdgeKind::Back);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn depth_first_forest<W: Copy>(graph: &Graph<W>) -> DfsForest {
    let node_count = graph.node_count();
    let directed = graph.is_directed();

    let mut color = vec![Color::White; node_count];
    let mut discovery = vec![0; node_count];
    let mut finish = vec![0; node_count];
    let mut parent = vec![None; node_count];
    let mut roots = Vec::new();
    let mut edges = Vec::new();
    let mut reported = BitSet::new(graph.edge_count());
    let mut clock = 0;

    for root in graph.node_ids() {
        if color[root.index()] != Color::White {
            continue;
        }
        roots.push(root);
        color[root.index()] = Color::Gray;
        discovery[root.index()] = clock;
        clock += 1;

        let mut stack = vec![Frame::new(root, None)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let Some(entry) = graph.adjacency_of(u).get(frame.cursor) else {
                color[u.index()] = Color::Black;
                finish[u.index()] = clock;
                clock += 1;
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            // undirected edges are seen from both ends
            if !directed && !reported.insert(entry.edge.index()) {
                continue;
            }

            let v = entry.target;
            let kind = match color[v.index()] {
                Color::White => EdgeKind::Tree,
                Color::Gray => EdgeKind::Back,
                Color::Black if discovery[u.index()] < discovery[v.index()] => EdgeKind::Forward,
                Color::Black => EdgeKind::Cross,
            };
            edges.push(ClassifiedEdge {
                edge: entry.edge,
                source: u,
                target: v,
                kind,
            });

            if kind == EdgeKind::Tree {
                color[v.index()] = Color::Gray;
                discovery[v.index()] = clock;
                clock += 1;
                parent[v.index()] = Some(u);
                stack.push(Frame::new(v, Some(entry.edge)));
            }
        }
    }

    DfsForest {
        discovery,
        finish,
        parent,
        roots,
        edges,
    }
}
