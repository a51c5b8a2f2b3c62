//! Undirected connectivity: cut edges, cut vertices, components and two-colouring.
//!
//! # Algorithms
//!
//! - [`bridges_and_articulation_points`] - One low-link DFS finding every bridge
//!   and articulation point of an undirected graph
//! - [`connected_components`] - Union-find partition into (weakly) connected components
//! - [`bipartition`] - BFS two-colouring, `None` when an odd cycle exists

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    algorithms::dfs::Frame,
    graph::{Graph, NodeId},
    utils::{BitSet, DisjointSet},
    Result,
};

/// Bridges and articulation points of an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgesAndArticulation {
    /// Cut edges as `(smaller, larger)` endpoint pairs, sorted, without duplicates
    pub bridges: Vec<(NodeId, NodeId)>,
    /// Cut vertices
    pub articulation_points: BitSet,
}

impl BridgesAndArticulation {
    /// Returns `true` if the edge between `a` and `b` is a bridge.
    #[must_use]
    pub fn is_bridge(&self, a: NodeId, b: NodeId) -> bool {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.bridges.binary_search(&key).is_ok()
    }

    /// Returns `true` if `node` is an articulation point.
    #[must_use]
    pub fn is_articulation_point(&self, node: NodeId) -> bool {
        self.articulation_points.contains_node(node)
    }

    /// Returns the articulation points in ascending order.
    #[must_use]
    pub fn articulation_points(&self) -> Vec<NodeId> {
        self.articulation_points.nodes().collect()
    }
}

/// Finds every bridge and articulation point of an undirected graph.
///
/// Runs one iterative DFS per component, maintaining for every vertex `u` its
/// discovery time and `low[u]`: the smallest discovery time reachable from the
/// subtree of `u` using at most one non-tree edge. For a tree edge `u -> v`:
///
/// - the edge is a bridge iff `low[v] > disc[u]`
/// - a non-root `u` is an articulation point iff some child has `low[v] >= disc[u]`
/// - a DFS root is an articulation point iff it has at least two tree children
///
/// Only the exact edge a vertex was reached through is excluded when
/// relaxing `low`. A second, parallel edge to the parent is a genuine back
/// edge, so doubled edges are never bridges. Self-loops never affect the result.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolated`](crate::Error::PreconditionViolated)
/// if the graph is directed.
///
/// # Examples
///
/// ```rust
/// use graphscope::{bridges_and_articulation_points, Graph, NodeId};
///
/// // Triangle 0-1-2 with a tail 0-3-4
/// let graph = Graph::from_edges(5, false, [(1, 0, 1), (0, 2, 1), (2, 1, 1), (0, 3, 1), (3, 4, 1)])?;
/// let cuts = bridges_and_articulation_points(&graph)?;
///
/// let n = NodeId::new;
/// assert_eq!(cuts.articulation_points(), vec![n(0), n(3)]);
/// assert_eq!(cuts.bridges, vec![(n(0), n(3)), (n(3), n(4))]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn bridges_and_articulation_points<W: Copy>(graph: &Graph<W>) -> Result<BridgesAndArticulation> {
    if graph.is_directed() {
        debug!("bridge search rejected: graph is directed");
        return Err(precondition_error!(
            "bridges and articulation points require an undirected graph"
        ));
    }

    let node_count = graph.node_count();
    debug!(
        vertices = node_count,
        edges = graph.edge_count(),
        "searching bridges and articulation points"
    );

    let mut discovery: Vec<Option<usize>> = vec![None; node_count];
    let mut low = vec![0; node_count];
    let mut articulation_points = BitSet::new(node_count);
    let mut bridges = Vec::new();
    let mut clock = 0;

    for root in graph.node_ids() {
        if discovery[root.index()].is_some() {
            continue;
        }
        discovery[root.index()] = Some(clock);
        low[root.index()] = clock;
        clock += 1;
        let mut root_children = 0;

        let mut stack = vec![Frame::new(root, None)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            if let Some(entry) = graph.adjacency_of(u).get(frame.cursor) {
                frame.cursor += 1;
                if Some(entry.edge) == frame.arrival {
                    continue;
                }
                let v = entry.target;
                match discovery[v.index()] {
                    None => {
                        discovery[v.index()] = Some(clock);
                        low[v.index()] = clock;
                        clock += 1;
                        if u == root {
                            root_children += 1;
                        }
                        stack.push(Frame::new(v, Some(entry.edge)));
                    }
                    Some(v_disc) => {
                        low[u.index()] = low[u.index()].min(v_disc);
                    }
                }
                continue;
            }

            stack.pop();
            let Some(parent) = stack.last().map(|frame| frame.vertex) else {
                continue;
            };
            low[parent.index()] = low[parent.index()].min(low[u.index()]);

            let parent_disc = discovery[parent.index()].unwrap_or(0);
            if low[u.index()] > parent_disc {
                bridges.push(if parent < u { (parent, u) } else { (u, parent) });
            }
            if parent != root && low[u.index()] >= parent_disc {
                articulation_points.insert(parent.index());
            }
        }

        if root_children >= 2 {
            articulation_points.insert(root.index());
        }
    }

    bridges.sort_unstable();
    bridges.dedup();

    Ok(BridgesAndArticulation {
        bridges,
        articulation_points,
    })
}

/// Partitions the vertices into connected components.
///
/// Directed graphs are treated as their underlying undirected graph, giving
/// weakly connected components. Components are ordered by their smallest
/// vertex and list their members in ascending order.
///
/// # Examples
///
/// ```rust
/// use graphscope::{connected_components, Graph, NodeId};
///
/// let graph = Graph::from_edges(5, false, [(0, 3, 1), (4, 1, 1)])?;
/// let components = connected_components(&graph);
///
/// let n = NodeId::new;
/// assert_eq!(components, vec![vec![n(0), n(3)], vec![n(1), n(4)], vec![n(2)]]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn connected_components<W: Copy>(graph: &Graph<W>) -> Vec<Vec<NodeId>> {
    let node_count = graph.node_count();
    let mut sets = DisjointSet::new(node_count);
    for edge in graph.edges() {
        sets.union(edge.source.index(), edge.target.index());
    }

    // Vertices are scanned ascending, so each component is created at its
    // smallest member and filled in ascending order.
    let mut slot_of_root: Vec<Option<usize>> = vec![None; node_count];
    let mut components: Vec<Vec<NodeId>> = Vec::with_capacity(sets.set_count());
    for node in graph.node_ids() {
        let root = sets.find(node.index());
        match slot_of_root[root] {
            Some(slot) => components[slot].push(node),
            None => {
                slot_of_root[root] = Some(components.len());
                components.push(vec![node]);
            }
        }
    }
    components
}

/// Two-colours the graph so that every edge joins vertices of different colours.
///
/// Returns the colour of every vertex (`false` for the side containing the
/// smallest vertex of each component), or `None` if the graph contains an odd
/// cycle. A self-loop is an odd cycle. Directed graphs are coloured by their
/// underlying undirected graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{bipartition, Graph};
///
/// let square = Graph::from_edges(4, false, [(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)])?;
/// assert_eq!(bipartition(&square), Some(vec![false, true, false, true]));
///
/// let triangle = Graph::from_edges(3, false, [(0, 1, 1), (1, 2, 1), (2, 0, 1)])?;
/// assert_eq!(bipartition(&triangle), None);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[must_use]
pub fn bipartition<W: Copy>(graph: &Graph<W>) -> Option<Vec<bool>> {
    let node_count = graph.node_count();

    let neighbours: Vec<Vec<NodeId>> = if graph.is_directed() {
        let mut both = vec![Vec::new(); node_count];
        for edge in graph.edges() {
            both[edge.source.index()].push(edge.target);
            both[edge.target.index()].push(edge.source);
        }
        both
    } else {
        graph
            .node_ids()
            .map(|u| graph.adjacency_of(u).iter().map(|a| a.target).collect())
            .collect()
    };

    let mut colour: Vec<Option<bool>> = vec![None; node_count];
    let mut queue = VecDeque::new();
    for start in graph.node_ids() {
        if colour[start.index()].is_some() {
            continue;
        }
        colour[start.index()] = Some(false);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            let side = colour[u.index()]?;
            for &v in &neighbours[u.index()] {
                match colour[v.index()] {
                    None => {
                        colour[v.index()] = Some(!side);
                        queue.push_back(v);
                    }
                    Some(other) if other == side => {
                        debug!(%u, %v, "odd cycle found, graph is not bipartite");
                        return None;
                    }
                    Some(_) => {}
                }
            }
        }
    }

    colour.into_iter().collect()
}
