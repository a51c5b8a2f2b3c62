//! Strongly connected components.
//!
//! A strongly connected component is a maximal set of vertices in which every
//! vertex can reach every other. Two algorithms are provided and they always
//! agree on the partition:
//!
//! - [`tarjan`] - One DFS with discovery indices and low-links. Components are
//!   emitted in **reverse** topological order of the condensation.
//! - [`kosaraju`] - Two DFS passes, the second over the transposed graph in
//!   decreasing finish time. Components are emitted in topological order.
//!
//! Both are iterative, so deep graphs cannot overflow the call stack. Members
//! of each component are listed in ascending index order.
//!
//! # Use Cases
//!
//! - **Cycle grouping**: vertices that can reach each other collapse into one component
//! - **Dependency analysis**: the [`Condensation`] is a DAG of components
//! - **2-SAT and reachability**: classic consumers of the component DAG

use std::collections::HashSet;

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{
    algorithms::traversal::postorder_from,
    graph::{GraphBase, NodeId, Successors},
    utils::BitSet,
};

/// Strongly connected component algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum SccAlgorithm {
    /// Single-pass low-link DFS
    #[default]
    Tarjan,
    /// Two-pass DFS over the graph and its transpose
    Kosaraju,
}

/// The strongly connected components of a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    components: Vec<Vec<NodeId>>,
    /// Component index of each vertex
    membership: Vec<usize>,
}

impl SccResult {
    fn new(components: Vec<Vec<NodeId>>, node_count: usize) -> Self {
        let mut membership = vec![0; node_count];
        for (index, component) in components.iter().enumerate() {
            for node in component {
                membership[node.index()] = index;
            }
        }
        SccResult {
            components,
            membership,
        }
    }

    /// Returns the components in the order the algorithm emitted them.
    #[must_use]
    pub fn components(&self) -> &[Vec<NodeId>] {
        &self.components
    }

    /// Consumes the result, returning the components.
    #[must_use]
    pub fn into_components(self) -> Vec<Vec<NodeId>> {
        self.components
    }

    /// Returns the index of the component containing `node`.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> Option<usize> {
        self.membership.get(node.index()).copied()
    }

    /// Returns `true` if `a` and `b` belong to the same component.
    #[must_use]
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        matches!((self.component_of(a), self.component_of(b)), (Some(x), Some(y)) if x == y)
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components (the graph has no vertices).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the components as a canonical partition: each component sorted,
    /// components ordered by their smallest member.
    ///
    /// Useful for comparing the results of different algorithms.
    #[must_use]
    pub fn partition(&self) -> Vec<Vec<NodeId>> {
        let mut partition = self.components.clone();
        partition.sort_unstable_by_key(|component| component.first().copied());
        partition
    }

    /// Collapses every component of `graph` into a single vertex.
    ///
    /// `graph` must be the graph this result was computed from.
    pub fn condensation<G: Successors>(&self, graph: &G) -> Condensation {
        let mut successors = vec![Vec::new(); self.components.len()];
        let mut seen = HashSet::new();

        for node in graph.node_ids() {
            let from = self.membership[node.index()];
            for next in graph.successors(node) {
                let to = self.membership[next.index()];
                if from != to && seen.insert((from, to)) {
                    successors[from].push(NodeId::new(to));
                }
            }
        }

        Condensation {
            membership: self.membership.clone(),
            successors,
        }
    }
}

/// The component DAG of a graph.
///
/// Vertex `i` of the condensation is component `i` of the [`SccResult`] it was
/// built from. There is an edge `a -> b` when some edge of the original graph
/// leads from a member of `a` to a member of `b`; duplicates are merged and
/// there are no self-loops. The condensation implements [`Successors`], so it
/// can be passed straight to [`topological_sort`](crate::topological_sort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    membership: Vec<usize>,
    successors: Vec<Vec<NodeId>>,
}

impl Condensation {
    /// Returns the condensation vertex that `node` of the original graph maps to.
    #[must_use]
    pub fn component_of(&self, node: NodeId) -> Option<NodeId> {
        self.membership.get(node.index()).copied().map(NodeId::new)
    }

    /// Returns the edges between components.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.successors.iter().enumerate().flat_map(|(from, targets)| {
            targets.iter().map(move |&to| (NodeId::new(from), to))
        })
    }

    /// Returns the number of edges between components.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

impl GraphBase for Condensation {
    fn node_count(&self) -> usize {
        self.successors.len()
    }
}

impl Successors for Condensation {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.successors[node.index()].iter().copied()
    }
}

/// Computes strongly connected components with the selected algorithm.
///
/// # Examples
///
/// ```rust
/// use graphscope::{strongly_connected_components, Graph, NodeId, SccAlgorithm};
///
/// // Two 2-cycles joined by a one-way edge
/// let graph = Graph::from_edges(4, true, [(0, 1, 1), (1, 0, 1), (1, 2, 1), (2, 3, 1), (3, 2, 1)])?;
///
/// let sccs = strongly_connected_components(&graph, SccAlgorithm::Tarjan);
/// assert_eq!(sccs.len(), 2);
/// assert!(sccs.same_component(NodeId::new(2), NodeId::new(3)));
/// assert!(!sccs.same_component(NodeId::new(1), NodeId::new(2)));
///
/// let other = strongly_connected_components(&graph, SccAlgorithm::Kosaraju);
/// assert_eq!(sccs.partition(), other.partition());
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn strongly_connected_components<G: Successors>(graph: &G, algorithm: SccAlgorithm) -> SccResult {
    debug!(
        vertices = graph.node_count(),
        algorithm = %algorithm,
        "computing strongly connected components"
    );
    match algorithm {
        SccAlgorithm::Tarjan => tarjan(graph),
        SccAlgorithm::Kosaraju => kosaraju(graph),
    }
}

/// Tarjan's algorithm.
///
/// Each vertex gets a discovery index and a low-link, the smallest index
/// reachable through its DFS subtree plus one edge to a vertex still on the
/// active stack. A vertex whose low-link equals its own index roots a
/// component, which is popped off the active stack down to and including it.
///
/// Components come out in reverse topological order: if an edge leads from
/// component `A` to component `B`, `B` is emitted before `A`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn tarjan<G: Successors>(graph: &G) -> SccResult {
    let node_count = graph.node_count();
    let mut index: Vec<Option<usize>> = vec![None; node_count];
    let mut low = vec![0; node_count];
    let mut on_stack = BitSet::new(node_count);
    let mut active = Vec::new();
    let mut components = Vec::new();
    let mut counter = 0;

    for root in graph.node_ids() {
        if index[root.index()].is_some() {
            continue;
        }
        index[root.index()] = Some(counter);
        low[root.index()] = counter;
        counter += 1;
        active.push(root);
        on_stack.insert(root.index());

        let mut stack = vec![(root, graph.successors(root))];
        while let Some((u, successors)) = stack.last_mut() {
            let u = *u;
            if let Some(v) = successors.next() {
                match index[v.index()] {
                    None => {
                        index[v.index()] = Some(counter);
                        low[v.index()] = counter;
                        counter += 1;
                        active.push(v);
                        on_stack.insert(v.index());
                        stack.push((v, graph.successors(v)));
                    }
                    Some(v_index) if on_stack.contains(v.index()) => {
                        low[u.index()] = low[u.index()].min(v_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            stack.pop();
            if let Some((parent, _)) = stack.last() {
                low[parent.index()] = low[parent.index()].min(low[u.index()]);
            }

            if index[u.index()] == Some(low[u.index()]) {
                let mut component = Vec::new();
                while let Some(w) = active.pop() {
                    on_stack.remove(w.index());
                    component.push(w);
                    if w == u {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }
        }
    }

    SccResult::new(components, node_count)
}

/// Edge-reversed adjacency of an arbitrary [`Successors`] graph.
struct Transposed {
    predecessors: Vec<Vec<NodeId>>,
}

impl Transposed {
    fn of<G: Successors>(graph: &G) -> Self {
        let mut predecessors = vec![Vec::new(); graph.node_count()];
        for node in graph.node_ids() {
            for next in graph.successors(node) {
                predecessors[next.index()].push(node);
            }
        }
        Transposed { predecessors }
    }
}

impl GraphBase for Transposed {
    fn node_count(&self) -> usize {
        self.predecessors.len()
    }
}

impl Successors for Transposed {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.predecessors[node.index()].iter().copied()
    }
}

/// Kosaraju's algorithm.
///
/// The first pass records every vertex's finish order. The second pass walks
/// the transposed graph, starting a new component at each unvisited vertex in
/// decreasing finish order; everything it reaches belongs to that component.
///
/// Components come out in topological order of the condensation.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the transposed adjacency
pub fn kosaraju<G: Successors>(graph: &G) -> SccResult {
    let node_count = graph.node_count();

    let mut visited = BitSet::new(node_count);
    let mut finish_order = Vec::with_capacity(node_count);
    for node in graph.node_ids() {
        postorder_from(graph, node, &mut visited, &mut finish_order);
    }

    let transposed = Transposed::of(graph);
    let mut assigned = BitSet::new(node_count);
    let mut components = Vec::new();
    for &root in finish_order.iter().rev() {
        if !assigned.insert(root.index()) {
            continue;
        }
        let mut component = vec![root];
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for prev in transposed.successors(node) {
                if assigned.insert(prev.index()) {
                    component.push(prev);
                    stack.push(prev);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    SccResult::new(components, node_count)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::Graph;

    fn ids(nodes: &[usize]) -> Vec<NodeId> {
        nodes.iter().copied().map(NodeId::new).collect()
    }

    fn create_two_cycles_graph() -> Graph<i64> {
        // {0,1} -> {2,3}
        Graph::from_edges(4, true, [(0, 1, 1), (1, 0, 1), (1, 2, 1), (2, 3, 1), (3, 2, 1)]).unwrap()
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let graph: Graph<i64> = Graph::directed(0);
        for algorithm in SccAlgorithm::iter() {
            let sccs = strongly_connected_components(&graph, algorithm);
            assert!(sccs.is_empty());
            assert_eq!(sccs.len(), 0);
        }
    }

    #[test]
    fn test_single_vertex_and_self_loop() {
        let lone: Graph<i64> = Graph::directed(1);
        assert_eq!(tarjan(&lone).components(), &[ids(&[0])]);

        let looped: Graph<i64> = Graph::from_edges(1, true, [(0, 0, 1)]).unwrap();
        assert_eq!(kosaraju(&looped).components(), &[ids(&[0])]);
    }

    #[test]
    fn test_tarjan_reverse_topological_order() {
        // 0 -> 1 -> 2: every vertex alone, sinks first
        let graph: Graph<i64> = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)]).unwrap();
        let sccs = tarjan(&graph);
        assert_eq!(sccs.components(), &[ids(&[2]), ids(&[1]), ids(&[0])]);
    }

    #[test]
    fn test_kosaraju_topological_order() {
        let graph: Graph<i64> = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)]).unwrap();
        let sccs = kosaraju(&graph);
        assert_eq!(sccs.components(), &[ids(&[0]), ids(&[1]), ids(&[2])]);
    }

    #[test]
    fn test_simple_cycle() {
        let graph: Graph<i64> =
            Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        for algorithm in SccAlgorithm::iter() {
            let sccs = strongly_connected_components(&graph, algorithm);
            assert_eq!(sccs.components(), &[ids(&[0, 1, 2])]);
        }
    }

    #[test]
    fn test_algorithms_agree() {
        let graph = create_two_cycles_graph();
        let t = tarjan(&graph);
        let k = kosaraju(&graph);
        assert_eq!(t.partition(), vec![ids(&[0, 1]), ids(&[2, 3])]);
        assert_eq!(t.partition(), k.partition());
        assert_eq!(t.component_of(NodeId::new(3)), t.component_of(NodeId::new(2)));
        assert_eq!(t.component_of(NodeId::new(9)), None);
    }

    #[test]
    fn test_undirected_components() {
        let graph: Graph<i64> = Graph::from_edges(4, false, [(0, 1, 1), (2, 3, 1)]).unwrap();
        let sccs = tarjan(&graph);
        assert_eq!(sccs.partition(), vec![ids(&[0, 1]), ids(&[2, 3])]);
    }

    #[test]
    fn test_condensation() {
        let graph = create_two_cycles_graph();
        let sccs = tarjan(&graph);
        let dag = sccs.condensation(&graph);

        assert_eq!(dag.node_count(), 2);
        assert_eq!(dag.edge_count(), 1);
        let from = dag.component_of(NodeId::new(0)).unwrap();
        let to = dag.component_of(NodeId::new(3)).unwrap();
        assert_eq!(dag.edges().collect::<Vec<_>>(), vec![(from, to)]);
        assert_eq!(dag.successors(to).count(), 0);
    }

    #[test]
    fn test_condensation_merges_parallel_component_edges() {
        // {0,1} has two edges into {2}
        let graph: Graph<i64> =
            Graph::from_edges(3, true, [(0, 1, 1), (1, 0, 1), (0, 2, 1), (1, 2, 1)]).unwrap();
        let dag = kosaraju(&graph).condensation(&graph);
        assert_eq!(dag.edge_count(), 1);
    }

    #[test]
    fn test_deep_cycle_is_iterative() {
        let n = 100_000;
        let graph: Graph<i64> =
            Graph::from_edges(n, true, (0..n).map(|i| (i, (i + 1) % n, 1))).unwrap();
        assert_eq!(tarjan(&graph).len(), 1);
        assert_eq!(kosaraju(&graph).len(), 1);
    }

    #[test]
    fn test_selector_names() {
        assert_eq!(SccAlgorithm::Kosaraju.to_string(), "Kosaraju");
        assert_eq!("Tarjan".parse::<SccAlgorithm>().unwrap(), SccAlgorithm::Tarjan);
    }
}
