//! Keyed graph construction.
//!
//! [`IndexedGraph`] lets callers build a [`Graph`] from their own vertex keys
//! (course names, airport codes, domain ids) and map algorithm results back to
//! those keys. Keys are assigned dense [`NodeId`]s in first-seen order.
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{IndexedGraph, TopoAlgorithm};
//!
//! let mut courses: IndexedGraph<&str> = IndexedGraph::directed();
//! courses.add_edge("algebra", "calculus", 1);
//! courses.add_edge("calculus", "analysis", 1);
//! courses.add_node("logic");
//!
//! let order = courses.topological_sort(TopoAlgorithm::KahnLexicographic)?;
//! assert_eq!(order, vec![&"algebra", &"calculus", &"analysis", &"logic"]);
//!
//! courses.add_edge("analysis", "algebra", 1);
//! assert_eq!(
//!     courses.find_cycle_from(&"calculus"),
//!     Some(vec![&"calculus", &"analysis", &"algebra", &"calculus"])
//! );
//! # Ok::<(), graphscope::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    algorithms::{self, SccAlgorithm, TopoAlgorithm},
    graph::{adjacency::Graph, edge::EdgeId, node::NodeId},
    Result,
};

/// A [`Graph`] whose vertices are identified by caller-supplied keys.
///
/// # Type Parameters
///
/// * `K` - The key type; `Hash + Eq + Clone`
/// * `W` - The edge weight type
///
/// # Thread Safety
///
/// `IndexedGraph<K, W>` is `Send` and `Sync` when both `K` and `W` are.
#[derive(Debug, Clone)]
pub struct IndexedGraph<K, W = i64>
where
    K: Hash + Eq + Clone,
{
    graph: Graph<W>,
    /// Key of each vertex, indexed by `NodeId`
    keys: Vec<K>,
    nodes: HashMap<K, NodeId>,
}

impl<K, W> IndexedGraph<K, W>
where
    K: Hash + Eq + Clone,
    W: Copy,
{
    /// Creates an empty keyed graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        IndexedGraph {
            graph: Graph::new(0, directed),
            keys: Vec::new(),
            nodes: HashMap::new(),
        }
    }

    /// Creates an empty directed keyed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected keyed graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns the vertex for `key`, creating it if the key is new.
    ///
    /// Idempotent: the same key always maps to the same vertex.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node) = self.nodes.get(&key) {
            return node;
        }
        let node = self.graph.push_node();
        self.keys.push(key.clone());
        self.nodes.insert(key, node);
        node
    }

    /// Adds an edge between two keys, creating either vertex if needed.
    ///
    /// Parallel edges and self-loops are kept, exactly as on [`Graph::add_edge`].
    pub fn add_edge(&mut self, from: K, to: K, weight: W) -> EdgeId {
        let source = self.add_node(from);
        let target = self.add_node(to);
        self.graph.push_edge(source, target, weight)
    }

    /// Returns the vertex assigned to `key`.
    #[must_use]
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.nodes.get(key).copied()
    }

    /// Returns the key of `node`.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.keys.get(node.index())
    }

    /// Maps a sequence of vertices back to their keys, skipping unknown vertices.
    ///
    /// The keys borrow from the graph only, so `nodes` may be a temporary.
    #[must_use]
    pub fn keys_of(&self, nodes: &[NodeId]) -> Vec<&K> {
        nodes.iter().filter_map(|&node| self.key(node)).collect()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the underlying graph, for running any algorithm directly.
    #[must_use]
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    /// Consumes the keyed graph, returning the graph and the key of each vertex.
    #[must_use]
    pub fn into_parts(self) -> (Graph<W>, Vec<K>) {
        (self.graph, self.keys)
    }

    /// Computes the strongly connected components, as keys.
    #[must_use]
    pub fn strongly_connected_components(&self, algorithm: SccAlgorithm) -> Vec<Vec<&K>> {
        algorithms::strongly_connected_components(&self.graph, algorithm)
            .components()
            .iter()
            .map(|component| self.keys_of(component))
            .collect()
    }

    /// Computes a topological order of the keys.
    ///
    /// # Errors
    ///
    /// - [`Error::PreconditionViolated`](crate::Error::PreconditionViolated) if the graph is undirected
    /// - [`Error::CycleDetected`](crate::Error::CycleDetected) if the graph has a cycle
    pub fn topological_sort(&self, algorithm: TopoAlgorithm) -> Result<Vec<&K>> {
        let order = algorithms::topological_sort(&self.graph, algorithm)?;
        Ok(self.keys_of(order.order()))
    }

    /// Finds a cycle reachable from `key`, returned as a closed walk of keys.
    ///
    /// Returns `None` if there is no such cycle or the key is unknown.
    #[must_use]
    pub fn find_cycle_from(&self, key: &K) -> Option<Vec<&K>> {
        let start = self.node_id(key)?;
        let cycle = algorithms::find_cycle(&self.graph, start).ok()??;
        Some(self.keys_of(&cycle))
    }

    /// Returns `true` if a cycle is reachable from `key`.
    #[must_use]
    pub fn has_cycle_from(&self, key: &K) -> bool {
        self.find_cycle_from(key).is_some()
    }

    /// Finds a cycle anywhere in the graph, as keys.
    #[must_use]
    pub fn find_any_cycle(&self) -> Option<Vec<&K>> {
        let cycle = algorithms::find_any_cycle(&self.graph)?;
        Some(self.keys_of(&cycle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn create_dependency_graph() -> IndexedGraph<String> {
        let mut graph = IndexedGraph::directed();
        graph.add_edge("core".to_string(), "io".to_string(), 1);
        graph.add_edge("core".to_string(), "net".to_string(), 1);
        graph.add_edge("io".to_string(), "app".to_string(), 1);
        graph.add_edge("net".to_string(), "app".to_string(), 1);
        graph
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph: IndexedGraph<&str> = IndexedGraph::directed();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        assert_eq!(graph.add_node("a"), a);
        assert_ne!(a, b);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.graph().node_count(), 2);
        assert_eq!(graph.key(b), Some(&"b"));
        assert_eq!(graph.key(NodeId::new(5)), None);
        assert_eq!(graph.node_id(&"zzz"), None);
    }

    #[test]
    fn test_edges_create_nodes() {
        let graph = create_dependency_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.node_id(&"net".to_string()), Some(NodeId::new(2)));
        assert_eq!(graph.node_id(&"app".to_string()), Some(NodeId::new(3)));
    }

    #[test]
    fn test_topological_sort_keys() {
        let graph = create_dependency_graph();
        let order = graph.topological_sort(TopoAlgorithm::Kahn).unwrap();
        let names: Vec<&str> = order.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["core", "io", "net", "app"]);
    }

    #[test]
    fn test_cycle_reporting() {
        let mut graph = create_dependency_graph();
        assert!(!graph.has_cycle_from(&"core".to_string()));
        assert_eq!(graph.find_any_cycle(), None);

        graph.add_edge("app".to_string(), "core".to_string(), 1);
        let cycle = graph.find_cycle_from(&"io".to_string()).unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(
            graph.topological_sort(TopoAlgorithm::Dfs),
            Err(Error::CycleDetected)
        );
        assert!(graph.find_cycle_from(&"missing".to_string()).is_none());
    }

    #[test]
    fn test_scc_keys() {
        let mut graph: IndexedGraph<char> = IndexedGraph::directed();
        graph.add_edge('a', 'b', 1);
        graph.add_edge('b', 'a', 1);
        graph.add_edge('b', 'c', 1);

        let sccs = graph.strongly_connected_components(SccAlgorithm::Kosaraju);
        assert_eq!(sccs, vec![vec![&'a', &'b'], vec![&'c']]);
    }

    #[test]
    fn test_keys_outlive_node_slice() {
        let graph = create_dependency_graph();
        let keys = {
            let nodes = vec![NodeId::new(3), NodeId::new(9), NodeId::new(0)];
            graph.keys_of(&nodes)
        };
        let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["app", "core"]);
    }

    #[test]
    fn test_undirected_keyed_graph() {
        let mut graph: IndexedGraph<u32, f64> = IndexedGraph::undirected();
        graph.add_edge(10, 20, 0.5);
        let (inner, keys) = graph.into_parts();
        assert!(!inner.is_directed());
        assert_eq!(keys, vec![10, 20]);
        assert_eq!(inner.out_degree(NodeId::new(1)).unwrap(), 1);
    }
}
