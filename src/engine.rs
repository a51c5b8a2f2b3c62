//! Configured entry points.
//!
//! [`Engine`] answers each problem with the algorithm chosen in its
//! [`EngineConfig`], so callers pick algorithms once instead of at every call
//! site. The engine holds no graph and no state beyond its configuration; one
//! engine can serve any number of graphs and threads.
//!
//! # Examples
//!
//! ```rust
//! use graphscope::{Engine, EngineConfig, Error, Graph, NodeId};
//!
//! let graph = Graph::from_edges(3, true, [(0, 1, 4), (0, 2, 5), (2, 1, -3)])?;
//!
//! // Dijkstra refuses the negative edge
//! let strict = Engine::default();
//! assert!(matches!(
//!     strict.shortest_paths(&graph, NodeId::new(0)),
//!     Err(Error::PreconditionViolated(_))
//! ));
//!
//! let engine = Engine::new(EngineConfig::negative_weights());
//! let paths = engine.shortest_paths(&graph, NodeId::new(0))?;
//! assert_eq!(paths.distance(NodeId::new(1)), Some(2));
//! # Ok::<(), graphscope::Error>(())
//! ```

use crate::{
    algorithms::{
        self, BridgesAndArticulation, DistanceMatrix, MstResult, SccResult, ShortestPaths,
        TopoOrder,
    },
    config::EngineConfig,
    graph::{Graph, NodeId, Successors, Weight},
    Result,
};

/// Dispatches every problem to the algorithm selected by its configuration.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Single-source shortest paths with the configured algorithm.
    ///
    /// With [`EngineConfig::check_preconditions`] off, Dijkstra skips its
    /// negative-weight scan.
    ///
    /// # Errors
    ///
    /// See [`shortest_paths`](crate::shortest_paths).
    pub fn shortest_paths<W: Weight>(
        &self,
        graph: &Graph<W>,
        source: NodeId,
    ) -> Result<ShortestPaths<W>> {
        algorithms::run_shortest_paths(
            graph,
            source,
            self.config.shortest_path,
            self.config.check_preconditions,
        )
    }

    /// All-pairs shortest paths (Floyd-Warshall).
    ///
    /// # Errors
    ///
    /// See [`all_pairs_shortest_paths`](crate::all_pairs_shortest_paths).
    pub fn all_pairs_shortest_paths<W: Weight>(&self, graph: &Graph<W>) -> Result<DistanceMatrix<W>> {
        algorithms::all_pairs_shortest_paths(graph)
    }

    /// Strongly connected components with the configured algorithm.
    pub fn strongly_connected_components<G: Successors>(&self, graph: &G) -> SccResult {
        algorithms::strongly_connected_components(graph, self.config.scc)
    }

    /// Bridges and articulation points of an undirected graph.
    ///
    /// # Errors
    ///
    /// See [`bridges_and_articulation_points`](crate::bridges_and_articulation_points).
    pub fn bridges_and_articulation_points<W: Copy>(
        &self,
        graph: &Graph<W>,
    ) -> Result<BridgesAndArticulation> {
        algorithms::bridges_and_articulation_points(graph)
    }

    /// Minimum spanning tree with the configured algorithm.
    ///
    /// # Errors
    ///
    /// See [`minimum_spanning_tree`](crate::minimum_spanning_tree).
    pub fn minimum_spanning_tree<W: Weight>(&self, graph: &Graph<W>) -> Result<MstResult<W>> {
        algorithms::minimum_spanning_tree(graph, self.config.mst)
    }

    /// Topological order with the configured algorithm.
    ///
    /// # Errors
    ///
    /// See [`topological_sort`](crate::topological_sort).
    pub fn topological_sort<G: Successors>(&self, graph: &G) -> Result<TopoOrder> {
        algorithms::topological_sort(graph, self.config.topological)
    }
}
