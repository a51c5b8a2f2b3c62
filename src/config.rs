//! Configuration for the [`Engine`](crate::Engine) façade.
//!
//! [`EngineConfig`] fixes which algorithm answers each problem and whether the
//! linear-time input checks run before Dijkstra. The free functions in
//! [`algorithms`](crate::algorithms) take their selector explicitly and are
//! not affected by it.

use crate::algorithms::{MstAlgorithm, SccAlgorithm, ShortestPathAlgorithm, TopoAlgorithm};

/// Algorithm selection and precondition checking for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Single-source shortest path algorithm (default: Dijkstra).
    pub shortest_path: ShortestPathAlgorithm,

    /// Strongly connected components algorithm (default: Tarjan).
    pub scc: SccAlgorithm,

    /// Minimum spanning tree algorithm (default: Kruskal).
    pub mst: MstAlgorithm,

    /// Topological sort algorithm (default: Kahn).
    pub topological: TopoAlgorithm,

    /// Scan edge weights for negatives before Dijkstra (default: true).
    ///
    /// The scan is O(E). With it disabled, non-negative weights become the
    /// caller's responsibility and a negative weight yields unspecified
    /// distances. Directedness checks are O(1) and always run.
    pub check_preconditions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shortest_path: ShortestPathAlgorithm::Dijkstra,
            scc: SccAlgorithm::Tarjan,
            mst: MstAlgorithm::Kruskal,
            topological: TopoAlgorithm::Kahn,
            check_preconditions: true,
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every precondition check enabled.
    ///
    /// Identical to [`EngineConfig::default`].
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration that trusts its input.
    ///
    /// The weight-sign scan before Dijkstra is skipped. Use it for graphs whose
    /// weights are non-negative by construction (hop counts, distances, latencies).
    #[must_use]
    pub fn trusted() -> Self {
        Self {
            check_preconditions: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for graphs that may carry negative weights.
    ///
    /// Shortest paths default to Bellman-Ford, which reports negative cycles
    /// instead of rejecting the graph.
    #[must_use]
    pub fn negative_weights() -> Self {
        Self {
            shortest_path: ShortestPathAlgorithm::BellmanFord,
            ..Self::default()
        }
    }

    /// Sets the single-source shortest path algorithm.
    #[must_use]
    pub fn with_shortest_path(mut self, algorithm: ShortestPathAlgorithm) -> Self {
        self.shortest_path = algorithm;
        self
    }

    /// Sets the strongly connected components algorithm.
    #[must_use]
    pub fn with_scc(mut self, algorithm: SccAlgorithm) -> Self {
        self.scc = algorithm;
        self
    }

    /// Sets the minimum spanning tree algorithm.
    #[must_use]
    pub fn with_mst(mut self, algorithm: MstAlgorithm) -> Self {
        self.mst = algorithm;
        self
    }

    /// Sets the topological sort algorithm.
    #[must_use]
    pub fn with_topological(mut self, algorithm: TopoAlgorithm) -> Self {
        self.topological = algorithm;
        self
    }

    /// Enables or disables the weight-sign scan before Dijkstra.
    #[must_use]
    pub fn with_precondition_checks(mut self, enabled: bool) -> Self {
        self.check_preconditions = enabled;
        self
    }
}
