//! # graphscope Prelude
//!
//! The types and entry points most programs need, for a single glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// The graph, its identifiers and keyed construction
pub use crate::graph::{Edge, EdgeId, Graph, IndexedGraph, NodeId};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors, Weight};

// ================================================================================================
// Entry Points
// ================================================================================================

/// One entry point per problem
pub use crate::algorithms::{
    all_pairs_shortest_paths, bfs, bridges_and_articulation_points, dfs, minimum_spanning_tree,
    shortest_paths, strongly_connected_components, topological_sort,
};

/// Algorithm selectors
pub use crate::algorithms::{MstAlgorithm, SccAlgorithm, ShortestPathAlgorithm, TopoAlgorithm};

/// Result types
pub use crate::algorithms::{
    BridgesAndArticulation, DistanceMatrix, MstResult, SccResult, ShortestPaths, TopoOrder,
};

// ================================================================================================
// Configured Façade
// ================================================================================================

/// Engine and its configuration
pub use crate::{Engine, EngineConfig};
