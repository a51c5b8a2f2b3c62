use thiserror::Error;

/// Builds an [`Error::PreconditionViolated`] from a message or format string.
///
/// Keeps the call sites in the algorithm modules to a single line while still
/// producing a descriptive message.
macro_rules! precondition_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::PreconditionViolated($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::PreconditionViolated(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every fallible entry point of the engine returns this type. Two of the variants,
/// [`Error::NegativeCycleDetected`] and [`Error::CycleDetected`], are not malfunctions but
/// typed outcomes of a well-formed computation: they tell the caller that the requested
/// answer does not exist for the given input. No partial result accompanies them.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::IndexOutOfRange`] - A vertex index outside `[0, V)` was passed to an API
/// - [`Error::PreconditionViolated`] - The graph does not satisfy the algorithm's precondition
///
/// ## Outcome Markers
/// - [`Error::NegativeCycleDetected`] - Shortest distances are undefined
/// - [`Error::CycleDetected`] - No topological order exists
///
/// # Examples
///
/// ```rust
/// use graphscope::{shortest_paths, Error, Graph, NodeId, ShortestPathAlgorithm};
///
/// let mut graph: Graph<i64> = Graph::directed(3);
/// graph.add_edge(NodeId::new(0), NodeId::new(1), 1)?;
/// graph.add_edge(NodeId::new(1), NodeId::new(2), -1)?;
/// graph.add_edge(NodeId::new(2), NodeId::new(0), -1)?;
///
/// match shortest_paths(&graph, NodeId::new(0), ShortestPathAlgorithm::BellmanFord) {
///     Ok(paths) => println!("distance to 2: {:?}", paths.distance(NodeId::new(2))),
///     Err(Error::NegativeCycleDetected) => println!("no shortest paths exist"),
///     Err(e) => println!("Error: {}", e),
/// }
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex index outside `[0, V)` was passed to an API.
    ///
    /// Raised before any mutation takes place, so a failed `add_edge` leaves the
    /// graph exactly as it was.
    ///
    /// # Fields
    ///
    /// * `vertex` - The offending raw index
    /// * `vertex_count` - The number of vertices of the graph it was checked against
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending raw vertex index
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// The input graph violates a documented precondition of the algorithm.
    ///
    /// Examples are Dijkstra on a graph with a negative edge weight, or a minimum
    /// spanning tree requested for a directed graph. Only preconditions that are
    /// cheap to detect are checked; the remaining ones are caller responsibility.
    #[error("Precondition violated - {0}")]
    PreconditionViolated(String),

    /// A negative-weight cycle is reachable, so shortest distances are undefined.
    ///
    /// Reported by Bellman-Ford, SPFA and Floyd-Warshall, also when a distance falls
    /// below the smallest value of the weight type. The working distances at the
    /// time of detection are discarded.
    #[error("graph contains a negative-weight cycle")]
    NegativeCycleDetected,

    /// The directed graph contains a cycle, so no topological order exists.
    ///
    /// The partial order built before detection is discarded.
    #[error("graph contains a cycle, no topological order exists")]
    CycleDetected,
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] for `vertex` in a graph of `vertex_count` vertices.
    #[must_use]
    pub(crate) const fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Error::IndexOutOfRange {
            vertex,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph with 3 vertices"
        );
    }

    #[test]
    fn test_precondition_macro() {
        let err = precondition_error!("edge {} has negative weight {}", 4, -2);
        assert_eq!(
            err,
            Error::PreconditionViolated("edge 4 has negative weight -2".to_string())
        );

        let err = precondition_error!("graph must be undirected");
        assert!(err.to_string().contains("graph must be undirected"));
    }

    #[test]
    fn test_outcome_messages() {
        assert!(Error::NegativeCycleDetected
            .to_string()
            .contains("negative-weight cycle"));
        assert!(Error::CycleDetected.to_string().contains("cycle"));
    }
}
