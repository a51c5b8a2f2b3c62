//! Directed cycle detection.
//!
//! All functions interpret the graph through [`Successors`], i.e. as a directed
//! graph. On an undirected [`Graph`](crate::Graph) every edge is listed in both
//! directions, so any edge forms a two-vertex cycle `[u, v, u]`.
//!
//! The search is an iterative three-colour DFS: a successor that is still on
//! the active path closes a cycle.

use crate::{
    algorithms::check_node,
    graph::{NodeId, Successors},
    Result,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Returns `true` if a cycle is reachable from `start`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `start`
/// is not a vertex of the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{has_cycle, Graph, NodeId};
///
/// let dag = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)])?;
/// assert!(!has_cycle(&dag, NodeId::new(0))?);
///
/// let cyclic = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)])?;
/// assert!(has_cycle(&cyclic, NodeId::new(0))?);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn has_cycle<G: Successors>(graph: &G, start: NodeId) -> Result<bool> {
    Ok(find_cycle(graph, start)?.is_some())
}

/// Finds a cycle reachable from `start`.
///
/// The cycle is returned as a closed walk `[a, .., a]`: the first and last
/// entries are the same vertex and consecutive entries are joined by an edge.
/// A self-loop yields `[a, a]`.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if `start`
/// is not a vertex of the graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::{find_cycle, Graph, NodeId};
///
/// // 0 -> 1 -> 2 -> 1
/// let graph = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 1, 1)])?;
/// let cycle = find_cycle(&graph, NodeId::new(0))?.unwrap();
/// assert_eq!(cycle, vec![NodeId::new(1), NodeId::new(2), NodeId::new(1)]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn find_cycle<G: Successors>(graph: &G, start: NodeId) -> Result<Option<Vec<NodeId>>> {
    check_node(graph, start)?;
    Ok(search(graph, [start]))
}

/// Finds a cycle anywhere in the graph, trying start vertices in index order.
#[must_use]
pub fn find_any_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    search(graph, graph.node_ids())
}

fn search<G, I>(graph: &G, roots: I) -> Option<Vec<NodeId>>
where
    G: Successors,
    I: IntoIterator<Item = NodeId>,
{
    let mut marks = vec![Mark::Unvisited; graph.node_count()];

    for root in roots {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;

        let mut stack = vec![(root, graph.successors(root))];
        while let Some((node, successors)) = stack.last_mut() {
            let node = *node;
            let Some(next) = successors.next() else {
                marks[node.index()] = Mark::Done;
                stack.pop();
                continue;
            };

            match marks[next.index()] {
                Mark::Unvisited => {
                    marks[next.index()] = Mark::OnPath;
                    stack.push((next, graph.successors(next)));
                }
                Mark::OnPath => {
                    let from = stack.iter().position(|(n, _)| *n == next)?;
                    let mut cycle: Vec<NodeId> = stack[from..].iter().map(|(n, _)| *n).collect();
                    cycle.push(next);
                    return Some(cycle);
                }
                Mark::Done => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    fn ids(nodes: &[usize]) -> Vec<NodeId> {
        nodes.iter().copied().map(NodeId::new).collect()
    }

    fn is_closed_walk(graph: &Graph<i64>, cycle: &[NodeId]) -> bool {
        cycle.len() >= 2
            && cycle.first() == cycle.last()
            && cycle
                .windows(2)
                .all(|pair| graph.successors(pair[0]).any(|s| s == pair[1]))
    }

    #[test]
    fn test_linear_graph_has_no_cycle() {
        let graph: Graph<i64> = Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1)]).unwrap();
        assert!(!has_cycle(&graph, NodeId::new(0)).unwrap());
        assert_eq!(find_any_cycle(&graph), None);
    }

    #[test]
    fn test_diamond_is_acyclic() {
        let graph: Graph<i64> =
            Graph::from_edges(4, true, [(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]).unwrap();
        assert_eq!(find_any_cycle(&graph), None);
    }

    #[test]
    fn test_simple_cycle() {
        let graph: Graph<i64> =
            Graph::from_edges(3, true, [(0, 1, 1), (1, 2, 1), (2, 0, 1)]).unwrap();
        let cycle = find_cycle(&graph, NodeId::new(0)).unwrap().unwrap();
        assert_eq!(cycle, ids(&[0, 1, 2, 0]));
        assert!(is_closed_walk(&graph, &cycle));
    }

    #[test]
    fn test_self_loop() {
        let graph: Graph<i64> = Graph::from_edges(2, true, [(0, 1, 1), (1, 1, 1)]).unwrap();
        assert_eq!(
            find_cycle(&graph, NodeId::new(0)).unwrap().unwrap(),
            ids(&[1, 1])
        );
    }

    #[test]
    fn test_cycle_not_reachable_from_start() {
        // 0 -> 1, and a separate 2 <-> 3
        let graph: Graph<i64> =
            Graph::from_edges(4, true, [(0, 1, 1), (2, 3, 1), (3, 2, 1)]).unwrap();
        assert!(!has_cycle(&graph, NodeId::new(0)).unwrap());
        let cycle = find_any_cycle(&graph).unwrap();
        assert!(is_closed_walk(&graph, &cycle));
        assert_eq!(cycle, ids(&[2, 3, 2]));
    }

    #[test]
    fn test_undirected_edge_is_two_cycle() {
        let graph: Graph<i64> = Graph::from_edges(2, false, [(0, 1, 1)]).unwrap();
        assert_eq!(find_any_cycle(&graph).unwrap(), ids(&[0, 1, 0]));
    }

    #[test]
    fn test_invalid_start() {
        let graph: Graph<i64> = Graph::directed(2);
        assert!(has_cycle(&graph, NodeId::new(2)).is_err());
    }
}
