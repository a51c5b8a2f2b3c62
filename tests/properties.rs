//! Property tests: independent algorithms for the same problem must agree.

use graphscope::{
    bellman_ford, dijkstra, find_any_cycle, floyd_warshall, kahn, kosaraju, kruskal, prim, spfa,
    tarjan, dfs_order, Error, Graph, NodeId,
};
use proptest::prelude::*;

/// Raw material for a graph: vertex count plus edges reduced modulo it.
fn graph_strategy(
    directed: bool,
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = Graph<i64>> {
    (1..=max_nodes).prop_flat_map(move |node_count| {
        proptest::collection::vec((0..node_count, 0..node_count, 0i64..50), 0..=max_edges)
            .prop_map(move |edges| Graph::from_edges(node_count, directed, edges).unwrap())
    })
}

/// Undirected graphs made connected by a random spanning path.
fn connected_strategy(max_nodes: usize) -> impl Strategy<Value = Graph<i64>> {
    (2..=max_nodes).prop_flat_map(|node_count| {
        (
            proptest::collection::vec(0i64..20, node_count - 1),
            proptest::collection::vec((0..node_count, 0..node_count, 0i64..20), 0..3 * node_count),
        )
            .prop_map(move |(path, extra)| {
                let spine = path.into_iter().enumerate().map(|(i, w)| (i, i + 1, w));
                Graph::from_edges(node_count, false, spine.chain(extra)).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn test_scc_partitions_agree(graph in graph_strategy(true, 25, 60)) {
        let t = tarjan(&graph);
        let k = kosaraju(&graph);
        prop_assert_eq!(t.partition(), k.partition());

        // Every vertex belongs to exactly one component
        let mut seen = vec![0usize; graph.node_count()];
        for component in t.components() {
            for node in component {
                seen[node.index()] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
        for node in graph.node_ids() {
            prop_assert!(t.component_of(node).is_some());
        }
    }

    #[test]
    fn test_condensation_is_acyclic(graph in graph_strategy(true, 20, 50)) {
        let sccs = tarjan(&graph);
        let dag = sccs.condensation(&graph);
        prop_assert!(find_any_cycle(&dag).is_none());
        prop_assert!(kahn(&dag).is_ok());
    }

    #[test]
    fn test_mst_total_weight_agrees(graph in connected_strategy(20)) {
        let k = kruskal(&graph).unwrap();
        let p = prim(&graph).unwrap();
        prop_assert_eq!(k.total_weight, p.total_weight);
        prop_assert!(k.is_spanning_tree(graph.node_count()));
        prop_assert!(p.is_spanning_tree(graph.node_count()));
    }

    #[test]
    fn test_single_source_algorithms_agree(graph in graph_strategy(true, 20, 60)) {
        let source = NodeId::new(0);
        let d = dijkstra(&graph, source).unwrap();
        let b = bellman_ford(&graph, source).unwrap();
        let s = spfa(&graph, source).unwrap();
        prop_assert_eq!(d.distances(), b.distances());
        prop_assert_eq!(d.distances(), s.distances());

        // Every reconstructed path runs from the source to its target
        for node in graph.node_ids() {
            if let Some(path) = d.path_to(node) {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&node));
            }
        }
    }

    #[test]
    fn test_floyd_warshall_rows_match_dijkstra(graph in graph_strategy(false, 15, 40)) {
        let matrix = floyd_warshall(&graph).unwrap();
        for source in graph.node_ids() {
            let single = dijkstra(&graph, source).unwrap();
            prop_assert_eq!(matrix.row(source).unwrap(), single.distances());
        }
    }

    #[test]
    fn test_topological_sorts_classify_cycles_alike(graph in graph_strategy(true, 15, 30)) {
        let by_kahn = kahn(&graph);
        let by_dfs = dfs_order(&graph);
        let cyclic = find_any_cycle(&graph).is_some();

        prop_assert_eq!(by_kahn.is_err(), cyclic);
        prop_assert_eq!(by_dfs.is_err(), cyclic);
        if let (Ok(a), Ok(b)) = (&by_kahn, &by_dfs) {
            prop_assert!(a.respects(&graph));
            prop_assert!(b.respects(&graph));
        } else {
            prop_assert_eq!(by_kahn.as_ref().err(), Some(&Error::CycleDetected));
        }
    }

    #[test]
    fn test_algorithms_are_idempotent(graph in graph_strategy(true, 15, 40)) {
        let source = NodeId::new(0);
        prop_assert_eq!(tarjan(&graph), tarjan(&graph));
        prop_assert_eq!(bellman_ford(&graph, source), bellman_ford(&graph, source));
        prop_assert_eq!(floyd_warshall(&graph), floyd_warshall(&graph));
        prop_assert_eq!(kahn(&graph), kahn(&graph));
    }
}
