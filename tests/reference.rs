//! Cross-checks against `petgraph` as an independent implementation, and
//! concurrent read-only use of one graph from many threads.

use std::collections::HashSet;

use graphscope::{
    bridges_and_articulation_points, connected_components, dijkstra, find_any_cycle, kruskal,
    strongly_connected_components, Graph, NodeId, SccAlgorithm,
};
use petgraph::{
    algo,
    data::Element,
    graph::{DiGraph, NodeIndex, UnGraph},
};
use proptest::prelude::*;
use rayon::prelude::*;

type EdgeList = (usize, Vec<(usize, usize, u32)>);

fn edge_list_strategy(max_nodes: usize, max_edges: usize) -> impl Strategy<Value = EdgeList> {
    (1..=max_nodes).prop_flat_map(move |node_count| {
        (
            Just(node_count),
            proptest::collection::vec((0..node_count, 0..node_count, 0u32..100), 0..=max_edges),
        )
    })
}

fn build_ours(directed: bool, (node_count, edges): &EdgeList) -> Graph<u32> {
    Graph::from_edges(*node_count, directed, edges.iter().copied()).unwrap()
}

fn build_directed_oracle((node_count, edges): &EdgeList) -> DiGraph<(), u32> {
    let mut graph = DiGraph::with_capacity(*node_count, edges.len());
    for _ in 0..*node_count {
        graph.add_node(());
    }
    for &(u, v, w) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    graph
}

fn build_undirected_oracle((node_count, edges): &EdgeList) -> UnGraph<(), u32> {
    let mut graph = UnGraph::with_capacity(*node_count, edges.len());
    for _ in 0..*node_count {
        graph.add_node(());
    }
    for &(u, v, w) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }
    graph
}

fn sorted_partition(components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut components: Vec<Vec<usize>> = components
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect();
    components.sort();
    components
}

/// Number of components of the undirected graph once `skip` (a vertex) is removed.
fn components_without(list: &EdgeList, skip: usize) -> usize {
    let (node_count, edges) = list;
    let kept = edges.iter().filter(|&&(u, v, _)| u != skip && v != skip).copied();
    let graph: Graph<u32> = Graph::from_edges(*node_count, false, kept).unwrap();
    connected_components(&graph).len() - 1
}

proptest! {
    #[test]
    fn test_dijkstra_matches_petgraph(list in edge_list_strategy(20, 60)) {
        let ours = dijkstra(&build_ours(true, &list), NodeId::new(0)).unwrap();
        let theirs = algo::dijkstra(&build_directed_oracle(&list), NodeIndex::new(0), None, |e| *e.weight());

        for v in 0..list.0 {
            prop_assert_eq!(ours.distance(NodeId::new(v)), theirs.get(&NodeIndex::new(v)).copied());
        }
    }

    #[test]
    fn test_scc_matches_petgraph(list in edge_list_strategy(25, 60)) {
        let ours = build_ours(true, &list);
        let oracle = build_directed_oracle(&list);
        let expected = sorted_partition(
            algo::kosaraju_scc(&oracle)
                .into_iter()
                .map(|component| component.into_iter().map(NodeIndex::index).collect())
                .collect(),
        );

        for algorithm in [SccAlgorithm::Tarjan, SccAlgorithm::Kosaraju] {
            let found = sorted_partition(
                strongly_connected_components(&ours, algorithm)
                    .into_components()
                    .into_iter()
                    .map(|component| component.into_iter().map(NodeId::index).collect())
                    .collect(),
            );
            prop_assert_eq!(&found, &expected);
        }
    }

    #[test]
    fn test_cycle_detection_matches_petgraph(list in edge_list_strategy(15, 25)) {
        let ours = build_ours(true, &list);
        let oracle = build_directed_oracle(&list);
        prop_assert_eq!(find_any_cycle(&ours).is_some(), algo::is_cyclic_directed(&oracle));
    }

    #[test]
    fn test_spanning_forest_weight_matches_petgraph(list in edge_list_strategy(20, 50)) {
        let ours = kruskal(&build_ours(false, &list)).unwrap();
        let oracle = build_undirected_oracle(&list);
        let expected: u32 = algo::min_spanning_tree(&oracle)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();

        prop_assert_eq!(ours.total_weight, expected);
        prop_assert_eq!(ours.edge_count() + algo::connected_components(&oracle), list.0);
    }

    #[test]
    fn test_articulation_points_by_removal(list in edge_list_strategy(12, 20)) {
        let graph = build_ours(false, &list);
        let cuts = bridges_and_articulation_points(&graph).unwrap();
        let baseline = connected_components(&graph).len();

        // A vertex is a cut vertex iff deleting it leaves more components behind
        for v in 0..list.0 {
            let isolated = !list.1.iter().any(|&(a, b, _)| (a == v) != (b == v));
            let remaining = components_without(&list, v);
            let expected = !isolated && remaining > baseline;
            prop_assert_eq!(cuts.is_articulation_point(NodeId::new(v)), expected, "vertex {}", v);
        }
    }
}

#[test]
fn test_concurrent_queries_share_one_graph() {
    // 0..400 in a ring with chords; weights from a fixed recurrence
    let node_count = 400;
    let mut graph: Graph<u64> = Graph::undirected(node_count);
    let mut seed = 17u64;
    for v in 0..node_count {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let weight = (seed >> 33) % 97 + 1;
        graph
            .add_edge(NodeId::new(v), NodeId::new((v + 1) % node_count), weight)
            .unwrap();
        graph
            .add_edge(NodeId::new(v), NodeId::new((v * 7 + 3) % node_count), weight * 2)
            .unwrap();
    }

    let sequential: Vec<_> = (0..node_count)
        .map(|s| dijkstra(&graph, NodeId::new(s)).unwrap())
        .collect();
    let parallel: Vec<_> = (0..node_count)
        .into_par_iter()
        .map(|s| dijkstra(&graph, NodeId::new(s)).unwrap())
        .collect();
    assert_eq!(sequential, parallel);

    let partitions: HashSet<Vec<Vec<NodeId>>> = (0..8)
        .into_par_iter()
        .map(|i| {
            let algorithm = if i % 2 == 0 {
                SccAlgorithm::Tarjan
            } else {
                SccAlgorithm::Kosaraju
            };
            strongly_connected_components(&graph, algorithm).partition()
        })
        .collect();
    assert_eq!(partitions.len(), 1);
}
