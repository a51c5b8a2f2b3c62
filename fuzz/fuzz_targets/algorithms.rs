#![no_main]

use graphscope::{
    all_pairs_shortest_paths, bridges_and_articulation_points, depth_first_forest,
    minimum_spanning_tree, shortest_paths, strongly_connected_components, topological_sort, Graph,
    MstAlgorithm, NodeId, SccAlgorithm, ShortestPathAlgorithm, TopoAlgorithm,
};
use libfuzzer_sys::fuzz_target;

// Byte 0: vertex count and directedness; then (u, v, weight) triples
fuzz_target!(|data: &[u8]| {
    let Some((&header, rest)) = data.split_first() else {
        return;
    };
    let node_count = usize::from(header & 0x3f) + 1;
    let directed = header & 0x40 != 0;

    let mut graph: Graph<i32> = Graph::new(node_count, directed);
    for triple in rest.chunks_exact(3) {
        let u = NodeId::new(usize::from(triple[0]) % node_count);
        let v = NodeId::new(usize::from(triple[1]) % node_count);
        let _ = graph.add_edge(u, v, i32::from(triple[2] as i8));
    }

    let source = NodeId::new(0);
    for algorithm in [
        ShortestPathAlgorithm::Dijkstra,
        ShortestPathAlgorithm::BellmanFord,
        ShortestPathAlgorithm::Spfa,
    ] {
        let _ = shortest_paths(&graph, source, algorithm);
    }
    let _ = all_pairs_shortest_paths(&graph);

    let tarjan = strongly_connected_components(&graph, SccAlgorithm::Tarjan);
    let kosaraju = strongly_connected_components(&graph, SccAlgorithm::Kosaraju);
    assert_eq!(tarjan.partition(), kosaraju.partition());

    let _ = depth_first_forest(&graph);
    let _ = bridges_and_articulation_points(&graph);
    let _ = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal);
    let _ = minimum_spanning_tree(&graph, MstAlgorithm::Prim);

    let kahn = topological_sort(&graph, TopoAlgorithm::Kahn).is_ok();
    let dfs = topological_sort(&graph, TopoAlgorithm::Dfs).is_ok();
    assert_eq!(kahn, dfs);
});
