//! Cross-algorithm correctness suite
//!
//! Exercises both engines against the same fixtures and checks the
//! properties that make the dual construction a meaningful cross-check:
//! cost agreement, spanning edge counts, acyclicity, and well-formed
//! results on disconnected and degenerate inputs.

use arbor_core::{
    is_spanning_tree, DisjointSet, KruskalEngine, MstAlgorithm, MstEngine, MstResult, PrimEngine,
    WeightedGraph,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Four vertices, known optimum of 19
fn simple_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new(4);
    graph.add_edge(0, 1, 10).unwrap();
    graph.add_edge(0, 2, 6).unwrap();
    graph.add_edge(0, 3, 5).unwrap();
    graph.add_edge(1, 3, 15).unwrap();
    graph.add_edge(2, 3, 4).unwrap();
    graph
}

/// Six vertices with weight ties across components
fn medium_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new(6);
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(0, 2, 3).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(1, 3, 2).unwrap();
    graph.add_edge(2, 3, 4).unwrap();
    graph.add_edge(3, 4, 2).unwrap();
    graph.add_edge(4, 5, 6).unwrap();
    graph
}

/// Complete graph on `n` vertices with distinct weights 1, 2, 3, ...
fn complete_graph(n: usize) -> WeightedGraph {
    let mut graph = WeightedGraph::new(n);
    let mut weight = 1;
    for i in 0..n {
        for j in (i + 1)..n {
            graph.add_edge(i, j, weight).unwrap();
            weight += 1;
        }
    }
    graph
}

/// Five vertices split into components {0, 1, 2} and {3, 4}
fn disconnected_graph() -> WeightedGraph {
    let mut graph = WeightedGraph::new(5);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(3, 4, 3).unwrap();
    graph
}

fn both_engines(graph: &WeightedGraph) -> (MstResult, MstResult) {
    (
        PrimEngine::new().find_mst(graph),
        KruskalEngine::new().find_mst(graph),
    )
}

#[test]
fn total_costs_match_between_algorithms() {
    init_logging();
    for graph in [simple_graph(), medium_graph(), complete_graph(5)] {
        let (prim, kruskal) = both_engines(&graph);
        assert_eq!(
            prim.total_cost, kruskal.total_cost,
            "engines disagree on a connected graph"
        );
    }
}

#[test]
fn connected_graphs_yield_v_minus_1_edges() {
    for graph in [simple_graph(), medium_graph(), complete_graph(5)] {
        let expected = graph.vertex_count() - 1;
        let (prim, kruskal) = both_engines(&graph);
        assert_eq!(prim.edges.len(), expected);
        assert_eq!(kruskal.edges.len(), expected);
    }
}

#[test]
fn results_are_acyclic() {
    let graph = medium_graph();
    let (prim, kruskal) = both_engines(&graph);

    for result in [prim, kruskal] {
        let mut forest = DisjointSet::new(graph.vertex_count());
        for edge in &result.edges {
            assert!(
                forest.union(edge.source, edge.destination),
                "result of {} contains a cycle",
                result.algorithm
            );
        }
    }
}

#[test]
fn results_connect_all_vertices() {
    let graph = medium_graph();
    let (prim, kruskal) = both_engines(&graph);

    for result in [prim, kruskal] {
        assert!(is_spanning_tree(&graph, &result.edges));
    }
}

#[test]
fn disconnected_graph_yields_partial_results() {
    init_logging();
    let graph = disconnected_graph();
    let (prim, kruskal) = both_engines(&graph);

    assert!(prim.edges.len() < 4);
    assert!(kruskal.edges.len() < 4);
    assert!(!is_spanning_tree(&graph, &prim.edges));
    assert!(!is_spanning_tree(&graph, &kruskal.edges));
}

#[test]
fn single_vertex_graph_yields_empty_tree() {
    let graph = WeightedGraph::new(1);
    let (prim, kruskal) = both_engines(&graph);

    for result in [prim, kruskal] {
        assert_eq!(result.edges.len(), 0);
        assert_eq!(result.total_cost, 0);
        assert!(result.is_spanning());
    }
}

#[test]
fn complete_graph_with_distinct_weights() {
    let graph = complete_graph(5);
    assert_eq!(graph.edge_count(), 10);

    let (prim, kruskal) = both_engines(&graph);
    assert_eq!(prim.edges.len(), 4);
    assert_eq!(kruskal.edges.len(), 4);
    assert_eq!(prim.total_cost, kruskal.total_cost);
}

#[test]
fn prim_results_are_reproducible() {
    let graph = medium_graph();
    let engine = PrimEngine::new();

    let first = engine.find_mst(&graph);
    let second = engine.find_mst(&graph);

    assert_eq!(first.total_cost, second.total_cost);
    assert_eq!(first.edges.len(), second.edges.len());
    assert_eq!(first.edges, second.edges);
}

#[test]
fn operation_counts_are_positive() {
    let graph = simple_graph();
    let (prim, kruskal) = both_engines(&graph);

    assert!(prim.operation_count > 0);
    assert!(kruskal.operation_count > 0);
}

#[test]
fn execution_time_is_non_negative() {
    let graph = medium_graph();
    let (prim, kruskal) = both_engines(&graph);

    assert!(prim.execution_time_ms >= 0.0);
    assert!(kruskal.execution_time_ms >= 0.0);
}

#[test]
fn sample_graph_engines_agree_on_the_optimum() {
    let graph = simple_graph();
    let (prim, kruskal) = both_engines(&graph);

    // 2-3 (4) and 0-3 (5) join first; vertex 1 is only reachable through
    // 0-1 (10), so 0-2 (6) closes a cycle and stays out
    assert_eq!(prim.total_cost, 19);
    assert_eq!(kruskal.total_cost, 19);
}

#[test]
fn dense_prim_agrees_with_both_engines() {
    for graph in [simple_graph(), medium_graph(), complete_graph(6)] {
        let dense = PrimEngine::dense().find_mst(&graph);
        let (prim, kruskal) = both_engines(&graph);

        assert_eq!(dense.total_cost, prim.total_cost);
        assert_eq!(dense.total_cost, kruskal.total_cost);
        assert!(is_spanning_tree(&graph, &dense.edges));
    }
}

#[test]
fn results_carry_the_input_dimensions() {
    let graph = simple_graph();
    let (prim, kruskal) = both_engines(&graph);

    for result in [&prim, &kruskal] {
        assert_eq!(result.vertex_count, 4);
        assert_eq!(result.edge_count, 5);
    }
    assert_eq!(prim.algorithm, MstAlgorithm::Prim);
    assert_eq!(kruskal.algorithm, MstAlgorithm::Kruskal);
}

#[test]
fn results_serialize_for_external_consumers() {
    let graph = simple_graph();
    let (prim, kruskal) = both_engines(&graph);

    let prim_json = serde_json::to_string(&prim).unwrap();
    let kruskal_json = serde_json::to_string(&kruskal).unwrap();
    assert!(prim_json.contains("\"prim\""));
    assert!(kruskal_json.contains("\"kruskal\""));

    let back: MstResult = serde_json::from_str(&prim_json).unwrap();
    assert_eq!(back.total_cost, 19);
}
