//! End-to-end checks: build a road graph, derive the travel cost matrix, then
//! route a fleet over it.

mod test_utils;

use std::sync::Arc;

use courier_core::graph::AdjacencyGraph;
use courier_core::matrix::{FallbackParams, compute_distance_matrix_with_fallback};
use courier_optimizer::solution::SolveStatus;
use courier_optimizer::solver::{SolverParams, Termination, solve};

use test_utils::{assert_solution_invariants, build_problem};

/// Bidirectional ring 0-1-2-3-0 with unit weights plus a shortcut 0 -> 2.
fn ring_graph() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new(4);

    for (from, to, weight) in [
        (0, 1, 1.0),
        (1, 0, 1.0),
        (1, 2, 1.0),
        (2, 1, 1.0),
        (2, 3, 1.0),
        (3, 2, 1.0),
        (3, 0, 1.0),
        (0, 3, 1.0),
        (0, 2, 1.5),
    ] {
        graph.add_edge(from, to, weight, vec![]).unwrap();
    }

    graph
}

#[test]
fn test_graph_matrix_and_solver_compose() {
    let graph = ring_graph();
    let (result, stats) = compute_distance_matrix_with_fallback(
        &graph,
        &[0, 1, 2, 3],
        false,
        FallbackParams::default(),
    )
    .unwrap();

    // Ring is strongly connected, no patching needed.
    assert_eq!(stats.total(), 0);
    assert_eq!(result.matrix.distance(0, 2), 1.5);
    assert_eq!(result.matrix.distance(2, 0), 2.0);

    let problem = build_problem(
        Arc::new(result.matrix),
        vec![100.0],
        Some(vec![0.0, 1.0, 1.0, 1.0]),
        None,
    )
    .unwrap();

    let params = SolverParams::with_terminations(vec![Termination::Iterations(10_000)]);
    let solution = solve(&problem, &params).unwrap();

    assert_eq!(solution.status, SolveStatus::Completed);
    assert_solution_invariants(&solution, 4);

    // Walking the ring 0 -> 1 -> 2 -> 3 -> 0 is optimal at 4.0; the shortcut
    // never beats it.
    assert!((solution.total_distance - 4.0).abs() < 1e-6);
}
