mod test_utils;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use courier_core::matrix::DistanceMatrix;
use courier_optimizer::error::SolveError;
use courier_optimizer::solution::SolveStatus;
use courier_optimizer::solver::{SolverParams, Termination, solve};

use test_utils::{assert_solution_invariants, build_problem, euclidean_matrix, route_loads};

fn iteration_params(iterations: usize) -> SolverParams {
    SolverParams::with_terminations(vec![Termination::Iterations(iterations)])
}

#[test]
fn test_single_vehicle_serves_all_stops() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let problem = build_problem(matrix, vec![100.0], None, None).unwrap();

    let solution = solve(&problem, &iteration_params(1_000)).unwrap();

    assert_eq!(solution.status, SolveStatus::Completed);
    assert_eq!(solution.routes.len(), 1);
    assert_eq!(solution.served_stops(), 3);
    assert_solution_invariants(&solution, 4);

    // The unit square has a unique optimal tour of length 4.
    assert!((solution.total_distance - 4.0).abs() < 1e-6);
}

#[test]
fn test_infeasible_when_total_demand_exceeds_fleet_capacity() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let problem = build_problem(matrix, vec![20.0], Some(vec![0.0, 10.0, 15.0]), None).unwrap();

    let result = solve(&problem, &iteration_params(1_000));

    assert!(matches!(result, Err(SolveError::Infeasible(_))));
}

#[test]
fn test_infeasible_when_one_demand_exceeds_every_vehicle() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
    let problem = build_problem(matrix, vec![20.0, 25.0], Some(vec![0.0, 30.0]), None).unwrap();

    let result = solve(&problem, &iteration_params(1_000));

    assert!(matches!(result, Err(SolveError::Infeasible(_))));
}

#[test]
fn test_capacity_splits_stops_across_vehicles() {
    let matrix = euclidean_matrix(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (0.0, 1.0),
        (0.0, 2.0),
    ]);
    let demands = vec![0.0, 10.0, 10.0, 10.0, 10.0];
    let problem = build_problem(matrix, vec![25.0, 25.0], Some(demands.clone()), None).unwrap();

    let solution = solve(&problem, &iteration_params(10_000)).unwrap();

    assert_solution_invariants(&solution, 5);

    // 40 units of demand against 25 per vehicle forces a split.
    let loads = route_loads(&solution, &demands);
    assert!(loads.iter().all(|&load| load > 0.0));
    assert!(loads.iter().all(|&load| load <= 25.0 + 1e-9));
}

#[test]
fn test_two_vehicles_absorb_demands_one_cannot() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let problem = build_problem(
        Arc::clone(&matrix),
        vec![25.0, 25.0],
        Some(vec![0.0, 10.0, 15.0]),
        None,
    )
    .unwrap();

    let constructed = solve(&problem, &iteration_params(0)).unwrap();
    let improved = solve(&problem, &iteration_params(10_000)).unwrap();

    assert_solution_invariants(&improved, 3);
    assert!(improved.total_distance <= constructed.total_distance + 1e-9);
}

#[test]
fn test_improvement_never_worse_than_construction() {
    let matrix = euclidean_matrix(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (1.0, 2.0),
        (4.0, 2.0),
        (2.0, 4.0),
        (5.0, 1.0),
    ]);
    let problem = build_problem(Arc::clone(&matrix), vec![100.0, 100.0], None, None).unwrap();

    // A zero-iteration budget returns the construction solution untouched.
    let constructed = solve(&problem, &iteration_params(0)).unwrap();
    assert_eq!(constructed.status, SolveStatus::BudgetExceeded);

    let improved = solve(&problem, &iteration_params(10_000)).unwrap();
    assert_eq!(improved.status, SolveStatus::Completed);

    assert!(improved.total_distance <= constructed.total_distance + 1e-9);
    assert_solution_invariants(&improved, 6);
}

#[test]
fn test_repeated_solves_are_identical() {
    let matrix = euclidean_matrix(&[
        (0.0, 0.0),
        (1.0, 3.0),
        (4.0, 1.0),
        (2.0, 2.0),
        (5.0, 5.0),
    ]);
    let problem = build_problem(
        matrix,
        vec![30.0, 30.0],
        Some(vec![0.0, 10.0, 10.0, 10.0, 10.0]),
        None,
    )
    .unwrap();
    let params = iteration_params(10_000);

    let first = solve(&problem, &params).unwrap();
    let second = solve(&problem, &params).unwrap();

    assert_eq!(first.routes, second.routes);
    assert_eq!(first.total_distance, second.total_distance);
}

#[test]
fn test_unreachable_stop_is_infeasible() {
    let inf = f64::INFINITY;
    let matrix = Arc::new(DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, inf],
        vec![1.0, 0.0, inf],
        vec![inf, inf, 0.0],
    ]));
    let problem = build_problem(matrix, vec![100.0], None, None).unwrap();

    let result = solve(&problem, &iteration_params(1_000));

    assert!(matches!(result, Err(SolveError::Infeasible(_))));
}

#[test]
fn test_idle_vehicles_report_depot_only_routes() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
    let problem = build_problem(matrix, vec![10.0, 10.0, 10.0], None, None).unwrap();

    let solution = solve(&problem, &iteration_params(1_000)).unwrap();

    assert_eq!(solution.routes.len(), 3);
    assert_solution_invariants(&solution, 2);

    let idle: Vec<_> = solution
        .routes
        .iter()
        .filter(|route| route.stops == vec![0, 0])
        .collect();
    assert_eq!(idle.len(), 2);
    assert!(idle.iter().all(|route| route.distance == 0.0));
}

#[test]
fn test_cancellation_returns_construction_solution() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    let problem = build_problem(matrix, vec![100.0], None, None).unwrap();

    let flag = Arc::new(AtomicBool::new(true));
    let params = SolverParams {
        terminations: vec![Termination::Iterations(10_000)],
        cancellation: Some(Arc::clone(&flag)),
    };
    assert!(flag.load(Ordering::Relaxed));

    let solution = solve(&problem, &params).unwrap();

    assert_eq!(solution.status, SolveStatus::BudgetExceeded);
    assert_solution_invariants(&solution, 4);
}

#[test]
fn test_time_budget_is_respected() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let problem = build_problem(matrix, vec![100.0], None, None).unwrap();
    let params = SolverParams::with_terminations(vec![Termination::Duration(Duration::ZERO)]);

    let solution = solve(&problem, &params).unwrap();

    assert_eq!(solution.status, SolveStatus::BudgetExceeded);
    assert_solution_invariants(&solution, 3);
}

#[test]
fn test_solution_serializes_to_json() {
    let matrix = euclidean_matrix(&[(0.0, 0.0), (1.0, 0.0)]);
    let problem = build_problem(matrix, vec![10.0], None, None).unwrap();

    let solution = solve(&problem, &iteration_params(100)).unwrap();
    let json = serde_json::to_value(&solution).unwrap();

    assert_eq!(json["status"], "Completed");
    assert_eq!(json["routes"][0]["stops"], serde_json::json!([0, 1, 0]));
}
