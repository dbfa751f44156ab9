// Shared across test binaries; not every binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use courier_core::matrix::DistanceMatrix;
use courier_optimizer::error::SolveError;
use courier_optimizer::problem::fleet::Fleet;
use courier_optimizer::problem::time_window::TimeWindow;
use courier_optimizer::problem::vehicle::Vehicle;
use courier_optimizer::problem::vehicle_routing_problem::{
    VehicleRoutingProblem, VehicleRoutingProblemBuilder,
};
use courier_optimizer::solution::Solution;

pub fn euclidean_matrix(points: &[(f64, f64)]) -> Arc<DistanceMatrix> {
    let rows = points
        .iter()
        .map(|&(x1, y1)| {
            points
                .iter()
                .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                .collect()
        })
        .collect();

    Arc::new(DistanceMatrix::from_rows(rows))
}

pub fn build_problem(
    travel_costs: Arc<DistanceMatrix>,
    capacities: Vec<f64>,
    demands: Option<Vec<f64>>,
    time_windows: Option<Vec<Option<TimeWindow>>>,
) -> Result<VehicleRoutingProblem, SolveError> {
    let mut builder = VehicleRoutingProblemBuilder::default();

    builder.set_travel_costs(travel_costs);
    builder.set_fleet(Fleet::new(
        capacities.into_iter().map(Vehicle::new).collect(),
    ));

    if let Some(demands) = demands {
        builder.set_demands(demands);
    }

    if let Some(time_windows) = time_windows {
        builder.set_time_windows(time_windows);
    }

    builder.build()
}

/// Every stop appears in exactly one route exactly once; every route starts
/// and ends at the depot; route distances add up to the reported total.
pub fn assert_solution_invariants(solution: &Solution, num_locations: usize) {
    let mut seen = vec![0usize; num_locations];

    for route in &solution.routes {
        assert!(route.stops.len() >= 2, "route must at least visit the depot twice");
        assert_eq!(*route.stops.first().unwrap(), 0, "route must start at the depot");
        assert_eq!(*route.stops.last().unwrap(), 0, "route must end at the depot");

        for &stop in &route.stops[1..route.stops.len() - 1] {
            assert_ne!(stop, 0, "depot must not appear mid-route");
            seen[stop] += 1;
        }
    }

    for (location, &count) in seen.iter().enumerate().skip(1) {
        assert_eq!(count, 1, "stop {location} must be served exactly once");
    }

    let summed: f64 = solution.routes.iter().map(|route| route.distance).sum();
    assert!((summed - solution.total_distance).abs() < 1e-6);
}

/// Cumulative demand served by each route, indexed by vehicle.
pub fn route_loads(solution: &Solution, demands: &[f64]) -> Vec<f64> {
    solution
        .routes
        .iter()
        .map(|route| {
            route.stops[1..route.stops.len() - 1]
                .iter()
                .map(|&stop| demands[stop])
                .sum()
        })
        .collect()
}
