use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solver::ls::r#move::MoveOutcome;
use crate::solver::solution::route::evaluate_route;
use crate::solver::solution::working_solution::{RouteUpdate, WorkingSolution};

/// **2-opt**
///
/// Reverses a segment of one route, removing a crossing:
///
/// ```text
/// BEFORE:  A -> [i .. j] -> B
/// AFTER:   A -> [j .. i] -> B
/// ```
///
/// The candidate is re-simulated in full because reversal changes every leg
/// of the segment on asymmetric matrices and shifts all later arrivals.
pub(crate) fn generate_moves(
    problem: &VehicleRoutingProblem,
    solution: &WorkingSolution,
    consumer: &mut impl FnMut(MoveOutcome),
) {
    for vehicle_index in 0..problem.fleet().len() {
        let vehicle = VehicleIdx::new(vehicle_index);
        let route = solution.route(vehicle);

        for from in 0..route.len() {
            for to in from + 1..route.len() {
                let mut candidate = route.stops().to_vec();
                candidate[from..=to].reverse();

                let Some(cost) = evaluate_route(problem, vehicle, &candidate) else {
                    continue;
                };

                consumer(MoveOutcome {
                    delta: cost.distance - route.distance(),
                    updates: vec![RouteUpdate {
                        vehicle,
                        stops: candidate,
                        cost,
                    }],
                    operator: "two_opt",
                });
            }
        }
    }
}
