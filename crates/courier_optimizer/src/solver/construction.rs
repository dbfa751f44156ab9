use tracing::{debug, instrument};

use crate::error::SolveError;
use crate::problem::location::LocationIdx;
use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solver::solution::route::{RouteCost, evaluate_route};
use crate::solver::solution::working_solution::{RouteUpdate, WorkingSolution};

struct BestInsertion {
    delta: f64,
    unassigned_index: usize,
    vehicle: VehicleIdx,
    stops: Vec<LocationIdx>,
    cost: RouteCost,
}

/// Greedy cheapest insertion: repeatedly place the (stop, vehicle, position)
/// triple with the smallest feasible marginal distance increase.
///
/// Candidates are scanned in ascending stop, vehicle, then position order
/// with strict improvement, so equal-cost insertions resolve to the lowest
/// indices. Deterministic for identical inputs.
#[instrument(skip_all, level = "debug")]
pub fn construct_solution(
    problem: &VehicleRoutingProblem,
) -> Result<WorkingSolution, SolveError> {
    let mut solution = WorkingSolution::new(problem.fleet().len());
    let mut unassigned: Vec<LocationIdx> = problem.stop_locations().collect();

    while !unassigned.is_empty() {
        let mut best: Option<BestInsertion> = None;

        for (unassigned_index, &stop) in unassigned.iter().enumerate() {
            for vehicle_index in 0..problem.fleet().len() {
                let vehicle = VehicleIdx::new(vehicle_index);
                let route = solution.route(vehicle);

                for position in 0..=route.len() {
                    let mut candidate = route.stops().to_vec();
                    candidate.insert(position, stop);

                    let Some(cost) = evaluate_route(problem, vehicle, &candidate) else {
                        continue;
                    };

                    let delta = cost.distance - route.distance();

                    if best.as_ref().is_none_or(|best| delta < best.delta) {
                        best = Some(BestInsertion {
                            delta,
                            unassigned_index,
                            vehicle,
                            stops: candidate,
                            cost,
                        });
                    }
                }
            }
        }

        let Some(best) = best else {
            return Err(SolveError::Infeasible(format!(
                "stop {} cannot be feasibly assigned to any vehicle",
                unassigned[0]
            )));
        };

        let stop = unassigned.remove(best.unassigned_index);

        debug!(
            stop = stop.get(),
            vehicle = best.vehicle.get(),
            delta = best.delta,
            "inserted stop"
        );

        solution.apply(vec![RouteUpdate {
            vehicle: best.vehicle,
            stops: best.stops,
            cost: best.cost,
        }]);
    }

    Ok(solution)
}
