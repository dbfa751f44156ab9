use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solver::ls::r#move::MoveOutcome;
use crate::solver::solution::route::evaluate_route;
use crate::solver::solution::working_solution::{RouteUpdate, WorkingSolution};

/// **Relocate**
///
/// Removes one stop and reinserts it at another position, within the same
/// route or into another vehicle's route.
///
/// ```text
/// BEFORE:  A -> [s] -> B ...  X -> Y
/// AFTER:   A -> B ...  X -> [s] -> Y
/// ```
pub(crate) fn generate_moves(
    problem: &VehicleRoutingProblem,
    solution: &WorkingSolution,
    consumer: &mut impl FnMut(MoveOutcome),
) {
    let fleet_size = problem.fleet().len();

    for from_index in 0..fleet_size {
        let from_vehicle = VehicleIdx::new(from_index);
        let from_route = solution.route(from_vehicle);

        for from_pos in 0..from_route.len() {
            let stop = from_route.stops()[from_pos];

            let mut removed = from_route.stops().to_vec();
            removed.remove(from_pos);

            let removed_cost = match evaluate_route(problem, from_vehicle, &removed) {
                Some(cost) => cost,
                // Removing a stop never breaks capacity or windows here, but
                // an infinite bridging leg can.
                None => continue,
            };

            for to_index in 0..fleet_size {
                let to_vehicle = VehicleIdx::new(to_index);

                if to_index == from_index {
                    for to_pos in 0..=removed.len() {
                        if to_pos == from_pos {
                            continue;
                        }

                        let mut candidate = removed.clone();
                        candidate.insert(to_pos, stop);

                        let Some(cost) = evaluate_route(problem, from_vehicle, &candidate) else {
                            continue;
                        };

                        consumer(MoveOutcome {
                            delta: cost.distance - from_route.distance(),
                            updates: vec![RouteUpdate {
                                vehicle: from_vehicle,
                                stops: candidate,
                                cost,
                            }],
                            operator: "relocate",
                        });
                    }
                } else {
                    let to_route = solution.route(to_vehicle);

                    for to_pos in 0..=to_route.len() {
                        let mut candidate = to_route.stops().to_vec();
                        candidate.insert(to_pos, stop);

                        let Some(cost) = evaluate_route(problem, to_vehicle, &candidate) else {
                            continue;
                        };

                        let delta = (removed_cost.distance + cost.distance)
                            - (from_route.distance() + to_route.distance());

                        consumer(MoveOutcome {
                            delta,
                            updates: vec![
                                RouteUpdate {
                                    vehicle: from_vehicle,
                                    stops: removed.clone(),
                                    cost: removed_cost,
                                },
                                RouteUpdate {
                                    vehicle: to_vehicle,
                                    stops: candidate,
                                    cost,
                                },
                            ],
                            operator: "inter_relocate",
                        });
                    }
                }
            }
        }
    }
}
