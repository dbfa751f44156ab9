use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solver::ls::r#move::MoveOutcome;
use crate::solver::solution::route::evaluate_route;
use crate::solver::solution::working_solution::{RouteUpdate, WorkingSolution};

/// **Swap**
///
/// Exchanges two stops, either within one route or across two routes.
/// Ordered pairs are generated once (p1 < p2 intra, r1 < r2 inter), the
/// mirrored move is identical.
pub(crate) fn generate_moves(
    problem: &VehicleRoutingProblem,
    solution: &WorkingSolution,
    consumer: &mut impl FnMut(MoveOutcome),
) {
    let fleet_size = problem.fleet().len();

    // Intra-route swaps
    for vehicle_index in 0..fleet_size {
        let vehicle = VehicleIdx::new(vehicle_index);
        let route = solution.route(vehicle);

        for first in 0..route.len() {
            for second in first + 1..route.len() {
                let mut candidate = route.stops().to_vec();
                candidate.swap(first, second);

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
                    operator: "swap",
                });
            }
        }
    }

    // Inter-route swaps
    for first_index in 0..fleet_size {
        let first_vehicle = VehicleIdx::new(first_index);
        let first_route = solution.route(first_vehicle);

        for second_index in first_index + 1..fleet_size {
            let second_vehicle = VehicleIdx::new(second_index);
            let second_route = solution.route(second_vehicle);

            for first_pos in 0..first_route.len() {
                for second_pos in 0..second_route.len() {
                    let mut first_candidate = first_route.stops().to_vec();
                    let mut second_candidate = second_route.stops().to_vec();

                    std::mem::swap(
                        &mut first_candidate[first_pos],
                        &mut second_candidate[second_pos],
                    );

                    let Some(first_cost) =
                        evaluate_route(problem, first_vehicle, &first_candidate)
                    else {
                        continue;
                    };

                    let Some(second_cost) =
                        evaluate_route(problem, second_vehicle, &second_candidate)
                    else {
                        continue;
                    };

                    let delta = (first_cost.distance + second_cost.distance)
                        - (first_route.distance() + second_route.distance());

                    consumer(MoveOutcome {
                        delta,
                        updates: vec![
                            RouteUpdate {
                                vehicle: first_vehicle,
                                stops: first_candidate,
                                cost: first_cost,
                            },
                            RouteUpdate {
                                vehicle: second_vehicle,
                                stops: second_candidate,
                                cost: second_cost,
                            },
                        ],
                        operator: "inter_swap",
                    });
                }
            }
        }
    }
}
