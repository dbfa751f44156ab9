use std::time::Duration;

use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solution::{Solution, SolveStatus, VehicleRoute};
use crate::solver::solution::route::{RouteCost, WorkingRoute};

/// One route per vehicle, mutated only through pre-evaluated updates so the
/// cached costs never drift from the stop sequences.
pub struct WorkingSolution {
    routes: Vec<WorkingRoute>,
}

/// A route replacement that already passed `evaluate_route`.
#[derive(Debug)]
pub struct RouteUpdate {
    pub vehicle: VehicleIdx,
    pub stops: Vec<crate::problem::location::LocationIdx>,
    pub cost: RouteCost,
}

impl WorkingSolution {
    pub fn new(fleet_size: usize) -> Self {
        WorkingSolution {
            routes: (0..fleet_size).map(|_| WorkingRoute::empty()).collect(),
        }
    }

    pub fn routes(&self) -> &[WorkingRoute] {
        &self.routes
    }

    pub fn route(&self, vehicle_id: VehicleIdx) -> &WorkingRoute {
        &self.routes[vehicle_id.get()]
    }

    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(WorkingRoute::distance).sum()
    }

    pub fn apply(&mut self, updates: Vec<RouteUpdate>) {
        for update in updates {
            self.routes[update.vehicle.get()].replace(update.stops, update.cost);
        }
    }

    /// Final output shape: depot prepended and appended to every route,
    /// including depot-only routes for idle vehicles.
    pub fn into_solution(
        self,
        problem: &VehicleRoutingProblem,
        status: SolveStatus,
        computation_time: Duration,
    ) -> Solution {
        let depot = problem.depot().get();
        let total_distance = self.total_distance();

        let routes = self
            .routes
            .into_iter()
            .enumerate()
            .map(|(vehicle, route)| {
                let mut stops = Vec::with_capacity(route.len() + 2);
                stops.push(depot);
                stops.extend(route.stops().iter().map(|location| location.get()));
                stops.push(depot);

                VehicleRoute {
                    vehicle,
                    stops,
                    distance: route.distance(),
                }
            })
            .collect();

        Solution {
            routes,
            total_distance,
            computation_time,
            status,
        }
    }
}
