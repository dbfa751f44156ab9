use crate::problem::location::LocationIdx;
use crate::problem::time_window::TimeWindow;
use crate::problem::vehicle::VehicleIdx;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteCost {
    pub distance: f64,
    pub load: f64,
}

impl RouteCost {
    pub const ZERO: RouteCost = RouteCost {
        distance: 0.0,
        load: 0.0,
    };
}

/// Stop sequence of one vehicle, depot excluded. The cached cost always
/// matches the sequence; both only change together through
/// `WorkingSolution::apply`.
#[derive(Debug, Clone)]
pub struct WorkingRoute {
    stops: Vec<LocationIdx>,
    cost: RouteCost,
}

impl WorkingRoute {
    pub fn empty() -> Self {
        WorkingRoute {
            stops: Vec::new(),
            cost: RouteCost::ZERO,
        }
    }

    pub fn stops(&self) -> &[LocationIdx] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn distance(&self) -> f64 {
        self.cost.distance
    }

    pub fn load(&self) -> f64 {
        self.cost.load
    }

    pub(crate) fn replace(&mut self, stops: Vec<LocationIdx>, cost: RouteCost) {
        self.stops = stops;
        self.cost = cost;
    }
}

/// Feasibility oracle for a candidate stop sequence: simulates the route for
/// `vehicle_id` and returns its cost, or `None` when any constraint fails.
///
/// Checks, in travel order: finite legs (an unreachable pair disqualifies the
/// route), cumulative load against the vehicle capacity, and arrival windows
/// with waiting allowed before a window opens. Travel time accumulates in
/// distance units.
pub fn evaluate_route(
    problem: &VehicleRoutingProblem,
    vehicle_id: VehicleIdx,
    stops: &[LocationIdx],
) -> Option<RouteCost> {
    if stops.is_empty() {
        return Some(RouteCost::ZERO);
    }

    let vehicle = problem.vehicle(vehicle_id);
    let depot = problem.depot();

    let mut distance = 0.0;
    let mut load = 0.0;
    let mut time = problem.route_start_time(vehicle_id);
    let mut previous = depot;

    for &location in stops {
        let leg = problem.travel_distance(previous, location);
        if !leg.is_finite() {
            return None;
        }

        distance += leg;
        time += leg;

        let stop = problem.stop(location);

        if let Some(window) = stop.time_window() {
            time = window.clamp_arrival(time);
            if !window.is_satisfied(time) {
                return None;
            }
        }

        load += stop.demand();
        if load > vehicle.capacity() {
            return None;
        }

        previous = location;
    }

    let closing_leg = problem.travel_distance(previous, depot);
    if !closing_leg.is_finite() {
        return None;
    }

    distance += closing_leg;
    time += closing_leg;

    let return_satisfied = |window: Option<&TimeWindow>| {
        window.map(|window| window.is_satisfied(time)).unwrap_or(true)
    };

    if !return_satisfied(problem.depot_time_window()) || !return_satisfied(vehicle.time_window()) {
        return None;
    }

    Some(RouteCost { distance, load })
}
