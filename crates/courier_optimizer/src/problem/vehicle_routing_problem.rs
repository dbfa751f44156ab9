use std::sync::Arc;

use courier_core::matrix::DistanceMatrix;

use crate::error::SolveError;
use crate::problem::fleet::Fleet;
use crate::problem::location::{DEPOT, LocationIdx};
use crate::problem::stop::Stop;
use crate::problem::time_window::TimeWindow;
use crate::problem::vehicle::{Vehicle, VehicleIdx};

/// Immutable routing request: the distance matrix plus the stop and fleet
/// constraints. Owned for the duration of one solve; the matrix is shared
/// read-only.
pub struct VehicleRoutingProblem {
    travel_costs: Arc<DistanceMatrix>,
    // One entry per location 1..N-1, in location order
    stops: Vec<Stop>,
    fleet: Fleet,
    depot_time_window: Option<TimeWindow>,

    has_time_windows: bool,
    has_capacity: bool,
}

impl VehicleRoutingProblem {
    pub fn num_locations(&self) -> usize {
        self.travel_costs.num_locations()
    }

    pub fn depot(&self) -> LocationIdx {
        DEPOT
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, location: LocationIdx) -> &Stop {
        &self.stops[location.get() - 1]
    }

    pub fn stop_locations(&self) -> impl Iterator<Item = LocationIdx> + '_ {
        self.stops.iter().map(Stop::location)
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        self.fleet.vehicle(vehicle_id)
    }

    #[inline(always)]
    pub fn travel_distance(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.travel_costs.distance(from.get(), to.get())
    }

    /// Travel time between locations. The matrix carries a single weight per
    /// pair, so time accumulates in the same unit as distance.
    #[inline(always)]
    pub fn travel_time(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.travel_distance(from, to)
    }

    pub fn depot_time_window(&self) -> Option<&TimeWindow> {
        self.depot_time_window.as_ref()
    }

    /// Earliest departure from the depot for a vehicle.
    pub fn route_start_time(&self, vehicle_id: VehicleIdx) -> f64 {
        let depot_start = self
            .depot_time_window
            .as_ref()
            .map(TimeWindow::start)
            .unwrap_or(0.0);

        let vehicle_start = self
            .vehicle(vehicle_id)
            .time_window()
            .map(TimeWindow::start)
            .unwrap_or(0.0);

        depot_start.max(vehicle_start)
    }

    pub fn has_time_windows(&self) -> bool {
        self.has_time_windows
    }

    pub fn has_capacity(&self) -> bool {
        self.has_capacity
    }

    pub fn total_demand(&self) -> f64 {
        self.stops.iter().map(Stop::demand).sum()
    }
}

#[derive(Default)]
pub struct VehicleRoutingProblemBuilder {
    travel_costs: Option<Arc<DistanceMatrix>>,
    fleet: Option<Fleet>,
    demands: Option<Vec<f64>>,
    time_windows: Option<Vec<Option<TimeWindow>>>,
}

impl VehicleRoutingProblemBuilder {
    pub fn set_travel_costs(
        &mut self,
        travel_costs: Arc<DistanceMatrix>,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.travel_costs = Some(travel_costs);
        self
    }

    pub fn set_fleet(&mut self, fleet: Fleet) -> &mut VehicleRoutingProblemBuilder {
        self.fleet = Some(fleet);
        self
    }

    /// Demand per location, depot included at index 0 (which must be zero).
    pub fn set_demands(&mut self, demands: Vec<f64>) -> &mut VehicleRoutingProblemBuilder {
        self.demands = Some(demands);
        self
    }

    /// Arrival window per location, depot included at index 0.
    pub fn set_time_windows(
        &mut self,
        time_windows: Vec<Option<TimeWindow>>,
    ) -> &mut VehicleRoutingProblemBuilder {
        self.time_windows = Some(time_windows);
        self
    }

    pub fn build(self) -> Result<VehicleRoutingProblem, SolveError> {
        let travel_costs = self
            .travel_costs
            .ok_or_else(|| SolveError::InvalidInput("missing travel cost matrix".into()))?;

        let fleet = self
            .fleet
            .ok_or_else(|| SolveError::InvalidInput("missing fleet".into()))?;

        if fleet.is_empty() {
            return Err(SolveError::InvalidInput("fleet has no vehicles".into()));
        }

        for (index, vehicle) in fleet.vehicles().iter().enumerate() {
            if vehicle.capacity() < 0.0 || vehicle.capacity().is_nan() {
                return Err(SolveError::InvalidInput(format!(
                    "vehicle {index} has negative capacity {}",
                    vehicle.capacity()
                )));
            }
        }

        let num_locations = travel_costs.num_locations();

        // The depot at index 0 is a structural precondition
        if num_locations == 0 {
            return Err(SolveError::InvalidInput(
                "travel cost matrix has no locations".into(),
            ));
        }

        if let Some(demands) = &self.demands {
            if demands.len() != num_locations {
                return Err(SolveError::InvalidInput(format!(
                    "demands length {} does not match {} locations",
                    demands.len(),
                    num_locations
                )));
            }

            if demands[0] != 0.0 {
                return Err(SolveError::InvalidInput(
                    "depot demand must be zero".into(),
                ));
            }

            for (index, &demand) in demands.iter().enumerate() {
                if demand < 0.0 || demand.is_nan() {
                    return Err(SolveError::InvalidInput(format!(
                        "location {index} has negative demand {demand}"
                    )));
                }
            }
        }

        if let Some(time_windows) = &self.time_windows {
            if time_windows.len() != num_locations {
                return Err(SolveError::InvalidInput(format!(
                    "time windows length {} does not match {} locations",
                    time_windows.len(),
                    num_locations
                )));
            }

            for (index, window) in time_windows.iter().enumerate() {
                if let Some(window) = window
                    && !window.is_valid()
                {
                    return Err(SolveError::InvalidInput(format!(
                        "location {index} has an inverted time window [{}, {}]",
                        window.start(),
                        window.end()
                    )));
                }
            }
        }

        let depot_time_window = self
            .time_windows
            .as_ref()
            .and_then(|time_windows| time_windows[0]);

        let stops: Vec<Stop> = (1..num_locations)
            .map(|location| {
                let mut stop = Stop::new(LocationIdx::new(location));

                if let Some(demands) = &self.demands {
                    stop = stop.with_demand(demands[location]);
                }

                if let Some(time_windows) = &self.time_windows
                    && let Some(window) = time_windows[location]
                {
                    stop = stop.with_time_window(window);
                }

                stop
            })
            .collect();

        let has_capacity = stops.iter().any(|stop| stop.demand() > 0.0);
        let has_time_windows = depot_time_window.is_some()
            || stops.iter().any(|stop| stop.time_window().is_some())
            || fleet
                .vehicles()
                .iter()
                .any(|vehicle| vehicle.time_window().is_some());

        Ok(VehicleRoutingProblem {
            travel_costs,
            stops,
            fleet,
            depot_time_window,
            has_time_windows,
            has_capacity,
        })
    }
}
