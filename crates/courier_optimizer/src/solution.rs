use std::time::Duration;

use serde::Serialize;

/// Visiting order for one vehicle, depot at both ends. A vehicle with no
/// assignment yields `[0, 0]` with distance zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRoute {
    pub vehicle: usize,
    pub stops: Vec<usize>,
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    /// Local search converged, no improving move remained.
    Completed,
    /// The iteration/time budget expired or the solve was cancelled; this is
    /// the best feasible solution found so far.
    BudgetExceeded,
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub routes: Vec<VehicleRoute>,
    pub total_distance: f64,
    pub computation_time: Duration,
    pub status: SolveStatus,
}

impl Solution {
    /// Number of distinct stops served across all routes.
    pub fn served_stops(&self) -> usize {
        self.routes
            .iter()
            .map(|route| route.stops.len().saturating_sub(2))
            .sum()
    }
}
