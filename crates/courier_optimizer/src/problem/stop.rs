use crate::problem::location::LocationIdx;
use crate::problem::time_window::TimeWindow;

/// A delivery stop: one non-depot location with its demand and optional
/// arrival window.
#[derive(Debug, Clone)]
pub struct Stop {
    location: LocationIdx,
    demand: f64,
    time_window: Option<TimeWindow>,
}

impl Stop {
    pub fn new(location: LocationIdx) -> Self {
        Stop {
            location,
            demand: 0.0,
            time_window: None,
        }
    }

    pub fn with_demand(mut self, demand: f64) -> Self {
        self.demand = demand;
        self
    }

    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    pub fn location(&self) -> LocationIdx {
        self.location
    }

    pub fn demand(&self) -> f64 {
        self.demand
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}
