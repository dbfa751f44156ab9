use crate::define_index_newtype;
use crate::problem::time_window::TimeWindow;

define_index_newtype!(VehicleIdx);

#[derive(Debug, Clone)]
pub struct Vehicle {
    capacity: f64,
    /// Shift window at the depot: departure no earlier than `start`, return
    /// no later than `end`.
    time_window: Option<TimeWindow>,
}

impl Vehicle {
    pub fn new(capacity: f64) -> Self {
        Vehicle {
            capacity,
            time_window: None,
        }
    }

    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}
