use serde::{Deserialize, Serialize};

/// Allowed arrival interval at a location. Arriving before `start` is fine,
/// the vehicle waits until the window opens; arriving after `end` is a
/// violation.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        TimeWindow { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end && !self.start.is_nan() && !self.end.is_nan()
    }

    pub fn is_satisfied(&self, arrival: f64) -> bool {
        arrival <= self.end
    }

    /// Effective service start for an arrival, accounting for waiting.
    pub fn clamp_arrival(&self, arrival: f64) -> f64 {
        arrival.max(self.start)
    }
}
