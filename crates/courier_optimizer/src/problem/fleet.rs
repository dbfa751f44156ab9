use crate::problem::vehicle::{Vehicle, VehicleIdx};

pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Fleet { vehicles }
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id.get()]
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn total_capacity(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::capacity).sum()
    }

    pub fn max_capacity(&self) -> f64 {
        self.vehicles
            .iter()
            .map(Vehicle::capacity)
            .fold(0.0, f64::max)
    }
}
