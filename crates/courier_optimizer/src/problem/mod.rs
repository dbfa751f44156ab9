pub mod fleet;
pub mod location;
pub mod stop;
pub mod time_window;
pub mod vehicle;
pub mod vehicle_routing_problem;
