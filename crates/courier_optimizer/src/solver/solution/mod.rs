pub mod route;
pub mod working_solution;
