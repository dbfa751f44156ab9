pub mod error;
pub mod problem;
pub mod solution;
pub mod solver;
pub mod utils;
