pub mod construction;
pub mod ls;
pub mod solution;
pub mod solver;
pub mod solver_params;

pub use solver::solve;
pub use solver_params::{SolverParams, Termination};
