use courier_core::stopwatch::Stopwatch;
use tracing::{debug, instrument};

use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solution::SolveStatus;
use crate::solver::ls::r#move::{MoveOutcome, consider_move};
use crate::solver::ls::{relocate, swap, two_opt};
use crate::solver::solution::working_solution::WorkingSolution;
use crate::solver::solver_params::SolverParams;

/// Deltas above this threshold are treated as noise, not improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Best-improvement local search over relocate, swap and 2-opt moves.
///
/// Each iteration scans every candidate move in a fixed operator and index
/// order, applies the single best strictly-improving one, and repeats until
/// convergence or until the budget expires. The running solution is passed
/// explicitly through every step; there is no shared search state.
pub struct LocalSearch;

impl LocalSearch {
    pub fn new() -> Self {
        LocalSearch
    }

    #[instrument(skip_all, level = "debug")]
    pub fn improve(
        &self,
        problem: &VehicleRoutingProblem,
        solution: &mut WorkingSolution,
        params: &SolverParams,
        stopwatch: &Stopwatch,
    ) -> SolveStatus {
        let mut iterations = 0;

        loop {
            if params.is_cancelled() || params.is_exhausted(iterations, stopwatch.elapsed()) {
                debug!(iterations, "improvement budget exhausted");
                return SolveStatus::BudgetExceeded;
            }

            let mut best: Option<MoveOutcome> = None;

            relocate::generate_moves(problem, solution, &mut |outcome| {
                consider_move(&mut best, outcome)
            });
            swap::generate_moves(problem, solution, &mut |outcome| {
                consider_move(&mut best, outcome)
            });
            two_opt::generate_moves(problem, solution, &mut |outcome| {
                consider_move(&mut best, outcome)
            });

            match best {
                Some(best) if best.delta < -IMPROVEMENT_EPSILON => {
                    debug!(
                        operator = best.operator,
                        delta = best.delta,
                        total = solution.total_distance(),
                        "applying move"
                    );
                    solution.apply(best.updates);
                    iterations += 1;
                }
                _ => {
                    debug!(iterations, "local search converged");
                    return SolveStatus::Completed;
                }
            }
        }
    }
}

impl Default for LocalSearch {
    fn default() -> Self {
        Self::new()
    }
}
