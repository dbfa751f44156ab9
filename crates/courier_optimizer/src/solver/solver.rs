use courier_core::stopwatch::Stopwatch;
use tracing::{debug, info, instrument};

use crate::error::SolveError;
use crate::problem::vehicle_routing_problem::VehicleRoutingProblem;
use crate::solution::Solution;
use crate::solver::construction::construct_solution;
use crate::solver::ls::local_search::LocalSearch;
use crate::solver::solver_params::SolverParams;

/// Solves the routing problem in two phases: greedy cheapest-insertion
/// construction, then best-improvement local search bounded by the params'
/// budget. Deterministic for identical inputs and budgets.
#[instrument(skip_all, fields(stops = problem.stops().len(), vehicles = problem.fleet().len()))]
pub fn solve(
    problem: &VehicleRoutingProblem,
    params: &SolverParams,
) -> Result<Solution, SolveError> {
    let stopwatch = Stopwatch::new("solve_vrp");

    check_aggregate_feasibility(problem)?;

    let mut solution = construct_solution(problem)?;

    debug!(
        construction_distance = solution.total_distance(),
        "construction phase done"
    );

    let status = LocalSearch::new().improve(problem, &mut solution, params, &stopwatch);

    info!(
        total_distance = solution.total_distance(),
        status = ?status,
        elapsed = ?stopwatch.elapsed(),
        "solve finished"
    );

    Ok(solution.into_solution(problem, status, stopwatch.elapsed()))
}

/// Cheap necessary conditions checked before any search runs, so obviously
/// impossible demand profiles fail fast instead of exhausting insertion
/// candidates.
fn check_aggregate_feasibility(problem: &VehicleRoutingProblem) -> Result<(), SolveError> {
    if !problem.has_capacity() {
        return Ok(());
    }

    let total_demand = problem.total_demand();
    let total_capacity = problem.fleet().total_capacity();

    if total_demand > total_capacity {
        return Err(SolveError::Infeasible(format!(
            "total demand {total_demand} exceeds total fleet capacity {total_capacity}"
        )));
    }

    let max_capacity = problem.fleet().max_capacity();

    for stop in problem.stops() {
        if stop.demand() > max_capacity {
            return Err(SolveError::Infeasible(format!(
                "stop {} demand {} exceeds every vehicle capacity (max {max_capacity})",
                stop.location(),
                stop.demand()
            )));
        }
    }

    Ok(())
}
