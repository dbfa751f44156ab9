use crate::solver::solution::working_solution::RouteUpdate;

/// An evaluated, feasible candidate move. `updates` holds the replacement
/// sequence and cost for every route the move touches (one for intra-route
/// moves, two for inter-route moves).
#[derive(Debug)]
pub struct MoveOutcome {
    pub delta: f64,
    pub updates: Vec<RouteUpdate>,
    pub operator: &'static str,
}

/// Keeps the strictly better outcome; ties resolve to the earlier candidate
/// in generation order so the search stays deterministic.
pub fn consider_move(best: &mut Option<MoveOutcome>, outcome: MoveOutcome) {
    if best.as_ref().is_none_or(|best| outcome.delta < best.delta) {
        *best = Some(outcome);
    }
}
