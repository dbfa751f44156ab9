use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum Termination {
    /// Applied local-search moves.
    Iterations(usize),
    /// Wall-clock budget for the whole solve.
    Duration(Duration),
}

#[derive(Clone, Default)]
pub struct SolverParams {
    pub terminations: Vec<Termination>,
    /// Checked between improvement iterations; when set, the solver returns
    /// the best solution found so far with a `BudgetExceeded` status.
    pub cancellation: Option<Arc<AtomicBool>>,
}

impl SolverParams {
    pub fn with_terminations(terminations: Vec<Termination>) -> Self {
        SolverParams {
            terminations,
            cancellation: None,
        }
    }

    pub fn production_defaults() -> Self {
        SolverParams {
            terminations: vec![
                Termination::Iterations(100_000),
                Termination::Duration(Duration::from_secs(30)),
            ],
            cancellation: None,
        }
    }

    pub fn is_exhausted(&self, iterations: usize, elapsed: Duration) -> bool {
        self.terminations.iter().any(|termination| match termination {
            Termination::Iterations(max) => iterations >= *max,
            Termination::Duration(max) => elapsed >= *max,
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}
