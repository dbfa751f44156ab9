use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    /// Malformed request data. Caller error, retrying the same input will
    /// fail again.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The constraints cannot be satisfied by any assignment. Definitive
    /// no-solution result, no partial solution is returned.
    #[error("infeasible: {0}")]
    Infeasible(String),
}
