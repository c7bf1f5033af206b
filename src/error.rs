use thiserror::Error;

/// Validation failures surfaced to callers. Algorithmic and trivial
/// unsatisfiability are never represented here — both are reported through
/// [`crate::solver::Outcome::Unsat`] instead, as a single UNSAT marker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("literal magnitude {0} is out of range (must be 1 <= |L| < 2^31)")]
    OutOfRangeVariable(i64),
}
