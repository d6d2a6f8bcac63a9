//! # Error Types
//!
//! Every solver in the crate returns `Result<Trace, NumericError>`. A hard
//! numeric failure (vanishing pivot, derivative or denominator, a caller
//! function leaving its domain) stops the computation and is reported here.
//!
//! Reaching the iteration cap is deliberately NOT an error: the partial
//! trace is still useful, so it is returned with
//! [`Termination::NotConverged`](crate::trace::Termination::NotConverged).
use thiserror::Error;

/// error kinds produced by the numerical kernel
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("singular matrix: zero pivot in row {row}")]
    SingularMatrix { row: usize },
    #[error("derivative vanished at x = {x} (iteration {iteration})")]
    ZeroDerivative { iteration: usize, x: f64 },
    #[error("zero denominator at iteration {iteration}")]
    ZeroDenominator { iteration: usize },
    #[error("iteration diverged at step {iteration}: error grew from {previous} to {current}")]
    Diverged {
        iteration: usize,
        previous: f64,
        current: f64,
    },
    #[error("order {order} is not supported by {family}")]
    UnsupportedOrder { family: &'static str, order: usize },
    #[error("domain error: {0}")]
    DomainError(String),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
