//! # Root Finding
//!
//! Scalar nonlinear equations `f(x) = 0`.
//!
//! ## Bracketing methods
//! - **Bisection**: midpoint of the bracket
//! - **False position**: x-intercept of the chord through the endpoints
//!
//! Both expect `f(a)·f(b) < 0` on entry. This precondition is only logged
//! when violated, never enforced. Records carry `a, b, fa, fb, xr, fxr` and,
//! from the second iteration on, `error = |xr_i - xr_{i-1}|`.
//!
//! ## Open methods
//! - **Newton-Raphson**: needs the derivative; stops with `ZeroDerivative`
//! - **Fixed point**: iterates the caller's rearrangement `x = g(x)`; stops
//!   with `Diverged` when the error grows between two iterations
//! - **Secant**: two starting points, stops with `ZeroDenominator` when
//!   `f(x_i) = f(x_{i-1})`
//!
//! Records carry the iterate(s), function value(s), `x_next` and `error`.
//!
//! All methods return a trace flagged `NotConverged` when the cap in
//! [`IterationControl`] is reached. The root estimate is read from the last
//! record by [`solution`].
use crate::error::NumericError;
use crate::functions::RealFn;
use crate::problem::SolveProblem;
use crate::settings::{IterationControl, SolverSettings};
use crate::trace::Trace;
use log::info;

pub mod bracketing;
pub mod open_methods;
mod root_finding_tests;

/// root-finding method together with its starting data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootMethod {
    Bisection { a: f64, b: f64 },
    FalsePosition { a: f64, b: f64 },
    NewtonRaphson { x0: f64 },
    FixedPoint { x0: f64 },
    Secant { x0: f64, x1: f64 },
}

impl RootMethod {
    pub fn name(&self) -> &'static str {
        match self {
            RootMethod::Bisection { .. } => "bisection",
            RootMethod::FalsePosition { .. } => "false position",
            RootMethod::NewtonRaphson { .. } => "Newton-Raphson",
            RootMethod::FixedPoint { .. } => "fixed point",
            RootMethod::Secant { .. } => "secant",
        }
    }

    pub fn is_bracketing(&self) -> bool {
        matches!(
            self,
            RootMethod::Bisection { .. } | RootMethod::FalsePosition { .. }
        )
    }
}

/// Equation `f(x) = 0` with the functions each method needs:
/// Newton-Raphson uses `derivative`, fixed point uses `iteration_fn` (the
/// rearrangement `g` with `x = g(x)`).
#[derive(Clone)]
pub struct RootProblem {
    pub f: RealFn,
    pub derivative: Option<RealFn>,
    pub iteration_fn: Option<RealFn>,
    pub method: RootMethod,
    /// overrides the tolerance from the settings
    pub tolerance: Option<f64>,
    pub description: String,
}

impl RootProblem {
    pub fn new(f: RealFn, method: RootMethod) -> Self {
        Self {
            f,
            derivative: None,
            iteration_fn: None,
            method,
            tolerance: None,
            description: String::new(),
        }
    }

    pub fn with_derivative(mut self, derivative: RealFn) -> Self {
        self.derivative = Some(derivative);
        self
    }

    pub fn with_iteration_fn(mut self, g: RealFn) -> Self {
        self.iteration_fn = Some(g);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn control(&self, settings: &SolverSettings) -> IterationControl {
        let mut control = if self.method.is_bracketing() {
            settings.bracketing
        } else {
            settings.open_methods
        };
        if let Some(tolerance) = self.tolerance {
            control.tolerance = tolerance;
        }
        control
    }
}

/// Runs the method stored in the problem.
///
/// # Arguments
/// * `problem` - equation, starting data and, where needed, `f'` or `g`
/// * `settings` - `bracketing` or `open_methods` control, unless the problem
///   overrides the tolerance; `derivative_epsilon` for Newton-Raphson
///
/// # Returns
/// * `Ok(Trace)` - `Converged`, or `NotConverged` at the iteration cap;
///   read the root with [`solution`]
/// * `Err(NumericError)` - `ZeroDerivative`, `ZeroDenominator`, `Diverged`,
///   `DomainError`, or `InvalidInput` when a required function is missing
///
/// # Example
/// ```rust, ignore
/// let problem = RootProblem::new(real_fn(|x: f64| x * x - 2.0), RootMethod::Secant { x0: 1.0, x1: 2.0 });
/// let trace = solve(&problem, &SolverSettings::default())?;
/// let root = solution(&trace); // Some(1.41421356...)
/// ```
pub fn solve(problem: &RootProblem, settings: &SolverSettings) -> Result<Trace, NumericError> {
    let control = problem.control(settings);
    if !(control.tolerance > 0.0) {
        return Err(NumericError::InvalidInput(
            "tolerance must be positive".to_string(),
        ));
    }
    let f = &*problem.f;
    let trace = match problem.method {
        RootMethod::Bisection { a, b } => bracketing::bisection(f, a, b, &control)?,
        RootMethod::FalsePosition { a, b } => bracketing::false_position(f, a, b, &control)?,
        RootMethod::NewtonRaphson { x0 } => {
            let derivative = problem.derivative.as_ref().ok_or_else(|| {
                NumericError::InvalidInput("Newton-Raphson requires a derivative".to_string())
            })?;
            open_methods::newton_raphson(
                f,
                &**derivative,
                x0,
                &control,
                settings.derivative_epsilon,
            )?
        }
        RootMethod::FixedPoint { x0 } => {
            let g = problem.iteration_fn.as_ref().ok_or_else(|| {
                NumericError::InvalidInput("fixed point requires an iteration function".to_string())
            })?;
            open_methods::fixed_point(&**g, x0, &control)?
        }
        RootMethod::Secant { x0, x1 } => open_methods::secant(f, x0, x1, &control)?,
    };
    info!(
        "{}: {} iterations, {:?}, root estimate {:?}",
        problem.method.name(),
        trace.len(),
        trace.termination(),
        solution(&trace)
    );
    Ok(trace)
}

/// root estimate from the last record
pub fn solution(trace: &Trace) -> Option<f64> {
    trace.value("xr").or_else(|| trace.value("x_next"))
}

impl SolveProblem for RootProblem {
    fn solve(&self, settings: &SolverSettings) -> Result<Trace, NumericError> {
        solve(self, settings)
    }

    fn title(&self) -> String {
        if self.description.is_empty() {
            format!("root of f(x) = 0, {}", self.method.name())
        } else {
            format!("{}, {}", self.description, self.method.name())
        }
    }
}
