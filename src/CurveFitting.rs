//! # Curve Fitting
//!
//! Least-squares fitting of a table of `(x, y)` points to
//! - a straight line, quadratic or cubic polynomial
//! - a straight line or quadratic plus one caller-supplied basis function
//!   `φ(x)`: `y ≈ a0 + a1·x (+ a2·x²) + a_m·φ(x)`
//!
//! The normal equations are assembled from power sums (`Σx^k`, `Σx^k·y`) and,
//! for basis models, the mixed sums `Σx^k·φ`, `Σφ²`, `Σφ·y`. They are solved
//! with Gauss-Jordan, whose records are nested into the fit trace. The last
//! record holds the coefficients `a0 .. a_m`.
//!
//! Fitting and evaluating are separate steps: [`fit`] produces coefficients,
//! [`evaluate`] applies them at a given `x`.
use crate::error::NumericError;
use crate::functions::{RealFn, checked_eval};
use crate::problem::SolveProblem;
use crate::settings::SolverSettings;
use crate::trace::Trace;
use std::fmt;

pub mod least_squares;
mod curve_fitting_tests;

pub use least_squares::{FitStatistics, fit, fit_statistics};

/// model to fit
#[derive(Clone)]
pub enum FitModel {
    Linear,
    Quadratic,
    Cubic,
    /// `a0 + a1·x + a2·φ(x)`
    LinearWithBasis(RealFn),
    /// `a0 + a1·x + a2·x² + a3·φ(x)`
    QuadraticWithBasis(RealFn),
}

impl fmt::Debug for FitModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FitModel {
    pub fn name(&self) -> &'static str {
        match self {
            FitModel::Linear => "linear",
            FitModel::Quadratic => "quadratic",
            FitModel::Cubic => "cubic",
            FitModel::LinearWithBasis(_) => "linear with basis function",
            FitModel::QuadraticWithBasis(_) => "quadratic with basis function",
        }
    }

    /// degree of the polynomial part
    pub fn degree(&self) -> usize {
        match self {
            FitModel::Linear | FitModel::LinearWithBasis(_) => 1,
            FitModel::Quadratic | FitModel::QuadraticWithBasis(_) => 2,
            FitModel::Cubic => 3,
        }
    }

    pub fn basis(&self) -> Option<&RealFn> {
        match self {
            FitModel::LinearWithBasis(phi) | FitModel::QuadraticWithBasis(phi) => Some(phi),
            _ => None,
        }
    }

    /// number of coefficients
    pub fn terms(&self) -> usize {
        self.degree() + 1 + usize::from(self.basis().is_some())
    }
}

/// fitted coefficients `a0 .. a_m` from the last record
pub fn coefficients(trace: &Trace) -> Vec<f64> {
    trace.indexed("a", 0)
}

/// Evaluates the fitted model at `x`.
pub fn evaluate(model: &FitModel, coefficients: &[f64], x: f64) -> Result<f64, NumericError> {
    if coefficients.len() != model.terms() {
        return Err(NumericError::DimensionMismatch(format!(
            "{} model takes {} coefficients, got {}",
            model.name(),
            model.terms(),
            coefficients.len()
        )));
    }
    let degree = model.degree();
    let mut value = 0.0;
    for (k, a) in coefficients.iter().take(degree + 1).enumerate() {
        value += a * x.powi(k as i32);
    }
    if let Some(phi) = model.basis() {
        value += coefficients[degree + 1] * checked_eval(&**phi, x)?;
    }
    Ok(value)
}

/// data table paired with the model to fit
#[derive(Clone, Debug)]
pub struct FitProblem {
    pub points: Vec<(f64, f64)>,
    pub model: FitModel,
}

impl FitProblem {
    pub fn new(points: Vec<(f64, f64)>, model: FitModel) -> Self {
        Self { points, model }
    }
}

impl SolveProblem for FitProblem {
    fn solve(&self, settings: &SolverSettings) -> Result<Trace, NumericError> {
        fit(&self.points, &self.model, settings)
    }

    fn title(&self) -> String {
        format!(
            "least-squares {} fit of {} points",
            self.model.name(),
            self.points.len()
        )
    }
}
