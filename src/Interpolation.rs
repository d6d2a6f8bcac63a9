//! # Interpolation
//!
//! Polynomial interpolation through a table of `(x, y)` nodes with distinct
//! abscissae:
//! - [`lagrange`]: basis polynomials `L_i(x)` evaluated at one point
//! - [`newton_divided_differences`]: divided-difference table and Newton form
//! - [`polynomial_coefficients`]: monomial coefficients from the Vandermonde
//!   system, solved by Gauss-Jordan; evaluate them with [`evaluate_polynomial`]
use crate::LinearSystems::{LinearSystem, direct};
use crate::error::NumericError;
use crate::problem::SolveProblem;
use crate::settings::SolverSettings;
use crate::trace::{IterationRecord, Termination, Trace};
use nalgebra::{DMatrix, DVector};

/// interpolation scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationMethod {
    /// evaluate the Lagrange form at `x`
    Lagrange { x: f64 },
    /// evaluate the Newton form at `x`
    NewtonDividedDifferences { x: f64 },
    /// monomial coefficients of the interpolating polynomial
    Vandermonde,
}

fn validate_nodes(points: &[(f64, f64)]) -> Result<(), NumericError> {
    if points.is_empty() {
        return Err(NumericError::InvalidInput(
            "interpolation needs at least one node".to_string(),
        ));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(NumericError::InvalidInput(
            "interpolation nodes must be finite".to_string(),
        ));
    }
    for (i, (xi, _)) in points.iter().enumerate() {
        if points[i + 1..].iter().any(|(xj, _)| xj == xi) {
            return Err(NumericError::InvalidInput(format!(
                "duplicate abscissa x = {}",
                xi
            )));
        }
    }
    Ok(())
}

/// Lagrange form `p(x) = Σ y_i·L_i(x)`; one record per node, then `px`.
pub fn lagrange(points: &[(f64, f64)], x: f64) -> Result<Trace, NumericError> {
    validate_nodes(points)?;
    let mut trace = Trace::new("Lagrange");
    let mut px = 0.0;
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut basis = 1.0;
        for (j, (xj, _)) in points.iter().enumerate() {
            if j != i {
                basis *= (x - xj) / (xi - xj);
            }
        }
        let term = yi * basis;
        px += term;
        trace.push(
            IterationRecord::new(trace.next_step(), format!("L{}(x)", i))
                .with("xi", *xi)
                .with("yi", *yi)
                .with("L", basis)
                .with("term", term),
        );
    }
    trace.push(
        IterationRecord::new(trace.next_step(), "p(x)")
            .with("x", x)
            .with("px", px),
    );
    Ok(trace.finish(Termination::Completed))
}

/// Newton divided differences.
///
/// Record `k` (order `k`) holds the column `f0 .. f{n-k-1}` of the table; the
/// last record holds the Newton coefficients `b0 .. b{n-1}` and `px`.
pub fn newton_divided_differences(
    points: &[(f64, f64)],
    x: f64,
) -> Result<Trace, NumericError> {
    validate_nodes(points)?;
    let n = points.len();
    let mut trace = Trace::new("Newton divided differences");
    let mut column: Vec<f64> = points.iter().map(|(_, y)| *y).collect();
    let mut coefficients = vec![column[0]];

    for order in 1..n {
        let next: Vec<f64> = (0..n - order)
            .map(|i| (column[i + 1] - column[i]) / (points[i + order].0 - points[i].0))
            .collect();
        let mut record = IterationRecord::new(trace.next_step(), format!("order {}", order));
        for (i, value) in next.iter().enumerate() {
            record.push(format!("f{}", i), *value);
        }
        trace.push(record);
        coefficients.push(next[0]);
        column = next;
    }

    let mut px = coefficients[n - 1];
    for k in (0..n - 1).rev() {
        px = coefficients[k] + (x - points[k].0) * px;
    }
    let mut record = IterationRecord::new(trace.next_step(), "p(x)");
    for (k, b) in coefficients.iter().enumerate() {
        record.push(format!("b{}", k), *b);
    }
    trace.push(record.with("x", x).with("px", px));
    Ok(trace.finish(Termination::Completed))
}

/// Coefficients `a0 .. a{n-1}` of `p(x) = Σ a_k x^k` through all nodes.
///
/// The Vandermonde system is solved by Gauss-Jordan; its records are nested
/// into the returned trace.
pub fn polynomial_coefficients(
    points: &[(f64, f64)],
    settings: &SolverSettings,
) -> Result<Trace, NumericError> {
    validate_nodes(points)?;
    let n = points.len();
    let v = DMatrix::from_fn(n, n, |i, j| points[i].0.powi(j as i32));
    let y = DVector::from_iterator(n, points.iter().map(|(_, y)| *y));
    let system = LinearSystem::new(v, y)?;
    let inner = direct::gauss_jordan(&system, settings.pivot_epsilon)?;

    let mut trace = Trace::new("Vandermonde interpolation");
    trace.append_nested(&inner, "Vandermonde system");
    let mut record = IterationRecord::new(trace.next_step(), "coefficients");
    for (k, value) in inner.indexed("x", 1).iter().enumerate() {
        record.push(format!("a{}", k), *value);
    }
    trace.push(record);
    Ok(trace.finish(Termination::Completed))
}

/// Horner evaluation of `Σ a_k x^k`.
pub fn evaluate_polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, a| acc * x + a)
}

/// interpolated value from a Lagrange/Newton trace
pub fn interpolated_value(trace: &Trace) -> Option<f64> {
    trace.value("px")
}

/// node table with the scheme to apply
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationProblem {
    pub points: Vec<(f64, f64)>,
    pub method: InterpolationMethod,
}

impl SolveProblem for InterpolationProblem {
    fn solve(&self, settings: &SolverSettings) -> Result<Trace, NumericError> {
        match self.method {
            InterpolationMethod::Lagrange { x } => lagrange(&self.points, x),
            InterpolationMethod::NewtonDividedDifferences { x } => {
                newton_divided_differences(&self.points, x)
            }
            InterpolationMethod::Vandermonde => polynomial_coefficients(&self.points, settings),
        }
    }

    fn title(&self) -> String {
        let scheme = match self.method {
            InterpolationMethod::Lagrange { x } => format!("Lagrange at x = {}", x),
            InterpolationMethod::NewtonDividedDifferences { x } => {
                format!("Newton divided differences at x = {}", x)
            }
            InterpolationMethod::Vandermonde => "Vandermonde coefficients".to_string(),
        };
        format!("interpolation through {} nodes, {}", self.points.len(), scheme)
    }
}
