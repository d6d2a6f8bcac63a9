use super::{FitModel, evaluate};
use crate::LinearSystems::{LinearSystem, direct};
use crate::error::NumericError;
use crate::functions::checked_eval;
use crate::settings::SolverSettings;
use crate::trace::{IterationRecord, Termination, Trace};
use log::info;
use nalgebra::{DMatrix, DVector};

/// Least-squares fit of `points` to `model`.
///
/// Record 1 lists the sums the normal equations are built from (`n`,
/// `sum_x1 .. sum_x{2d}`, `sum_y`, `sum_x1y .. sum_x{d}y` and, with a basis
/// function, `sum_phi`, `sum_x{k}phi`, `sum_phi2`, `sum_phiy`). The
/// Gauss-Jordan records follow, and the last record holds `a0 .. a_m`.
///
/// # Arguments
/// * `points` - data table, at least as many points as model terms
/// * `model` - polynomial degree, optionally with a basis function
/// * `settings` - `pivot_epsilon` for the Gauss-Jordan solve
///
/// # Returns
/// * `Ok(Trace)` - read the coefficients with [`coefficients`](super::coefficients)
/// * `Err(NumericError)` - `InvalidInput` for too few or non-finite points,
///   `DomainError` when the basis function is undefined at a point,
///   `SingularMatrix` when the normal equations are degenerate (e.g. one
///   distinct abscissa)
///
/// # Example
/// ```rust, ignore
/// let points = [(1.1, 2.5), (1.9, 2.7), (2.4, 3.7), (4.8, 5.2)];
/// let trace = fit(&points, &FitModel::Linear, &SolverSettings::default())?;
/// let a = coefficients(&trace); // [1.5932..., 0.7575...]
/// let y = evaluate(&FitModel::Linear, &a, 3.0)?;
/// ```
pub fn fit(
    points: &[(f64, f64)],
    model: &FitModel,
    settings: &SolverSettings,
) -> Result<Trace, NumericError> {
    let terms = model.terms();
    if points.len() < terms {
        return Err(NumericError::InvalidInput(format!(
            "{} fit needs at least {} points, got {}",
            model.name(),
            terms,
            points.len()
        )));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(NumericError::InvalidInput(
            "data points must be finite".to_string(),
        ));
    }

    let d = model.degree();
    let mut power = vec![0.0; 2 * d + 1];
    let mut power_y = vec![0.0; d + 1];
    for (x, y) in points {
        for (k, sum) in power.iter_mut().enumerate() {
            *sum += x.powi(k as i32);
        }
        for (k, sum) in power_y.iter_mut().enumerate() {
            *sum += x.powi(k as i32) * y;
        }
    }

    let mut normal = DMatrix::<f64>::zeros(terms, terms);
    let mut rhs = DVector::<f64>::zeros(terms);
    for j in 0..=d {
        for k in 0..=d {
            normal[(j, k)] = power[j + k];
        }
        rhs[j] = power_y[j];
    }

    let mut sums = IterationRecord::new(1, "normal-equation sums").with("n", power[0]);
    for (k, sum) in power.iter().enumerate().skip(1) {
        sums.push(format!("sum_x{}", k), *sum);
    }
    sums.push("sum_y", power_y[0]);
    for (k, sum) in power_y.iter().enumerate().skip(1) {
        sums.push(format!("sum_x{}y", k), *sum);
    }

    if let Some(phi) = model.basis() {
        let mut phi_x = vec![0.0; d + 1];
        let mut phi2 = 0.0;
        let mut phi_y = 0.0;
        for (x, y) in points {
            let value = checked_eval(&**phi, *x)?;
            for (k, sum) in phi_x.iter_mut().enumerate() {
                *sum += x.powi(k as i32) * value;
            }
            phi2 += value * value;
            phi_y += value * y;
        }
        let m = terms - 1;
        for (k, sum) in phi_x.iter().enumerate() {
            normal[(k, m)] = *sum;
            normal[(m, k)] = *sum;
        }
        normal[(m, m)] = phi2;
        rhs[m] = phi_y;

        sums.push("sum_phi", phi_x[0]);
        for (k, sum) in phi_x.iter().enumerate().skip(1) {
            sums.push(format!("sum_x{}phi", k), *sum);
        }
        sums.push("sum_phi2", phi2);
        sums.push("sum_phiy", phi_y);
    }

    let mut trace = Trace::new(format!("least squares, {}", model.name()));
    trace.push(sums.with_matrix(normal.clone()));

    let system = LinearSystem::new(normal, rhs)?;
    let inner = direct::gauss_jordan(&system, settings.pivot_epsilon)?;
    trace.append_nested(&inner, "normal equations");

    let mut record = IterationRecord::new(trace.next_step(), "coefficients");
    for (k, a) in inner.indexed("x", 1).iter().enumerate() {
        record.push(format!("a{}", k), *a);
    }
    trace.push(record);
    info!("{} fit of {} points done", model.name(), points.len());
    Ok(trace.finish(Termination::Completed))
}

/// goodness of fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStatistics {
    /// sum of squared residuals
    pub sse: f64,
    /// standard error of the estimate, sqrt(sse / (n - terms))
    pub standard_error: f64,
    /// coefficient of determination
    pub r_squared: f64,
}

/// Residual statistics of fitted coefficients over the data they were fit to.
pub fn fit_statistics(
    points: &[(f64, f64)],
    model: &FitModel,
    coefficients: &[f64],
) -> Result<FitStatistics, NumericError> {
    if points.is_empty() {
        return Err(NumericError::InvalidInput("no data points".to_string()));
    }
    let n = points.len() as f64;
    let mean = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let mut sse = 0.0;
    let mut sst = 0.0;
    for (x, y) in points {
        let residual = y - evaluate(model, coefficients, *x)?;
        sse += residual * residual;
        sst += (y - mean) * (y - mean);
    }
    let dof = points.len().saturating_sub(model.terms());
    let standard_error = if dof > 0 { (sse / dof as f64).sqrt() } else { 0.0 };
    let r_squared = if sst > 0.0 { 1.0 - sse / sst } else { 1.0 };
    Ok(FitStatistics {
        sse,
        standard_error,
        r_squared,
    })
}
