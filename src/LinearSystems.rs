//! # Linear Systems
//!
//! Solvers for square systems `A·x = b`:
//! - **Gaussian elimination** with back substitution
//! - **Gauss-Jordan** reduction to the identity
//! - **Montante** (Bareiss) fraction-free condensation
//! - **Gauss-Seidel** stationary iteration
//!
//! Direct methods take pivots in natural order, without row exchanges. A zero
//! pivot is reported as [`NumericError::SingularMatrix`] instead of being
//! worked around, because swapping rows would change the method being shown.
//! A pivot counts as zero when `|p| <= pivot_epsilon · max|a_ij|`.
//!
//! Every solver returns a [`Trace`]; the solution vector is read back from its
//! last record (values `x1 .. xn`) with [`solution`].
//!
//! ```rust, ignore
//! let system = LinearSystem::from_rows(&[vec![4.0, -1.0], vec![1.0, 3.0]], &[2.0, 7.0])?;
//! let trace = solve(&system, LinearMethod::GaussJordan, &SolverSettings::default())?;
//! let x = solution(&trace).unwrap();
//! ```
use crate::error::NumericError;
use crate::problem::SolveProblem;
use crate::settings::SolverSettings;
use crate::trace::Trace;
use log::info;
use nalgebra::{DMatrix, DVector};
use strum_macros::EnumIter;

/// Gaussian elimination, Gauss-Jordan and Montante
pub mod direct;
/// Gauss-Seidel iteration
pub mod gauss_seidel;

/// available linear solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum LinearMethod {
    GaussianElimination,
    GaussJordan,
    Montante,
    GaussSeidel,
}

impl LinearMethod {
    pub fn name(&self) -> &'static str {
        match self {
            LinearMethod::GaussianElimination => "Gaussian elimination",
            LinearMethod::GaussJordan => "Gauss-Jordan",
            LinearMethod::Montante => "Montante",
            LinearMethod::GaussSeidel => "Gauss-Seidel",
        }
    }
}

/// square system `A·x = b`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    a: DMatrix<f64>,
    b: DVector<f64>,
}

impl LinearSystem {
    pub fn new(a: DMatrix<f64>, b: DVector<f64>) -> Result<Self, NumericError> {
        if a.nrows() == 0 {
            return Err(NumericError::InvalidInput("empty system".to_string()));
        }
        if !a.is_square() {
            return Err(NumericError::DimensionMismatch(format!(
                "coefficient matrix is {}x{}, expected a square matrix",
                a.nrows(),
                a.ncols()
            )));
        }
        if b.len() != a.nrows() {
            return Err(NumericError::DimensionMismatch(format!(
                "right-hand side has {} entries, expected {}",
                b.len(),
                a.nrows()
            )));
        }
        if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
            return Err(NumericError::InvalidInput(
                "system contains a non-finite entry".to_string(),
            ));
        }
        Ok(Self { a, b })
    }

    /// builds the system from row vectors of `A` and the entries of `b`
    pub fn from_rows(rows: &[Vec<f64>], b: &[f64]) -> Result<Self, NumericError> {
        let n = rows.len();
        let m = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != m) {
            return Err(NumericError::DimensionMismatch(
                "rows of the coefficient matrix differ in length".to_string(),
            ));
        }
        let a = DMatrix::from_fn(n, m, |i, j| rows[i][j]);
        Self::new(a, DVector::from_column_slice(b))
    }

    pub fn dim(&self) -> usize {
        self.a.nrows()
    }

    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// `[A | b]`, n x (n+1)
    pub fn augmented(&self) -> DMatrix<f64> {
        let n = self.dim();
        DMatrix::from_fn(n, n + 1, |i, j| if j < n { self.a[(i, j)] } else { self.b[i] })
    }

    /// Zero-pivot cutoff `epsilon · max|a_ij|`, relative to the magnitude of `A`.
    pub(crate) fn pivot_threshold(&self, epsilon: f64) -> f64 {
        epsilon * self.a.amax()
    }

    /// max_i |(A·x)_i - b_i|
    pub fn residual(&self, x: &DVector<f64>) -> f64 {
        (&self.a * x - &self.b).amax()
    }
}

/// Solves the system with the chosen method.
///
/// # Arguments
/// * `system` - validated square system
/// * `method` - direct method or Gauss-Seidel
/// * `settings` - `pivot_epsilon` for every method, `linear_iterative` for Gauss-Seidel
///
/// # Returns
/// * `Ok(Trace)` - `Completed` for direct methods, `Converged` or `NotConverged`
///   for Gauss-Seidel; read `x1 .. xn` with [`solution`]
/// * `Err(NumericError::SingularMatrix)` - a pivot (or a diagonal entry for
///   Gauss-Seidel) is zero relative to the entries of `A`
///
/// # Example
/// ```rust, ignore
/// let system = LinearSystem::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]], &[3.0, 5.0])?;
/// let trace = solve(&system, LinearMethod::Montante, &SolverSettings::default())?;
/// assert_eq!(trace.value("determinant"), Some(5.0));
/// ```
pub fn solve(
    system: &LinearSystem,
    method: LinearMethod,
    settings: &SolverSettings,
) -> Result<Trace, NumericError> {
    let trace = match method {
        LinearMethod::GaussianElimination => {
            direct::gaussian_elimination(system, settings.pivot_epsilon)?
        }
        LinearMethod::GaussJordan => direct::gauss_jordan(system, settings.pivot_epsilon)?,
        LinearMethod::Montante => direct::montante(system, settings.pivot_epsilon)?,
        LinearMethod::GaussSeidel => gauss_seidel::gauss_seidel(
            system,
            &settings.linear_iterative,
            settings.pivot_epsilon,
        )?,
    };
    info!(
        "{}: {} records, {:?}",
        method.name(),
        trace.len(),
        trace.termination()
    );
    Ok(trace)
}

/// solution vector `x1 .. xn` stored in the last record
pub fn solution(trace: &Trace) -> Option<DVector<f64>> {
    let x = trace.indexed("x", 1);
    if x.is_empty() {
        None
    } else {
        Some(DVector::from_vec(x))
    }
}

/// `|pivot| <= threshold` counts as zero; see [`LinearSystem::pivot_threshold`]
pub(crate) fn check_pivot(pivot: f64, row: usize, threshold: f64) -> Result<(), NumericError> {
    if pivot.abs() <= threshold || !pivot.is_finite() {
        return Err(NumericError::SingularMatrix { row });
    }
    Ok(())
}

/// linear system paired with the method to solve it by
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProblem {
    pub system: LinearSystem,
    pub method: LinearMethod,
}

impl LinearProblem {
    pub fn new(system: LinearSystem, method: LinearMethod) -> Self {
        Self { system, method }
    }
}

impl SolveProblem for LinearProblem {
    fn solve(&self, settings: &SolverSettings) -> Result<Trace, NumericError> {
        solve(&self.system, self.method, settings)
    }

    fn title(&self) -> String {
        let n = self.system.dim();
        format!("{}x{} linear system, {}", n, n, self.method.name())
    }
}
