//! Direct elimination methods. All three work on the augmented matrix
//! `[A | b]` and store a snapshot of it with every record.
use super::{LinearMethod, LinearSystem, check_pivot};
use crate::error::NumericError;
use crate::trace::{IterationRecord, Termination, Trace};
use log::debug;
use nalgebra::DVector;

/// Forward elimination with pivots `A[k][k]` taken in natural order, then back
/// substitution.
///
/// One record per eliminated row holds the pivot, the multiplier and the
/// resulting row (`r1 .. r{n+1}`); the last record holds `x1 .. xn`.
pub fn gaussian_elimination(
    system: &LinearSystem,
    pivot_epsilon: f64,
) -> Result<Trace, NumericError> {
    let n = system.dim();
    let mut m = system.augmented();
    let threshold = system.pivot_threshold(pivot_epsilon);
    let mut trace = Trace::new(LinearMethod::GaussianElimination.name());

    for k in 0..n {
        let pivot = m[(k, k)];
        check_pivot(pivot, k, threshold)?;
        for i in (k + 1)..n {
            let multiplier = m[(i, k)] / pivot;
            for j in k..=n {
                m[(i, j)] -= multiplier * m[(k, j)];
            }
            m[(i, k)] = 0.0;
            let mut record = IterationRecord::new(
                trace.next_step(),
                format!("stage {}: R{} - m*R{}", k + 1, i + 1, k + 1),
            )
            .with("pivot", pivot)
            .with("multiplier", multiplier);
            for j in 0..=n {
                record.push(format!("r{}", j + 1), m[(i, j)]);
            }
            debug!("stage {} row {}: multiplier {}", k + 1, i + 1, multiplier);
            trace.push(record.with_matrix(m.clone()));
        }
    }

    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = m[(i, n)];
        for j in (i + 1)..n {
            sum -= m[(i, j)] * x[j];
        }
        x[i] = sum / m[(i, i)];
    }
    trace.push(solution_record(trace.next_step(), "back substitution", &x).with_matrix(m));
    Ok(trace.finish(Termination::Completed))
}

/// For each column: normalize the pivot row to 1, then clear the column in
/// every other row, above and below. Two records per stage.
pub fn gauss_jordan(system: &LinearSystem, pivot_epsilon: f64) -> Result<Trace, NumericError> {
    let n = system.dim();
    let mut m = system.augmented();
    let threshold = system.pivot_threshold(pivot_epsilon);
    let mut trace = Trace::new(LinearMethod::GaussJordan.name());

    for k in 0..n {
        let pivot = m[(k, k)];
        check_pivot(pivot, k, threshold)?;
        for j in 0..=n {
            m[(k, j)] /= pivot;
        }
        m[(k, k)] = 1.0;
        trace.push(
            IterationRecord::new(
                trace.next_step(),
                format!("stage {}: normalize R{}", k + 1, k + 1),
            )
            .with("pivot", pivot)
            .with_matrix(m.clone()),
        );

        let mut record = IterationRecord::new(
            trace.next_step(),
            format!("stage {}: eliminate column {}", k + 1, k + 1),
        );
        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = m[(i, k)];
            for j in 0..=n {
                m[(i, j)] -= factor * m[(k, j)];
            }
            m[(i, k)] = 0.0;
            record.push(format!("factor{}", i + 1), factor);
        }
        trace.push(record.with_matrix(m.clone()));
    }

    let x = m.column(n).into_owned();
    trace.push(solution_record(trace.next_step(), "solution", &x));
    Ok(trace.finish(Termination::Completed))
}

/// Montante condensation.
///
/// With `p` the current pivot and `p_prev` the previous one (1 at the first
/// stage), every entry outside the pivot row becomes
/// `(p·a[i][j] - a[i][k]·a[k][j]) / p_prev`. All arithmetic stays exact for
/// integer input. After the last stage every diagonal entry equals det(A),
/// and `x_i = a[i][n] / a[i][i]`.
pub fn montante(system: &LinearSystem, pivot_epsilon: f64) -> Result<Trace, NumericError> {
    let n = system.dim();
    let mut m = system.augmented();
    let threshold = system.pivot_threshold(pivot_epsilon);
    let mut trace = Trace::new(LinearMethod::Montante.name());
    let mut previous = 1.0;

    for k in 0..n {
        let pivot = m[(k, k)];
        // leading minor ratio = elimination pivot
        check_pivot(pivot / previous, k, threshold)?;
        let mut next = m.clone();
        for i in 0..n {
            if i == k {
                continue;
            }
            for j in 0..=n {
                next[(i, j)] = (pivot * m[(i, j)] - m[(i, k)] * m[(k, j)]) / previous;
            }
            next[(i, k)] = 0.0;
        }
        m = next;
        trace.push(
            IterationRecord::new(trace.next_step(), format!("stage {}", k + 1))
                .with("pivot", pivot)
                .with("previous_pivot", previous)
                .with_matrix(m.clone()),
        );
        previous = pivot;
    }

    let x = DVector::from_fn(n, |i, _| m[(i, n)] / m[(i, i)]);
    let record = solution_record(trace.next_step(), "solution", &x).with("determinant", previous);
    trace.push(record);
    Ok(trace.finish(Termination::Completed))
}

fn solution_record(step: usize, label: &str, x: &DVector<f64>) -> IterationRecord {
    let mut record = IterationRecord::new(step, label);
    for (i, value) in x.iter().enumerate() {
        record.push(format!("x{}", i + 1), *value);
    }
    record
}
