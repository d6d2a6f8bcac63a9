use super::{LinearMethod, LinearSystem, check_pivot};
use crate::error::NumericError;
use crate::settings::IterationControl;
use crate::trace::{IterationRecord, Termination, Trace};
use log::{debug, warn};
use nalgebra::DVector;

/// Gauss-Seidel iteration from the zero vector.
///
/// Within a sweep every unknown is recomputed from the values already updated
/// earlier in the same sweep. Each record holds `x_i` and its absolute update
/// `e_i` for every unknown, plus `max_error`. The iteration stops once every
/// update is below `control.tolerance`; at `control.max_iterations` the trace
/// is returned flagged `NotConverged`.
///
/// Convergence is only expected for diagonally dominant systems; that is
/// assumed, not checked. A zero diagonal entry is a `SingularMatrix` error.
pub fn gauss_seidel(
    system: &LinearSystem,
    control: &IterationControl,
    pivot_epsilon: f64,
) -> Result<Trace, NumericError> {
    let n = system.dim();
    let a = system.a();
    let b = system.b();
    let threshold = system.pivot_threshold(pivot_epsilon);
    for i in 0..n {
        check_pivot(a[(i, i)], i, threshold)?;
    }

    let mut trace = Trace::new(LinearMethod::GaussSeidel.name());
    let mut x = DVector::<f64>::zeros(n);

    for iteration in 1..=control.max_iterations {
        let mut record = IterationRecord::new(iteration, format!("iteration {}", iteration));
        let mut max_error: f64 = 0.0;
        let mut finite = true;
        for i in 0..n {
            let mut sum = b[i];
            for j in 0..n {
                if j != i {
                    sum -= a[(i, j)] * x[j];
                }
            }
            let updated = sum / a[(i, i)];
            let error = (updated - x[i]).abs();
            x[i] = updated;
            finite &= updated.is_finite();
            max_error = max_error.max(error);
            record.push(format!("x{}", i + 1), updated);
            record.push(format!("e{}", i + 1), error);
        }
        record.push("max_error", max_error);
        trace.push(record);
        debug!("Gauss-Seidel iteration {}: max error {}", iteration, max_error);

        if !finite {
            warn!("Gauss-Seidel blew up at iteration {}", iteration);
            return Ok(trace.finish(Termination::NotConverged));
        }
        if max_error < control.tolerance {
            return Ok(trace.finish(Termination::Converged));
        }
    }
    warn!(
        "Gauss-Seidel reached the cap of {} iterations",
        control.max_iterations
    );
    Ok(trace.finish(Termination::NotConverged))
}
