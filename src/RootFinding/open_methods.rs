use crate::error::NumericError;
use crate::functions::{checked_eval, finite};
use crate::settings::IterationControl;
use crate::trace::{IterationRecord, Termination, Trace};
use log::{debug, warn};

/// Newton-Raphson: `x_{i+1} = x_i - f(x_i)/f'(x_i)`.
///
/// Fails with `ZeroDerivative` as soon as `|f'(x_i)| <= derivative_epsilon`,
/// before the step is taken.
pub fn newton_raphson(
    f: &dyn Fn(f64) -> f64,
    derivative: &dyn Fn(f64) -> f64,
    x0: f64,
    control: &IterationControl,
    derivative_epsilon: f64,
) -> Result<Trace, NumericError> {
    let mut trace = Trace::new("Newton-Raphson");
    let mut x = x0;
    for iteration in 1..=control.max_iterations {
        let fx = checked_eval(f, x)?;
        let dfx = checked_eval(derivative, x)?;
        if dfx.abs() <= derivative_epsilon {
            return Err(NumericError::ZeroDerivative { iteration, x });
        }
        let x_next = finite(x - fx / dfx, || {
            format!("Newton step at iteration {}", iteration)
        })?;
        let error = (x_next - x).abs();
        trace.push(
            IterationRecord::new(iteration, format!("iteration {}", iteration))
                .with("x", x)
                .with("fx", fx)
                .with("dfx", dfx)
                .with("x_next", x_next)
                .with("error", error),
        );
        debug!("Newton-Raphson {}: x = {}, error = {}", iteration, x_next, error);
        if error < control.tolerance {
            return Ok(trace.finish(Termination::Converged));
        }
        x = x_next;
    }
    warn!(
        "Newton-Raphson reached the cap of {} iterations",
        control.max_iterations
    );
    Ok(trace.finish(Termination::NotConverged))
}

/// Fixed-point iteration `x_{i+1} = g(x_i)`.
///
/// Stops with `Diverged` when the error `|x_{i+1} - x_i|` grows compared with
/// the previous iteration.
pub fn fixed_point(
    g: &dyn Fn(f64) -> f64,
    x0: f64,
    control: &IterationControl,
) -> Result<Trace, NumericError> {
    let mut trace = Trace::new("fixed point");
    let mut x = x0;
    let mut previous_error: Option<f64> = None;
    for iteration in 1..=control.max_iterations {
        let x_next = checked_eval(g, x)?;
        let error = (x_next - x).abs();
        trace.push(
            IterationRecord::new(iteration, format!("iteration {}", iteration))
                .with("x", x)
                .with("x_next", x_next)
                .with("error", error),
        );
        debug!("fixed point {}: x = {}, error = {}", iteration, x_next, error);
        if error < control.tolerance {
            return Ok(trace.finish(Termination::Converged));
        }
        if let Some(previous) = previous_error {
            if error > previous {
                return Err(NumericError::Diverged {
                    iteration,
                    previous,
                    current: error,
                });
            }
        }
        previous_error = Some(error);
        x = x_next;
    }
    warn!(
        "fixed point reached the cap of {} iterations",
        control.max_iterations
    );
    Ok(trace.finish(Termination::NotConverged))
}

/// Secant method from the two starting points `x0`, `x1`.
pub fn secant(
    f: &dyn Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    control: &IterationControl,
) -> Result<Trace, NumericError> {
    let mut trace = Trace::new("secant");
    let mut x_prev = x0;
    let mut x = x1;
    let mut f_prev = checked_eval(f, x_prev)?;
    for iteration in 1..=control.max_iterations {
        let fx = checked_eval(f, x)?;
        let denominator = fx - f_prev;
        if denominator == 0.0 {
            return Err(NumericError::ZeroDenominator { iteration });
        }
        let x_next = finite(x - fx * (x - x_prev) / denominator, || {
            format!("secant step at iteration {}", iteration)
        })?;
        let error = (x_next - x).abs();
        trace.push(
            IterationRecord::new(iteration, format!("iteration {}", iteration))
                .with("x_prev", x_prev)
                .with("x", x)
                .with("f_prev", f_prev)
                .with("fx", fx)
                .with("x_next", x_next)
                .with("error", error),
        );
        debug!("secant {}: x = {}, error = {}", iteration, x_next, error);
        if error < control.tolerance {
            return Ok(trace.finish(Termination::Converged));
        }
        x_prev = x;
        f_prev = fx;
        x = x_next;
    }
    warn!("secant reached the cap of {} iterations", control.max_iterations);
    Ok(trace.finish(Termination::NotConverged))
}
