use crate::error::NumericError;
use crate::functions::{checked_eval, finite};
use crate::settings::IterationControl;
use crate::trace::{IterationRecord, Termination, Trace};
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Rule {
    Bisection,
    FalsePosition,
}

impl Rule {
    fn name(&self) -> &'static str {
        match self {
            Rule::Bisection => "bisection",
            Rule::FalsePosition => "false position",
        }
    }
}

/// Bisection on the bracket `[a, b]`.
pub fn bisection(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    control: &IterationControl,
) -> Result<Trace, NumericError> {
    bracket_search(f, a, b, control, Rule::Bisection)
}

/// Regula falsi on the bracket `[a, b]`: `xr = b - f(b)(a - b)/(f(a) - f(b))`.
pub fn false_position(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    control: &IterationControl,
) -> Result<Trace, NumericError> {
    bracket_search(f, a, b, control, Rule::FalsePosition)
}

fn bracket_search(
    f: &dyn Fn(f64) -> f64,
    mut a: f64,
    mut b: f64,
    control: &IterationControl,
    rule: Rule,
) -> Result<Trace, NumericError> {
    let mut fa = checked_eval(f, a)?;
    let mut fb = checked_eval(f, b)?;
    if fa * fb > 0.0 {
        warn!(
            "{}: f({}) and f({}) have the same sign, the bracket holds no sign change",
            rule.name(),
            a,
            b
        );
    }

    let mut trace = Trace::new(rule.name());
    let mut previous: Option<f64> = None;
    for iteration in 1..=control.max_iterations {
        let xr = match rule {
            Rule::Bisection => (a + b) / 2.0,
            Rule::FalsePosition => {
                let denominator = fa - fb;
                if denominator == 0.0 {
                    return Err(NumericError::ZeroDenominator { iteration });
                }
                finite(b - fb * (a - b) / denominator, || {
                    format!("false position intercept at iteration {}", iteration)
                })?
            }
        };
        let fxr = checked_eval(f, xr)?;
        let error = previous.map(|p| (xr - p).abs());

        let mut record = IterationRecord::new(iteration, format!("iteration {}", iteration))
            .with("a", a)
            .with("b", b)
            .with("fa", fa)
            .with("fb", fb)
            .with("xr", xr)
            .with("fxr", fxr);
        if let Some(error) = error {
            record.push("error", error);
        }
        trace.push(record);
        debug!("{} {}: xr = {}, f(xr) = {}", rule.name(), iteration, xr, fxr);

        // keep the endpoint whose sign differs from f(xr)
        if fa * fxr < 0.0 {
            b = xr;
            fb = fxr;
        } else {
            a = xr;
            fa = fxr;
        }

        if fxr == 0.0 || error.is_some_and(|e| e < control.tolerance) {
            return Ok(trace.finish(Termination::Converged));
        }
        previous = Some(xr);
    }
    warn!(
        "{} reached the cap of {} iterations",
        rule.name(),
        control.max_iterations
    );
    Ok(trace.finish(Termination::NotConverged))
}
