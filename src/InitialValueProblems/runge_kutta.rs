use super::IvpMethod;
use crate::error::NumericError;
use crate::functions::finite;
use crate::trace::{IterationRecord, Termination, Trace};
use log::info;
use nalgebra::DVector;

/// Butcher tableau of an explicit method; `a[s]` holds the coefficients of
/// the slopes before stage `s`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub c: Vec<f64>,
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
}

impl Tableau {
    pub fn stages(&self) -> usize {
        self.b.len()
    }
}

/// Advances `y' = f(t, y)` from `(t0, y0)` by `steps` steps of size `h`.
///
/// # Arguments
/// * `f` - right-hand side `f(t, y)`
/// * `t0`, `y0` - initial state
/// * `h` - non-zero step size
/// * `steps` - number of steps, at least 1
/// * `method` - tableau to apply
///
/// # Returns
/// * `Ok(Trace)` - one record per step with `t`, `y`, every slope `k1 ..`,
///   `t_next` and `y_next`; read the end state with
///   [`solution`](super::solution)
/// * `Err(NumericError)` - `InvalidInput` for a bad step or initial state,
///   `DomainError` when `f` leaves the real line
///
/// # Example
/// ```rust, ignore
/// let trace = step(&|t: f64, y: f64| (5.0 * y * t - 1.0) / 3.0, 0.0, 1.2, 0.2, 2, IvpMethod::ModifiedEuler)?;
/// let end = solution(&trace).unwrap(); // t = 0.4, y = 1.22231605
/// ```
pub fn step(
    f: &dyn Fn(f64, f64) -> f64,
    t0: f64,
    y0: f64,
    h: f64,
    steps: usize,
    method: IvpMethod,
) -> Result<Trace, NumericError> {
    let rhs = |t: f64, state: &DVector<f64>| -> Result<DVector<f64>, NumericError> {
        let slope = finite(f(t, state[0]), || {
            format!("f(t, y) is not defined at t = {}, y = {}", t, state[0])
        })?;
        Ok(DVector::from_element(1, slope))
    };
    advance(rhs, &["y"], t0, DVector::from_element(1, y0), h, steps, method)
}

/// Advances `y'' = F(t, y, y')` as the pair `y' = v, v' = F(t, y, v)`.
pub fn step_second_order(
    f: &dyn Fn(f64, f64, f64) -> f64,
    t0: f64,
    y0: f64,
    v0: f64,
    h: f64,
    steps: usize,
    method: IvpMethod,
) -> Result<Trace, NumericError> {
    let rhs = |t: f64, state: &DVector<f64>| -> Result<DVector<f64>, NumericError> {
        let (y, v) = (state[0], state[1]);
        let acceleration = finite(f(t, y, v), || {
            format!("F(t, y, y') is not defined at t = {}, y = {}, y' = {}", t, y, v)
        })?;
        Ok(DVector::from_vec(vec![v, acceleration]))
    };
    advance(
        rhs,
        &["y", "v"],
        t0,
        DVector::from_vec(vec![y0, v0]),
        h,
        steps,
        method,
    )
}

fn slope_name(stage: usize, component: &str, scalar: bool) -> String {
    if scalar {
        format!("k{}", stage)
    } else {
        format!("k{}_{}", stage, component)
    }
}

fn advance<F>(
    rhs: F,
    names: &[&str],
    t0: f64,
    y0: DVector<f64>,
    h: f64,
    steps: usize,
    method: IvpMethod,
) -> Result<Trace, NumericError>
where
    F: Fn(f64, &DVector<f64>) -> Result<DVector<f64>, NumericError>,
{
    if !h.is_finite() || h == 0.0 {
        return Err(NumericError::InvalidInput(format!(
            "step size must be finite and non-zero, got {}",
            h
        )));
    }
    if steps == 0 {
        return Err(NumericError::InvalidInput(
            "at least one step is required".to_string(),
        ));
    }
    if !t0.is_finite() || y0.iter().any(|v| !v.is_finite()) {
        return Err(NumericError::InvalidInput(
            "initial state must be finite".to_string(),
        ));
    }

    let tableau = method.tableau();
    let scalar = names.len() == 1;
    let mut trace = Trace::new(method.name());
    let mut t = t0;
    let mut y = y0;

    for n in 1..=steps {
        let mut record = IterationRecord::new(n, format!("step {}", n)).with("t", t);
        for (name, value) in names.iter().zip(y.iter()) {
            record.push(*name, *value);
        }

        let mut slopes: Vec<DVector<f64>> = Vec::with_capacity(tableau.stages());
        for s in 0..tableau.stages() {
            let mut argument = y.clone();
            for (j, a) in tableau.a[s].iter().enumerate() {
                argument += &slopes[j] * (h * a);
            }
            if method == IvpMethod::ModifiedEuler && s == 1 {
                for (name, value) in names.iter().zip(argument.iter()) {
                    record.push(format!("{}_pred", name), *value);
                }
            }
            let k = rhs(t + tableau.c[s] * h, &argument)?;
            for (name, value) in names.iter().zip(k.iter()) {
                record.push(slope_name(s + 1, name, scalar), *value);
            }
            slopes.push(k);
        }

        let mut next = y.clone();
        for (k, b) in slopes.iter().zip(&tableau.b) {
            next += k * (h * b);
        }
        let t_next = t0 + n as f64 * h;
        record.push("t_next", t_next);
        for (name, value) in names.iter().zip(next.iter()) {
            record.push(format!("{}_next", name), *value);
        }
        trace.push(record);
        t = t_next;
        y = next;
    }

    info!(
        "{}: {} steps of h = {} from t = {} to t = {}, final state {:?}",
        method.name(),
        steps,
        h,
        t0,
        t,
        y.as_slice()
    );
    Ok(trace.finish(Termination::Completed))
}
