//! Typed function values used by problems.
//!
//! Problems carry plain closures instead of expression strings. The kernel
//! evaluates them through [`checked_eval`] so that a value leaving the real
//! line (e.g. `ln` of a non-positive number) surfaces as
//! [`NumericError::DomainError`] instead of silently poisoning the trace.
use crate::error::NumericError;
use std::rc::Rc;

/// shared unary real function, cheap to clone into several problems
pub type RealFn = Rc<dyn Fn(f64) -> f64>;
/// right-hand side of a first order ODE: f(t, y)
pub type OdeFn = Rc<dyn Fn(f64, f64) -> f64>;
/// right-hand side of a second order ODE: y'' = F(t, y, y')
pub type SecondOrderFn = Rc<dyn Fn(f64, f64, f64) -> f64>;

/// wraps a closure into a [`RealFn`]
pub fn real_fn<F>(f: F) -> RealFn
where
    F: Fn(f64) -> f64 + 'static,
{
    Rc::new(f)
}

/// evaluates `f(x)` and rejects non-finite results
pub fn checked_eval(f: &dyn Fn(f64) -> f64, x: f64) -> Result<f64, NumericError> {
    finite(f(x), || format!("function is not defined at x = {}", x))
}

/// rejects NaN and infinities, building the message lazily
pub fn finite<M>(value: f64, message: M) -> Result<f64, NumericError>
where
    M: FnOnce() -> String,
{
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::DomainError(message()))
    }
}
