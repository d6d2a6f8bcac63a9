//! # Numerical Integration
//!
//! Definite integrals `∫_a^b f(x) dx` by
//! - closed Newton-Cotes formulas, orders 1..=10, `h = (b - a)/n`, nodes
//!   `x_i = a + i·h`, `i = 0..=n`
//! - open Newton-Cotes formulas, orders 1..=6, `h = (b - a)/(n + 2)`, nodes
//!   `x_i = a + i·h`, `i = 1..=n+1` (the endpoints are never evaluated)
//! - the composite trapezoidal rule over `n` segments,
//!   `I = h/2·[f(a) + 2·Σf(interior) + f(b)]`
//!
//! Every formula has the shape `I = α·h·Σ w_i·f(x_i)`. Newton-Cotes formulas
//! may also be repeated over several equal panels of `[a, b]`.
//!
//! The trace holds one record per evaluated node (`x`, `fx`, `weight`,
//! `weighted`), one summary per panel (`alpha`, `h`, `sum`, `panel_integral`)
//! and a final record with `I`.
use crate::error::NumericError;
use crate::functions::RealFn;
use crate::problem::SolveProblem;
use crate::settings::SolverSettings;
use crate::trace::Trace;

pub mod newton_cotes;
mod integration_tests;

pub use newton_cotes::{closed_coefficients, open_coefficients};

/// integration formula family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationRule {
    NewtonCotesClosed,
    NewtonCotesOpen,
    Trapezoidal,
}

impl IntegrationRule {
    pub fn name(&self) -> &'static str {
        match self {
            IntegrationRule::NewtonCotesClosed => "closed Newton-Cotes",
            IntegrationRule::NewtonCotesOpen => "open Newton-Cotes",
            IntegrationRule::Trapezoidal => "trapezoidal",
        }
    }
}

/// Integrates `f` over `[a, b]` with one application of the order-`n` formula
/// (for the trapezoidal rule, `n` segments).
///
/// # Arguments
/// * `f` - integrand
/// * `a`, `b` - finite limits
/// * `n` - order 1..=10 (closed), 1..=6 (open) or segment count (trapezoidal)
/// * `rule` - formula family
///
/// # Returns
/// * `Ok(Trace)` - read the integral with [`solution`]
/// * `Err(NumericError)` - `UnsupportedOrder` outside the tables,
///   `InvalidInput` for zero trapezoidal segments, `DomainError` when `f` is
///   undefined at a node
///
/// # Example
/// ```rust, ignore
/// let trace = integrate(&|x: f64| 1.0 - x * x, 0.0, 1.0, 4, IntegrationRule::Trapezoidal)?;
/// assert_eq!(solution(&trace), Some(0.65625));
/// ```
pub fn integrate(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    n: usize,
    rule: IntegrationRule,
) -> Result<Trace, NumericError> {
    integrate_composite(f, a, b, n, rule, 1)
}

/// Splits `[a, b]` into `panels` equal parts and applies the order-`n`
/// formula on each.
pub fn integrate_composite(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    n: usize,
    rule: IntegrationRule,
    panels: usize,
) -> Result<Trace, NumericError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(NumericError::InvalidInput(
            "integration limits must be finite".to_string(),
        ));
    }
    if panels == 0 {
        return Err(NumericError::InvalidInput(
            "at least one panel is required".to_string(),
        ));
    }
    let formula = newton_cotes::Formula::for_rule(rule, n)?;
    newton_cotes::apply(f, a, b, &formula, panels)
}

/// integral value from the last record
pub fn solution(trace: &Trace) -> Option<f64> {
    trace.value("I")
}

/// integrand, limits and formula
#[derive(Clone)]
pub struct IntegralProblem {
    pub f: RealFn,
    pub a: f64,
    pub b: f64,
    /// formula order, or segment count for the trapezoidal rule
    pub n: usize,
    pub rule: IntegrationRule,
    pub panels: usize,
    pub description: String,
}

impl IntegralProblem {
    pub fn new(f: RealFn, a: f64, b: f64, n: usize, rule: IntegrationRule) -> Self {
        Self {
            f,
            a,
            b,
            n,
            rule,
            panels: 1,
            description: String::new(),
        }
    }

    pub fn with_panels(mut self, panels: usize) -> Self {
        self.panels = panels;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

impl SolveProblem for IntegralProblem {
    fn solve(&self, _settings: &SolverSettings) -> Result<Trace, NumericError> {
        integrate_composite(&*self.f, self.a, self.b, self.n, self.rule, self.panels)
    }

    fn title(&self) -> String {
        let integrand = if self.description.is_empty() {
            "f(x)"
        } else {
            self.description.as_str()
        };
        format!(
            "integral of {} over [{}, {}], {} n = {}",
            integrand,
            self.a,
            self.b,
            self.rule.name(),
            self.n
        )
    }
}
