use super::IntegrationRule;
use crate::error::NumericError;
use crate::functions::checked_eval;
use crate::trace::{IterationRecord, Termination, Trace};
use log::info;

/// closed formulas, order n = index + 1: (α, weights), n + 1 nodes
const CLOSED: [(f64, &[f64]); 10] = [
    (1.0 / 2.0, &[1.0, 1.0]),
    (1.0 / 3.0, &[1.0, 4.0, 1.0]),
    (3.0 / 8.0, &[1.0, 3.0, 3.0, 1.0]),
    (2.0 / 45.0, &[7.0, 32.0, 12.0, 32.0, 7.0]),
    (5.0 / 288.0, &[19.0, 75.0, 50.0, 50.0, 75.0, 19.0]),
    (1.0 / 140.0, &[41.0, 216.0, 27.0, 272.0, 27.0, 216.0, 41.0]),
    (
        7.0 / 17280.0,
        &[751.0, 3577.0, 1323.0, 2989.0, 2989.0, 1323.0, 3577.0, 751.0],
    ),
    (
        4.0 / 14175.0,
        &[
            989.0, 5888.0, -928.0, 10496.0, -4540.0, 10496.0, -928.0, 5888.0, 989.0,
        ],
    ),
    (
        9.0 / 89600.0,
        &[
            2857.0, 15741.0, 1080.0, 19344.0, 5778.0, 5778.0, 19344.0, 1080.0, 15741.0, 2857.0,
        ],
    ),
    (
        5.0 / 299376.0,
        &[
            16067.0, 106300.0, -48525.0, 272400.0, -260550.0, 427368.0, -260550.0, 272400.0,
            -48525.0, 106300.0, 16067.0,
        ],
    ),
];

/// open formulas, order n = index + 1: (α, weights), n + 1 interior nodes
const OPEN: [(f64, &[f64]); 6] = [
    (3.0 / 2.0, &[1.0, 1.0]),
    (4.0 / 3.0, &[2.0, -1.0, 2.0]),
    (5.0 / 24.0, &[11.0, 1.0, 1.0, 11.0]),
    (3.0 / 10.0, &[11.0, -14.0, 26.0, -14.0, 11.0]),
    (7.0 / 1440.0, &[611.0, -453.0, 562.0, 562.0, -453.0, 611.0]),
    (
        8.0 / 945.0,
        &[460.0, -954.0, 2196.0, -2459.0, 2196.0, -954.0, 460.0],
    ),
];

/// `(α, weights)` of the closed Newton-Cotes formula of order `n`
pub fn closed_coefficients(n: usize) -> Result<(f64, Vec<f64>), NumericError> {
    lookup(&CLOSED, n, IntegrationRule::NewtonCotesClosed)
}

/// `(α, weights)` of the open Newton-Cotes formula of order `n`
pub fn open_coefficients(n: usize) -> Result<(f64, Vec<f64>), NumericError> {
    lookup(&OPEN, n, IntegrationRule::NewtonCotesOpen)
}

fn lookup(
    table: &[(f64, &[f64])],
    n: usize,
    rule: IntegrationRule,
) -> Result<(f64, Vec<f64>), NumericError> {
    if n == 0 || n > table.len() {
        return Err(NumericError::UnsupportedOrder {
            family: rule.name(),
            order: n,
        });
    }
    let (alpha, weights) = table[n - 1];
    Ok((alpha, weights.to_vec()))
}

/// One formula on a single panel: `I = α·h·Σ w_i·f(x_i)` with
/// `h = panel width / intervals` and `x_i = start + (first_node + i)·h`.
pub(crate) struct Formula {
    pub rule: IntegrationRule,
    pub order: usize,
    pub alpha: f64,
    pub weights: Vec<f64>,
    pub first_node: usize,
    pub intervals: usize,
}

impl Formula {
    pub(crate) fn for_rule(rule: IntegrationRule, n: usize) -> Result<Self, NumericError> {
        match rule {
            IntegrationRule::NewtonCotesClosed => {
                let (alpha, weights) = closed_coefficients(n)?;
                Ok(Self {
                    rule,
                    order: n,
                    alpha,
                    weights,
                    first_node: 0,
                    intervals: n,
                })
            }
            IntegrationRule::NewtonCotesOpen => {
                let (alpha, weights) = open_coefficients(n)?;
                Ok(Self {
                    rule,
                    order: n,
                    alpha,
                    weights,
                    first_node: 1,
                    intervals: n + 2,
                })
            }
            IntegrationRule::Trapezoidal => {
                if n == 0 {
                    return Err(NumericError::InvalidInput(
                        "the trapezoidal rule needs at least one segment".to_string(),
                    ));
                }
                // h/2·[f0 + 2·f1 + ... + 2·f(n-1) + fn]
                let weights = (0..=n)
                    .map(|i| if i == 0 || i == n { 1.0 } else { 2.0 })
                    .collect();
                Ok(Self {
                    rule,
                    order: n,
                    alpha: 0.5,
                    weights,
                    first_node: 0,
                    intervals: n,
                })
            }
        }
    }
}

pub(crate) fn apply(
    f: &dyn Fn(f64) -> f64,
    a: f64,
    b: f64,
    formula: &Formula,
    panels: usize,
) -> Result<Trace, NumericError> {
    let mut trace = Trace::new(formula.rule.name());
    let width = (b - a) / panels as f64;
    let h = width / formula.intervals as f64;
    let mut total = 0.0;

    for panel in 0..panels {
        let start = a + panel as f64 * width;
        let mut sum = 0.0;
        for (i, weight) in formula.weights.iter().enumerate() {
            let node = formula.first_node + i;
            let x = start + node as f64 * h;
            let fx = checked_eval(f, x)?;
            let weighted = weight * fx;
            sum += weighted;
            trace.push(
                IterationRecord::new(trace.next_step(), format!("panel {} node {}", panel + 1, node))
                    .with("i", node as f64)
                    .with("x", x)
                    .with("fx", fx)
                    .with("weight", *weight)
                    .with("weighted", weighted),
            );
        }
        let panel_integral = formula.alpha * h * sum;
        total += panel_integral;
        trace.push(
            IterationRecord::new(trace.next_step(), format!("panel {}", panel + 1))
                .with("alpha", formula.alpha)
                .with("h", h)
                .with("sum", sum)
                .with("panel_integral", panel_integral),
        );
    }

    info!(
        "{} (n = {}, {} panel(s)) over [{}, {}]: I = {}",
        formula.rule.name(),
        formula.order,
        panels,
        a,
        b,
        total
    );
    trace.push(
        IterationRecord::new(trace.next_step(), "integral")
            .with("h", h)
            .with("I", total),
    );
    Ok(trace.finish(Termination::Completed))
}
