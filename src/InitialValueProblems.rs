//! # Initial Value Problems
//!
//! Fixed-step explicit single-step methods for
//! - first order ODEs `y' = f(t, y)` ([`step`])
//! - second order ODEs `y'' = F(t, y, y')`, reduced to the first order pair
//!   `y' = v, v' = F(t, y, v)` and advanced componentwise ([`step_second_order`])
//!
//! Every method is an explicit Runge-Kutta tableau:
//!
//! | method          | c              | b                  |
//! |-----------------|----------------|--------------------|
//! | Euler           | 0              | 1                  |
//! | modified Euler  | 0, 1           | 1/2, 1/2           |
//! | RK2 (midpoint)  | 0, 1/2         | 0, 1               |
//! | RK3 (Kutta)     | 0, 1/2, 1      | 1/6, 4/6, 1/6      |
//! | RK4             | 0, 1/2, 1/2, 1 | 1/6, 2/6, 2/6, 1/6 |
//!
//! Modified Euler is Heun's predictor-corrector: the second stage is
//! evaluated at the predictor `y* = y + h·k1`, recorded as `y_pred`.
//!
//! One record per step holds `t`, the state, every stage slope
//! (`k1, k2, ..` for a scalar equation, `k1_y, k1_v, ..` for the pair),
//! `t_next` and the next state (`y_next`, `v_next`).
use crate::error::NumericError;
use crate::functions::{OdeFn, SecondOrderFn};
use crate::problem::SolveProblem;
use crate::settings::SolverSettings;
use crate::trace::Trace;
use strum_macros::EnumIter;

pub mod runge_kutta;

pub use runge_kutta::{Tableau, step, step_second_order};

/// explicit single-step method
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum IvpMethod {
    Euler,
    ModifiedEuler,
    RungeKutta2,
    RungeKutta3,
    RungeKutta4,
}

impl IvpMethod {
    pub fn name(&self) -> &'static str {
        match self {
            IvpMethod::Euler => "Euler",
            IvpMethod::ModifiedEuler => "modified Euler (Heun)",
            IvpMethod::RungeKutta2 => "Runge-Kutta 2",
            IvpMethod::RungeKutta3 => "Runge-Kutta 3",
            IvpMethod::RungeKutta4 => "Runge-Kutta 4",
        }
    }

    pub fn tableau(&self) -> Tableau {
        match self {
            IvpMethod::Euler => Tableau {
                c: vec![0.0],
                a: vec![vec![]],
                b: vec![1.0],
            },
            IvpMethod::ModifiedEuler => Tableau {
                c: vec![0.0, 1.0],
                a: vec![vec![], vec![1.0]],
                b: vec![0.5, 0.5],
            },
            IvpMethod::RungeKutta2 => Tableau {
                c: vec![0.0, 0.5],
                a: vec![vec![], vec![0.5]],
                b: vec![0.0, 1.0],
            },
            IvpMethod::RungeKutta3 => Tableau {
                c: vec![0.0, 0.5, 1.0],
                a: vec![vec![], vec![0.5], vec![-1.0, 2.0]],
                b: vec![1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0],
            },
            IvpMethod::RungeKutta4 => Tableau {
                c: vec![0.0, 0.5, 0.5, 1.0],
                a: vec![vec![], vec![0.5], vec![0.0, 0.5], vec![0.0, 0.0, 1.0]],
                b: vec![1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0],
            },
        }
    }
}

/// state after the last step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalState {
    pub t: f64,
    pub y: f64,
    /// `y'` for second order equations
    pub v: Option<f64>,
}

/// final state from the last record
pub fn solution(trace: &Trace) -> Option<FinalState> {
    Some(FinalState {
        t: trace.value("t_next")?,
        y: trace.value("y_next")?,
        v: trace.value("v_next"),
    })
}

/// right-hand side of the equation being integrated
#[derive(Clone)]
pub enum Ode {
    FirstOrder { f: OdeFn, y0: f64 },
    SecondOrder { f: SecondOrderFn, y0: f64, v0: f64 },
}

/// ODE, initial state and step control
#[derive(Clone)]
pub struct IvpProblem {
    pub ode: Ode,
    pub t0: f64,
    pub h: f64,
    pub steps: usize,
    pub method: IvpMethod,
    pub description: String,
}

impl IvpProblem {
    pub fn first_order(f: OdeFn, t0: f64, y0: f64, h: f64, steps: usize, method: IvpMethod) -> Self {
        Self {
            ode: Ode::FirstOrder { f, y0 },
            t0,
            h,
            steps,
            method,
            description: String::new(),
        }
    }

    pub fn second_order(
        f: SecondOrderFn,
        t0: f64,
        y0: f64,
        v0: f64,
        h: f64,
        steps: usize,
        method: IvpMethod,
    ) -> Self {
        Self {
            ode: Ode::SecondOrder { f, y0, v0 },
            t0,
            h,
            steps,
            method,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

impl SolveProblem for IvpProblem {
    fn solve(&self, _settings: &SolverSettings) -> Result<Trace, NumericError> {
        match &self.ode {
            Ode::FirstOrder { f, y0 } => {
                step(&**f, self.t0, *y0, self.h, self.steps, self.method)
            }
            Ode::SecondOrder { f, y0, v0 } => step_second_order(
                &**f,
                self.t0,
                *y0,
                *v0,
                self.h,
                self.steps,
                self.method,
            ),
        }
    }

    fn title(&self) -> String {
        let equation = if !self.description.is_empty() {
            self.description.clone()
        } else {
            match self.ode {
                Ode::FirstOrder { .. } => "y' = f(t, y)".to_string(),
                Ode::SecondOrder { .. } => "y'' = F(t, y, y')".to_string(),
            }
        };
        format!(
            "{}, {} with h = {}, {} steps",
            equation,
            self.method.name(),
            self.h,
            self.steps
        )
    }
}
