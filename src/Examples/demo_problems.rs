//! Textbook problems for every family, used by the interactive menu.
use crate::CurveFitting::{FitModel, FitProblem};
use crate::InitialValueProblems::{IvpMethod, IvpProblem};
use crate::Integration::{IntegralProblem, IntegrationRule};
use crate::Interpolation::{InterpolationMethod, InterpolationProblem};
use crate::LinearSystems::{LinearMethod, LinearProblem, LinearSystem};
use crate::RootFinding::{RootMethod, RootProblem};
use crate::error::NumericError;
use crate::functions::real_fn;
use crate::problem::{Problem, ProblemPool};
use std::f64::consts::PI;
use std::rc::Rc;
use strum::IntoEnumIterator;

pub const FAMILIES: [&str; 6] = [
    "Linear systems",
    "Root finding",
    "Interpolation",
    "Curve fitting",
    "Integration",
    "Initial value problems",
];

pub fn linear_problems() -> Result<Vec<Problem>, NumericError> {
    let dominant = LinearSystem::from_rows(
        &[
            vec![3.0, -0.1, -0.2],
            vec![0.1, 7.0, -0.3],
            vec![0.3, -0.2, 10.0],
        ],
        &[7.85, -19.3, 71.4],
    )?;
    let integer = LinearSystem::from_rows(
        &[vec![2.0, 3.0, 1.0], vec![4.0, 1.0, 2.0], vec![3.0, 2.0, 3.0]],
        &[9.0, 8.0, 13.0],
    )?;
    let mut problems: Vec<Problem> = LinearMethod::iter()
        .map(|method| LinearProblem::new(dominant.clone(), method).into())
        .collect();
    problems.push(LinearProblem::new(integer, LinearMethod::Montante).into());
    Ok(problems)
}

pub fn root_problems() -> Vec<Problem> {
    let f = real_fn(|x: f64| x.powi(3) + 2.0 * x.powi(2) + 10.0 * x - 20.0);
    let df = real_fn(|x: f64| 3.0 * x.powi(2) + 4.0 * x + 10.0);
    let g = real_fn(|x: f64| 20.0 / (x * x + 2.0 * x + 10.0));
    let description = "x^3 + 2x^2 + 10x - 20 = 0";
    [
        RootMethod::Bisection { a: 1.0, b: 2.0 },
        RootMethod::FalsePosition { a: 1.0, b: 2.0 },
        RootMethod::NewtonRaphson { x0: 1.0 },
        RootMethod::FixedPoint { x0: 1.0 },
        RootMethod::Secant { x0: 1.0, x1: 2.0 },
    ]
    .into_iter()
    .map(|method| {
        RootProblem::new(f.clone(), method)
            .with_derivative(df.clone())
            .with_iteration_fn(g.clone())
            .with_description(description)
            .into()
    })
    .collect()
}

pub fn interpolation_problems() -> Vec<Problem> {
    // ln(x) at 1, 4, 6, 5
    let nodes = vec![
        (1.0, 0.0),
        (4.0, 1.386294361),
        (6.0, 1.791759469),
        (5.0, 1.609437912),
    ];
    [
        InterpolationMethod::Lagrange { x: 2.0 },
        InterpolationMethod::NewtonDividedDifferences { x: 2.0 },
        InterpolationMethod::Vandermonde,
    ]
    .into_iter()
    .map(|method| {
        InterpolationProblem {
            points: nodes.clone(),
            method,
        }
        .into()
    })
    .collect()
}

pub fn fit_problems() -> Vec<Problem> {
    let reference = vec![(1.1, 2.5), (1.9, 2.7), (2.4, 3.7), (4.8, 5.2)];
    let curved = vec![
        (0.0, 2.1),
        (1.0, 7.7),
        (2.0, 13.6),
        (3.0, 27.2),
        (4.0, 40.9),
        (5.0, 61.1),
    ];
    vec![
        FitProblem::new(reference, FitModel::Linear).into(),
        FitProblem::new(curved.clone(), FitModel::Quadratic).into(),
        FitProblem::new(curved.clone(), FitModel::Cubic).into(),
        FitProblem::new(
            curved[1..].to_vec(),
            FitModel::LinearWithBasis(real_fn(f64::ln)),
        )
        .into(),
    ]
}

pub fn integral_problems() -> Vec<Problem> {
    vec![
        IntegralProblem::new(
            real_fn(|x: f64| 1.0 - x * x),
            0.0,
            1.0,
            4,
            IntegrationRule::Trapezoidal,
        )
        .with_description("1 - x^2")
        .into(),
        IntegralProblem::new(real_fn(f64::sin), 0.0, PI, 2, IntegrationRule::NewtonCotesClosed)
            .with_panels(4)
            .with_description("sin(x)")
            .into(),
        IntegralProblem::new(real_fn(f64::exp), 0.0, 1.0, 6, IntegrationRule::NewtonCotesClosed)
            .with_description("exp(x)")
            .into(),
        IntegralProblem::new(real_fn(f64::ln), 0.0, 1.0, 3, IntegrationRule::NewtonCotesOpen)
            .with_description("ln(x)")
            .into(),
    ]
}

pub fn ivp_problems() -> Vec<Problem> {
    let reference = Rc::new(|t: f64, y: f64| (5.0 * y * t - 1.0) / 3.0);
    let mut problems: Vec<Problem> = IvpMethod::iter()
        .map(|method| {
            IvpProblem::first_order(reference.clone(), 0.0, 1.2, 0.2, 2, method)
                .with_description("3y' - 5yt + 1 = 0")
                .into()
        })
        .collect();
    problems.push(
        IvpProblem::second_order(
            Rc::new(|_t: f64, y: f64, _v: f64| -y),
            0.0,
            1.0,
            0.0,
            0.1,
            10,
            IvpMethod::RungeKutta4,
        )
        .with_description("y'' + y = 0")
        .into(),
    );
    problems
}

/// problems of family `index` (position in [`FAMILIES`])
pub fn problems_for(index: usize) -> Result<Vec<Problem>, NumericError> {
    match index {
        0 => linear_problems(),
        1 => Ok(root_problems()),
        2 => Ok(interpolation_problems()),
        3 => Ok(fit_problems()),
        4 => Ok(integral_problems()),
        5 => Ok(ivp_problems()),
        _ => Err(NumericError::InvalidInput(format!(
            "no problem family number {}",
            index
        ))),
    }
}

/// every demo problem, in family order
pub fn demo_pool() -> Result<ProblemPool, NumericError> {
    let mut problems = Vec::new();
    for index in 0..FAMILIES.len() {
        problems.extend(problems_for(index)?);
    }
    Ok(ProblemPool::new(problems))
}
