//! # Problems
//!
//! A [`Problem`] is the immutable description of one task of any family
//! together with the method that solves it. Dispatch over the families is
//! static, through `enum_dispatch`.
//!
//! Problems come from a [`ProblemSource`]; [`ProblemPool`] serves a fixed
//! list in round-robin order.
use crate::CurveFitting::FitProblem;
use crate::InitialValueProblems::IvpProblem;
use crate::Integration::IntegralProblem;
use crate::Interpolation::InterpolationProblem;
use crate::LinearSystems::LinearProblem;
use crate::RootFinding::RootProblem;
use crate::error::NumericError;
use crate::settings::SolverSettings;
use crate::trace::Trace;
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub trait SolveProblem {
    /// runs the stored method; every call builds a fresh trace
    fn solve(&self, settings: &SolverSettings) -> Result<Trace, NumericError>;
    /// one-line description for menus and table headers
    fn title(&self) -> String;
}

#[derive(Clone)]
#[enum_dispatch(SolveProblem)]
pub enum Problem {
    Linear(LinearProblem),
    Root(RootProblem),
    Interpolation(InterpolationProblem),
    Fit(FitProblem),
    Integral(IntegralProblem),
    Ivp(IvpProblem),
}

impl Problem {
    pub fn family(&self) -> &'static str {
        match self {
            Problem::Linear(_) => "linear systems",
            Problem::Root(_) => "root finding",
            Problem::Interpolation(_) => "interpolation",
            Problem::Fit(_) => "curve fitting",
            Problem::Integral(_) => "integration",
            Problem::Ivp(_) => "initial value problems",
        }
    }
}

/// supplier of problems
pub trait ProblemSource {
    fn next_problem(&mut self) -> Option<Problem>;
}

/// fixed problem list served in order, wrapping around at the end
#[derive(Clone, Default)]
pub struct ProblemPool {
    problems: Vec<Problem>,
    cursor: usize,
}

impl ProblemPool {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            cursor: 0,
        }
    }

    pub fn push(&mut self, problem: impl Into<Problem>) {
        self.problems.push(problem.into());
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}

impl ProblemSource for ProblemPool {
    fn next_problem(&mut self) -> Option<Problem> {
        if self.problems.is_empty() {
            return None;
        }
        let problem = self.problems[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.problems.len();
        Some(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Integration::IntegrationRule;
    use crate::LinearSystems::{LinearMethod, LinearSystem};
    use crate::RootFinding::RootMethod;
    use crate::functions::real_fn;

    fn pool() -> ProblemPool {
        let system =
            LinearSystem::from_rows(&[vec![4.0, 1.0], vec![1.0, 3.0]], &[1.0, 2.0]).unwrap();
        let mut pool = ProblemPool::default();
        pool.push(LinearProblem::new(system, LinearMethod::GaussJordan));
        pool.push(RootProblem::new(
            real_fn(|x: f64| x * x - 2.0),
            RootMethod::Bisection { a: 1.0, b: 2.0 },
        ));
        pool.push(IntegralProblem::new(
            real_fn(|x: f64| x),
            0.0,
            1.0,
            1,
            IntegrationRule::NewtonCotesClosed,
        ));
        pool
    }

    #[test]
    fn test_round_robin() {
        let mut pool = pool();
        assert_eq!(pool.len(), 3);
        let families: Vec<&str> = (0..4)
            .map(|_| pool.next_problem().unwrap().family())
            .collect();
        assert_eq!(
            families,
            vec!["linear systems", "root finding", "integration", "linear systems"]
        );
        assert!(ProblemPool::default().next_problem().is_none());
    }

    #[test]
    fn test_dispatch_solves_every_variant() {
        let settings = SolverSettings::default();
        for problem in pool().problems() {
            let trace = problem.solve(&settings).unwrap();
            assert!(!trace.is_empty(), "{}", problem.title());
        }
        let integral = pool().problems()[2].solve(&settings).unwrap();
        assert_eq!(integral.value("I"), Some(0.5));
    }
}
