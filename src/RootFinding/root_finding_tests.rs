#[cfg(test)]
mod tests {
    use crate::RootFinding::bracketing::{bisection, false_position};
    use crate::RootFinding::open_methods::{fixed_point, newton_raphson, secant};
    use crate::RootFinding::{RootMethod, RootProblem, solution, solve};
    use crate::error::NumericError;
    use crate::functions::real_fn;
    use crate::problem::SolveProblem;
    use crate::settings::{IterationControl, SolverSettings};
    use crate::trace::Termination;
    use approx::assert_abs_diff_eq;

    const ROOT: f64 = 1.3688081078213727;

    fn cubic(x: f64) -> f64 {
        x.powi(3) + 2.0 * x.powi(2) + 10.0 * x - 20.0
    }

    fn cubic_derivative(x: f64) -> f64 {
        3.0 * x.powi(2) + 4.0 * x + 10.0
    }

    fn bracket_control() -> IterationControl {
        SolverSettings::default().bracketing
    }

    #[test]
    fn test_newton_raphson_reference_problem() {
        let problem = RootProblem::new(real_fn(cubic), RootMethod::NewtonRaphson { x0: 1.0 })
            .with_derivative(real_fn(cubic_derivative));
        let trace = solve(&problem, &SolverSettings::default()).unwrap();
        assert!(trace.is_converged());
        assert!(trace.len() <= 6);
        assert_abs_diff_eq!(solution(&trace).unwrap(), 1.36880811, epsilon = 1e-7);

        let first = trace.record(1).unwrap();
        assert_eq!(first.get("x"), Some(1.0));
        assert_eq!(first.get("fx"), Some(-7.0));
        assert_eq!(first.get("dfx"), Some(17.0));
        assert_abs_diff_eq!(first.get("x_next").unwrap(), 1.41176470588, epsilon = 1e-10);
    }

    #[test]
    fn test_bisection_errors_halve() {
        let trace = bisection(&cubic, 1.0, 2.0, &bracket_control()).unwrap();
        assert_eq!(trace.termination(), Termination::Converged);
        assert_eq!(trace.len(), 10);
        assert_eq!(trace.record(1).unwrap().get("error"), None);
        let errors = trace.column("error");
        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0]);
            assert_abs_diff_eq!(pair[1], pair[0] / 2.0, epsilon = 1e-15);
        }
        assert_eq!(solution(&trace), Some(1.3681640625));
        let last = trace.last().unwrap();
        assert!(last.get("fa").unwrap() * last.get("fb").unwrap() <= 0.0);
    }

    #[test]
    fn test_false_position() {
        let trace = false_position(&cubic, 1.0, 2.0, &bracket_control()).unwrap();
        assert!(trace.is_converged());
        assert_eq!(trace.len(), 5);
        assert_abs_diff_eq!(
            trace.record(1).unwrap().get("xr").unwrap(),
            1.3043478260869565,
            epsilon = 1e-12
        );
        let errors = trace.column("error");
        for pair in errors.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        let last = trace.last().unwrap();
        assert!(last.get("fa").unwrap() * last.get("fb").unwrap() <= 0.0);
        assert_abs_diff_eq!(solution(&trace).unwrap(), ROOT, epsilon = 1e-3);
    }

    #[test]
    fn test_bracketing_stops_on_exact_root() {
        let trace = bisection(&|x: f64| x - 1.5, 1.0, 2.0, &bracket_control()).unwrap();
        assert!(trace.is_converged());
        assert_eq!(trace.len(), 1);
        assert_eq!(solution(&trace), Some(1.5));
    }

    #[test]
    fn test_bracketing_cap() {
        let control = IterationControl::new(1e-12, 5);
        let trace = bisection(&cubic, 1.0, 2.0, &control).unwrap();
        assert_eq!(trace.termination(), Termination::NotConverged);
        assert_eq!(trace.len(), 5);
    }

    #[test]
    fn test_fixed_point_converges() {
        let g = |x: f64| 20.0 / (x * x + 2.0 * x + 10.0);
        let control = SolverSettings::default().open_methods;
        let trace = fixed_point(&g, 1.0, &control).unwrap();
        assert!(trace.is_converged());
        assert_eq!(trace.len(), 23);
        assert_abs_diff_eq!(solution(&trace).unwrap(), ROOT, epsilon = 1e-7);
    }

    #[test]
    fn test_fixed_point_divergence_guard() {
        let g = |x: f64| (20.0 - 2.0 * x * x - x.powi(3)) / 10.0;
        let control = SolverSettings::default().open_methods;
        match fixed_point(&g, 1.0, &control) {
            Err(NumericError::Diverged {
                iteration,
                previous,
                current,
            }) => {
                assert_eq!(iteration, 2);
                assert_abs_diff_eq!(previous, 0.7, epsilon = 1e-12);
                assert_abs_diff_eq!(current, 0.7693, epsilon = 1e-12);
            }
            other => panic!("expected divergence, got {:?}", other),
        }
    }

    #[test]
    fn test_secant() {
        let control = SolverSettings::default().open_methods;
        let trace = secant(&cubic, 1.0, 2.0, &control).unwrap();
        assert!(trace.is_converged());
        assert_eq!(trace.len(), 6);
        let second = trace.record(2).unwrap();
        assert_eq!(second.get("x_prev"), Some(2.0));
        assert_abs_diff_eq!(second.get("x").unwrap(), 1.3043478260869565, epsilon = 1e-12);
        assert_abs_diff_eq!(solution(&trace).unwrap(), ROOT, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_derivative() {
        let control = SolverSettings::default().open_methods;
        let result = newton_raphson(&|x: f64| x * x - 4.0, &|x: f64| 2.0 * x, 0.0, &control, 1e-12);
        assert_eq!(result, Err(NumericError::ZeroDerivative { iteration: 1, x: 0.0 }));
    }

    #[test]
    fn test_zero_denominator() {
        let control = SolverSettings::default().open_methods;
        let result = secant(&|x: f64| x * x, -1.0, 1.0, &control);
        assert_eq!(result, Err(NumericError::ZeroDenominator { iteration: 1 }));
    }

    #[test]
    fn test_domain_error() {
        // the first Newton step lands at a negative x
        let control = SolverSettings::default().open_methods;
        let result = newton_raphson(&f64::ln, &|x: f64| 1.0 / x, 3.0, &control, 1e-12);
        assert!(matches!(result, Err(NumericError::DomainError(_))));
    }

    #[test]
    fn test_problem_requires_functions() {
        let settings = SolverSettings::default();
        let newton = RootProblem::new(real_fn(cubic), RootMethod::NewtonRaphson { x0: 1.0 });
        assert!(matches!(
            newton.solve(&settings),
            Err(NumericError::InvalidInput(_))
        ));
        let fixed = RootProblem::new(real_fn(cubic), RootMethod::FixedPoint { x0: 1.0 });
        assert!(matches!(
            fixed.solve(&settings),
            Err(NumericError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_tolerance_override_and_determinism() {
        let settings = SolverSettings::default();
        let problem = RootProblem::new(real_fn(cubic), RootMethod::Bisection { a: 1.0, b: 2.0 })
            .with_tolerance(1e-6)
            .with_description("x^3 + 2x^2 + 10x - 20");
        let trace = problem.solve(&settings).unwrap();
        assert!(trace.last().unwrap().get("error").unwrap() < 1e-6);
        assert_eq!(trace, problem.solve(&settings).unwrap());
        assert_eq!(problem.title(), "x^3 + 2x^2 + 10x - 20, bisection");
    }
}
