#[cfg(test)]
mod tests {
    use crate::Integration::{
        IntegralProblem, IntegrationRule, closed_coefficients, integrate, integrate_composite,
        open_coefficients, solution,
    };
    use crate::error::NumericError;
    use crate::functions::real_fn;
    use crate::problem::SolveProblem;
    use crate::settings::SolverSettings;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_trapezoidal_reference() {
        let trace = integrate(&|x: f64| 1.0 - x * x, 0.0, 1.0, 4, IntegrationRule::Trapezoidal)
            .unwrap();
        assert_abs_diff_eq!(solution(&trace).unwrap(), 0.65625, epsilon = 1e-15);
        // 5 nodes, the panel summary, the result
        assert_eq!(trace.len(), 7);
        assert_eq!(trace.column("weight"), vec![1.0, 2.0, 2.0, 2.0, 1.0]);
        assert_eq!(trace.value("h"), Some(0.25));
        let summary = trace.record(6).unwrap();
        assert_eq!(summary.get("alpha"), Some(0.5));
        assert_abs_diff_eq!(summary.get("sum").unwrap(), 5.25, epsilon = 1e-15);
    }

    #[test]
    fn test_weights_sum_to_interval_count() {
        for n in 1..=10 {
            let (alpha, weights) = closed_coefficients(n).unwrap();
            assert_eq!(weights.len(), n + 1);
            assert_abs_diff_eq!(alpha * weights.iter().sum::<f64>(), n as f64, epsilon = 1e-12);
        }
        for n in 1..=6 {
            let (alpha, weights) = open_coefficients(n).unwrap();
            assert_eq!(weights.len(), n + 1);
            assert_abs_diff_eq!(
                alpha * weights.iter().sum::<f64>(),
                (n + 2) as f64,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_closed_formulas_exact_for_polynomials() {
        for n in 1..=10 {
            let trace = integrate(
                &|x: f64| x.powi(n as i32),
                0.0,
                2.0,
                n,
                IntegrationRule::NewtonCotesClosed,
            )
            .unwrap();
            let exact = 2f64.powi(n as i32 + 1) / (n as f64 + 1.0);
            assert_abs_diff_eq!(solution(&trace).unwrap(), exact, epsilon = 1e-9);
        }
        // Simpson is exact for cubics
        let trace = integrate(&|x: f64| x.powi(3), 0.0, 2.0, 2, IntegrationRule::NewtonCotesClosed)
            .unwrap();
        assert_abs_diff_eq!(solution(&trace).unwrap(), 4.0, epsilon = 1e-14);
    }

    #[test]
    fn test_open_formulas_skip_endpoints() {
        for n in 1..=6 {
            let trace = integrate(
                &|x: f64| x.powi(n as i32),
                0.0,
                2.0,
                n,
                IntegrationRule::NewtonCotesOpen,
            )
            .unwrap();
            let exact = 2f64.powi(n as i32 + 1) / (n as f64 + 1.0);
            assert_abs_diff_eq!(solution(&trace).unwrap(), exact, epsilon = 1e-9);
            let xs = trace.column("x");
            assert!(xs.iter().all(|x| *x > 0.0 && *x < 2.0));
        }
        // ln(0) is never evaluated by an open formula
        let open = integrate(&f64::ln, 0.0, 1.0, 2, IntegrationRule::NewtonCotesOpen).unwrap();
        assert!(solution(&open).unwrap().is_finite());
        assert!(matches!(
            integrate(&f64::ln, 0.0, 1.0, 2, IntegrationRule::NewtonCotesClosed),
            Err(NumericError::DomainError(_))
        ));
    }

    #[test]
    fn test_composite_panels() {
        let single = integrate(&f64::sin, 0.0, PI, 2, IntegrationRule::NewtonCotesClosed).unwrap();
        let composite =
            integrate_composite(&f64::sin, 0.0, PI, 2, IntegrationRule::NewtonCotesClosed, 4)
                .unwrap();
        let exact = 2.0;
        let single_error = (solution(&single).unwrap() - exact).abs();
        let composite_error = (solution(&composite).unwrap() - exact).abs();
        assert!(composite_error < single_error);
        assert_abs_diff_eq!(solution(&composite).unwrap(), exact, epsilon = 5e-4);
        let panel_sum: f64 = composite.column("panel_integral").iter().sum();
        assert_abs_diff_eq!(panel_sum, solution(&composite).unwrap(), epsilon = 1e-15);
    }

    #[test]
    fn test_unsupported_orders() {
        assert_eq!(
            integrate(&f64::sin, 0.0, 1.0, 11, IntegrationRule::NewtonCotesClosed),
            Err(NumericError::UnsupportedOrder {
                family: "closed Newton-Cotes",
                order: 11
            })
        );
        assert_eq!(
            integrate(&f64::sin, 0.0, 1.0, 7, IntegrationRule::NewtonCotesOpen),
            Err(NumericError::UnsupportedOrder {
                family: "open Newton-Cotes",
                order: 7
            })
        );
        assert!(matches!(
            integrate(&f64::sin, 0.0, 1.0, 0, IntegrationRule::NewtonCotesClosed),
            Err(NumericError::UnsupportedOrder { order: 0, .. })
        ));
        assert!(matches!(
            integrate(&f64::sin, 0.0, 1.0, 0, IntegrationRule::Trapezoidal),
            Err(NumericError::InvalidInput(_))
        ));
        assert!(matches!(
            integrate_composite(&f64::sin, 0.0, 1.0, 2, IntegrationRule::Trapezoidal, 0),
            Err(NumericError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_integral_problem() {
        let problem = IntegralProblem::new(
            real_fn(|x: f64| 1.0 - x * x),
            0.0,
            1.0,
            4,
            IntegrationRule::Trapezoidal,
        )
        .with_description("1 - x^2");
        let settings = SolverSettings::default();
        let trace = problem.solve(&settings).unwrap();
        assert_eq!(trace, problem.solve(&settings).unwrap());
        assert_abs_diff_eq!(solution(&trace).unwrap(), 0.65625, epsilon = 1e-15);
        assert_eq!(
            problem.title(),
            "integral of 1 - x^2 over [0, 1], trapezoidal n = 4"
        );
    }
}
