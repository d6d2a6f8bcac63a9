#[cfg(test)]
mod tests {
    use crate::CurveFitting::{
        FitModel, FitProblem, coefficients, evaluate, fit, fit_statistics,
    };
    use crate::error::NumericError;
    use crate::functions::real_fn;
    use crate::problem::SolveProblem;
    use crate::settings::SolverSettings;
    use approx::assert_abs_diff_eq;

    fn reference_points() -> Vec<(f64, f64)> {
        vec![(1.1, 2.5), (1.9, 2.7), (2.4, 3.7), (4.8, 5.2)]
    }

    #[test]
    fn test_linear_fit_reference_points() {
        let points = reference_points();
        let trace = fit(&points, &FitModel::Linear, &SolverSettings::default()).unwrap();
        let a = coefficients(&trace);
        assert_eq!(a.len(), 2);
        assert_abs_diff_eq!(a[0], 1.5932325886990804, epsilon = 1e-10);
        assert_abs_diff_eq!(a[1], 0.7575558475689883, epsilon = 1e-10);

        // least-squares optimality: residual orthogonal to the design columns
        let residuals: Vec<f64> = points
            .iter()
            .map(|(x, y)| y - evaluate(&FitModel::Linear, &a, *x).unwrap())
            .collect();
        let dot_one: f64 = residuals.iter().sum();
        let dot_x: f64 = residuals.iter().zip(&points).map(|(r, (x, _))| r * x).sum();
        assert_abs_diff_eq!(dot_one, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(dot_x, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_normal_equation_sums_recorded() {
        let trace = fit(&reference_points(), &FitModel::Linear, &SolverSettings::default()).unwrap();
        let sums = trace.record(1).unwrap();
        assert_eq!(sums.get("n"), Some(4.0));
        assert_abs_diff_eq!(sums.get("sum_x1").unwrap(), 10.2, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.get("sum_x2").unwrap(), 33.62, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.get("sum_y").unwrap(), 14.1, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.get("sum_x1y").unwrap(), 41.72, epsilon = 1e-12);
        assert!(sums.get("sum_phi").is_none());
        // sums + 2 Gauss-Jordan stages x 2 records + GJ solution + coefficients
        assert_eq!(trace.len(), 1 + 4 + 1 + 1);
        assert!(trace.records()[1].label.starts_with("normal equations"));
    }

    #[test]
    fn test_polynomials_recover_exact_data() {
        let settings = SolverSettings::default();
        let quadratic: Vec<(f64, f64)> = (0..6)
            .map(|i| {
                let x = i as f64 * 0.5;
                (x, 1.0 + 2.0 * x + 3.0 * x * x)
            })
            .collect();
        let a = coefficients(&fit(&quadratic, &FitModel::Quadratic, &settings).unwrap());
        for (got, want) in a.iter().zip([1.0, 2.0, 3.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-8);
        }

        let cubic: Vec<(f64, f64)> = (0..7)
            .map(|i| {
                let x = i as f64 - 3.0;
                (x, 0.5 - x + 0.25 * x.powi(3))
            })
            .collect();
        let a = coefficients(&fit(&cubic, &FitModel::Cubic, &settings).unwrap());
        for (got, want) in a.iter().zip([0.5, -1.0, 0.0, 0.25]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-8);
        }
        let stats = fit_statistics(&cubic, &FitModel::Cubic, &a).unwrap();
        assert_abs_diff_eq!(stats.sse, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.r_squared, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_with_basis_function() {
        let model = FitModel::LinearWithBasis(real_fn(f64::ln));
        let points: Vec<(f64, f64)> = (1..=6)
            .map(|i| {
                let x = i as f64;
                (x, 2.0 + 0.5 * x + 3.0 * x.ln())
            })
            .collect();
        let trace = fit(&points, &model, &SolverSettings::default()).unwrap();
        let a = coefficients(&trace);
        assert_eq!(a.len(), 3);
        for (got, want) in a.iter().zip([2.0, 0.5, 3.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-8);
        }
        assert!(trace.record(1).unwrap().get("sum_phi2").is_some());
        assert_abs_diff_eq!(
            evaluate(&model, &a, 10.0).unwrap(),
            2.0 + 5.0 + 3.0 * 10f64.ln(),
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_quadratic_with_basis_function() {
        let model = FitModel::QuadraticWithBasis(real_fn(f64::sin));
        let points: Vec<(f64, f64)> = (0..8)
            .map(|i| {
                let x = i as f64 * 0.7;
                (x, 1.0 - x + 0.1 * x * x + 2.0 * x.sin())
            })
            .collect();
        let a = coefficients(&fit(&points, &model, &SolverSettings::default()).unwrap());
        for (got, want) in a.iter().zip([1.0, -1.0, 0.1, 2.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_fit_errors() {
        let settings = SolverSettings::default();
        assert!(matches!(
            fit(&[(1.0, 2.0), (2.0, 3.0)], &FitModel::Quadratic, &settings),
            Err(NumericError::InvalidInput(_))
        ));
        let with_zero = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 5.0)];
        assert!(matches!(
            fit(&with_zero, &FitModel::LinearWithBasis(real_fn(f64::ln)), &settings),
            Err(NumericError::DomainError(_))
        ));
        assert!(matches!(
            evaluate(&FitModel::Cubic, &[1.0, 2.0], 1.0),
            Err(NumericError::DimensionMismatch(_))
        ));
        // identical abscissae make the normal matrix singular (exact cancellation here)
        let flat = vec![(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)];
        assert!(matches!(
            fit(&flat, &FitModel::Linear, &settings),
            Err(NumericError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_fit_problem_is_deterministic() {
        let problem = FitProblem::new(reference_points(), FitModel::Linear);
        let settings = SolverSettings::default();
        assert_eq!(problem.solve(&settings).unwrap(), problem.solve(&settings).unwrap());
        assert_eq!(problem.title(), "least-squares linear fit of 4 points");
    }

    #[test]
    fn test_identical_abscissae_always_singular() {
        let settings = SolverSettings::default();
        for k in 1..2000 {
            let x = k as f64 * 0.37 + 0.013;
            let flat = vec![(x, 1.0), (x, 2.0), (x, 3.0)];
            let result = fit(&flat, &FitModel::Linear, &settings);
            assert!(
                matches!(result, Err(NumericError::SingularMatrix { row: 1 })),
                "x = {}: {:?}",
                x,
                result.map(|trace| coefficients(&trace))
            );
        }
        assert!(matches!(
            fit(&[(46.633, 1.0), (46.633, 2.0), (46.633, 3.0)], &FitModel::Linear, &settings),
            Err(NumericError::SingularMatrix { .. })
        ));
    }
}
