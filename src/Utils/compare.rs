//! Comparison of caller-entered values with trace values: both sides are
//! rounded to `decimals` places, then must agree within `tolerance`.
use crate::settings::ComparisonSettings;
use crate::trace::Trace;

/// rounds half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

pub fn values_match(expected: f64, entered: f64, tolerance: f64) -> bool {
    (expected - entered).abs() <= tolerance
}

/// Checks `entered` against value `name` of record `step` (1-based).
/// `None` when the trace has no such value.
pub fn record_matches(
    trace: &Trace,
    step: usize,
    name: &str,
    entered: f64,
    settings: &ComparisonSettings,
) -> Option<bool> {
    let expected = trace.record(step)?.get(name)?;
    Some(values_match(
        round_to(expected, settings.decimals),
        round_to(entered, settings.decimals),
        settings.tolerance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RootFinding::bracketing::bisection;
    use crate::settings::IterationControl;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234567891, 8), 1.23456789);
        assert_eq!(round_to(0.1 + 0.2, 8), 0.3);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_record_matches() {
        let trace = bisection(
            &|x: f64| x * x - 2.0,
            1.0,
            2.0,
            &IterationControl::new(1e-3, 50),
        )
        .unwrap();
        let settings = ComparisonSettings::default();
        assert_eq!(record_matches(&trace, 1, "xr", 1.5, &settings), Some(true));
        assert_eq!(record_matches(&trace, 1, "fxr", 0.25, &settings), Some(true));
        assert_eq!(record_matches(&trace, 2, "xr", 1.25000002, &settings), Some(false));
        assert_eq!(record_matches(&trace, 2, "xr", 1.250000001, &settings), Some(true));
        assert_eq!(record_matches(&trace, 1, "no_such_value", 1.0, &settings), None);
        assert_eq!(record_matches(&trace, 99, "xr", 1.0, &settings), None);
    }
}
