//! # Settings Module
//!
//! ## Purpose
//! Holds the numeric knobs of the kernel: stopping tolerances, iteration caps,
//! the thresholds below which a pivot or a derivative counts as zero, and the
//! rounding convention used when a caller compares its own intermediate values
//! against a trace.
//!
//! ## Configuration File
//! Settings persist as pretty-printed JSON. Missing fields fall back to their
//! defaults, so a file may override only what it needs:
//! ```json
//! {
//!   "bracketing": { "tolerance": 1e-3, "max_iterations": 50 },
//!   "pivot_epsilon": 1e-12
//! }
//! ```
//!
//! ## Iteration caps
//! The caps are safety bounds against non-convergent problems, not
//! mathematically meaningful constants. A solver that hits its cap returns
//! its trace flagged `NotConverged`.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// configuration errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// stopping rule of an iterative method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationControl {
    /// absolute tolerance on the error metric of the method
    pub tolerance: f64,
    /// hard cap on the number of iterations
    pub max_iterations: usize,
}

impl IterationControl {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    fn validate(&self, name: &str) -> Result<(), SettingsError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(SettingsError::Invalid(format!(
                "{} tolerance must be positive",
                name
            )));
        }
        if self.max_iterations == 0 {
            return Err(SettingsError::Invalid(format!(
                "{} max_iterations must be at least 1",
                name
            )));
        }
        Ok(())
    }
}

/// rounding convention for comparing user-entered values with a trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    pub decimals: u32,
    pub tolerance: f64,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            decimals: 8,
            tolerance: 1e-8,
        }
    }
}

/// all tunable parameters of the kernel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Gauss-Seidel
    pub linear_iterative: IterationControl,
    /// bisection and false position
    pub bracketing: IterationControl,
    /// Newton-Raphson, fixed point and secant
    pub open_methods: IterationControl,
    /// |pivot| at or below `pivot_epsilon · max|a_ij|` is a zero pivot
    pub pivot_epsilon: f64,
    /// |f'(x)| below this stops Newton-Raphson
    pub derivative_epsilon: f64,
    pub comparison: ComparisonSettings,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            linear_iterative: IterationControl::new(1e-8, 100),
            bracketing: IterationControl::new(1e-3, 50),
            open_methods: IterationControl::new(1e-8, 50),
            pivot_epsilon: 1e-12,
            derivative_epsilon: 1e-12,
            comparison: ComparisonSettings::default(),
        }
    }
}

impl SolverSettings {
    pub const DEFAULT_FILE: &'static str = "numeritrace_settings.json";

    /// Loads settings from [`Self::DEFAULT_FILE`] in the working directory.
    pub fn load() -> Self {
        Self::load_from(Self::DEFAULT_FILE)
    }

    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing, unreadable or invalid.
    pub fn load_from(path: &str) -> Self {
        match Self::read(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("using default settings, {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Strict variant of [`Self::load_from`]: a missing file yields the
    /// defaults, every other problem is an error.
    pub fn read(path: &str) -> Result<Self, SettingsError> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: SolverSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &str) -> Result<(), SettingsError> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.linear_iterative.validate("linear_iterative")?;
        self.bracketing.validate("bracketing")?;
        self.open_methods.validate("open_methods")?;
        if !(self.pivot_epsilon >= 0.0 && self.derivative_epsilon >= 0.0) {
            return Err(SettingsError::Invalid(
                "pivot and derivative thresholds must be non-negative".to_string(),
            ));
        }
        if !(self.comparison.tolerance >= 0.0) {
            return Err(SettingsError::Invalid(
                "comparison tolerance must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}
