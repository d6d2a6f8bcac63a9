//! # Solution Traces
//!
//! A [`Trace`] is the ordered, append-only log of every intermediate value a
//! solver computes. Records appear in the order the values were computed and
//! each one carries its named values in insertion order, so a caller can
//! compare a hand-computed intermediate quantity against the exact value the
//! kernel produced at the same step.
//!
//! Traces are built only inside the crate: solvers push records and then
//! seal the trace with a [`Termination`]. Once returned, the trace is owned
//! by the caller and exposes read-only accessors. Final results (roots,
//! coefficients, integrals, states) are always read back from the last
//! record, never from hidden solver state.
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// why the computation stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// an iterative method met its tolerance
    Converged,
    /// a direct (finite) method ran all of its steps
    Completed,
    /// the iteration cap was hit before the tolerance was met
    NotConverged,
}

/// one step of a computation: a label plus its named values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based position in the trace
    pub step: usize,
    /// what happened at this step, e.g. "iteration 3" or "normalize row 2"
    pub label: String,
    /// named values in computation order
    pub values: Vec<(String, f64)>,
    /// snapshot of the working matrix after the step (direct linear solvers)
    pub matrix: Option<DMatrix<f64>>,
}

impl IterationRecord {
    pub fn new(step: usize, label: impl Into<String>) -> Self {
        Self {
            step,
            label: label.into(),
            values: Vec::new(),
            matrix: None,
        }
    }

    /// builder-style append of a named value
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.values.push((name.into(), value));
    }

    pub fn with_matrix(mut self, matrix: DMatrix<f64>) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// first value stored under `name`
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.values.iter().map(|(key, _)| key.as_str()).collect()
    }
}

/// ordered record of a single solve call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    method: String,
    records: Vec<IterationRecord>,
    termination: Termination,
}

impl Trace {
    pub(crate) fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            records: Vec::new(),
            termination: Termination::Completed,
        }
    }

    pub(crate) fn push(&mut self, record: IterationRecord) {
        self.records.push(record);
    }

    /// step number the next pushed record should carry
    pub(crate) fn next_step(&self) -> usize {
        self.records.len() + 1
    }

    /// copies the records of a sub-computation, renumbered and tagged
    pub(crate) fn append_nested(&mut self, other: &Trace, tag: &str) {
        for record in &other.records {
            let mut copy = record.clone();
            copy.step = self.next_step();
            copy.label = format!("{}: {}", tag, record.label);
            self.records.push(copy);
        }
    }

    /// seals the trace
    pub(crate) fn finish(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// record with the given 1-based step number
    pub fn record(&self, step: usize) -> Option<&IterationRecord> {
        step.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// value of `name` in the last record
    pub fn value(&self, name: &str) -> Option<f64> {
        self.last().and_then(|r| r.get(name))
    }

    /// every value stored under `name`, in trace order
    pub fn column(&self, name: &str) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.get(name)).collect()
    }

    /// reads `prefix1 .. prefixN` (1-based) from the last record
    pub fn vector(&self, prefix: &str, n: usize) -> Option<DVector<f64>> {
        let last = self.last()?;
        let values: Option<Vec<f64>> = (1..=n)
            .map(|i| last.get(&format!("{}{}", prefix, i)))
            .collect();
        values.map(DVector::from_vec)
    }

    /// reads `prefix{first}, prefix{first+1}, ...` from the last record until
    /// a name is missing
    pub fn indexed(&self, prefix: &str, first: usize) -> Vec<f64> {
        let Some(last) = self.last() else {
            return Vec::new();
        };
        (first..)
            .map_while(|i| last.get(&format!("{}{}", prefix, i)))
            .collect()
    }
}
