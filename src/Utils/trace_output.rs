//! Rendering of traces: prettytable for the terminal, JSON for files.
use crate::trace::Trace;
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table, row};
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceIoError {
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn matrix_table(matrix: &DMatrix<f64>) -> Table {
    let mut table = Table::new();
    for i in 0..matrix.nrows() {
        let cells = matrix
            .row(i)
            .iter()
            .map(|value| Cell::new(&format!("{:.6}", value)))
            .collect();
        table.add_row(Row::new(cells));
    }
    table
}

impl Trace {
    /// one row per record: step, label, named values, matrix snapshot
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(row!["Step", "Label", "Values", "Matrix"]);
        for record in self.records() {
            let values = record
                .values
                .iter()
                .map(|(name, value)| format!("{} = {:.8}", name, value))
                .collect::<Vec<_>>()
                .join("\n");
            let matrix = record
                .matrix
                .as_ref()
                .map(|m| matrix_table(m).to_string())
                .unwrap_or_default();
            table.add_row(row![record.step, record.label, values, matrix]);
        }
        table
    }

    pub fn pretty_print(&self) {
        println!("\n{} ({:?})", self.method(), self.termination());
        self.to_table().printstd();
    }

    pub fn to_json(&self) -> Result<String, TraceIoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &str) -> Result<(), TraceIoError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<Trace, TraceIoError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
