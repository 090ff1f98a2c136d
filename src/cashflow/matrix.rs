//! Row-major cash flow matrix and its CSV export

use crate::error::{CashflowError, Result};
use crate::grid::ScenarioAxis;
use serde::Serialize;
use std::io::Write;

/// Monthly net cash flow indexed `[rent_index][rate_index]`
///
/// Always rebuilt from scratch by the engine; there are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CashflowMatrix {
    rows: Vec<Vec<f64>>,
}

impl CashflowMatrix {
    pub(crate) fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// (number of rents, number of rates)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn get(&self, rent_index: usize, rate_index: usize) -> Option<f64> {
        self.rows.get(rent_index)?.get(rate_index).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// All cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn min(&self) -> Option<f64> {
        self.iter_cells().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.iter_cells().reduce(f64::max)
    }

    /// Share of scenarios with a non-negative cash flow
    pub fn positive_share(&self) -> f64 {
        let (rents, rates) = self.dims();
        let total = rents * rates;
        if total == 0 {
            return 0.0;
        }
        let positive = self.iter_cells().filter(|&v| v >= 0.0).count();
        positive as f64 / total as f64
    }

    /// Write the matrix as CSV: a header of rates in percent, then one row per rent
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        rate_axis: &ScenarioAxis,
        rent_axis: &ScenarioAxis,
    ) -> Result<()> {
        if self.dims() != (rent_axis.len(), rate_axis.len()) {
            return Err(CashflowError::InvalidInput(format!(
                "matrix is {:?} but axes are {}x{}",
                self.dims(),
                rent_axis.len(),
                rate_axis.len()
            )));
        }

        let mut csv_writer = csv::Writer::from_writer(writer);

        let mut header = Vec::with_capacity(rate_axis.len() + 1);
        header.push("rent".to_string());
        header.extend(rate_axis.fraction_to_percent().iter().map(|p| format!("{:.2}%", p)));
        csv_writer.write_record(&header)?;

        for (rent, row) in rent_axis.iter().zip(&self.rows) {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(format!("{:.2}", rent));
            record.extend(row.iter().map(|v| format!("{:.2}", v)));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
