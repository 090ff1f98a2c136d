//! Serializable summary of a scenario run

use crate::cashflow::CashflowMatrix;
use crate::error::Result;
use crate::financing::FinancingParams;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

pub const REPORT_TITLE: &str = "Cashflow simulation";

/// Extremes and coverage of one matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixSummary {
    pub min_cashflow: f64,
    pub max_cashflow: f64,
    /// Share of scenarios with non-negative cash flow (0.0 to 1.0)
    pub positive_share: f64,
}

impl MatrixSummary {
    pub fn from_matrix(matrix: &CashflowMatrix) -> Self {
        Self {
            min_cashflow: matrix.min().unwrap_or(0.0),
            max_cashflow: matrix.max().unwrap_or(0.0),
            positive_share: matrix.positive_share(),
        }
    }
}

/// Rent needed to break even at one interest rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEvenPoint {
    pub rate_percent: f64,
    pub rent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub financing: FinancingParams,
    pub loan_amount: f64,
    pub equity_amount: f64,
    pub years: i32,
    pub remaining_principal: f64,
    pub initial: MatrixSummary,
    pub amortized: MatrixSummary,
    pub break_even: Vec<BreakEvenPoint>,
}

impl ScenarioReport {
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Short plain-text header block
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            format!(
                "Purchase price: {:.0}, equity ratio: {:.1} %",
                self.financing.purchase_price,
                self.financing.equity_ratio * 100.0
            ),
            format!(
                "Amortization: {:.2} %, tax rate: {:.1} %",
                self.financing.amortization_rate * 100.0,
                self.financing.tax_rate * 100.0
            ),
            format!(
                "Remaining principal after {} years: {:.2}",
                self.years, self.remaining_principal
            ),
        ]
    }
}
