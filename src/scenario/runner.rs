//! Runs one scenario: axes, initial matrix, amortized matrix and break-even rents

use super::config::ScenarioConfig;
use super::report::{BreakEvenPoint, MatrixSummary, ScenarioReport, REPORT_TITLE};
use crate::amortization::{project_years, AmortizationState};
use crate::cashflow::{break_even_rents, compute_cashflow_matrix, CashflowMatrix, ColorBand};
use crate::error::Result;
use crate::grid::ScenarioAxis;
use chrono::Utc;
use log::info;

/// Everything computed for one scenario
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub rate_axis: ScenarioAxis,
    pub rent_axis: ScenarioAxis,
    /// Matrix at purchase, on the full loan amount
    pub matrix: CashflowMatrix,
    /// Matrix after `years`, on the remaining principal
    pub amortized: AmortizationState,
    /// Break-even rent per rate at purchase
    pub break_even: Vec<f64>,
}

pub struct ScenarioRunner {
    config: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn run(&self) -> Result<ScenarioResult> {
        let financing = &self.config.financing;
        financing.validate()?;

        let rate_axis = self.config.grid.rate_axis()?;
        let rent_axis = self.config.grid.rent_axis()?;

        info!(
            "running scenario: loan {:.2}, {} rates x {} rents, {} years",
            financing.loan_amount(),
            rate_axis.len(),
            rent_axis.len(),
            self.config.years
        );

        let matrix = compute_cashflow_matrix(financing, &rate_axis, &rent_axis)?;
        let amortized =
            AmortizationState::compute(financing, &rate_axis, &rent_axis, self.config.years)?;
        let break_even = break_even_rents(financing, &rate_axis, None)?;

        Ok(ScenarioResult {
            rate_axis,
            rent_axis,
            matrix,
            amortized,
            break_even,
        })
    }

    /// Amortized matrices for every year in `1..=max_years`
    pub fn run_years(&self, max_years: i32) -> Result<Vec<AmortizationState>> {
        let rate_axis = self.config.grid.rate_axis()?;
        let rent_axis = self.config.grid.rent_axis()?;
        project_years(&self.config.financing, &rate_axis, &rent_axis, 1..=max_years)
    }

    pub fn report(&self, result: &ScenarioResult) -> ScenarioReport {
        let financing = self.config.financing;
        let break_even = result
            .rate_axis
            .iter()
            .zip(&result.break_even)
            .map(|(&rate, &rent)| BreakEvenPoint {
                rate_percent: rate * 100.0,
                rent,
            })
            .collect();

        ScenarioReport {
            title: REPORT_TITLE.to_string(),
            generated_at: Utc::now(),
            financing,
            loan_amount: financing.loan_amount(),
            equity_amount: financing.equity_amount(),
            years: result.amortized.years,
            remaining_principal: result.amortized.remaining_principal,
            initial: MatrixSummary::from_matrix(&result.matrix),
            amortized: MatrixSummary::from_matrix(&result.amortized.matrix),
            break_even,
        }
    }

    /// Colour bands of the initial matrix on the configured scale
    pub fn color_bands(&self, result: &ScenarioResult) -> Vec<Vec<ColorBand>> {
        self.config.heatmap.classify(&result.matrix)
    }
}
