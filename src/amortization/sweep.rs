//! Cash flow matrices recomputed on the amortized principal, one per elapsed year

use super::principal::project_remaining_principal;
use crate::cashflow::{compute_cashflow_matrix_with_loan, CashflowMatrix};
use crate::error::Result;
use crate::financing::FinancingParams;
use crate::grid::ScenarioAxis;
use log::debug;
use std::ops::RangeInclusive;

/// Loan state and cash flow grid after a number of years
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationState {
    pub years: i32,
    pub remaining_principal: f64,
    /// Matrix computed with `remaining_principal` as the loan amount
    pub matrix: CashflowMatrix,
}

impl AmortizationState {
    pub fn compute(
        financing: &FinancingParams,
        rate_axis: &ScenarioAxis,
        rent_axis: &ScenarioAxis,
        years: i32,
    ) -> Result<Self> {
        // Amortization rates of 1 or more drive the formula below zero; a loan
        // cannot be repaid past nothing
        let remaining_principal = project_remaining_principal(financing, years)?.max(0.0);
        let matrix = compute_cashflow_matrix_with_loan(
            financing,
            rate_axis,
            rent_axis,
            Some(remaining_principal),
        )?;
        debug!("year {}: remaining principal {:.2}", years, remaining_principal);
        Ok(Self {
            years,
            remaining_principal,
            matrix,
        })
    }

    /// Principal repaid since purchase
    pub fn repaid_principal(&self, financing: &FinancingParams) -> f64 {
        financing.loan_amount() - self.remaining_principal
    }
}

/// One state per year in `years`, in ascending order
pub fn project_years(
    financing: &FinancingParams,
    rate_axis: &ScenarioAxis,
    rent_axis: &ScenarioAxis,
    years: RangeInclusive<i32>,
) -> Result<Vec<AmortizationState>> {
    years
        .map(|y| AmortizationState::compute(financing, rate_axis, rent_axis, y))
        .collect()
}
