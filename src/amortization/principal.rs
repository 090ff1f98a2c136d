//! Geometric principal decay
//!
//! remaining = loan × (1 − amortization)^years
//!
//! This is a closed-form simplification: it ignores the interest component of
//! a real annuity schedule and must not be used as an authoritative loan balance.

use crate::error::{CashflowError, Result};
use crate::financing::FinancingParams;

/// Outstanding principal after `years` full years of repayment
pub fn project_remaining_principal(financing: &FinancingParams, years: i32) -> Result<f64> {
    if years < 0 {
        return Err(CashflowError::InvalidInput(format!(
            "elapsed years must not be negative, got {}",
            years
        )));
    }
    financing.validate()?;

    let loan = financing.loan_amount();
    if years == 0 {
        return Ok(loan);
    }
    Ok(loan * (1.0 - financing.amortization_rate).powi(years))
}
