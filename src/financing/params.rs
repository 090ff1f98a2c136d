//! Purchase price, equity share, amortization and tax assumptions
//!
//! All rates are annual fractions (0.01 = 1%). The loan amount is derived
//! from the purchase price and equity ratio and is never stored.

use crate::error::{CashflowError, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Equity ratios offered by the input controls
pub const EQUITY_RATIO_CHOICES: [f64; 4] = [0.0, 0.05, 0.10, 0.20];

/// Financing parameters for one property
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingParams {
    /// Purchase price in currency units
    #[serde(default = "default_purchase_price")]
    pub purchase_price: f64,

    /// Fraction of the purchase price paid from own capital, in [0, 1)
    #[serde(default = "default_equity_ratio")]
    pub equity_ratio: f64,

    /// Annual principal repayment as a fraction of the loan (0.01 = 1%)
    #[serde(default = "default_amortization_rate")]
    pub amortization_rate: f64,

    /// Marginal income tax rate applied to deductible interest, in [0, 1]
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

fn default_purchase_price() -> f64 { 1_350_000.0 }
fn default_equity_ratio() -> f64 { 0.10 }
fn default_amortization_rate() -> f64 { 0.01 }   // 1% p.a.
fn default_tax_rate() -> f64 { 0.42 }           // 42% marginal rate

impl Default for FinancingParams {
    fn default() -> Self {
        Self {
            purchase_price: default_purchase_price(),
            equity_ratio: default_equity_ratio(),
            amortization_rate: default_amortization_rate(),
            tax_rate: default_tax_rate(),
        }
    }
}

impl FinancingParams {
    /// Financed share of the purchase price
    pub fn loan_amount(&self) -> f64 {
        self.purchase_price * (1.0 - self.equity_ratio)
    }

    /// Own capital brought into the purchase
    pub fn equity_amount(&self) -> f64 {
        self.purchase_price * self.equity_ratio
    }

    /// Check the parameters before any computation uses them
    pub fn validate(&self) -> Result<()> {
        if !self.purchase_price.is_finite() || self.purchase_price < 0.0 {
            return Err(CashflowError::InvalidInput(format!(
                "purchase price must be a non-negative number, got {}",
                self.purchase_price
            )));
        }
        if !(0.0..1.0).contains(&self.equity_ratio) {
            return Err(CashflowError::InvalidInput(format!(
                "equity ratio must be in [0, 1), got {}",
                self.equity_ratio
            )));
        }
        if !self.amortization_rate.is_finite() || self.amortization_rate <= 0.0 {
            return Err(CashflowError::InvalidInput(format!(
                "amortization rate must be positive, got {}",
                self.amortization_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(CashflowError::InvalidInput(format!(
                "tax rate must be in [0, 1], got {}",
                self.tax_rate
            )));
        }
        if self.amortization_rate >= 1.0 {
            warn!(
                "amortization rate {} repays the full loan within a year; principal projection degenerates",
                self.amortization_rate
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_loan_amount() {
        let params = FinancingParams::default();
        assert!((params.loan_amount() - 1_215_000.0).abs() < 1e-6);
        assert!((params.equity_amount() - 135_000.0).abs() < 1e-6);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_equity_choices_valid() {
        for &equity_ratio in &EQUITY_RATIO_CHOICES {
            let params = FinancingParams { equity_ratio, ..Default::default() };
            assert!(params.validate().is_ok());
            assert!(params.loan_amount() >= 0.0);
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let bad = [
            FinancingParams { purchase_price: -1.0, ..Default::default() },
            FinancingParams { purchase_price: f64::NAN, ..Default::default() },
            FinancingParams { equity_ratio: 1.0, ..Default::default() },
            FinancingParams { equity_ratio: -0.1, ..Default::default() },
            FinancingParams { amortization_rate: 0.0, ..Default::default() },
            FinancingParams { amortization_rate: -0.02, ..Default::default() },
            FinancingParams { tax_rate: 1.5, ..Default::default() },
        ];
        for params in &bad {
            assert!(
                matches!(params.validate(), Err(CashflowError::InvalidInput(_))),
                "expected rejection for {:?}",
                params
            );
        }
    }

    #[test]
    fn test_zero_price_allowed() {
        let params = FinancingParams { purchase_price: 0.0, ..Default::default() };
        assert!(params.validate().is_ok());
        assert_eq!(params.loan_amount(), 0.0);
    }

    #[test]
    fn test_default_matches_empty_json() {
        let params: FinancingParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, FinancingParams::default());
    }

    #[test]
    fn test_serde_defaults() {
        let params: FinancingParams = serde_json::from_str(r#"{"tax_rate": 0.3}"#).unwrap();
        assert_eq!(params.tax_rate, 0.3);
        assert_eq!(params.purchase_price, 1_350_000.0);
        assert_eq!(params.equity_ratio, 0.10);
    }
}
