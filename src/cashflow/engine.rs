//! Cash flow formula and matrix construction
//!
//! For each (rent, rate) pair independently:
//! - debt service  = loan × (rate + amortization) / 12
//! - tax benefit   = (loan × rate / 12) × tax rate
//! - net cash flow = rent − debt service + tax benefit

use super::matrix::CashflowMatrix;
use super::MONTHS_PER_YEAR;
use crate::error::{CashflowError, Result};
use crate::financing::FinancingParams;
use crate::grid::ScenarioAxis;
use log::debug;
use rayon::prelude::*;

/// Components of the monthly cash flow for one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBreakdown {
    pub rent: f64,
    pub rate: f64,
    /// Interest plus principal repayment for the month
    pub debt_service: f64,
    /// Tax saved by deducting the interest portion
    pub tax_benefit: f64,
    pub net_cashflow: f64,
}

#[inline]
fn debt_service(loan: f64, rate: f64, amortization_rate: f64) -> f64 {
    loan * (rate + amortization_rate) / MONTHS_PER_YEAR
}

#[inline]
fn tax_benefit(loan: f64, rate: f64, tax_rate: f64) -> f64 {
    (loan * rate / MONTHS_PER_YEAR) * tax_rate
}

#[inline]
fn net_cashflow(loan: f64, rate: f64, rent: f64, financing: &FinancingParams) -> f64 {
    rent - debt_service(loan, rate, financing.amortization_rate)
        + tax_benefit(loan, rate, financing.tax_rate)
}

/// Break a single cell into its cash flow components
///
/// `loan_override` has the same meaning as in [`compute_cashflow_matrix_with_loan`].
pub fn cell_breakdown(
    financing: &FinancingParams,
    loan_override: Option<f64>,
    rate: f64,
    rent: f64,
) -> Result<CellBreakdown> {
    let loan = resolve_loan(financing, loan_override)?;
    if !rate.is_finite() || !rent.is_finite() {
        return Err(CashflowError::InvalidInput(format!(
            "rate and rent must be finite, got rate {} and rent {}",
            rate, rent
        )));
    }
    Ok(CellBreakdown {
        rent,
        rate,
        debt_service: debt_service(loan, rate, financing.amortization_rate),
        tax_benefit: tax_benefit(loan, rate, financing.tax_rate),
        net_cashflow: net_cashflow(loan, rate, rent, financing),
    })
}

fn resolve_loan(financing: &FinancingParams, loan_override: Option<f64>) -> Result<f64> {
    financing.validate()?;
    match loan_override {
        None => Ok(financing.loan_amount()),
        Some(loan) if loan.is_finite() && loan >= 0.0 => Ok(loan),
        Some(loan) => Err(CashflowError::InvalidInput(format!(
            "loan amount override must be a non-negative number, got {}",
            loan
        ))),
    }
}

/// Monthly cash flow for every (rent, rate) pair, indexed `[rent][rate]`
pub fn compute_cashflow_matrix(
    financing: &FinancingParams,
    rate_axis: &ScenarioAxis,
    rent_axis: &ScenarioAxis,
) -> Result<CashflowMatrix> {
    compute_cashflow_matrix_with_loan(financing, rate_axis, rent_axis, None)
}

/// Like [`compute_cashflow_matrix`] but with the loan amount replaced,
/// typically by the outstanding principal after some years of repayment
///
/// The override feeds both the debt service and the tax benefit.
pub fn compute_cashflow_matrix_with_loan(
    financing: &FinancingParams,
    rate_axis: &ScenarioAxis,
    rent_axis: &ScenarioAxis,
    loan_override: Option<f64>,
) -> Result<CashflowMatrix> {
    let loan = resolve_loan(financing, loan_override)?;

    debug!(
        "computing {}x{} cash flow matrix for loan {:.2}",
        rent_axis.len(),
        rate_axis.len(),
        loan
    );

    // Rows are independent; collect() preserves rent-axis order
    let rows: Vec<Vec<f64>> = rent_axis
        .values()
        .par_iter()
        .map(|&rent| {
            rate_axis
                .iter()
                .map(|&rate| net_cashflow(loan, rate, rent, financing))
                .collect()
        })
        .collect();

    Ok(CashflowMatrix::from_rows(rows))
}

/// Rent at which the monthly cash flow is exactly zero, one per rate
pub fn break_even_rents(
    financing: &FinancingParams,
    rate_axis: &ScenarioAxis,
    loan_override: Option<f64>,
) -> Result<Vec<f64>> {
    let loan = resolve_loan(financing, loan_override)?;
    Ok(rate_axis
        .iter()
        .map(|&rate| {
            debt_service(loan, rate, financing.amortization_rate)
                - tax_benefit(loan, rate, financing.tax_rate)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_axis;
    use approx::assert_abs_diff_eq;

    fn reference_params() -> FinancingParams {
        FinancingParams {
            purchase_price: 1_350_000.0,
            equity_ratio: 0.10,
            amortization_rate: 0.01,
            tax_rate: 0.42,
        }
    }

    #[test]
    fn test_reference_cell() {
        let params = reference_params();
        let cell = cell_breakdown(&params, None, 0.03, 4000.0).unwrap();

        assert_abs_diff_eq!(cell.debt_service, 4050.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cell.tax_benefit, 1275.75, epsilon = 1e-6);
        assert_abs_diff_eq!(cell.net_cashflow, 1225.75, epsilon = 1e-6);

        let rates = ScenarioAxis::from_values(vec![0.03]).unwrap();
        let rents = ScenarioAxis::from_values(vec![4000.0]).unwrap();
        let matrix = compute_cashflow_matrix(&params, &rates, &rents).unwrap();
        assert_abs_diff_eq!(matrix.get(0, 0).unwrap(), 1225.75, epsilon = 1e-6);
    }

    #[test]
    fn test_dimensions() {
        let params = reference_params();
        let rates = build_axis(2.0, 5.0, 0.05).unwrap().percent_to_fraction();
        let rents = build_axis(3000.0, 5000.0, 100.0).unwrap();
        let matrix = compute_cashflow_matrix(&params, &rates, &rents).unwrap();

        assert_eq!(matrix.dims(), (rents.len(), rates.len()));
        assert!(matrix.rows().iter().all(|row| row.len() == rates.len()));
        assert!(matrix.iter_cells().all(|v| v.is_finite()));
    }

    #[test]
    fn test_monotonic_in_rent_and_rate() {
        let params = reference_params();
        let rates = build_axis(0.0, 0.08, 0.005).unwrap();
        let rents = build_axis(2000.0, 6000.0, 250.0).unwrap();
        let matrix = compute_cashflow_matrix(&params, &rates, &rents).unwrap();

        for row in matrix.rows() {
            assert!(row.windows(2).all(|w| w[1] < w[0]), "cash flow must fall as rates rise");
        }
        for j in 0..rates.len() {
            let column: Vec<f64> = (0..rents.len()).map(|i| matrix.get(i, j).unwrap()).collect();
            assert!(column.windows(2).all(|w| w[1] > w[0]), "cash flow must rise with rent");
        }
    }

    #[test]
    fn test_zero_rate_has_no_tax_benefit() {
        let params = reference_params();
        let loan = params.loan_amount();
        let cell = cell_breakdown(&params, None, 0.0, 3500.0).unwrap();

        assert_eq!(cell.tax_benefit, 0.0);
        assert_abs_diff_eq!(cell.net_cashflow, 3500.0 - loan * 0.01 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let params = reference_params();
        let rates = build_axis(2.0, 5.0, 0.05).unwrap().percent_to_fraction();
        let rents = build_axis(3000.0, 5000.0, 100.0).unwrap();
        let a = compute_cashflow_matrix(&params, &rates, &rents).unwrap();
        let b = compute_cashflow_matrix(&params, &rates, &rents).unwrap();

        let bits_a: Vec<u64> = a.iter_cells().map(f64::to_bits).collect();
        let bits_b: Vec<u64> = b.iter_cells().map(f64::to_bits).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_loan_override() {
        let params = reference_params();
        let rates = ScenarioAxis::from_values(vec![0.03]).unwrap();
        let rents = ScenarioAxis::from_values(vec![4000.0]).unwrap();

        let smaller = compute_cashflow_matrix_with_loan(&params, &rates, &rents, Some(1_000_000.0)).unwrap();
        let expected = 4000.0 - 1_000_000.0 * 0.04 / 12.0 + 1_000_000.0 * 0.03 / 12.0 * 0.42;
        assert_abs_diff_eq!(smaller.get(0, 0).unwrap(), expected, epsilon = 1e-6);

        let paid_off = compute_cashflow_matrix_with_loan(&params, &rates, &rents, Some(0.0)).unwrap();
        assert_eq!(paid_off.get(0, 0), Some(4000.0));

        assert!(compute_cashflow_matrix_with_loan(&params, &rates, &rents, Some(-1.0)).is_err());
    }

    #[test]
    fn test_cell_breakdown_validates() {
        let params = reference_params();
        let paid_off = cell_breakdown(&params, Some(0.0), 0.03, 4000.0).unwrap();
        assert_eq!(paid_off.net_cashflow, 4000.0);

        let bad_params = FinancingParams { amortization_rate: 0.0, ..reference_params() };
        assert!(matches!(
            cell_breakdown(&bad_params, None, 0.03, 4000.0),
            Err(CashflowError::InvalidInput(_))
        ));
        assert!(matches!(
            cell_breakdown(&params, Some(-5.0), 0.03, 4000.0),
            Err(CashflowError::InvalidInput(_))
        ));
        assert!(matches!(
            cell_breakdown(&params, None, f64::NAN, 4000.0),
            Err(CashflowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_financing() {
        let params = FinancingParams { equity_ratio: 1.2, ..reference_params() };
        let axis = ScenarioAxis::from_values(vec![0.03]).unwrap();
        assert!(matches!(
            compute_cashflow_matrix(&params, &axis, &axis),
            Err(CashflowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_break_even_rents() {
        let params = reference_params();
        let rates = ScenarioAxis::from_values(vec![0.02, 0.03, 0.05]).unwrap();
        let break_even = break_even_rents(&params, &rates, None).unwrap();

        // At 3%: 4050 debt service minus 1275.75 tax benefit
        assert_abs_diff_eq!(break_even[1], 2774.25, epsilon = 1e-6);
        for (&rate, &rent) in rates.iter().zip(&break_even) {
            let cell = cell_breakdown(&params, None, rate, rent).unwrap();
            assert_abs_diff_eq!(cell.net_cashflow, 0.0, epsilon = 1e-6);
        }
    }
}
