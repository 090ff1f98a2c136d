//! Rental Cashflow - monthly cash flow grids for leveraged rental property
//!
//! This library provides:
//! - Scenario axes for interest rates and rents
//! - Monthly net cash flow matrices including the interest tax shield
//! - Principal decay projections and post-N-years matrices
//! - Scenario configuration, reports and CSV export

pub mod error;
pub mod financing;
pub mod grid;
pub mod cashflow;
pub mod amortization;
pub mod scenario;

// Re-export commonly used types
pub use error::{CashflowError, Result};
pub use financing::FinancingParams;
pub use grid::{build_axis, AxisBounds, GridConfig, ScenarioAxis};
pub use cashflow::{compute_cashflow_matrix, compute_cashflow_matrix_with_loan, CashflowMatrix};
pub use amortization::{project_remaining_principal, AmortizationState};
pub use scenario::{ScenarioConfig, ScenarioReport, ScenarioRunner};
