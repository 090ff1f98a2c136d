//! Outstanding principal after years of repayment and the matrices it implies

mod principal;
mod sweep;

pub use principal::project_remaining_principal;
pub use sweep::{project_years, AmortizationState};

/// Longest horizon offered by the year control
pub const MAX_PROJECTION_YEARS: i32 = 30;
