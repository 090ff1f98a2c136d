//! Financing parameters for a single leveraged property purchase

mod params;

pub use params::{FinancingParams, EQUITY_RATIO_CHOICES};
