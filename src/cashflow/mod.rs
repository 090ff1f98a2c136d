//! Monthly cash flow engine over the rate x rent scenario grid

mod engine;
mod matrix;
mod heatmap;

pub use engine::{
    break_even_rents, cell_breakdown, compute_cashflow_matrix, compute_cashflow_matrix_with_loan,
    CellBreakdown,
};
pub use matrix::CashflowMatrix;
pub use heatmap::{ColorBand, HeatmapScale};

/// Months per year used to turn annual rates into monthly amounts
pub const MONTHS_PER_YEAR: f64 = 12.0;
