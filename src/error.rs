//! Error types for grid construction, cash flow computation and export

/// Errors raised by the cash flow library.
///
/// Validation failures are reported synchronously at the faulty call and are
/// never retried; the caller decides how to present them.
#[derive(Debug, thiserror::Error)]
pub enum CashflowError {
    /// Malformed axis bounds or step
    #[error("invalid axis range: min={min}, max={max}, step={step}")]
    InvalidRange { min: f64, max: f64, step: f64 },

    /// Malformed financing parameters or elapsed years
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CashflowError>;
