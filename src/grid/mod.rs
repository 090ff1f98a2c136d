//! Scenario axes for the interest-rate and rent sweep

mod axis;
mod config;

pub use axis::{build_axis, ScenarioAxis};
pub use config::{AxisBounds, GridConfig};

// ============================================================================
// Default Sweep Steps
// ============================================================================
// Rates are swept on the percent grid shown on the input controls and
// converted to fractions afterwards; rents are swept in currency units.

/// Step of the interest-rate axis in percentage points (0.05%)
pub const RATE_STEP_PERCENT: f64 = 0.05;

/// Step of the rent axis in currency units
pub const RENT_STEP: f64 = 100.0;
