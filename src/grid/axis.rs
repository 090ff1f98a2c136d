//! Ordered axis values generated from (min, max, step)

use crate::error::{CashflowError, Result};
use log::debug;
use serde::Serialize;

/// Tolerance in units of `step` used when deciding whether `max` lies on the grid.
/// Without it `(max - min) / step` can land just below an integer and drop the boundary.
const STEP_TOLERANCE: f64 = 1e-9;

/// Largest number of values a single axis may hold
pub const MAX_AXIS_LEN: usize = 1_000_000;

/// Strictly increasing sequence of scenario values (rates as fractions or rents)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScenarioAxis {
    values: Vec<f64>,
}

impl ScenarioAxis {
    /// Wrap externally supplied values, checking they are finite, non-empty
    /// and strictly increasing
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(CashflowError::InvalidInput("axis has no values".to_string()));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CashflowError::InvalidInput(format!("axis value {} is not finite", bad)));
        }
        if values.windows(2).any(|w| w[1] <= w[0]) {
            return Err(CashflowError::InvalidInput(
                "axis values must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Convert an axis expressed in percent into fractions (3.0 -> 0.03)
    pub fn percent_to_fraction(&self) -> Self {
        Self {
            values: self.values.iter().map(|v| v / 100.0).collect(),
        }
    }

    /// Convert an axis expressed in fractions into percent (0.03 -> 3.0)
    pub fn fraction_to_percent(&self) -> Self {
        Self {
            values: self.values.iter().map(|v| v * 100.0).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ScenarioAxis {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Build an inclusive axis `min, min + step, ...` up to `max`
///
/// `max` is included whenever it lies on the step grid, regardless of
/// floating-point error in `(max - min) / step`.
pub fn build_axis(min_value: f64, max_value: f64, step: f64) -> Result<ScenarioAxis> {
    let well_formed = min_value.is_finite()
        && max_value.is_finite()
        && step.is_finite()
        && step > 0.0
        && min_value <= max_value;
    let invalid = || CashflowError::InvalidRange {
        min: min_value,
        max: max_value,
        step,
    };
    if !well_formed {
        return Err(invalid());
    }

    // A step below the float spacing at `min` cannot move the value
    if min_value + step == min_value {
        return Err(invalid());
    }

    let ratio = (max_value - min_value) / step + STEP_TOLERANCE;
    if !ratio.is_finite() || ratio >= MAX_AXIS_LEN as f64 {
        return Err(invalid());
    }
    let steps = ratio.floor() as usize;

    // Values are computed from the index rather than accumulated so the error
    // does not grow along the axis; the clamp keeps the last value inside max.
    let values: Vec<f64> = (0..=steps)
        .map(|i| (min_value + i as f64 * step).min(max_value))
        .collect();

    // Values collapse when the step is close to the float spacing further along the axis
    if values.windows(2).any(|w| w[1] <= w[0]) {
        return Err(invalid());
    }

    debug!(
        "built axis [{}, {}] step {} with {} values",
        min_value,
        max_value,
        step,
        values.len()
    );

    Ok(ScenarioAxis { values })
}
