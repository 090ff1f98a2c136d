//! Axis bounds as configured on the input controls

use super::axis::{build_axis, ScenarioAxis};
use super::{RATE_STEP_PERCENT, RENT_STEP};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Inclusive range swept by one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn build(&self) -> Result<ScenarioAxis> {
        build_axis(self.min, self.max, self.step)
    }
}

/// Bounds of both scenario axes
///
/// The rate axis is given in percent (2.0 = 2%) and the rent axis in
/// currency units per month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rate_percent")]
    pub rate_percent: AxisBounds,

    #[serde(default = "default_rent")]
    pub rent: AxisBounds,
}

fn default_rate_percent() -> AxisBounds { AxisBounds::new(2.0, 5.0, RATE_STEP_PERCENT) }
fn default_rent() -> AxisBounds { AxisBounds::new(3000.0, 5000.0, RENT_STEP) }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rate_percent: default_rate_percent(),
            rent: default_rent(),
        }
    }
}

impl GridConfig {
    /// Interest-rate axis as annual fractions
    pub fn rate_axis(&self) -> Result<ScenarioAxis> {
        Ok(self.rate_percent.build()?.percent_to_fraction())
    }

    /// Monthly rent axis in currency units
    pub fn rent_axis(&self) -> Result<ScenarioAxis> {
        self.rent.build()
    }
}
