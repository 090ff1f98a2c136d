//! Scenario settings loaded from JSON
//!
//! Every field is optional in the file; missing values fall back to the
//! defaults of the input controls.

use crate::cashflow::HeatmapScale;
use crate::error::Result;
use crate::financing::FinancingParams;
use crate::grid::GridConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Complete input for one scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub financing: FinancingParams,

    #[serde(default)]
    pub grid: GridConfig,

    /// Elapsed years for the amortized matrix
    #[serde(default = "default_years")]
    pub years: i32,

    #[serde(default)]
    pub heatmap: HeatmapScale,
}

fn default_years() -> i32 { 1 }

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            financing: FinancingParams::default(),
            grid: GridConfig::default(),
            years: default_years(),
            heatmap: HeatmapScale::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
