//! Scenario configuration, runner and report

mod config;
mod runner;
mod report;

pub use config::ScenarioConfig;
pub use runner::{ScenarioResult, ScenarioRunner};
pub use report::{BreakEvenPoint, MatrixSummary, ScenarioReport};
