// src/simulation/config.rs

use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weeks simulated per year of the timeframe.
pub const WEEKS_PER_YEAR: usize = 52;

/// Weeks counted per month of ramp-up (and per monthly bucket).
pub const WEEKS_PER_MONTH: usize = 4;

pub const MAX_GUITARS_PER_WEEK: u32 = 20;
pub const MAX_RAMP_UP_MONTHS: u32 = 60;
/// Caps a run at 520 weeks.
pub const MAX_TIMEFRAME_YEARS: u32 = 10;

/// Inputs for one revenue simulation run.
///
/// Loaded from TOML with snake_case keys; any key left out takes its
/// default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParams {
    /// Production capacity once ramp-up is complete.
    pub max_guitars_per_week: u32,
    /// Length of the linear ramp from zero to capacity.
    pub ramp_up_months: u32,
    pub price_per_guitar: f64,
    /// Half-width of the uniform production multiplier, in percent.
    pub variability_percent: f64,
    pub timeframe_years: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            max_guitars_per_week: 9,
            ramp_up_months: 42,
            price_per_guitar: 175.0,
            variability_percent: 75.0,
            timeframe_years: 5,
        }
    }
}

impl SimulationParams {
    /// Reads parameters from a TOML file.
    ///
    /// Values are not range-checked here so that callers can still override
    /// them; `validate` runs when the simulator is built.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SimulationError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            SimulationError::Config { message } => {
                SimulationError::config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Parses parameters from TOML text without range-checking them.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SimulationError::config(e.to_string()))
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GUITARS_PER_WEEK).contains(&self.max_guitars_per_week) {
            return Err(SimulationError::invalid_parameter(format!(
                "max_guitars_per_week must be within [1, {MAX_GUITARS_PER_WEEK}], got {}",
                self.max_guitars_per_week
            )));
        }
        if !(1..=MAX_RAMP_UP_MONTHS).contains(&self.ramp_up_months) {
            return Err(SimulationError::invalid_parameter(format!(
                "ramp_up_months must be within [1, {MAX_RAMP_UP_MONTHS}], got {}",
                self.ramp_up_months
            )));
        }
        if !self.price_per_guitar.is_finite() || self.price_per_guitar <= 0.0 {
            return Err(SimulationError::invalid_parameter(format!(
                "price_per_guitar must be positive, got {}",
                self.price_per_guitar
            )));
        }
        if !(0.0..=100.0).contains(&self.variability_percent) {
            return Err(SimulationError::invalid_parameter(format!(
                "variability_percent must be within [0, 100], got {}",
                self.variability_percent
            )));
        }
        if !(1..=MAX_TIMEFRAME_YEARS).contains(&self.timeframe_years) {
            return Err(SimulationError::invalid_parameter(format!(
                "timeframe_years must be within [1, {MAX_TIMEFRAME_YEARS}], got {}",
                self.timeframe_years
            )));
        }
        Ok(())
    }

    pub fn total_weeks(&self) -> usize {
        self.timeframe_years as usize * WEEKS_PER_YEAR
    }

    /// Ramp-up length as requested, before clamping to the timeframe.
    pub fn requested_ramp_weeks(&self) -> usize {
        self.ramp_up_months as usize * WEEKS_PER_MONTH
    }
}
