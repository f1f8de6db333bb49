//! Run configuration: everything that is not a physical parameter.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::params::ParameterSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Accounting window in 365-day years.
    pub horizon_years: u32,
    pub monte_carlo_samples: usize,
    /// Base sample count `N` of the Sobol design; a power of two is best.
    pub sobol_base_samples: usize,
    /// Seeds the Monte Carlo draws and the sensitivity bootstrap.
    pub seed: u64,
    pub bootstrap_resamples: usize,
    /// Confidence level of the bootstrap intervals, in (0, 1).
    pub confidence_level: f64,
    pub histogram_bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_years: 20,
            monte_carlo_samples: 100,
            sobol_base_samples: 64,
            seed: 50,
            bootstrap_resamples: 100,
            confidence_level: 0.95,
            histogram_bins: 30,
        }
    }
}

impl SimulationConfig {
    pub fn horizon_days(&self) -> u32 {
        ParameterSet::horizon_days_for_years(self.horizon_years)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        ParameterSet::checked_horizon_days(self.horizon_years)?;
        if self.monte_carlo_samples == 0 {
            return Err(EngineError::config("monte_carlo_samples", "must be at least 1"));
        }
        if self.sobol_base_samples == 0 {
            return Err(EngineError::config("sobol_base_samples", "must be at least 1"));
        }
        if self.bootstrap_resamples == 0 {
            return Err(EngineError::config("bootstrap_resamples", "must be at least 1"));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(EngineError::config(
                "confidence_level",
                format!("{} is not in (0, 1)", self.confidence_level),
            ));
        }
        if self.histogram_bins == 0 {
            return Err(EngineError::config("histogram_bins", "must be at least 1"));
        }
        Ok(())
    }
}
