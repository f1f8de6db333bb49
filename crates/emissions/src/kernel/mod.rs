//! Emission kernels: what fraction of one day's batch is released on each
//! later day.
//!
//! Two families:
//! - the landfill CH4 kernel, derived from a first-order decay constant and
//!   truncated at the horizon (so it sums to `1 - exp(-k * days / 365)`);
//! - fixed empirical profiles (landfill N2O, pre-disposal N2O, and the 50-day
//!   treatment profiles). The treatment profiles are divided by their own sum
//!   at construction so each batch's mass is conserved exactly.
//!
//! [`DailyInflow`] carries the forcing series and performs the truncated
//! convolution that turns a kernel into a daily emission series.

pub mod inflow;
pub mod profiles;

#[cfg(test)]
mod tests_inflow;
#[cfg(test)]
mod tests_kernel;

pub use inflow::*;
pub use profiles::*;

use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;

/// Day-indexed release fractions. Index 0 is the day of entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionKernel {
    weights: Vec<f64>,
}

impl EmissionKernel {
    /// Wrap weights as given, without normalising.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Divide `raw` by its own sum. An all-zero profile stays all zero.
    pub fn normalized(raw: &[f64]) -> Self {
        let total: f64 = raw.iter().sum();
        if total <= 0.0 {
            return Self::from_weights(vec![0.0; raw.len()]);
        }
        Self::from_weights(raw.iter().map(|w| w / total).collect())
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// First-order decay kernel for landfill CH4.
///
/// Day `t` (1-based) weight is `exp(-k(t-1)/365) - exp(-kt/365)`: the share of
/// a deposit's methane potential released during that day.
pub fn landfill_methane_kernel(decay_constant_per_year: f64, horizon_days: usize) -> EmissionKernel {
    let year = DAYS_PER_YEAR as f64;
    let weights = (1..=horizon_days)
        .map(|t| {
            let t = t as f64;
            (-decay_constant_per_year * (t - 1.0) / year).exp()
                - (-decay_constant_per_year * t / year).exp()
        })
        .collect();
    EmissionKernel::from_weights(weights)
}

/// Five-day landfill N2O profile.
pub fn landfill_n2o_kernel() -> EmissionKernel {
    EmissionKernel::from_weights(LANDFILL_N2O_PROFILE.to_vec())
}

/// Three-day pre-disposal N2O profile.
pub fn pre_disposal_n2o_kernel() -> EmissionKernel {
    EmissionKernel::from_weights(PRE_DISPOSAL_N2O_PROFILE.to_vec())
}

/// Normalised 50-day treatment CH4 profile.
pub fn treatment_methane_kernel() -> EmissionKernel {
    EmissionKernel::normalized(&TREATMENT_CH4_PROFILE)
}

/// Normalised 50-day treatment N2O profile.
pub fn treatment_n2o_kernel() -> EmissionKernel {
    EmissionKernel::normalized(&TREATMENT_N2O_PROFILE)
}
