//! GWP aggregation: per-gas daily masses to daily and cumulative tCO2eq.
//!
//! GWP factors are applied only here, never inside a kernel or pathway model.

use serde::{Deserialize, Serialize};

use crate::constants::{GWP_CH4_20, GWP_N2O_20, KG_PER_TONNE};
use crate::pathways::EmissionSeries;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    Methane,
    NitrousOxide,
}

impl Gas {
    /// 20-year global warming potential.
    pub fn gwp(self) -> f64 {
        match self {
            Gas::Methane => GWP_CH4_20,
            Gas::NitrousOxide => GWP_N2O_20,
        }
    }
}

/// Tonnes of CO2-equivalent for `mass_kg` of `gas`.
pub fn tco2eq(mass_kg: f64, gas: Gas) -> f64 {
    mass_kg * gas.gwp() / KG_PER_TONNE
}

/// Running sum of a daily series.
pub fn cumulative(daily: &[f64]) -> Vec<f64> {
    daily
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// A pathway's emissions in tCO2eq, per gas and combined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonSeries {
    pub ch4_tco2eq: Vec<f64>,
    pub n2o_tco2eq: Vec<f64>,
    pub daily_tco2eq: Vec<f64>,
    pub cumulative_tco2eq: Vec<f64>,
}

impl CarbonSeries {
    pub fn from_emissions(series: &EmissionSeries) -> Self {
        let ch4_tco2eq: Vec<f64> = series
            .ch4_kg
            .iter()
            .map(|&m| tco2eq(m, Gas::Methane))
            .collect();
        let n2o_tco2eq: Vec<f64> = series
            .n2o_kg
            .iter()
            .map(|&m| tco2eq(m, Gas::NitrousOxide))
            .collect();
        let daily_tco2eq: Vec<f64> = ch4_tco2eq
            .iter()
            .zip(&n2o_tco2eq)
            .map(|(c, n)| c + n)
            .collect();
        let cumulative_tco2eq = cumulative(&daily_tco2eq);
        Self {
            ch4_tco2eq,
            n2o_tco2eq,
            daily_tco2eq,
            cumulative_tco2eq,
        }
    }

    /// Cumulative tCO2eq at the end of the horizon.
    pub fn total(&self) -> f64 {
        self.cumulative_tco2eq.last().copied().unwrap_or(0.0)
    }
}

/// End-of-horizon tCO2eq without materialising the per-day series.
pub fn total_tco2eq(series: &EmissionSeries) -> f64 {
    tco2eq(series.total_ch4_kg(), Gas::Methane) + tco2eq(series.total_n2o_kg(), Gas::NitrousOxide)
}
