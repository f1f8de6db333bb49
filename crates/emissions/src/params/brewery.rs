//! Brewery operating data and its reduction to a [`ParameterSet`].
//!
//! A brewery's residue is a blend of spent malt bagasse and spent yeast. The
//! blend's moisture and DOC are mass-share-weighted averages of the two
//! sub-streams, and the daily residue mass follows from the monthly beer
//! volume.

use serde::{Deserialize, Serialize};

use crate::constants::AMBIENT_OXYGEN_PERCENT;
use crate::error::EngineError;

use super::parameter_set::ParameterSet;

/// Residue generated per litre of beer brewed (kg/L).
pub const RESIDUE_KG_PER_LITRE: f64 = 0.17;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreweryProfile {
    /// Beer produced per month (litres).
    pub monthly_production_litres: f64,
    /// Days per month the brewery operates.
    pub operating_days_per_month: u32,
    /// Share of malt bagasse in the residue, percent. Yeast makes up the rest.
    pub malt_bagasse_percent: f64,
    /// Moisture of the bagasse, percent.
    pub bagasse_moisture_percent: f64,
    /// Moisture of the spent yeast, percent.
    pub yeast_moisture_percent: f64,
    /// Degradable organic carbon of the bagasse (fraction).
    pub bagasse_doc: f64,
    /// Degradable organic carbon of the spent yeast (fraction).
    pub yeast_doc: f64,
    /// Mean ambient temperature (°C).
    pub temperature_c: f64,
    /// Fraction of each day's residue left exposed before covering.
    pub exposed_fraction: f64,
    /// Hours per day the exposed residue stays uncovered.
    pub exposed_hours: f64,
    /// Oxygen concentration during storage before disposal (%).
    pub oxygen_percent: f64,
}

impl Default for BreweryProfile {
    fn default() -> Self {
        Self {
            monthly_production_litres: 1_500.0,
            operating_days_per_month: 25,
            malt_bagasse_percent: 80.0,
            bagasse_moisture_percent: 80.0,
            yeast_moisture_percent: 90.0,
            bagasse_doc: 0.80,
            yeast_doc: 0.90,
            temperature_c: 25.0,
            exposed_fraction: 0.8,
            exposed_hours: 8.0,
            oxygen_percent: AMBIENT_OXYGEN_PERCENT,
        }
    }
}

impl BreweryProfile {
    /// Whole kilograms of residue per operating day (truncated).
    pub fn waste_kg_per_day(&self) -> f64 {
        if self.operating_days_per_month == 0 {
            return 0.0;
        }
        (self.monthly_production_litres * RESIDUE_KG_PER_LITRE
            / self.operating_days_per_month as f64)
            .trunc()
    }

    pub fn yeast_percent(&self) -> f64 {
        100.0 - self.malt_bagasse_percent
    }

    /// Mass-weighted moisture of the blend as a fraction.
    pub fn blended_moisture(&self) -> f64 {
        let percent = (self.bagasse_moisture_percent * self.malt_bagasse_percent
            + self.yeast_moisture_percent * self.yeast_percent())
            / 100.0;
        percent / 100.0
    }

    /// Mass-weighted DOC of the blend.
    pub fn blended_doc(&self) -> f64 {
        (self.bagasse_doc * self.malt_bagasse_percent + self.yeast_doc * self.yeast_percent())
            / 100.0
    }

    /// Freeze the profile into a validated parameter set.
    pub fn parameter_set(&self, horizon_years: u32) -> Result<ParameterSet, EngineError> {
        if self.operating_days_per_month == 0 || self.operating_days_per_month > 31 {
            return Err(EngineError::invalid(
                "operating_days_per_month",
                self.operating_days_per_month as f64,
                "between 1 and 31 days",
            ));
        }
        if !(0.0..=100.0).contains(&self.malt_bagasse_percent) {
            return Err(EngineError::invalid(
                "malt_bagasse_percent",
                self.malt_bagasse_percent,
                "a share in [0, 100] %",
            ));
        }
        if !(0.0..=1.0).contains(&self.exposed_fraction) {
            return Err(EngineError::invalid(
                "exposed_fraction",
                self.exposed_fraction,
                "a fraction in [0, 1]",
            ));
        }
        let horizon_days = ParameterSet::checked_horizon_days(horizon_years)?;

        let waste_kg_per_day = self.waste_kg_per_day();
        let params = ParameterSet {
            waste_kg_per_day,
            moisture_fraction: self.blended_moisture(),
            temperature_c: self.temperature_c,
            degradable_carbon_fraction: self.blended_doc(),
            exposed_mass_kg: waste_kg_per_day * self.exposed_fraction,
            exposed_hours: self.exposed_hours,
            oxygen_percent: self.oxygen_percent,
            horizon_days,
        };
        params.validate()?;
        Ok(params)
    }
}
