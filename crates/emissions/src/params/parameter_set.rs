//! The frozen input record for one simulation run.

use serde::{Deserialize, Serialize};

use crate::constants::{docf_at, AMBIENT_OXYGEN_PERCENT, DAYS_PER_YEAR};
use crate::error::EngineError;

use super::factors::FactorTriple;

/// Below this daily mass the open-face ratio is treated as saturated instead of divided.
pub const MIN_DIVISIBLE_WASTE_KG: f64 = 1e-9;

/// All physical inputs to the emission models.
///
/// Composite inputs (moisture and DOC blended from malt bagasse and yeast)
/// are computed once by [`super::BreweryProfile`] and frozen here; the
/// pathway models never re-derive them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Residue entering the system each day (kg). Zero is allowed.
    pub waste_kg_per_day: f64,
    /// Water content of the residue, fraction of wet mass in (0, 1).
    pub moisture_fraction: f64,
    /// Mean ambient temperature (°C), drives `DOCf`.
    pub temperature_c: f64,
    /// Degradable organic carbon, fraction in (0, 1).
    pub degradable_carbon_fraction: f64,
    /// Mass of each day's delivery left exposed at the working face (kg).
    pub exposed_mass_kg: f64,
    /// Hours per day the exposed mass stays uncovered, in [0, 24].
    pub exposed_hours: f64,
    /// Oxygen concentration during pre-disposal storage (%).
    pub oxygen_percent: f64,
    /// Simulated horizon in days, always a whole number of 365-day years.
    pub horizon_days: u32,
}

impl Default for ParameterSet {
    /// The default brewery profile frozen over a 20-year horizon.
    fn default() -> Self {
        Self {
            waste_kg_per_day: 10.0,
            moisture_fraction: 0.82,
            temperature_c: 25.0,
            degradable_carbon_fraction: 0.82,
            exposed_mass_kg: 8.0,
            exposed_hours: 8.0,
            oxygen_percent: AMBIENT_OXYGEN_PERCENT,
            horizon_days: 20 * DAYS_PER_YEAR,
        }
    }
}

impl ParameterSet {
    /// Horizon in days for a whole number of years, saturating at `u32::MAX`.
    /// Caller-supplied year counts go through [`Self::checked_horizon_days`].
    pub fn horizon_days_for_years(years: u32) -> u32 {
        years.saturating_mul(DAYS_PER_YEAR)
    }

    /// Horizon in days, rejecting zero years and day counts that overflow.
    pub fn checked_horizon_days(years: u32) -> Result<u32, EngineError> {
        if years == 0 {
            return Err(EngineError::config("horizon_years", "must be at least 1"));
        }
        years.checked_mul(DAYS_PER_YEAR).ok_or_else(|| {
            EngineError::config(
                "horizon_years",
                format!("{years} years overflows the day count"),
            )
        })
    }

    /// Horizon length in (365-day) years.
    pub fn horizon_years(&self) -> f64 {
        self.horizon_days as f64 / DAYS_PER_YEAR as f64
    }

    /// Number of simulated days as an index bound.
    pub fn days(&self) -> usize {
        self.horizon_days as usize
    }

    /// Degradable fraction of DOC at this run's temperature.
    pub fn docf(&self) -> f64 {
        docf_at(self.temperature_c)
    }

    /// Dry matter fraction, `1 - moisture`.
    pub fn dry_matter_fraction(&self) -> f64 {
        1.0 - self.moisture_fraction
    }

    /// Share of the daily delivery handled at an open, aerobic face.
    ///
    /// `clip((exposed / waste) * (hours / 24), 0, 1)`. With no waste arriving
    /// the mass ratio saturates at 1 if anything is exposed, else 0.
    pub fn open_face_fraction(&self) -> f64 {
        let mass_ratio = if self.waste_kg_per_day <= MIN_DIVISIBLE_WASTE_KG {
            if self.exposed_mass_kg > 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            self.exposed_mass_kg / self.waste_kg_per_day
        };
        (mass_ratio * (self.exposed_hours / 24.0)).clamp(0.0, 1.0)
    }

    /// Copy of this set with the three uncertain factors replaced.
    ///
    /// Does not validate: callers sampling from a validated box or model stay
    /// inside the domain by construction.
    pub fn with_factors(&self, factors: FactorTriple) -> Self {
        Self {
            moisture_fraction: factors.moisture_fraction,
            temperature_c: factors.temperature_c,
            degradable_carbon_fraction: factors.degradable_carbon_fraction,
            ..*self
        }
    }

    /// The three uncertain factors of this set.
    pub fn factors(&self) -> FactorTriple {
        FactorTriple {
            moisture_fraction: self.moisture_fraction,
            temperature_c: self.temperature_c,
            degradable_carbon_fraction: self.degradable_carbon_fraction,
        }
    }

    /// Reject any field outside its declared domain.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.waste_kg_per_day.is_finite() || self.waste_kg_per_day < 0.0 {
            return Err(EngineError::invalid(
                "waste_kg_per_day",
                self.waste_kg_per_day,
                "a finite mass >= 0 kg",
            ));
        }
        require_open_unit("moisture_fraction", self.moisture_fraction)?;
        if !self.temperature_c.is_finite() || !(0.0..=1.0).contains(&self.docf()) {
            return Err(EngineError::invalid(
                "temperature_c",
                self.temperature_c,
                "a temperature with DOCf(T) in [0, 1] (about -19 to 49 °C)",
            ));
        }
        require_open_unit("degradable_carbon_fraction", self.degradable_carbon_fraction)?;
        if !self.exposed_mass_kg.is_finite() || self.exposed_mass_kg < 0.0 {
            return Err(EngineError::invalid(
                "exposed_mass_kg",
                self.exposed_mass_kg,
                "a finite mass >= 0 kg",
            ));
        }
        if !(0.0..=24.0).contains(&self.exposed_hours) {
            return Err(EngineError::invalid(
                "exposed_hours",
                self.exposed_hours,
                "hours in [0, 24]",
            ));
        }
        if !(0.0..=100.0).contains(&self.oxygen_percent) {
            return Err(EngineError::invalid(
                "oxygen_percent",
                self.oxygen_percent,
                "a concentration in [0, 100] %",
            ));
        }
        if self.horizon_days == 0 {
            return Err(EngineError::invalid(
                "horizon_days",
                0.0,
                "at least one day",
            ));
        }
        Ok(())
    }
}

pub(crate) fn require_open_unit(name: &'static str, value: f64) -> Result<(), EngineError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(EngineError::invalid(name, value, "a fraction in (0, 1)"))
    }
}
