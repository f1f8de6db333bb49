//! Parameter box and the Saltelli cross-sampling design.

use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::docf_at;
use crate::error::EngineError;
use crate::params::{Factor, FactorTriple};

use super::constants::{DOC_BOUNDS, MOISTURE_BOUNDS, TEMPERATURE_BOUNDS};
use super::sequence::SobolSequence;

/// Number of uncertain factors, the design dimension `D`.
pub const FACTOR_COUNT: usize = Factor::ALL.len();

/// Design rows generated per base sample: A, D x AB, D x BA, B.
pub const ROWS_PER_BASE_SAMPLE: usize = 2 * FACTOR_COUNT + 2;

/// Closed interval `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Maps `u` in [0, 1] onto the interval.
    pub fn scale(&self, u: f64) -> f64 {
        self.lower + u * (self.upper - self.lower)
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self { lower, upper }
    }
}

/// The box the sensitivity design explores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterBox {
    pub moisture_fraction: Bounds,
    pub temperature_c: Bounds,
    pub degradable_carbon_fraction: Bounds,
}

impl Default for ParameterBox {
    fn default() -> Self {
        Self {
            moisture_fraction: MOISTURE_BOUNDS.into(),
            temperature_c: TEMPERATURE_BOUNDS.into(),
            degradable_carbon_fraction: DOC_BOUNDS.into(),
        }
    }
}

impl ParameterBox {
    pub fn bounds(&self, factor: Factor) -> Bounds {
        match factor {
            Factor::Moisture => self.moisture_fraction,
            Factor::Temperature => self.temperature_c,
            Factor::DegradableCarbon => self.degradable_carbon_fraction,
        }
    }

    /// Maps a point of the unit cube into the box.
    pub fn scale(&self, unit: [f64; FACTOR_COUNT]) -> FactorTriple {
        let mut values = [0.0; FACTOR_COUNT];
        for factor in Factor::ALL {
            values[factor.index()] = self.bounds(factor).scale(unit[factor.index()]);
        }
        FactorTriple::from_array(values)
    }

    /// Every corner of the box must be a valid parameter value.
    pub fn validate(&self) -> Result<(), EngineError> {
        for factor in Factor::ALL {
            let b = self.bounds(factor);
            if !(b.lower.is_finite() && b.upper.is_finite()) || b.lower >= b.upper {
                return Err(EngineError::invalid(
                    bound_name(factor),
                    b.lower,
                    "finite bounds with lower < upper",
                ));
            }
        }
        for b in [self.moisture_fraction, self.degradable_carbon_fraction] {
            for x in [b.lower, b.upper] {
                if !(x > 0.0 && x < 1.0) {
                    return Err(EngineError::invalid(
                        "fraction_bounds",
                        x,
                        "fraction bounds inside (0, 1)",
                    ));
                }
            }
        }
        for t in [self.temperature_c.lower, self.temperature_c.upper] {
            if !(0.0..=1.0).contains(&docf_at(t)) {
                return Err(EngineError::invalid(
                    "temperature_bounds",
                    t,
                    "temperature bounds with DOCf(T) in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

fn bound_name(factor: Factor) -> &'static str {
    match factor {
        Factor::Moisture => "moisture_bounds",
        Factor::Temperature => "temperature_bounds",
        Factor::DegradableCarbon => "doc_bounds",
    }
}

/// Saltelli design: `base_samples` blocks of [`ROWS_PER_BASE_SAMPLE`] rows.
///
/// Within block `i` the rows are `A_i`, `AB_i^(j)` for each factor `j` (A with
/// column j taken from B), `BA_i^(j)` (B with column j taken from A), `B_i`.
#[derive(Clone, Debug, PartialEq)]
pub struct SaltelliDesign {
    pub base_samples: usize,
    pub points: Vec<FactorTriple>,
}

impl SaltelliDesign {
    pub fn generate(bounds: &ParameterBox, base_samples: usize) -> Result<Self, EngineError> {
        bounds.validate()?;
        if base_samples == 0 {
            return Err(EngineError::config("sobol_base_samples", "must be at least 1"));
        }
        if !base_samples.is_power_of_two() {
            warn!(
                "Sobol base sample count {} is not a power of two; index estimates lose balance",
                base_samples
            );
        }

        let mut sequence = SobolSequence::new(2 * FACTOR_COUNT)?;
        sequence.skip(base_samples.next_power_of_two());

        let mut points = Vec::with_capacity(base_samples * ROWS_PER_BASE_SAMPLE);
        for _ in 0..base_samples {
            let row = sequence.next_point();
            let mut a = [0.0; FACTOR_COUNT];
            let mut b = [0.0; FACTOR_COUNT];
            a.copy_from_slice(&row[..FACTOR_COUNT]);
            b.copy_from_slice(&row[FACTOR_COUNT..]);

            points.push(bounds.scale(a));
            for j in 0..FACTOR_COUNT {
                let mut ab = a;
                ab[j] = b[j];
                points.push(bounds.scale(ab));
            }
            for j in 0..FACTOR_COUNT {
                let mut ba = b;
                ba[j] = a[j];
                points.push(bounds.scale(ba));
            }
            points.push(bounds.scale(b));
        }
        debug!(
            "Generated Saltelli design: {} base samples, {} evaluations",
            base_samples,
            points.len()
        );

        Ok(Self {
            base_samples,
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
