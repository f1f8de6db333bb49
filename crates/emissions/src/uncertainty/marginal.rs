//! Marginal distributions of the uncertain factors.

use rand::Rng;
use rand_distr::{Distribution, Normal, Triangular, Uniform};
use serde::{Deserialize, Serialize};

use crate::constants::docf_at;
use crate::error::EngineError;
use crate::params::{Factor, FactorTriple};

/// A one-dimensional input distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Marginal {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
    Triangular { low: f64, mode: f64, high: f64 },
}

impl Marginal {
    /// Smallest and largest value the distribution can produce.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Marginal::Uniform { low, high } => (low, high),
            Marginal::Normal { .. } => (f64::NEG_INFINITY, f64::INFINITY),
            Marginal::Triangular { low, high, .. } => (low, high),
        }
    }

    pub fn validate(&self, name: &'static str) -> Result<(), EngineError> {
        match *self {
            Marginal::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(EngineError::invalid(name, low, "uniform bounds with low < high"));
                }
            }
            Marginal::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(EngineError::invalid(name, mean, "a finite mean"));
                }
                if !(std_dev.is_finite() && std_dev > 0.0) {
                    return Err(EngineError::invalid(name, std_dev, "a standard deviation > 0"));
                }
            }
            Marginal::Triangular { low, mode, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(EngineError::invalid(name, low, "triangular bounds with low < high"));
                }
                if !(low..=high).contains(&mode) {
                    return Err(EngineError::invalid(name, mode, "a mode within [low, high]"));
                }
            }
        }
        Ok(())
    }

    /// Draws `n` values. The marginal must have been validated.
    pub fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<f64>, EngineError> {
        let values = match *self {
            Marginal::Uniform { low, high } => {
                let dist = Uniform::new(low, high);
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Marginal::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev)
                    .map_err(|_| EngineError::invalid("normal", std_dev, "a standard deviation > 0"))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Marginal::Triangular { low, mode, high } => {
                let dist = Triangular::new(low, high, mode)
                    .map_err(|_| EngineError::invalid("triangular", mode, "low <= mode <= high"))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(values)
    }

    pub fn mean(&self) -> f64 {
        match *self {
            Marginal::Uniform { low, high } => 0.5 * (low + high),
            Marginal::Normal { mean, .. } => mean,
            Marginal::Triangular { low, mode, high } => (low + mode + high) / 3.0,
        }
    }
}

/// Independent marginals for the three uncertain factors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyModel {
    pub moisture_fraction: Marginal,
    pub temperature_c: Marginal,
    pub degradable_carbon_fraction: Marginal,
}

impl Default for UncertaintyModel {
    fn default() -> Self {
        Self {
            moisture_fraction: Marginal::Uniform { low: 0.75, high: 0.90 },
            temperature_c: Marginal::Normal { mean: 25.0, std_dev: 3.0 },
            degradable_carbon_fraction: Marginal::Triangular {
                low: 0.70,
                mode: 0.80,
                high: 0.90,
            },
        }
    }
}

impl UncertaintyModel {
    pub fn marginal(&self, factor: Factor) -> Marginal {
        match factor {
            Factor::Moisture => self.moisture_fraction,
            Factor::Temperature => self.temperature_c,
            Factor::DegradableCarbon => self.degradable_carbon_fraction,
        }
    }

    /// Fraction-valued factors need a support inside [0, 1]; a bounded
    /// temperature support must keep `DOCf(T)` inside [0, 1].
    pub fn validate(&self) -> Result<(), EngineError> {
        self.moisture_fraction.validate("moisture_marginal")?;
        self.temperature_c.validate("temperature_marginal")?;
        self.degradable_carbon_fraction.validate("doc_marginal")?;
        for (name, marginal) in [
            ("moisture_marginal", self.moisture_fraction),
            ("doc_marginal", self.degradable_carbon_fraction),
        ] {
            let (low, high) = marginal.support();
            if !(low >= 0.0 && high <= 1.0) {
                return Err(EngineError::invalid(name, low, "a support inside [0, 1]"));
            }
        }
        let (low, high) = self.temperature_c.support();
        for t in [low, high].into_iter().filter(|t| t.is_finite()) {
            if !(0.0..=1.0).contains(&docf_at(t)) {
                return Err(EngineError::invalid(
                    "temperature_marginal",
                    t,
                    "a support with DOCf(T) in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// Draws `n` values of each factor: all moisture values first, then all
    /// temperatures, then all DOC values, from the one generator.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<ParameterDraws, EngineError> {
        self.validate()?;
        Ok(ParameterDraws {
            moisture_fraction: self.moisture_fraction.sample_n(rng, n)?,
            temperature_c: self.temperature_c.sample_n(rng, n)?,
            degradable_carbon_fraction: self.degradable_carbon_fraction.sample_n(rng, n)?,
        })
    }
}

/// Factor values drawn for a Monte Carlo run, one column per factor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDraws {
    pub moisture_fraction: Vec<f64>,
    pub temperature_c: Vec<f64>,
    pub degradable_carbon_fraction: Vec<f64>,
}

impl ParameterDraws {
    pub fn len(&self) -> usize {
        self.moisture_fraction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moisture_fraction.is_empty()
    }

    pub fn triples(&self) -> Vec<FactorTriple> {
        self.moisture_fraction
            .iter()
            .zip(&self.temperature_c)
            .zip(&self.degradable_carbon_fraction)
            .map(|((&m, &t), &d)| FactorTriple::from_array([m, t, d]))
            .collect()
    }
}
