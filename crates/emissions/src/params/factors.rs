//! The three uncertain factors explored by sensitivity and uncertainty analysis.

use serde::{Deserialize, Serialize};

/// One of the uncertain inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Moisture,
    Temperature,
    DegradableCarbon,
}

impl Factor {
    /// All factors in design-column order.
    pub const ALL: [Factor; 3] = [Factor::Moisture, Factor::Temperature, Factor::DegradableCarbon];

    /// Column index in a design matrix.
    pub fn index(self) -> usize {
        match self {
            Factor::Moisture => 0,
            Factor::Temperature => 1,
            Factor::DegradableCarbon => 2,
        }
    }

    /// Short name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Factor::Moisture => "moisture",
            Factor::Temperature => "T",
            Factor::DegradableCarbon => "DOC",
        }
    }
}

/// A (moisture, temperature, DOC) point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorTriple {
    pub moisture_fraction: f64,
    pub temperature_c: f64,
    pub degradable_carbon_fraction: f64,
}

impl FactorTriple {
    pub fn from_array(values: [f64; 3]) -> Self {
        Self {
            moisture_fraction: values[0],
            temperature_c: values[1],
            degradable_carbon_fraction: values[2],
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [
            self.moisture_fraction,
            self.temperature_c,
            self.degradable_carbon_fraction,
        ]
    }

    pub fn get(self, factor: Factor) -> f64 {
        self.to_array()[factor.index()]
    }
}
