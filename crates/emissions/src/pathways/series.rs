//! Per-gas daily mass series produced by a pathway model.

use serde::{Deserialize, Serialize};

/// Daily CH4 and N2O releases (kg/day), one entry per simulated day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionSeries {
    pub ch4_kg: Vec<f64>,
    pub n2o_kg: Vec<f64>,
}

impl EmissionSeries {
    pub fn new(ch4_kg: Vec<f64>, n2o_kg: Vec<f64>) -> Self {
        debug_assert_eq!(ch4_kg.len(), n2o_kg.len());
        Self { ch4_kg, n2o_kg }
    }

    pub fn days(&self) -> usize {
        self.ch4_kg.len()
    }

    pub fn total_ch4_kg(&self) -> f64 {
        self.ch4_kg.iter().sum()
    }

    pub fn total_n2o_kg(&self) -> f64 {
        self.n2o_kg.iter().sum()
    }

    /// Element-wise sum of two series over the same horizon.
    pub fn combined(mut self, other: &EmissionSeries) -> Self {
        for (a, b) in self.ch4_kg.iter_mut().zip(&other.ch4_kg) {
            *a += b;
        }
        for (a, b) in self.n2o_kg.iter_mut().zip(&other.n2o_kg) {
            *a += b;
        }
        self
    }
}
