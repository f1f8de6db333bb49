//! Sobol first, second and total order indices from a Saltelli design.
//!
//! Estimators:
//! - S1_j = mean(B * (AB_j - A)) / Var(A ∪ B)
//! - ST_j = mean((A - AB_j)^2) / (2 Var(A ∪ B))
//! - S2_jk = mean(BA_j * AB_k - A * B) / Var(A ∪ B) - S1_j - S1_k
//!
//! Outputs are standardised first. Confidence half-widths come from a seeded
//! bootstrap over base samples.

use std::cmp::Ordering;

use bevy::log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::EngineError;
use crate::params::Factor;
use crate::stats::{mean_std, sample_std};

use super::design::{FACTOR_COUNT, ROWS_PER_BASE_SAMPLE};

/// S1 and ST of one factor with bootstrap half-widths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactorIndices {
    pub factor: Factor,
    pub s1: f64,
    pub s1_conf: f64,
    pub st: f64,
    pub st_conf: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SecondOrderIndex {
    pub first: Factor,
    pub second: Factor,
    pub s2: f64,
    pub s2_conf: f64,
}

/// Indices for every factor, ranked by descending ST.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SobolIndices {
    pub ranked: Vec<FactorIndices>,
    pub second_order: Vec<SecondOrderIndex>,
}

impl SobolIndices {
    pub fn get(&self, factor: Factor) -> Option<&FactorIndices> {
        self.ranked.iter().find(|f| f.factor == factor)
    }

    pub fn pair(&self, a: Factor, b: Factor) -> Option<&SecondOrderIndex> {
        self.second_order
            .iter()
            .find(|s| (s.first == a && s.second == b) || (s.first == b && s.second == a))
    }
}

/// Bootstrap settings for the confidence half-widths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bootstrap {
    pub resamples: usize,
    pub confidence_level: f64,
    pub seed: u64,
}

/// Design outputs split into the A, B, AB and BA matrices.
struct SplitOutputs {
    a: Vec<f64>,
    b: Vec<f64>,
    ab: [Vec<f64>; FACTOR_COUNT],
    ba: [Vec<f64>; FACTOR_COUNT],
}

impl SplitOutputs {
    fn new(y: &[f64]) -> Self {
        let column = |offset: usize| -> Vec<f64> {
            y.iter()
                .skip(offset)
                .step_by(ROWS_PER_BASE_SAMPLE)
                .copied()
                .collect()
        };
        Self {
            a: column(0),
            b: column(ROWS_PER_BASE_SAMPLE - 1),
            ab: std::array::from_fn(|j| column(1 + j)),
            ba: std::array::from_fn(|j| column(1 + FACTOR_COUNT + j)),
        }
    }

    fn resampled(&self, idx: &[usize]) -> Self {
        let pick = |v: &Vec<f64>| idx.iter().map(|&i| v[i]).collect::<Vec<f64>>();
        Self {
            a: pick(&self.a),
            b: pick(&self.b),
            ab: std::array::from_fn(|j| pick(&self.ab[j])),
            ba: std::array::from_fn(|j| pick(&self.ba[j])),
        }
    }

    /// Population variance of A and B stacked.
    fn variance(&self) -> f64 {
        let n = (self.a.len() + self.b.len()) as f64;
        let mean = self.a.iter().chain(&self.b).sum::<f64>() / n;
        self.a
            .iter()
            .chain(&self.b)
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n
    }

    fn first_order(&self, j: usize) -> f64 {
        let n = self.a.len() as f64;
        let num = self
            .b
            .iter()
            .zip(&self.ab[j])
            .zip(&self.a)
            .map(|((b, ab), a)| b * (ab - a))
            .sum::<f64>()
            / n;
        num / self.variance()
    }

    fn total_order(&self, j: usize) -> f64 {
        let n = self.a.len() as f64;
        let num = self
            .a
            .iter()
            .zip(&self.ab[j])
            .map(|(a, ab)| (a - ab).powi(2))
            .sum::<f64>()
            / n;
        0.5 * num / self.variance()
    }

    fn second_order(&self, j: usize, k: usize) -> f64 {
        let n = self.a.len() as f64;
        let num = (0..self.a.len())
            .map(|i| self.ba[j][i] * self.ab[k][i] - self.a[i] * self.b[i])
            .sum::<f64>()
            / n;
        num / self.variance() - self.first_order(j) - self.first_order(k)
    }
}

fn pairs() -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for j in 0..FACTOR_COUNT {
        for k in (j + 1)..FACTOR_COUNT {
            out.push((j, k));
        }
    }
    out
}

/// Estimates the indices from outputs laid out as a [`super::SaltelliDesign`].
///
/// A constant output has no variance to decompose: every index is NaN and a
/// warning is logged.
pub fn analyze(
    outputs: &[f64],
    base_samples: usize,
    bootstrap: Bootstrap,
) -> Result<SobolIndices, EngineError> {
    let expected = base_samples * ROWS_PER_BASE_SAMPLE;
    if outputs.len() != expected {
        return Err(EngineError::SampleLengthMismatch {
            left: outputs.len(),
            right: expected,
        });
    }
    if base_samples == 0 {
        return Err(EngineError::InsufficientSamples {
            needed: 1,
            found: 0,
        });
    }

    let (mean, std) = mean_std(outputs);
    if std == 0.0 || !std.is_finite() {
        warn!("Sensitivity outputs have zero variance; Sobol indices are undefined");
    }
    let standardized: Vec<f64> = outputs.iter().map(|y| (y - mean) / std).collect();
    let split = SplitOutputs::new(&standardized);

    let z = Normal::new(0.0, 1.0)
        .map(|n| n.inverse_cdf(0.5 + bootstrap.confidence_level / 2.0))
        .unwrap_or(f64::NAN);

    let mut rng = ChaCha8Rng::seed_from_u64(bootstrap.seed);
    let resamples: Vec<SplitOutputs> = (0..bootstrap.resamples)
        .map(|_| {
            let idx: Vec<usize> = (0..base_samples)
                .map(|_| rng.gen_range(0..base_samples))
                .collect();
            split.resampled(&idx)
        })
        .collect();
    let conf = |estimate: &dyn Fn(&SplitOutputs) -> f64| -> f64 {
        let draws: Vec<f64> = resamples.iter().map(|s| estimate(s)).collect();
        z * sample_std(&draws)
    };

    let mut ranked: Vec<FactorIndices> = Factor::ALL
        .iter()
        .map(|&factor| {
            let j = factor.index();
            FactorIndices {
                factor,
                s1: split.first_order(j),
                s1_conf: conf(&|s| s.first_order(j)),
                st: split.total_order(j),
                st_conf: conf(&|s| s.total_order(j)),
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.st.partial_cmp(&a.st).unwrap_or(Ordering::Equal));

    let second_order = pairs()
        .into_iter()
        .map(|(j, k)| SecondOrderIndex {
            first: Factor::ALL[j],
            second: Factor::ALL[k],
            s2: split.second_order(j, k),
            s2_conf: conf(&|s| s.second_order(j, k)),
        })
        .collect();

    Ok(SobolIndices {
        ranked,
        second_order,
    })
}
