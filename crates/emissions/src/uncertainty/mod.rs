//! Monte Carlo uncertainty propagation of avoided emissions.
//!
//! Factor values are drawn from [`UncertaintyModel`] with a seeded
//! `ChaCha8Rng`, every pathway is evaluated at the same draws, and each
//! output sample is summarised by mean, standard deviation, empirical 95%
//! interval and histogram. No distribution is assumed for the output.

pub mod marginal;
pub mod summary;

#[cfg(test)]
mod tests_uncertainty;

pub use marginal::*;
pub use summary::*;

use bevy::log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::parallel::par_map;
use crate::pathways::TreatmentPathway;
use crate::scenario::AvoidedEmissionsObjective;
use crate::stats::{mean, sample_std};

/// Output distribution of one pathway's avoided emissions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyResult {
    pub pathway: TreatmentPathway,
    pub samples: Vec<f64>,
    pub mean: f64,
    /// Sample standard deviation (n - 1); NaN for a single draw.
    pub std_dev: f64,
    /// 2.5th to 97.5th percentile.
    pub ci95: Interval,
    pub histogram: Histogram,
}

impl UncertaintyResult {
    pub fn from_samples(pathway: TreatmentPathway, samples: Vec<f64>, bins: usize) -> Self {
        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);
        Self {
            pathway,
            mean: mean(&samples),
            std_dev: sample_std(&samples),
            ci95: Interval {
                lower: percentile(&sorted, 2.5),
                upper: percentile(&sorted, 97.5),
            },
            histogram: Histogram::from_samples(&samples, bins),
            samples,
        }
    }
}

/// Draws plus per-pathway results; sample `i` of every result used draw `i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloRun {
    pub seed: u64,
    pub draws: ParameterDraws,
    pub results: Vec<UncertaintyResult>,
}

impl MonteCarloRun {
    pub fn result(&self, pathway: TreatmentPathway) -> Option<&UncertaintyResult> {
        self.results.iter().find(|r| r.pathway == pathway)
    }
}

pub fn run_uncertainty(
    objective: &AvoidedEmissionsObjective,
    model: &UncertaintyModel,
    config: &SimulationConfig,
) -> Result<MonteCarloRun, EngineError> {
    config.validate()?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let draws = model.draw(&mut rng, config.monte_carlo_samples)?;
    debug!("Drew {} Monte Carlo parameter sets (seed {})", draws.len(), config.seed);

    // Unbounded marginals can still land outside the parameter domain.
    let triples = draws.triples();
    for &t in &triples {
        objective.base().with_factors(t).validate()?;
    }

    let outputs = par_map(&triples, |t| objective.evaluate_all(*t));
    let results = TreatmentPathway::ALL
        .iter()
        .enumerate()
        .map(|(i, &pathway)| {
            let samples = outputs.iter().map(|pair| pair[i]).collect();
            UncertaintyResult::from_samples(pathway, samples, config.histogram_bins)
        })
        .collect();

    Ok(MonteCarloRun {
        seed: config.seed,
        draws,
        results,
    })
}
