//! Global sensitivity analysis (Sobol indices) of avoided emissions.
//!
//! Pipeline: Sobol sequence -> Saltelli cross-sampling over the parameter
//! box -> parallel evaluation of the objective -> variance decomposition.
//! One design serves every treatment pathway.

pub mod constants;
pub mod design;
pub mod indices;
pub mod sequence;

#[cfg(test)]
mod tests_design;
#[cfg(test)]
mod tests_indices;

pub use design::*;
pub use indices::*;
pub use sequence::*;

use bevy::log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::parallel::par_map;
use crate::pathways::TreatmentPathway;
use crate::scenario::AvoidedEmissionsObjective;

/// Sensitivity of one pathway's avoided emissions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub pathway: TreatmentPathway,
    pub base_samples: usize,
    pub evaluations: usize,
    pub indices: SobolIndices,
}

/// Evaluates the Saltelli design once and decomposes each pathway's output.
pub fn run_sensitivity(
    objective: &AvoidedEmissionsObjective,
    bounds: &ParameterBox,
    config: &SimulationConfig,
) -> Result<Vec<SensitivityResult>, EngineError> {
    config.validate()?;
    let design = SaltelliDesign::generate(bounds, config.sobol_base_samples)?;
    let outputs = par_map(&design.points, |p| objective.evaluate_all(*p));
    debug!("Evaluated {} sensitivity design points", outputs.len());

    let bootstrap = Bootstrap {
        resamples: config.bootstrap_resamples,
        confidence_level: config.confidence_level,
        seed: config.seed,
    };

    TreatmentPathway::ALL
        .iter()
        .enumerate()
        .map(|(i, &pathway)| {
            let y: Vec<f64> = outputs.iter().map(|pair| pair[i]).collect();
            Ok(SensitivityResult {
                pathway,
                base_samples: design.base_samples,
                evaluations: design.len(),
                indices: analyze(&y, design.base_samples, bootstrap)?,
            })
        })
        .collect()
}
