//! One complete engine run: scenario, sensitivity, uncertainty and the
//! paired comparison, bundled for the presentation layer.

use bevy::log::info;
use serde::{Deserialize, Serialize};

use crate::comparison::{compare_paired, PairedComparison};
use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::params::{BreweryProfile, ParameterSet};
use crate::pathways::TreatmentPathway;
use crate::pricing::Pricing;
use crate::scenario::{run_scenario, AvoidedEmissionsObjective, ScenarioRun};
use crate::sensitivity::{run_sensitivity, ParameterBox, SensitivityResult};
use crate::uncertainty::{run_uncertainty, MonteCarloRun, UncertaintyModel};

/// Everything a caller needs to run the engine from brewery data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunRequest {
    pub brewery: BreweryProfile,
    pub config: SimulationConfig,
    pub pricing: Pricing,
    pub parameter_box: ParameterBox,
    pub uncertainty: UncertaintyModel,
}

impl RunRequest {
    /// Freezes the brewery profile over the configured horizon.
    pub fn parameter_set(&self) -> Result<ParameterSet, EngineError> {
        self.brewery.parameter_set(self.config.horizon_years)
    }

    pub fn run(&self) -> Result<SimulationReport, EngineError> {
        let params = self.parameter_set()?;
        run_analysis(
            &params,
            &self.config,
            &self.pricing,
            &self.parameter_box,
            &self.uncertainty,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub parameters: ParameterSet,
    pub config: SimulationConfig,
    pub pricing: Pricing,
    /// Carbon price in the local currency per tCO2eq.
    pub local_price_per_tonne: f64,
    pub scenario: ScenarioRun,
    pub sensitivity: Vec<SensitivityResult>,
    pub uncertainty: MonteCarloRun,
    /// Composting minus vermicomposting at the Monte Carlo draws.
    pub comparison: PairedComparison,
}

/// Runs the engine with the default parameter box and uncertainty model.
pub fn run_simulation(
    params: &ParameterSet,
    config: &SimulationConfig,
    pricing: &Pricing,
) -> Result<SimulationReport, EngineError> {
    run_analysis(
        params,
        config,
        pricing,
        &ParameterBox::default(),
        &UncertaintyModel::default(),
    )
}

pub fn run_analysis(
    params: &ParameterSet,
    config: &SimulationConfig,
    pricing: &Pricing,
    parameter_box: &ParameterBox,
    model: &UncertaintyModel,
) -> Result<SimulationReport, EngineError> {
    config.validate()?;
    params.validate()?;
    if params.horizon_days != config.horizon_days() {
        return Err(EngineError::config(
            "horizon_years",
            format!(
                "parameter horizon of {} days does not match {} configured years",
                params.horizon_days, config.horizon_years
            ),
        ));
    }
    parameter_box.validate()?;
    model.validate()?;

    let scenario = run_scenario(params, pricing)?;
    let objective = AvoidedEmissionsObjective::new(*params)?;
    let sensitivity = run_sensitivity(&objective, parameter_box, config)?;
    let uncertainty = run_uncertainty(&objective, model, config)?;

    let samples = |pathway| {
        uncertainty
            .result(pathway)
            .map(|r| r.samples.as_slice())
            .unwrap_or(&[])
    };
    let comparison = compare_paired(
        (TreatmentPathway::Composting, samples(TreatmentPathway::Composting)),
        (TreatmentPathway::Vermicomposting, samples(TreatmentPathway::Vermicomposting)),
    )?;

    for result in scenario.results() {
        info!(
            "{}: {:.3} tCO2eq avoided over {} years ({:.3}/yr)",
            result.pathway.label(),
            result.avoided_tco2eq,
            config.horizon_years,
            result.annualized_tco2eq
        );
    }
    info!(
        "Simulation complete: {} days, {} sensitivity evaluations, {} Monte Carlo draws",
        params.horizon_days,
        sensitivity.first().map(|s| s.evaluations).unwrap_or(0),
        uncertainty.draws.len()
    );

    Ok(SimulationReport {
        parameters: *params,
        config: config.clone(),
        pricing: pricing.clone(),
        local_price_per_tonne: pricing.local_price_per_tonne(),
        scenario,
        sensitivity,
        uncertainty,
        comparison,
    })
}
