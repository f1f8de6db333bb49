use bevy::log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_YEAR;
use crate::error::EngineError;
use crate::gwp::CarbonSeries;
use crate::kernel::DailyInflow;
use crate::params::ParameterSet;
use crate::pathways::{
    landfill_emissions_for_inflow, treatment_emissions_for_inflow, EmissionSeries, PathwayKernels,
    TreatmentPathway,
};
use crate::pricing::{CreditValue, Pricing};

// =============================================================================
// Scalar results
// =============================================================================

/// `baseline_end - project_end` over cumulative tCO2eq. Not clamped.
pub fn avoided_tco2eq(baseline: &CarbonSeries, project: &CarbonSeries) -> f64 {
    baseline.total() - project.total()
}

pub fn annualized_tco2eq(avoided: f64, horizon_years: f64) -> f64 {
    avoided / horizon_years
}

/// Headline numbers for one treatment pathway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub pathway: TreatmentPathway,
    pub avoided_tco2eq: f64,
    pub annualized_tco2eq: f64,
    pub credit_value: CreditValue,
}

impl ScenarioResult {
    pub fn new(
        pathway: TreatmentPathway,
        avoided_tco2eq: f64,
        horizon_years: f64,
        pricing: &Pricing,
    ) -> Self {
        Self {
            pathway,
            avoided_tco2eq,
            annualized_tco2eq: annualized_tco2eq(avoided_tco2eq, horizon_years),
            credit_value: pricing.value_of(avoided_tco2eq),
        }
    }
}

// =============================================================================
// Annual summary
// =============================================================================

/// One accounting year of a baseline/project comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    /// 1-based accounting year.
    pub year: u32,
    pub baseline_tco2eq: f64,
    pub project_tco2eq: f64,
    pub reduction_tco2eq: f64,
    pub cumulative_reduction_tco2eq: f64,
}

/// Sums both daily series over consecutive 365-day blocks.
///
/// A trailing partial block, if any, becomes its own final year.
pub fn annual_summary(baseline: &CarbonSeries, project: &CarbonSeries) -> Vec<AnnualSummary> {
    let block = DAYS_PER_YEAR as usize;
    let mut cumulative = 0.0;
    baseline
        .daily_tco2eq
        .chunks(block)
        .zip(project.daily_tco2eq.chunks(block))
        .enumerate()
        .map(|(i, (base, proj))| {
            let baseline_tco2eq: f64 = base.iter().sum();
            let project_tco2eq: f64 = proj.iter().sum();
            let reduction_tco2eq = baseline_tco2eq - project_tco2eq;
            cumulative += reduction_tco2eq;
            AnnualSummary {
                year: i as u32 + 1,
                baseline_tco2eq,
                project_tco2eq,
                reduction_tco2eq,
                cumulative_reduction_tco2eq: cumulative,
            }
        })
        .collect()
}

// =============================================================================
// Full scenario
// =============================================================================

/// Everything computed for one treatment pathway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathwayOutcome {
    pub result: ScenarioResult,
    pub emissions: EmissionSeries,
    pub carbon: CarbonSeries,
    pub annual: Vec<AnnualSummary>,
}

/// Baseline plus both treatment pathways over one horizon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRun {
    pub horizon_days: u32,
    pub landfill_emissions: EmissionSeries,
    pub landfill_carbon: CarbonSeries,
    pub treatments: Vec<PathwayOutcome>,
}

impl ScenarioRun {
    pub fn outcome(&self, pathway: TreatmentPathway) -> Option<&PathwayOutcome> {
        self.treatments.iter().find(|o| o.result.pathway == pathway)
    }

    pub fn results(&self) -> Vec<ScenarioResult> {
        self.treatments.iter().map(|o| o.result.clone()).collect()
    }
}

/// Runs the baseline and every treatment pathway for `params`.
pub fn run_scenario(params: &ParameterSet, pricing: &Pricing) -> Result<ScenarioRun, EngineError> {
    params.validate()?;
    let days = params.days();
    let kernels = PathwayKernels::new(days);
    debug!("Built pathway kernels for {} days", days);
    let inflow = DailyInflow::constant(params.waste_kg_per_day, days);

    let landfill_emissions = landfill_emissions_for_inflow(params, params.docf(), &inflow, &kernels);
    let landfill_carbon = CarbonSeries::from_emissions(&landfill_emissions);

    let treatments = TreatmentPathway::ALL
        .iter()
        .map(|&pathway| {
            let emissions = treatment_emissions_for_inflow(params, pathway, &inflow, &kernels);
            let carbon = CarbonSeries::from_emissions(&emissions);
            let avoided = avoided_tco2eq(&landfill_carbon, &carbon);
            PathwayOutcome {
                result: ScenarioResult::new(pathway, avoided, params.horizon_years(), pricing),
                annual: annual_summary(&landfill_carbon, &carbon),
                emissions,
                carbon,
            }
        })
        .collect();

    Ok(ScenarioRun {
        horizon_days: params.horizon_days,
        landfill_emissions,
        landfill_carbon,
        treatments,
    })
}
