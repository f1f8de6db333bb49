//! Composting and vermicomposting: each day's batch is spread over the
//! following 50 days by the normalised treatment profiles.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::kernel::DailyInflow;
use crate::params::ParameterSet;

use super::series::EmissionSeries;
use super::PathwayKernels;

/// Accelerated biological treatment replacing landfill disposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentPathway {
    Composting,
    Vermicomposting,
}

/// Empirical derating factors of a treatment relative to plain composting.
///
/// The fraction multipliers act on the per-batch gas fraction; the
/// distribution multipliers act again when the batch is spread over the
/// profile. Both stages apply.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct YieldFactors {
    pub ch4_fraction_multiplier: f64,
    pub ch4_distribution_multiplier: f64,
    pub n2o_fraction_multiplier: f64,
    pub n2o_distribution_multiplier: f64,
}

impl YieldFactors {
    pub const UNIT: YieldFactors = YieldFactors {
        ch4_fraction_multiplier: 1.0,
        ch4_distribution_multiplier: 1.0,
        n2o_fraction_multiplier: 1.0,
        n2o_distribution_multiplier: 1.0,
    };
}

impl TreatmentPathway {
    pub const ALL: [TreatmentPathway; 2] =
        [TreatmentPathway::Composting, TreatmentPathway::Vermicomposting];

    pub fn label(self) -> &'static str {
        match self {
            Self::Composting => "Composting",
            Self::Vermicomposting => "Vermicomposting",
        }
    }

    pub fn yield_factors(self) -> YieldFactors {
        match self {
            Self::Composting => YieldFactors::UNIT,
            Self::Vermicomposting => YieldFactors {
                ch4_fraction_multiplier: VERMI_CH4_FRACTION_MULTIPLIER,
                ch4_distribution_multiplier: VERMI_CH4_DISTRIBUTION_MULTIPLIER,
                n2o_fraction_multiplier: VERMI_N2O_FRACTION_MULTIPLIER,
                n2o_distribution_multiplier: VERMI_N2O_DISTRIBUTION_MULTIPLIER,
            },
        }
    }
}

/// CH4 potential per kg of wet residue at the per-batch stage (kg CH4 / kg).
pub fn ch4_potential_per_kg(dry_matter_fraction: f64, factors: &YieldFactors) -> f64 {
    TOC_BREWERY
        * (CH4_C_FRACTION_BREWERY * factors.ch4_fraction_multiplier)
        * C_TO_CH4
        * dry_matter_fraction
}

/// N2O potential per kg of wet residue at the per-batch stage (kg N2O / kg).
pub fn n2o_potential_per_kg(dry_matter_fraction: f64, factors: &YieldFactors) -> f64 {
    TN_BREWERY
        * (N2O_N_FRACTION_BREWERY * factors.n2o_fraction_multiplier)
        * N_TO_N2O
        * dry_matter_fraction
}

/// Gas mass actually released per kg of residue, both derating stages applied.
pub fn released_per_kg(params: &ParameterSet, pathway: TreatmentPathway) -> (f64, f64) {
    let factors = pathway.yield_factors();
    let dm = params.dry_matter_fraction();
    (
        ch4_potential_per_kg(dm, &factors) * factors.ch4_distribution_multiplier,
        n2o_potential_per_kg(dm, &factors) * factors.n2o_distribution_multiplier,
    )
}

/// Treatment pathway for an arbitrary inflow series.
pub fn treatment_emissions_for_inflow(
    params: &ParameterSet,
    pathway: TreatmentPathway,
    inflow: &DailyInflow,
    kernels: &PathwayKernels,
) -> EmissionSeries {
    let (ch4_per_kg, n2o_per_kg) = released_per_kg(params, pathway);
    let ch4 = inflow
        .convolve(&kernels.treatment_ch4)
        .into_iter()
        .map(|v| v * ch4_per_kg)
        .collect();
    let n2o = inflow
        .convolve(&kernels.treatment_n2o)
        .into_iter()
        .map(|v| v * n2o_per_kg)
        .collect();
    EmissionSeries::new(ch4, n2o)
}

/// Treatment pathway for the constant daily inflow of `params`.
pub fn treatment_emissions(params: &ParameterSet, pathway: TreatmentPathway) -> EmissionSeries {
    let kernels = PathwayKernels::new(params.days());
    let inflow = DailyInflow::constant(params.waste_kg_per_day, params.days());
    treatment_emissions_for_inflow(params, pathway, &inflow, &kernels)
}
