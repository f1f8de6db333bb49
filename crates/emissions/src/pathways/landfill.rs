//! Landfill baseline: long-tail first-order decay CH4, short landfill N2O
//! pulse, and the pre-disposal storage contribution.

use crate::constants::*;
use crate::kernel::DailyInflow;
use crate::params::ParameterSet;

use super::series::EmissionSeries;
use super::PathwayKernels;

// =============================================================================
// Per-kg factors
// =============================================================================

/// CH4 generation potential per kg of waste deposited (kg CH4 / kg).
///
/// `DOC * DOCf * MCF * F * 16/12 * (1 - R) * (1 - OX)`
pub fn methane_potential_per_kg(degradable_carbon_fraction: f64, docf: f64) -> f64 {
    degradable_carbon_fraction
        * docf
        * MCF
        * METHANE_GAS_FRACTION
        * C_TO_CH4
        * (1.0 - METHANE_RECOVERY)
        * (1.0 - OXIDATION_FACTOR)
}

/// N2O moisture correction relative to the 55% reference, `(1 - m) / (1 - 0.55)`.
pub fn moisture_correction(moisture_fraction: f64) -> f64 {
    (1.0 - moisture_fraction) / (1.0 - REFERENCE_MOISTURE)
}

/// Landfill N2O released per kg of waste (kg N2O / kg), before the 5-day profile.
///
/// Blends the open-face and covered emission factors by the open-face share,
/// then applies the moisture correction.
pub fn landfill_n2o_per_kg(params: &ParameterSet) -> f64 {
    let open = params.open_face_fraction();
    let blended =
        open * N2O_FACTOR_OPEN_MG_N_PER_KG + (1.0 - open) * N2O_FACTOR_CLOSED_MG_N_PER_KG;
    let adjusted = blended * moisture_correction(params.moisture_fraction);
    adjusted * N_TO_N2O / MG_PER_KG
}

/// N2O multiplier for the pre-disposal storage atmosphere.
///
/// Three measured regimes (21%, 10%, 1% O2) scaled to the 21% flux. Any other
/// concentration uses the unadjusted factor.
pub fn n2o_oxygen_factor(oxygen_percent: f64) -> f64 {
    const TOL: f64 = 1e-9;
    if (oxygen_percent - 10.0).abs() < TOL {
        N2O_FLUX_AT_10_PCT_O2 / N2O_FLUX_AT_21_PCT_O2
    } else if (oxygen_percent - 1.0).abs() < TOL {
        N2O_FLUX_AT_1_PCT_O2 / N2O_FLUX_AT_21_PCT_O2
    } else {
        1.0
    }
}

/// Pre-disposal CH4 flux in g CH4 per kg of waste per day.
pub fn pre_disposal_ch4_g_per_kg_day() -> f64 {
    let ug_ch4_per_kg_h = PRE_DISPOSAL_CH4_UG_C_PER_KG_H * C_TO_CH4;
    ug_ch4_per_kg_h * 24.0 / 1_000_000.0
}

/// Pre-disposal N2O in g N2O per kg of waste per day, oxygen-adjusted.
pub fn pre_disposal_n2o_g_per_kg_day(oxygen_percent: f64) -> f64 {
    let mg_n_per_kg_day = PRE_DISPOSAL_N2O_MG_N_PER_KG / PRE_DISPOSAL_N2O_DAYS;
    mg_n_per_kg_day * N_TO_N2O / 1_000.0 * n2o_oxygen_factor(oxygen_percent)
}

// =============================================================================
// Series
// =============================================================================

/// First-order decay CH4 and 5-day N2O from the landfill body.
pub fn long_tail_emissions(
    params: &ParameterSet,
    docf: f64,
    inflow: &DailyInflow,
    kernels: &PathwayKernels,
) -> EmissionSeries {
    let ch4_per_kg = methane_potential_per_kg(params.degradable_carbon_fraction, docf);
    let ch4 = inflow
        .convolve(&kernels.landfill_ch4)
        .into_iter()
        .map(|v| v * ch4_per_kg)
        .collect();

    let n2o_per_kg = landfill_n2o_per_kg(params);
    let n2o = inflow
        .convolve(&kernels.landfill_n2o)
        .into_iter()
        .map(|v| v * n2o_per_kg)
        .collect();

    EmissionSeries::new(ch4, n2o)
}

/// Emissions while residue is stored before it reaches the landfill.
///
/// CH4 is released the same day at a constant rate; N2O follows the 3-day
/// pre-disposal profile.
pub fn pre_disposal_emissions(
    params: &ParameterSet,
    inflow: &DailyInflow,
    kernels: &PathwayKernels,
) -> EmissionSeries {
    let ch4_kg_per_kg = pre_disposal_ch4_g_per_kg_day() / G_PER_KG;
    let ch4 = inflow.samples().iter().map(|m| m * ch4_kg_per_kg).collect();

    let n2o_kg_per_kg = pre_disposal_n2o_g_per_kg_day(params.oxygen_percent) / G_PER_KG;
    let n2o = inflow
        .convolve(&kernels.pre_disposal_n2o)
        .into_iter()
        .map(|v| v * n2o_kg_per_kg)
        .collect();

    EmissionSeries::new(ch4, n2o)
}

/// Landfill pathway for an arbitrary inflow series.
pub fn landfill_emissions_for_inflow(
    params: &ParameterSet,
    docf: f64,
    inflow: &DailyInflow,
    kernels: &PathwayKernels,
) -> EmissionSeries {
    long_tail_emissions(params, docf, inflow, kernels)
        .combined(&pre_disposal_emissions(params, inflow, kernels))
}

/// Landfill pathway for the constant daily inflow of `params`.
pub fn landfill_emissions(params: &ParameterSet, docf: f64) -> EmissionSeries {
    let kernels = PathwayKernels::new(params.days());
    let inflow = DailyInflow::constant(params.waste_kg_per_day, params.days());
    landfill_emissions_for_inflow(params, docf, &inflow, &kernels)
}
