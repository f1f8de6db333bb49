//! Unit tests for the landfill baseline model.

use super::landfill::*;
use super::PathwayKernels;
use crate::constants::*;
use crate::kernel::DailyInflow;
use crate::params::ParameterSet;

fn params() -> ParameterSet {
    ParameterSet {
        waste_kg_per_day: 100.0,
        moisture_fraction: 0.80,
        temperature_c: 25.0,
        degradable_carbon_fraction: 0.80,
        exposed_mass_kg: 80.0,
        exposed_hours: 8.0,
        oxygen_percent: 21.0,
        horizon_days: 3_650,
    }
}

// -------------------------------------------------------------------------
// Per-kg factors
// -------------------------------------------------------------------------

#[test]
fn test_methane_potential_formula() {
    // 0.8 * 0.6475 * 1 * 0.5 * 16/12 * 1 * 0.9 = 0.3108
    let p = methane_potential_per_kg(0.8, docf_at(25.0));
    assert!((p - 0.3108).abs() < 1e-12);
}

#[test]
fn test_methane_potential_scales_with_doc() {
    let low = methane_potential_per_kg(0.4, 0.6);
    let high = methane_potential_per_kg(0.8, 0.6);
    assert!((high - 2.0 * low).abs() < 1e-12);
}

#[test]
fn test_moisture_correction_reference_is_one() {
    assert!((moisture_correction(REFERENCE_MOISTURE) - 1.0).abs() < 1e-12);
    // (1 - 0.8) / 0.45
    assert!((moisture_correction(0.8) - 0.2 / 0.45).abs() < 1e-12);
}

#[test]
fn test_landfill_n2o_per_kg() {
    let p = params();
    let open = 0.8 * 8.0 / 24.0;
    let blended = open * 2.25 + (1.0 - open) * 2.50;
    let expected = blended * (0.2 / 0.45) * (44.0 / 28.0) / 1e6;
    assert!((landfill_n2o_per_kg(&p) - expected).abs() < 1e-18);
}

#[test]
fn test_more_exposure_lowers_landfill_n2o() {
    // Open-face factor (2.25) is below the covered factor (2.50).
    let covered = ParameterSet {
        exposed_hours: 0.0,
        ..params()
    };
    let open = ParameterSet {
        exposed_mass_kg: 100.0,
        exposed_hours: 24.0,
        ..params()
    };
    assert!(landfill_n2o_per_kg(&open) < landfill_n2o_per_kg(&covered));
}

#[test]
fn test_oxygen_factor_regimes() {
    assert!((n2o_oxygen_factor(21.0) - 1.0).abs() < f64::EPSILON);
    assert!((n2o_oxygen_factor(10.0) - 11.11 / 20.26).abs() < 1e-12);
    assert!((n2o_oxygen_factor(1.0) - 7.86 / 20.26).abs() < 1e-12);
    assert!((n2o_oxygen_factor(15.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_pre_disposal_rates() {
    // 3.5 ug C/kg/h * 16/12 * 24 h / 1e6 = 1.12e-4 g CH4/kg/day
    assert!((pre_disposal_ch4_g_per_kg_day() - 1.12e-4).abs() < 1e-15);
    // 25 mg N / 3 days * 44/28 / 1000
    let expected = 25.0 / 3.0 * (44.0 / 28.0) / 1000.0;
    assert!((pre_disposal_n2o_g_per_kg_day(21.0) - expected).abs() < 1e-15);
    assert!(pre_disposal_n2o_g_per_kg_day(1.0) < pre_disposal_n2o_g_per_kg_day(21.0));
}

// -------------------------------------------------------------------------
// Series
// -------------------------------------------------------------------------

#[test]
fn test_landfill_series_length_matches_horizon() {
    let p = params();
    let series = landfill_emissions(&p, p.docf());
    assert_eq!(series.days(), 3_650);
    assert_eq!(series.n2o_kg.len(), 3_650);
}

#[test]
fn test_landfill_series_non_negative_and_growing() {
    let p = params();
    let series = landfill_emissions(&p, p.docf());
    assert!(series.ch4_kg.iter().all(|&v| v >= 0.0));
    assert!(series.n2o_kg.iter().all(|&v| v >= 0.0));
    // Waste keeps accumulating, so the decay CH4 rate never drops.
    assert!(series.ch4_kg.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_single_pulse_long_tail_mass() {
    let p = ParameterSet {
        horizon_days: 730,
        ..params()
    };
    let kernels = PathwayKernels::new(730);
    let inflow = DailyInflow::pulse(100.0, 730);
    let series = long_tail_emissions(&p, p.docf(), &inflow, &kernels);
    let potential = 100.0 * methane_potential_per_kg(0.8, p.docf());
    let retained = 1.0 - (-DECAY_CONSTANT_PER_YEAR * 2.0).exp();
    assert!((series.total_ch4_kg() - potential * retained).abs() < 1e-9);
    assert!((series.total_n2o_kg() - 100.0 * landfill_n2o_per_kg(&p)).abs() < 1e-12);
}

#[test]
fn test_pre_disposal_ch4_is_same_day() {
    let p = params();
    let kernels = PathwayKernels::new(10);
    let inflow = DailyInflow::pulse(100.0, 10);
    let series = pre_disposal_emissions(&p, &inflow, &kernels);
    assert!((series.ch4_kg[0] - 100.0 * 1.12e-4 / 1000.0).abs() < 1e-15);
    assert!(series.ch4_kg[1..].iter().all(|&v| v == 0.0));
    // N2O over three days, 86.23% on day one.
    let n2o_total = 100.0 * pre_disposal_n2o_g_per_kg_day(21.0) / 1000.0;
    assert!((series.n2o_kg[0] - n2o_total * 0.8623).abs() < 1e-15);
    assert!((series.total_n2o_kg() - n2o_total).abs() < 1e-15);
}

#[test]
fn test_landfill_is_sum_of_parts() {
    let p = params();
    let kernels = PathwayKernels::new(p.days());
    let inflow = DailyInflow::constant(p.waste_kg_per_day, p.days());
    let tail = long_tail_emissions(&p, p.docf(), &inflow, &kernels);
    let pre = pre_disposal_emissions(&p, &inflow, &kernels);
    let total = landfill_emissions(&p, p.docf());
    let day = 1_000;
    assert!((total.ch4_kg[day] - tail.ch4_kg[day] - pre.ch4_kg[day]).abs() < 1e-12);
    assert!((total.n2o_kg[day] - tail.n2o_kg[day] - pre.n2o_kg[day]).abs() < 1e-15);
}

#[test]
fn test_warmer_landfill_emits_more_methane() {
    let cool = ParameterSet {
        temperature_c: 20.0,
        ..params()
    };
    let warm = ParameterSet {
        temperature_c: 35.0,
        ..params()
    };
    let cool_total = landfill_emissions(&cool, cool.docf()).total_ch4_kg();
    let warm_total = landfill_emissions(&warm, warm.docf()).total_ch4_kg();
    assert!(warm_total > cool_total);
}

#[test]
fn test_zero_waste_emits_nothing() {
    let p = ParameterSet {
        waste_kg_per_day: 0.0,
        ..params()
    };
    let series = landfill_emissions(&p, p.docf());
    assert_eq!(series.total_ch4_kg(), 0.0);
    assert_eq!(series.total_n2o_kg(), 0.0);
}
