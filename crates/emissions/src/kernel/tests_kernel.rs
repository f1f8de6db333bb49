//! Unit tests for kernel construction and normalisation.

use super::*;
use crate::constants::{DECAY_CONSTANT_PER_YEAR, TREATMENT_DAYS};

const TOL: f64 = 1e-9;

// -------------------------------------------------------------------------
// Empirical profiles
// -------------------------------------------------------------------------

#[test]
fn test_landfill_n2o_kernel_sums_to_one() {
    let kernel = landfill_n2o_kernel();
    assert_eq!(kernel.len(), 5);
    assert!((kernel.total() - 1.0).abs() < TOL);
}

#[test]
fn test_pre_disposal_kernel_sums_to_one() {
    let kernel = pre_disposal_n2o_kernel();
    assert_eq!(kernel.len(), 3);
    assert!((kernel.total() - 1.0).abs() < TOL);
    assert!((kernel.weights()[0] - 0.8623).abs() < f64::EPSILON);
}

#[test]
fn test_treatment_kernels_are_normalized() {
    for kernel in [treatment_methane_kernel(), treatment_n2o_kernel()] {
        assert_eq!(kernel.len(), TREATMENT_DAYS);
        assert!((kernel.total() - 1.0).abs() < TOL, "sum = {}", kernel.total());
        assert!(kernel.weights().iter().all(|&w| w >= 0.0));
    }
}

#[test]
fn test_raw_treatment_profiles_do_not_sum_to_one() {
    // Normalisation is load-bearing: the literal profiles sum to 1.87 and 2.40.
    let ch4: f64 = TREATMENT_CH4_PROFILE.iter().sum();
    let n2o: f64 = TREATMENT_N2O_PROFILE.iter().sum();
    assert!((ch4 - 1.87).abs() < 1e-9);
    assert!((n2o - 2.40).abs() < 1e-9);
}

#[test]
fn test_normalization_preserves_shape() {
    let kernel = treatment_methane_kernel();
    let peak = kernel
        .weights()
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    // Peak on day 9 (index 8), weight 0.20 / 1.87.
    assert_eq!(peak, Some(8));
    assert!((kernel.weights()[8] - 0.20 / 1.87).abs() < 1e-9);
}

#[test]
fn test_normalized_all_zero_stays_zero() {
    let kernel = EmissionKernel::normalized(&[0.0, 0.0, 0.0]);
    assert_eq!(kernel.weights(), &[0.0, 0.0, 0.0]);
}

// -------------------------------------------------------------------------
// Landfill decay kernel
// -------------------------------------------------------------------------

#[test]
fn test_landfill_kernel_length_matches_horizon() {
    let kernel = landfill_methane_kernel(DECAY_CONSTANT_PER_YEAR, 3_650);
    assert_eq!(kernel.len(), 3_650);
}

#[test]
fn test_landfill_kernel_telescopes_to_survival_difference() {
    // Sum over 10 years = 1 - exp(-0.06 * 10)
    let kernel = landfill_methane_kernel(DECAY_CONSTANT_PER_YEAR, 3_650);
    let expected = 1.0 - (-0.6_f64).exp();
    assert!((kernel.total() - expected).abs() < 1e-9);
}

#[test]
fn test_landfill_kernel_is_decreasing_and_positive() {
    let kernel = landfill_methane_kernel(DECAY_CONSTANT_PER_YEAR, 400);
    let w = kernel.weights();
    assert!(w.iter().all(|&x| x > 0.0));
    assert!(w.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn test_landfill_kernel_first_day() {
    let kernel = landfill_methane_kernel(0.06, 10);
    let expected = 1.0 - (-0.06_f64 / 365.0).exp();
    assert!((kernel.weights()[0] - expected).abs() < 1e-15);
}

#[test]
fn test_landfill_kernel_approaches_one_for_long_horizon() {
    let kernel = landfill_methane_kernel(0.06, 365 * 200);
    assert!(kernel.total() > 0.99999);
    assert!(kernel.total() <= 1.0);
}
