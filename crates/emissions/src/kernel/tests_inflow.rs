//! Unit tests for the truncated convolution.

use super::*;

#[test]
fn test_pulse_through_kernel_reproduces_kernel() {
    let kernel = EmissionKernel::from_weights(vec![0.5, 0.3, 0.2]);
    let out = DailyInflow::pulse(10.0, 5).convolve(&kernel);
    assert_eq!(out.len(), 5);
    let expected = [5.0, 3.0, 2.0, 0.0, 0.0];
    for (got, want) in out.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {out:?}");
    }
}

#[test]
fn test_constant_inflow_is_running_sum() {
    let kernel = EmissionKernel::from_weights(vec![0.5, 0.3, 0.2]);
    let out = DailyInflow::constant(2.0, 5).convolve(&kernel);
    let expected = [1.0, 1.6, 2.0, 2.0, 2.0];
    for (got, want) in out.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {out:?}");
    }
}

#[test]
fn test_constant_path_matches_general_path() {
    let kernel = EmissionKernel::from_weights(vec![0.1, 0.3, 0.4, 0.15, 0.05]);
    let fast = DailyInflow::constant(3.0, 12).convolve(&kernel);
    // Non-constant series that differs only on the last day takes the general path.
    let mut samples = vec![3.0; 12];
    samples[11] = 4.0;
    let general = DailyInflow::from_samples(samples).convolve(&kernel);
    for day in 0..11 {
        assert!((fast[day] - general[day]).abs() < 1e-12, "day {day}");
    }
    assert!((general[11] - fast[11] - 0.1).abs() < 1e-12);
}

#[test]
fn test_tail_beyond_horizon_is_dropped() {
    let kernel = EmissionKernel::from_weights(vec![0.25; 4]);
    let mut samples = vec![0.0; 3];
    samples[2] = 8.0;
    let out = DailyInflow::from_samples(samples).convolve(&kernel);
    // Only the first quarter of the last-day batch lands inside the horizon.
    assert!((out.iter().sum::<f64>() - 2.0).abs() < 1e-12);
}

#[test]
fn test_kernel_longer_than_horizon() {
    let kernel = EmissionKernel::from_weights(vec![0.2; 5]);
    let out = DailyInflow::constant(1.0, 2).convolve(&kernel);
    assert!((out[0] - 0.2).abs() < 1e-12);
    assert!((out[1] - 0.4).abs() < 1e-12);
}

#[test]
fn test_empty_inflow() {
    let kernel = EmissionKernel::from_weights(vec![1.0]);
    assert!(DailyInflow::constant(1.0, 0).convolve(&kernel).is_empty());
}

#[test]
fn test_inflow_totals() {
    assert!((DailyInflow::constant(2.5, 4).total() - 10.0).abs() < 1e-12);
    assert!((DailyInflow::pulse(7.0, 4).total() - 7.0).abs() < 1e-12);
    assert_eq!(DailyInflow::pulse(7.0, 4).days(), 4);
}
