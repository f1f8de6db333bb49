//! Unit tests for Monte Carlo draws, summaries and the uncertainty run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::config::SimulationConfig;
use crate::error::EngineError;
use crate::params::ParameterSet;
use crate::pathways::TreatmentPathway;
use crate::scenario::AvoidedEmissionsObjective;

fn objective() -> AvoidedEmissionsObjective {
    let params = ParameterSet {
        horizon_days: ParameterSet::horizon_days_for_years(5),
        ..Default::default()
    };
    AvoidedEmissionsObjective::new(params).unwrap()
}

fn config(samples: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        monte_carlo_samples: samples,
        seed,
        ..Default::default()
    }
}

// -------------------------------------------------------------------------
// Marginals
// -------------------------------------------------------------------------

#[test]
fn test_default_model_valid() {
    assert!(UncertaintyModel::default().validate().is_ok());
}

#[test]
fn test_draws_stay_in_support() {
    let mut rng = ChaCha8Rng::seed_from_u64(50);
    let draws = UncertaintyModel::default().draw(&mut rng, 1_000).unwrap();
    assert_eq!(draws.len(), 1_000);
    assert!(draws.moisture_fraction.iter().all(|m| (0.75..0.90).contains(m)));
    assert!(draws.degradable_carbon_fraction.iter().all(|d| (0.70..=0.90).contains(d)));
}

#[test]
fn test_draw_means_match_marginals() {
    let model = UncertaintyModel::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let draws = model.draw(&mut rng, 4_000).unwrap();
    let mean = |v: &[f64]| v.iter().sum::<f64>() / v.len() as f64;
    assert!((mean(&draws.moisture_fraction) - 0.825).abs() < 0.01);
    assert!((mean(&draws.temperature_c) - 25.0).abs() < 0.3);
    assert!((mean(&draws.degradable_carbon_fraction) - 0.80).abs() < 0.01);
    assert!((model.degradable_carbon_fraction.mean() - 0.80).abs() < 1e-12);
}

#[test]
fn test_normal_moisture_rejected() {
    let model = UncertaintyModel {
        moisture_fraction: Marginal::Normal {
            mean: 0.8,
            std_dev: 0.05,
        },
        ..Default::default()
    };
    assert!(model.validate().is_err());
}

#[test]
fn test_triangular_mode_outside_rejected() {
    let marginal = Marginal::Triangular {
        low: 0.7,
        mode: 0.95,
        high: 0.9,
    };
    assert!(marginal.validate("doc_marginal").is_err());
}

#[test]
fn test_cold_temperature_support_rejected() {
    let model = UncertaintyModel {
        temperature_c: Marginal::Uniform {
            low: -80.0,
            high: -60.0,
        },
        ..Default::default()
    };
    assert!(matches!(
        model.validate(),
        Err(EngineError::InvalidParameter {
            name: "temperature_marginal",
            ..
        })
    ));
}

#[test]
fn test_hot_triangular_temperature_rejected() {
    // DOCf(60) = 1.162
    let model = UncertaintyModel {
        temperature_c: Marginal::Triangular {
            low: 20.0,
            mode: 30.0,
            high: 60.0,
        },
        ..Default::default()
    };
    assert!(model.validate().is_err());
}

#[test]
fn test_marginal_json_tagged() {
    let json = serde_json::to_string(&Marginal::Uniform { low: 0.75, high: 0.9 }).unwrap();
    assert!(json.contains("\"kind\":\"uniform\""), "got {json}");
    let back: Marginal = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Marginal::Uniform { low: 0.75, high: 0.9 });
}

// -------------------------------------------------------------------------
// Summaries
// -------------------------------------------------------------------------

#[test]
fn test_percentile_linear_interpolation() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert!((percentile(&sorted, 50.0) - 2.5).abs() < 1e-12);
    assert!((percentile(&sorted, 2.5) - 1.075).abs() < 1e-12);
    assert!((percentile(&sorted, 100.0) - 4.0).abs() < 1e-12);
    assert!((percentile(&[3.0], 97.5) - 3.0).abs() < 1e-12);
    assert!(percentile(&[], 50.0).is_nan());
}

#[test]
fn test_histogram_last_bin_closed() {
    let h = Histogram::from_samples(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
    assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(h.counts, vec![1, 1, 1, 2]);
}

#[test]
fn test_histogram_constant_sample() {
    let h = Histogram::from_samples(&[5.0, 5.0], 2);
    assert_eq!(h.edges, vec![4.5, 5.0, 5.5]);
    assert_eq!(h.counts, vec![0, 2]);
}

// -------------------------------------------------------------------------
// Run
// -------------------------------------------------------------------------

#[test]
fn test_run_is_reproducible() {
    let first = run_uncertainty(&objective(), &UncertaintyModel::default(), &config(64, 50)).unwrap();
    let second = run_uncertainty(&objective(), &UncertaintyModel::default(), &config(64, 50)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_seed_changes_draws() {
    let a = run_uncertainty(&objective(), &UncertaintyModel::default(), &config(16, 1)).unwrap();
    let b = run_uncertainty(&objective(), &UncertaintyModel::default(), &config(16, 2)).unwrap();
    assert_ne!(a.draws, b.draws);
}

#[test]
fn test_result_summary_consistent() {
    let run = run_uncertainty(&objective(), &UncertaintyModel::default(), &config(100, 50)).unwrap();
    assert_eq!(run.draws.len(), 100);
    for result in &run.results {
        assert_eq!(result.samples.len(), 100);
        assert_eq!(result.histogram.total(), 100);
        assert_eq!(result.histogram.counts.len(), 30);
        assert!(result.ci95.lower <= result.mean && result.mean <= result.ci95.upper);
        assert!(result.std_dev > 0.0);
    }
    let compost = run.result(TreatmentPathway::Composting).unwrap();
    let vermi = run.result(TreatmentPathway::Vermicomposting).unwrap();
    assert!(vermi.mean > compost.mean);
}

#[test]
fn test_samples_follow_draw_order() {
    let objective = objective();
    let run = run_uncertainty(&objective, &UncertaintyModel::default(), &config(8, 50)).unwrap();
    let triples = run.draws.triples();
    let compost = run.result(TreatmentPathway::Composting).unwrap();
    for (t, y) in triples.iter().zip(&compost.samples) {
        let expected = objective.evaluate(*t, TreatmentPathway::Composting);
        assert!((y - expected).abs() < 1e-9 * expected.abs());
    }
}

#[test]
fn test_out_of_domain_normal_draws_rejected() {
    // About a third of N(45, 10) lands above the 49 °C DOCf limit.
    let model = UncertaintyModel {
        temperature_c: Marginal::Normal {
            mean: 45.0,
            std_dev: 10.0,
        },
        ..Default::default()
    };
    assert!(model.validate().is_ok());
    let err = run_uncertainty(&objective(), &model, &config(100, 50)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidParameter {
            name: "temperature_c",
            ..
        }
    ));
}
