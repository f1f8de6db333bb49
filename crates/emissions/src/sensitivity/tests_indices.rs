//! Unit tests for the Sobol index estimators.

use super::design::*;
use super::indices::*;
use crate::error::EngineError;
use crate::params::{Factor, FactorTriple};

fn test_box() -> ParameterBox {
    ParameterBox {
        moisture_fraction: Bounds::new(0.1, 0.9),
        temperature_c: Bounds::new(0.0, 30.0),
        degradable_carbon_fraction: Bounds::new(0.1, 0.9),
    }
}

fn bootstrap() -> Bootstrap {
    Bootstrap {
        resamples: 50,
        confidence_level: 0.95,
        seed: 50,
    }
}

fn indices_of(n: usize, f: impl Fn(&FactorTriple) -> f64) -> SobolIndices {
    let design = SaltelliDesign::generate(&test_box(), n).unwrap();
    let y: Vec<f64> = design.points.iter().map(f).collect();
    analyze(&y, n, bootstrap()).unwrap()
}

#[test]
fn test_additive_function_indices() {
    // Var(m) : Var(2 DOC) = 1 : 4, T unused.
    let s = indices_of(256, |p| p.moisture_fraction + 2.0 * p.degradable_carbon_fraction);
    let m = s.get(Factor::Moisture).unwrap();
    let doc = s.get(Factor::DegradableCarbon).unwrap();
    let t = s.get(Factor::Temperature).unwrap();
    assert!((m.s1 - 0.2).abs() < 0.02, "S1 moisture {}", m.s1);
    assert!((doc.s1 - 0.8).abs() < 0.02, "S1 DOC {}", doc.s1);
    assert!((m.st - 0.2).abs() < 0.02);
    assert!((doc.st - 0.8).abs() < 0.02);
    assert!(t.s1.abs() < 1e-12);
    assert!(t.st.abs() < 1e-12);
}

#[test]
fn test_ranked_by_total_order() {
    let s = indices_of(64, |p| p.moisture_fraction + 2.0 * p.degradable_carbon_fraction);
    assert_eq!(s.ranked[0].factor, Factor::DegradableCarbon);
    assert_eq!(s.ranked[1].factor, Factor::Moisture);
    assert_eq!(s.ranked[2].factor, Factor::Temperature);
    assert!(s.ranked.windows(2).all(|w| w[0].st >= w[1].st));
}

#[test]
fn test_interaction_shows_in_second_order() {
    // m * DOC on U(0.1, 0.9)^2: S1 = 0.452 each, ST = 0.548 each, S2 = 0.096.
    let s = indices_of(1024, |p| p.moisture_fraction * p.degradable_carbon_fraction);
    for factor in [Factor::Moisture, Factor::DegradableCarbon] {
        let f = s.get(factor).unwrap();
        assert!((f.s1 - 0.452).abs() < 0.02, "{factor:?} S1 {}", f.s1);
        assert!((f.st - 0.548).abs() < 0.02, "{factor:?} ST {}", f.st);
        assert!(f.st >= f.s1);
    }
    let s2 = s.pair(Factor::Moisture, Factor::DegradableCarbon).unwrap();
    assert!((s2.s2 - 0.096).abs() < 0.02, "S2 {}", s2.s2);
    assert_eq!(s.second_order.len(), 3);
}

#[test]
fn test_first_order_sum_at_most_one() {
    let s = indices_of(512, |p| {
        p.moisture_fraction * p.degradable_carbon_fraction + 0.01 * p.temperature_c
    });
    let sum: f64 = s.ranked.iter().map(|f| f.s1).sum();
    assert!(sum <= 1.0 + 0.02, "sum of S1 = {sum}");
}

#[test]
fn test_confidence_is_reproducible_and_positive() {
    let f = |p: &FactorTriple| p.moisture_fraction + p.degradable_carbon_fraction.powi(2);
    let first = indices_of(64, f);
    let second = indices_of(64, f);
    assert_eq!(first, second);
    let m = first.get(Factor::Moisture).unwrap();
    assert!(m.s1_conf > 0.0 && m.s1_conf.is_finite());
    assert!(m.st_conf > 0.0 && m.st_conf.is_finite());
}

#[test]
fn test_constant_output_gives_nan() {
    let s = indices_of(16, |_| 3.0);
    assert!(s.ranked.iter().all(|f| f.s1.is_nan() && f.st.is_nan()));
}

#[test]
fn test_wrong_output_length_rejected() {
    let result = analyze(&[1.0; 10], 2, bootstrap());
    assert!(matches!(
        result,
        Err(EngineError::SampleLengthMismatch { left: 10, right: 16 })
    ));
}
