//! Unit tests for the Sobol sequence and the Saltelli design.

use super::design::*;
use super::sequence::*;
use crate::error::EngineError;
use crate::params::Factor;

// -------------------------------------------------------------------------
// Sequence
// -------------------------------------------------------------------------

#[test]
fn test_sequence_first_points() {
    let mut seq = SobolSequence::new(3).unwrap();
    let points = seq.take_points(4);
    assert_eq!(points[0], vec![0.0, 0.0, 0.0]);
    assert_eq!(points[1], vec![0.5, 0.5, 0.5]);
    assert_eq!(points[2], vec![0.75, 0.25, 0.25]);
    assert_eq!(points[3], vec![0.25, 0.75, 0.75]);
}

#[test]
fn test_sequence_fifth_point_six_dims() {
    let mut seq = SobolSequence::new(6).unwrap();
    seq.skip(4);
    assert_eq!(
        seq.next_point(),
        vec![0.375, 0.375, 0.625, 0.875, 0.375, 0.125]
    );
}

#[test]
fn test_sequence_stratifies_each_dimension() {
    let mut seq = SobolSequence::new(12).unwrap();
    let points = seq.take_points(64);
    for d in 0..12 {
        let mut cells: Vec<usize> = points.iter().map(|p| (p[d] * 64.0) as usize).collect();
        cells.sort_unstable();
        assert_eq!(cells, (0..64).collect::<Vec<_>>(), "dimension {d}");
    }
}

#[test]
fn test_sequence_rejects_bad_dimension() {
    assert!(SobolSequence::new(0).is_err());
    assert!(SobolSequence::new(13).is_err());
}

// -------------------------------------------------------------------------
// Parameter box
// -------------------------------------------------------------------------

#[test]
fn test_default_box() {
    let b = ParameterBox::default();
    assert!(b.validate().is_ok());
    assert_eq!(b.bounds(Factor::Moisture), Bounds::new(0.75, 0.90));
    assert_eq!(b.bounds(Factor::Temperature), Bounds::new(20.0, 35.0));
    assert_eq!(b.bounds(Factor::DegradableCarbon), Bounds::new(0.70, 0.90));
}

#[test]
fn test_box_rejects_inverted_bounds() {
    let b = ParameterBox {
        temperature_c: Bounds::new(35.0, 20.0),
        ..Default::default()
    };
    assert!(matches!(
        b.validate(),
        Err(EngineError::InvalidParameter { name: "temperature_bounds", .. })
    ));
}

#[test]
fn test_box_rejects_fraction_outside_unit() {
    let b = ParameterBox {
        moisture_fraction: Bounds::new(0.5, 1.0),
        ..Default::default()
    };
    assert!(b.validate().is_err());
}

#[test]
fn test_box_rejects_extreme_temperature() {
    let b = ParameterBox {
        temperature_c: Bounds::new(20.0, 60.0),
        ..Default::default()
    };
    assert!(b.validate().is_err());
}

// -------------------------------------------------------------------------
// Saltelli design
// -------------------------------------------------------------------------

#[test]
fn test_design_size() {
    let design = SaltelliDesign::generate(&ParameterBox::default(), 16).unwrap();
    assert_eq!(design.len(), 16 * 8);
    assert_eq!(ROWS_PER_BASE_SAMPLE, 8);
}

#[test]
fn test_design_points_inside_box() {
    let b = ParameterBox::default();
    let design = SaltelliDesign::generate(&b, 32).unwrap();
    for p in &design.points {
        for f in Factor::ALL {
            assert!(b.bounds(f).contains(p.get(f)), "{p:?}");
        }
    }
}

#[test]
fn test_design_cross_sampling_structure() {
    let design = SaltelliDesign::generate(&ParameterBox::default(), 4).unwrap();
    for block in design.points.chunks(ROWS_PER_BASE_SAMPLE) {
        let a = block[0].to_array();
        let b = block[7].to_array();
        for j in 0..3 {
            let ab = block[1 + j].to_array();
            let ba = block[4 + j].to_array();
            for k in 0..3 {
                let (ab_expected, ba_expected) = if k == j { (b[k], a[k]) } else { (a[k], b[k]) };
                assert_eq!(ab[k], ab_expected);
                assert_eq!(ba[k], ba_expected);
            }
        }
    }
}

#[test]
fn test_design_rejects_zero_samples() {
    assert!(SaltelliDesign::generate(&ParameterBox::default(), 0).is_err());
}

#[test]
fn test_design_accepts_non_power_of_two() {
    let design = SaltelliDesign::generate(&ParameterBox::default(), 10).unwrap();
    assert_eq!(design.len(), 80);
}
