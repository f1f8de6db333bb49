//! Paired comparison of two outcome samples drawn at identical parameters.
//!
//! Reports statistics and p-values only; no accept/reject decision is made.

pub mod normality;
pub mod paired;


pub use normality::*;
pub use paired::*;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::pathways::TreatmentPathway;
use crate::stats::mean;

/// Minimum number of pairs for the comparison.
pub const MIN_PAIRS: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairedComparison {
    /// Sample the differences are taken from (`first - second`).
    pub first: TreatmentPathway,
    pub second: TreatmentPathway,
    pub pairs: usize,
    pub mean_difference: f64,
    /// Normality of the differences.
    pub normality: ShapiroWilk,
    pub t_test: PairedTTest,
    pub wilcoxon: WilcoxonSignedRank,
}

/// Elementwise `first - second`.
pub fn differences(first: &[f64], second: &[f64]) -> Result<Vec<f64>, EngineError> {
    if first.len() != second.len() {
        return Err(EngineError::SampleLengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }
    if first.len() < MIN_PAIRS {
        return Err(EngineError::InsufficientSamples {
            needed: MIN_PAIRS,
            found: first.len(),
        });
    }
    Ok(first.iter().zip(second).map(|(a, b)| a - b).collect())
}

/// Runs every paired test on two samples from the same draws.
pub fn compare_paired(
    first: (TreatmentPathway, &[f64]),
    second: (TreatmentPathway, &[f64]),
) -> Result<PairedComparison, EngineError> {
    let d = differences(first.1, second.1)?;
    Ok(PairedComparison {
        first: first.0,
        second: second.0,
        pairs: d.len(),
        mean_difference: mean(&d),
        normality: shapiro_wilk(&d)?,
        t_test: paired_t_test(&d)?,
        wilcoxon: wilcoxon_signed_rank(&d)?,
    })
}
