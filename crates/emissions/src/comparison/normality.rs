//! Shapiro-Wilk normality test (Royston's approximation, 3 <= n <= 5000).

use std::f64::consts::PI;

use bevy::log::warn;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::EngineError;

/// Above this size the p-value approximation is no longer calibrated.
pub const SHAPIRO_MAX_RELIABLE_N: usize = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapiroWilk {
    pub w: f64,
    pub p_value: f64,
}

fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

// Royston (1995) coefficients, lowest order first.
const C_AN: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C_AN1: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const SMALL_GAMMA: [f64; 2] = [-2.273, 0.459];
const SMALL_MU: [f64; 4] = [0.5440, -0.39978, 0.025054, -0.0006714];
const SMALL_SIGMA: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const LARGE_MU: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const LARGE_SIGMA: [f64; 3] = [-0.4803, -0.082676, 0.0030302];

/// Weights `a_i` for the ordered sample of size `n` (n >= 4).
fn coefficients(n: usize, std_normal: &Normal) -> Vec<f64> {
    let nf = n as f64;
    let m: Vec<f64> = (1..=n)
        .map(|i| std_normal.inverse_cdf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let mm: f64 = m.iter().map(|v| v * v).sum();
    let u = 1.0 / nf.sqrt();
    let a_n = m[n - 1] / mm.sqrt() + poly(&C_AN, u);

    let mut a = vec![0.0; n];
    if n > 5 {
        let a_n1 = m[n - 2] / mm.sqrt() + poly(&C_AN1, u);
        let phi = (mm - 2.0 * m[n - 1].powi(2) - 2.0 * m[n - 2].powi(2))
            / (1.0 - 2.0 * a_n.powi(2) - 2.0 * a_n1.powi(2));
        for i in 2..n - 2 {
            a[i] = m[i] / phi.sqrt();
        }
        a[1] = -a_n1;
        a[n - 2] = a_n1;
    } else {
        let phi = (mm - 2.0 * m[n - 1].powi(2)) / (1.0 - 2.0 * a_n.powi(2));
        for i in 1..n - 1 {
            a[i] = m[i] / phi.sqrt();
        }
    }
    a[0] = -a_n;
    a[n - 1] = a_n;
    a
}

/// Tests whether `sample` could come from a normal distribution.
///
/// A constant sample has no defined W; both fields are NaN.
pub fn shapiro_wilk(sample: &[f64]) -> Result<ShapiroWilk, EngineError> {
    let n = sample.len();
    if n < 3 {
        return Err(EngineError::InsufficientSamples {
            needed: 3,
            found: n,
        });
    }
    if n > SHAPIRO_MAX_RELIABLE_N {
        warn!("Shapiro-Wilk on {} values; p-value may be inaccurate above {}", n, SHAPIRO_MAX_RELIABLE_N);
    }

    let mut x = sample.to_vec();
    x.sort_by(f64::total_cmp);
    let mean = x.iter().sum::<f64>() / n as f64;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    if ss == 0.0 {
        warn!("Shapiro-Wilk on a constant sample; W is undefined");
        return Ok(ShapiroWilk {
            w: f64::NAN,
            p_value: f64::NAN,
        });
    }

    let std_normal = Normal::new(0.0, 1.0)
        .map_err(|_| EngineError::invalid("std_normal", 1.0, "a valid normal"))?;

    if n == 3 {
        let a = 0.5_f64.sqrt();
        let w = ((a * (x[2] - x[0])).powi(2) / ss).min(1.0);
        let p = 6.0 / PI * (w.sqrt().asin() - 0.75_f64.sqrt().asin());
        return Ok(ShapiroWilk {
            w,
            p_value: p.max(0.0),
        });
    }

    let a = coefficients(n, &std_normal);
    let numerator: f64 = a.iter().zip(&x).map(|(a, x)| a * x).sum();
    let w = (numerator.powi(2) / ss).min(1.0);

    let nf = n as f64;
    let y = (1.0 - w).ln();
    let (z_input, mu, sigma) = if n <= 11 {
        let gamma = poly(&SMALL_GAMMA, nf);
        if y >= gamma {
            return Ok(ShapiroWilk { w, p_value: 0.0 });
        }
        (
            -(gamma - y).ln(),
            poly(&SMALL_MU, nf),
            poly(&SMALL_SIGMA, nf).exp(),
        )
    } else {
        let ln_n = nf.ln();
        (y, poly(&LARGE_MU, ln_n), poly(&LARGE_SIGMA, ln_n).exp())
    };
    let p_value = 1.0 - std_normal.cdf((z_input - mu) / sigma);

    Ok(ShapiroWilk { w, p_value })
}
