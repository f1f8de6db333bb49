//! Paired location tests: Student's t and Wilcoxon signed-rank.

use bevy::log::warn;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::error::EngineError;
use crate::stats::{mean, sample_std};

/// Largest untied sample for which the exact signed-rank distribution is used.
pub const WILCOXON_EXACT_MAX_N: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairedTTest {
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-sided.
    pub p_value: f64,
}

/// Paired t-test on the differences `d_i = x_i - y_i`.
///
/// Identical non-zero differences give an infinite statistic and p = 0; all
/// zero differences give NaN.
pub fn paired_t_test(differences: &[f64]) -> Result<PairedTTest, EngineError> {
    let n = differences.len();
    if n < 2 {
        return Err(EngineError::InsufficientSamples {
            needed: 2,
            found: n,
        });
    }
    let mean_d = mean(differences);
    let sd = sample_std(differences);
    let df = (n - 1) as f64;
    let statistic = mean_d / (sd / (n as f64).sqrt());

    let p_value = if statistic.is_nan() {
        warn!("Paired differences are all zero; t statistic undefined");
        f64::NAN
    } else if statistic.is_infinite() {
        warn!("Paired differences have zero variance; t statistic is infinite");
        0.0
    } else {
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|_| EngineError::invalid("degrees_of_freedom", df, "a value > 0"))?;
        2.0 * (1.0 - dist.cdf(statistic.abs()))
    };

    Ok(PairedTTest {
        statistic,
        degrees_of_freedom: df,
        p_value,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WilcoxonMethod {
    Exact,
    NormalApproximation,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WilcoxonSignedRank {
    /// `min(W+, W-)`.
    pub statistic: f64,
    /// Two-sided.
    pub p_value: f64,
    /// Pairs left after dropping zero differences.
    pub n_used: usize,
    pub method: WilcoxonMethod,
}

/// Average ranks (1-based) of `values`, ties sharing the mean rank.
/// Also returns the size of every tie group.
fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let mut ranks = vec![0.0; values.len()];
    let mut ties = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &i in &order[start..=end] {
            ranks[i] = rank;
        }
        ties.push(end - start + 1);
        start = end + 1;
    }
    (ranks, ties)
}

/// Two-sided exact p-value: `2 P(W <= statistic)` under the null.
fn exact_p_value(n: usize, statistic: f64) -> f64 {
    let max_sum = n * (n + 1) / 2;
    // counts[s] = number of subsets of {1..n} whose ranks sum to s
    let mut counts = vec![0.0_f64; max_sum + 1];
    counts[0] = 1.0;
    for k in 1..=n {
        for s in (k..=max_sum).rev() {
            counts[s] += counts[s - k];
        }
    }
    let upto = (statistic.floor() as usize).min(max_sum);
    let tail: f64 = counts[..=upto].iter().sum();
    (2.0 * tail / 2f64.powi(n as i32)).min(1.0)
}

/// Wilcoxon signed-rank test on the differences `d_i = x_i - y_i`.
///
/// Zero differences are dropped. Uses the exact null distribution for up to
/// [`WILCOXON_EXACT_MAX_N`] untied pairs, the tie-corrected normal
/// approximation (no continuity correction) otherwise.
pub fn wilcoxon_signed_rank(differences: &[f64]) -> Result<WilcoxonSignedRank, EngineError> {
    let nonzero: Vec<f64> = differences.iter().copied().filter(|d| *d != 0.0).collect();
    let n = nonzero.len();
    if n == 0 {
        warn!("Paired differences are all zero; Wilcoxon statistic undefined");
        return Ok(WilcoxonSignedRank {
            statistic: f64::NAN,
            p_value: f64::NAN,
            n_used: 0,
            method: WilcoxonMethod::NormalApproximation,
        });
    }

    let magnitudes: Vec<f64> = nonzero.iter().map(|d| d.abs()).collect();
    let (ranks, ties) = average_ranks(&magnitudes);
    let w_plus: f64 = ranks.iter().zip(&nonzero).filter(|(_, d)| **d > 0.0).map(|(r, _)| r).sum();
    let w_minus: f64 = ranks.iter().zip(&nonzero).filter(|(_, d)| **d < 0.0).map(|(r, _)| r).sum();
    let statistic = w_plus.min(w_minus);
    let has_ties = ties.iter().any(|&t| t > 1);

    if n <= WILCOXON_EXACT_MAX_N && !has_ties {
        return Ok(WilcoxonSignedRank {
            statistic,
            p_value: exact_p_value(n, statistic),
            n_used: n,
            method: WilcoxonMethod::Exact,
        });
    }

    let nf = n as f64;
    let expected = nf * (nf + 1.0) / 4.0;
    let tie_term: f64 = ties.iter().map(|&t| (t as f64).powi(3) - t as f64).sum::<f64>() / 48.0;
    let variance = nf * (nf + 1.0) * (2.0 * nf + 1.0) / 24.0 - tie_term;
    let z = (statistic - expected) / variance.sqrt();
    let std_normal = Normal::new(0.0, 1.0)
        .map_err(|_| EngineError::invalid("std_normal", 1.0, "a valid normal"))?;
    let p_value = (2.0 * std_normal.cdf(-z.abs())).min(1.0);

    Ok(WilcoxonSignedRank {
        statistic,
        p_value,
        n_used: n,
        method: WilcoxonMethod::NormalApproximation,
    })
}
