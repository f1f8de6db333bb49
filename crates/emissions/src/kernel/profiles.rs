//! Empirical day-profiles, as published (before normalisation).

use crate::constants::TREATMENT_DAYS;

/// Landfill N2O release after deposit, days 1-5. Sums to exactly 1.
pub const LANDFILL_N2O_PROFILE: [f64; 5] = [0.10, 0.30, 0.40, 0.15, 0.05];

/// Pre-disposal N2O release, days 1-3. Sums to exactly 1.
pub const PRE_DISPOSAL_N2O_PROFILE: [f64; 3] = [0.8623, 0.10, 0.0377];

/// CH4 release during composting of brewery residue, days 1-50.
/// Early peak around day 9 reflects the fast decomposition of spent grain.
#[rustfmt::skip]
pub const TREATMENT_CH4_PROFILE: [f64; TREATMENT_DAYS] = [
    0.03, 0.04, 0.05, 0.07, 0.09,
    0.12, 0.15, 0.18, 0.20, 0.18,
    0.15, 0.12, 0.10, 0.08, 0.06,
    0.05, 0.04, 0.03, 0.02, 0.02,
    0.01, 0.01, 0.01, 0.005, 0.005,
    0.005, 0.005, 0.005, 0.005, 0.005,
    0.002, 0.002, 0.002, 0.002, 0.002,
    0.001, 0.001, 0.001, 0.001, 0.001,
    0.001, 0.001, 0.001, 0.001, 0.001,
    0.001, 0.001, 0.001, 0.001, 0.001,
];

/// N2O release during composting, days 1-50. Two peaks: an early one at
/// day 3 and the main nitrification peak around day 12.
#[rustfmt::skip]
pub const TREATMENT_N2O_PROFILE: [f64; TREATMENT_DAYS] = [
    0.12, 0.15, 0.20, 0.08, 0.05,
    0.06, 0.08, 0.10, 0.12, 0.15,
    0.18, 0.20, 0.18, 0.15, 0.12,
    0.10, 0.08, 0.06, 0.05, 0.04,
    0.03, 0.02, 0.01, 0.01, 0.01,
    0.005, 0.005, 0.005, 0.005, 0.005,
    0.002, 0.002, 0.002, 0.002, 0.002,
    0.001, 0.001, 0.001, 0.001, 0.001,
    0.001, 0.001, 0.001, 0.001, 0.001,
    0.001, 0.001, 0.001, 0.001, 0.001,
];
