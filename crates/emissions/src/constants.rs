//! Fixed model constants shared by every pathway.
//!
//! Values follow the IPCC first-order-decay landfill method and the empirical
//! brewery-residue composting factors. None of them are calibrated at run time.

// =============================================================================
// Unit conversions
// =============================================================================

/// Mass ratio converting kg of carbon to kg of methane (CH4 / C = 16 / 12).
pub const C_TO_CH4: f64 = 16.0 / 12.0;

/// Mass ratio converting kg of nitrogen to kg of nitrous oxide (N2O / N2 = 44 / 28).
pub const N_TO_N2O: f64 = 44.0 / 28.0;

/// Accounting year length. Horizons are `years * 365` days, no leap years.
pub const DAYS_PER_YEAR: u32 = 365;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1_000.0;

/// Kilograms per tonne.
pub const KG_PER_TONNE: f64 = 1_000.0;

// =============================================================================
// Global warming potentials (IPCC AR6, 20-year horizon)
// =============================================================================

pub const GWP_CH4_20: f64 = 79.7;
pub const GWP_N2O_20: f64 = 273.0;

// =============================================================================
// Landfill first-order decay
// =============================================================================

/// Slope of the temperature-dependent degradable fraction `DOCf(T) = a*T + b`.
pub const DOCF_SLOPE_PER_C: f64 = 0.0147;

/// Intercept of `DOCf(T)`.
pub const DOCF_INTERCEPT: f64 = 0.28;

/// Methane correction factor (fully anaerobic managed site).
pub const MCF: f64 = 1.0;

/// Fraction of landfill gas that is methane.
pub const METHANE_GAS_FRACTION: f64 = 0.5;

/// Fraction of generated methane recovered at the site.
pub const METHANE_RECOVERY: f64 = 0.0;

/// Fraction of methane oxidised in the cover soil.
pub const OXIDATION_FACTOR: f64 = 0.1;

/// First-order decay constant for brewery residue, per year.
pub const DECAY_CONSTANT_PER_YEAR: f64 = 0.06;

// =============================================================================
// Landfill nitrous oxide
// =============================================================================

/// Reference moisture for the N2O moisture correction `(1 - m) / (1 - 0.55)`.
pub const REFERENCE_MOISTURE: f64 = 0.55;

/// N2O emission factor for waste handled at an open working face (mg N per kg).
pub const N2O_FACTOR_OPEN_MG_N_PER_KG: f64 = 2.25;

/// N2O emission factor for covered waste (mg N per kg).
pub const N2O_FACTOR_CLOSED_MG_N_PER_KG: f64 = 2.50;

/// Milligrams per kilogram.
pub const MG_PER_KG: f64 = 1_000_000.0;

// =============================================================================
// Pre-disposal (storage before landfilling)
// =============================================================================

/// Pre-disposal methane flux in micrograms of carbon per kg of waste per hour.
pub const PRE_DISPOSAL_CH4_UG_C_PER_KG_H: f64 = 3.50;

/// Total pre-disposal N2O release in mg of nitrogen per kg of waste.
pub const PRE_DISPOSAL_N2O_MG_N_PER_KG: f64 = 25.0;

/// Number of days the pre-disposal N2O total is spread over.
pub const PRE_DISPOSAL_N2O_DAYS: f64 = 3.0;

/// Measured N2O flux at 21% O2, the reference the other regimes are scaled to.
pub const N2O_FLUX_AT_21_PCT_O2: f64 = 20.26;
pub const N2O_FLUX_AT_10_PCT_O2: f64 = 11.11;
pub const N2O_FLUX_AT_1_PCT_O2: f64 = 7.86;

/// Ambient oxygen concentration assumed when none is given, percent.
pub const AMBIENT_OXYGEN_PERCENT: f64 = 21.0;

// =============================================================================
// Composting / vermicomposting
// =============================================================================

/// Total organic carbon of brewery residue (fraction of dry matter).
pub const TOC_BREWERY: f64 = 0.45;

/// Total nitrogen of brewery residue (fraction of dry matter).
pub const TN_BREWERY: f64 = 25.0 / 1_000.0;

/// Fraction of carbon released as CH4 during composting.
pub const CH4_C_FRACTION_BREWERY: f64 = 0.20 / 100.0;

/// Fraction of nitrogen released as N2O during composting.
pub const N2O_N_FRACTION_BREWERY: f64 = 1.20 / 100.0;

/// Length of the treatment emission profiles in days.
pub const TREATMENT_DAYS: usize = 50;

/// Vermicomposting derating of the CH4 carbon fraction.
pub const VERMI_CH4_FRACTION_MULTIPLIER: f64 = 0.5;

/// Vermicomposting derating applied when CH4 is spread over the profile.
pub const VERMI_CH4_DISTRIBUTION_MULTIPLIER: f64 = 0.7;

/// Vermicomposting derating of the N2O nitrogen fraction.
pub const VERMI_N2O_FRACTION_MULTIPLIER: f64 = 0.3;

/// Vermicomposting derating applied when N2O is spread over the profile.
pub const VERMI_N2O_DISTRIBUTION_MULTIPLIER: f64 = 0.5;

// =============================================================================
// Helpers
// =============================================================================

/// Temperature-dependent fraction of DOC that decomposes, `0.0147*T + 0.28`.
pub fn docf_at(temperature_c: f64) -> f64 {
    DOCF_SLOPE_PER_C * temperature_c + DOCF_INTERCEPT
}
