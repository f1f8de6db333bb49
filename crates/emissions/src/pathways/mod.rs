//! Pathway emission models (landfill baseline, composting, vermicomposting).
//!
//! Every model is a pure function of the frozen [`ParameterSet`] and the
//! daily inflow: it convolves the inflow with the pathway's kernels and
//! scales by per-kg gas potentials. Output is a daily CH4/N2O mass series
//! truncated to the horizon.
//!
//! Key design points:
//! - Landfill CH4: first-order decay, k = 0.06/yr, DOCf(T) = 0.0147T + 0.28
//! - Landfill N2O: open/closed factor blend, moisture-corrected, 5-day profile
//! - Pre-disposal: same-day CH4, 3-day N2O adjusted for storage O2
//! - Treatment: 50-day normalised profiles; vermicomposting derates CH4 by
//!   0.5 then 0.7 and N2O by 0.3 then 0.5

pub mod landfill;
pub mod series;
pub mod treatment;

#[cfg(test)]
mod tests_landfill;

pub use landfill::*;
pub use series::*;
pub use treatment::*;

use crate::constants::DECAY_CONSTANT_PER_YEAR;
use crate::kernel::{self, EmissionKernel};

/// Every kernel a scenario needs, built once per horizon and shared by all
/// evaluations over that horizon.
#[derive(Clone, Debug, PartialEq)]
pub struct PathwayKernels {
    pub landfill_ch4: EmissionKernel,
    pub landfill_n2o: EmissionKernel,
    pub pre_disposal_n2o: EmissionKernel,
    pub treatment_ch4: EmissionKernel,
    pub treatment_n2o: EmissionKernel,
}

impl PathwayKernels {
    pub fn new(horizon_days: usize) -> Self {
        Self {
            landfill_ch4: kernel::landfill_methane_kernel(DECAY_CONSTANT_PER_YEAR, horizon_days),
            landfill_n2o: kernel::landfill_n2o_kernel(),
            pre_disposal_n2o: kernel::pre_disposal_n2o_kernel(),
            treatment_ch4: kernel::treatment_methane_kernel(),
            treatment_n2o: kernel::treatment_n2o_kernel(),
        }
    }

    /// Number of days the landfill kernel covers.
    pub fn horizon_days(&self) -> usize {
        self.landfill_ch4.len()
    }
}
