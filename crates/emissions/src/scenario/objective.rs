use bevy::log::debug;

use crate::error::EngineError;
use crate::gwp::total_tco2eq;
use crate::kernel::DailyInflow;
use crate::params::{FactorTriple, ParameterSet};
use crate::pathways::{
    landfill_emissions_for_inflow, treatment_emissions_for_inflow, PathwayKernels,
    TreatmentPathway,
};

/// Avoided tCO2eq as a function of (moisture, T, DOC), everything else frozen.
///
/// Kernels and inflow are built once; each evaluation only swaps the three
/// factors into the base set. Shared read-only across worker tasks.
#[derive(Clone, Debug)]
pub struct AvoidedEmissionsObjective {
    base: ParameterSet,
    kernels: PathwayKernels,
    inflow: DailyInflow,
}

impl AvoidedEmissionsObjective {
    pub fn new(base: ParameterSet) -> Result<Self, EngineError> {
        base.validate()?;
        debug!("Built objective kernels for {} days", base.days());
        Ok(Self {
            kernels: PathwayKernels::new(base.days()),
            inflow: DailyInflow::constant(base.waste_kg_per_day, base.days()),
            base,
        })
    }

    pub fn base(&self) -> &ParameterSet {
        &self.base
    }

    fn landfill_total(&self, params: &ParameterSet) -> f64 {
        total_tco2eq(&landfill_emissions_for_inflow(
            params,
            params.docf(),
            &self.inflow,
            &self.kernels,
        ))
    }

    fn treatment_total(&self, params: &ParameterSet, pathway: TreatmentPathway) -> f64 {
        total_tco2eq(&treatment_emissions_for_inflow(
            params,
            pathway,
            &self.inflow,
            &self.kernels,
        ))
    }

    /// Avoided tCO2eq of `pathway` at `factors`.
    pub fn evaluate(&self, factors: FactorTriple, pathway: TreatmentPathway) -> f64 {
        let params = self.base.with_factors(factors);
        self.landfill_total(&params) - self.treatment_total(&params, pathway)
    }

    /// Avoided tCO2eq of every pathway, in [`TreatmentPathway::ALL`] order,
    /// sharing one landfill evaluation.
    pub fn evaluate_all(&self, factors: FactorTriple) -> [f64; 2] {
        let params = self.base.with_factors(factors);
        let landfill = self.landfill_total(&params);
        TreatmentPathway::ALL.map(|pathway| landfill - self.treatment_total(&params, pathway))
    }
}
