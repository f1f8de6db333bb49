//! Avoided-emissions engine for diverting brewery residue from landfill to
//! composting or vermicomposting.
//!
//! Pure numeric core (kernels, pathway models, GWP aggregation, scenario
//! comparison) with sensitivity, uncertainty and paired-comparison layers on
//! top, and a Bevy plugin for running it from an `App`.

pub mod comparison;
pub mod config;
pub mod constants;
pub mod error;
pub mod gwp;
pub mod kernel;
pub mod parallel;
pub mod params;
pub mod pathways;
pub mod plugin;
pub mod pricing;
pub mod report;
pub mod scenario;
pub mod sensitivity;
pub mod stats;
pub mod uncertainty;

pub use config::SimulationConfig;
pub use error::EngineError;
pub use params::{BreweryProfile, Factor, FactorTriple, ParameterSet};
pub use pathways::TreatmentPathway;
pub use plugin::{EmissionsPlugin, ScenarioOutcome, ScenarioRequest};
pub use pricing::{Pricing, PricingOracle, ReferencePricing};
pub use report::{run_analysis, run_simulation, RunRequest, SimulationReport};
