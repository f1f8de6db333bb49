//! Bevy integration: an explicit request resource in, an outcome resource out.

use bevy::log::{info, warn};
use bevy::prelude::*;

use crate::error::EngineError;
use crate::report::{RunRequest, SimulationReport};

/// Input for the next run. Inserting or changing it triggers a simulation.
#[derive(Resource, Clone, Debug, Default)]
pub struct ScenarioRequest(pub RunRequest);

/// Result of the most recent run, `None` until one has completed.
#[derive(Resource, Clone, Debug, Default)]
pub struct ScenarioOutcome(pub Option<Result<SimulationReport, EngineError>>);

impl ScenarioOutcome {
    pub fn report(&self) -> Option<&SimulationReport> {
        self.0.as_ref().and_then(|r| r.as_ref().ok())
    }

    pub fn error(&self) -> Option<&EngineError> {
        self.0.as_ref().and_then(|r| r.as_ref().err())
    }
}

fn run_requested_scenario(request: Res<ScenarioRequest>, mut outcome: ResMut<ScenarioOutcome>) {
    info!("Running emissions scenario");
    let result = request.0.run();
    if let Err(err) = &result {
        warn!("Emissions scenario failed: {}", err);
    }
    outcome.0 = Some(result);
}

pub struct EmissionsPlugin;

impl Plugin for EmissionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScenarioOutcome>().add_systems(
            Update,
            run_requested_scenario.run_if(resource_exists_and_changed::<ScenarioRequest>),
        );
    }
}
