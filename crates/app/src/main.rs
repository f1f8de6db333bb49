//! `brewcarbon [REQUEST.json | -]`
//!
//! Runs one avoided-emissions simulation headlessly and prints the report as
//! JSON on stdout. Logs go to stderr.

mod request;

use std::io::Write;
use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use emissions::{EmissionsPlugin, ScenarioOutcome, ScenarioRequest};

fn main() -> ExitCode {
    let source = std::env::args().nth(1);
    let run_request = match request::load(source.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(EmissionsPlugin)
        .insert_resource(ScenarioRequest(run_request));

    // One update runs the change-triggered simulation system.
    app.update();

    let outcome = app.world().resource::<ScenarioOutcome>();
    let report = match &outcome.0 {
        Some(Ok(report)) => report,
        Some(Err(e)) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        None => {
            eprintln!("Simulation did not run");
            return ExitCode::FAILURE;
        }
    };

    let json = match serde_json::to_string_pretty(report) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "{json}").and_then(|_| stdout.flush()).is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
