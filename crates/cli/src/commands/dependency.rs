use std::path::PathBuf;

use anyhow::{Context, Result};
use molecule_core::config::CliArgs;
use molecule_core::execution::SystemCommandRunner;
use molecule_core::logger::ConsoleReporter;
use molecule_core::{ScenarioManager, ScenarioManagerConfig};

pub fn execute(project_directory: PathBuf, scenario_name: String, debug: bool) -> Result<()> {
    let manager = ScenarioManager::new(ScenarioManagerConfig {
        project_directory,
        scenario_name,
        args: CliArgs { debug },
    })
    .context("Failed to load scenario")?;

    manager.run_dependency(&SystemCommandRunner::new(), &ConsoleReporter::new())?;

    Ok(())
}
