//! High-level scenario management interface
//!
//! [`ScenarioManager`] is the entry point the CLI uses. It locates a scenario's
//! `molecule.yml` under `<project>/molecule/<scenario>/`, resolves its
//! configuration, and runs the scenario's dependency step.
//!
//! ```rust,no_run
//! use molecule_core::config::CliArgs;
//! use molecule_core::execution::SystemCommandRunner;
//! use molecule_core::logger::ConsoleReporter;
//! use molecule_core::scenario_manager::{ScenarioManager, ScenarioManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> molecule_core::types::MoleculeResult<()> {
//! let manager = ScenarioManager::new(ScenarioManagerConfig {
//!     project_directory: PathBuf::from("."),
//!     scenario_name: "default".to_string(),
//!     args: CliArgs::default(),
//! })?;
//!
//! manager.run_dependency(&SystemCommandRunner::new(), &ConsoleReporter::new())?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::{CliArgs, Config, MOLECULE_FILE_NAME};
use crate::dependency::Dependency;
use crate::execution::CommandRunner;
use crate::logger::Reporter;
use crate::results::DependencyOutcome;
use crate::types::{MoleculeError, MoleculeResult};

pub const SCENARIOS_DIRECTORY: &str = "molecule";

/// Configuration for initializing a scenario manager
pub struct ScenarioManagerConfig {
    pub project_directory: PathBuf,
    pub scenario_name: String,
    pub args: CliArgs,
}

/// Summary of one scenario found under the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioInfo {
    pub name: String,
    pub directory: PathBuf,
    pub dependency_name: String,
    pub dependency_enabled: bool,
}

pub struct ScenarioManager {
    pub config: Config,
}

impl ScenarioManager {
    pub fn new(manager_config: ScenarioManagerConfig) -> MoleculeResult<Self> {
        let project_directory =
            fs::canonicalize(&manager_config.project_directory).map_err(|e| {
                MoleculeError::Scenario(format!(
                    "Project directory {} is not accessible: {}",
                    manager_config.project_directory.display(),
                    e
                ))
            })?;
        validate_scenario_name(&manager_config.scenario_name)?;
        let molecule_file = scenario_file(&project_directory, &manager_config.scenario_name);

        if !molecule_file.is_file() {
            return Err(MoleculeError::Scenario(format!(
                "Scenario '{}' not found: {} does not exist",
                manager_config.scenario_name,
                molecule_file.display()
            )));
        }

        let config = Config::load(&molecule_file, &project_directory, manager_config.args)?;

        Ok(Self { config })
    }

    /// Scenarios under `<project>/molecule/`, sorted by directory name
    pub fn list_scenarios(project_directory: &Path) -> MoleculeResult<Vec<ScenarioInfo>> {
        let scenarios_directory = project_directory.join(SCENARIOS_DIRECTORY);
        if !scenarios_directory.is_dir() {
            return Ok(Vec::new());
        }

        let mut directories = fs::read_dir(&scenarios_directory)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        directories.retain(|path| path.join(MOLECULE_FILE_NAME).is_file());
        directories.sort();

        directories
            .into_iter()
            .map(|directory| -> MoleculeResult<ScenarioInfo> {
                let config = Config::load(
                    &directory.join(MOLECULE_FILE_NAME),
                    project_directory,
                    CliArgs::default(),
                )?;
                Ok(ScenarioInfo {
                    name: config.scenario.name,
                    directory,
                    dependency_name: config.dependency.name,
                    dependency_enabled: config.dependency.enabled,
                })
            })
            .collect()
    }

    /// Run the scenario's dependency manager once
    pub fn run_dependency(
        &self,
        runner: &dyn CommandRunner,
        reporter: &dyn Reporter,
    ) -> MoleculeResult<DependencyOutcome> {
        reporter.info(&format!(
            "Scenario: '{}' Action: 'dependency'",
            self.config.scenario.name
        ));

        let mut dependency = Dependency::from_config(&self.config, runner, reporter)?;
        dependency.execute()
    }
}

/// Scenario names are single directory names under `<project>/molecule/`
fn validate_scenario_name(name: &str) -> MoleculeResult<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name && !name.contains(['/', '\\']) => {
            Ok(())
        }
        _ => Err(MoleculeError::Scenario(format!(
            "Invalid scenario name '{}': expected a directory name under {}/",
            name, SCENARIOS_DIRECTORY
        ))),
    }
}

fn scenario_file(project_directory: &Path, scenario_name: &str) -> PathBuf {
    project_directory
        .join(SCENARIOS_DIRECTORY)
        .join(scenario_name)
        .join(MOLECULE_FILE_NAME)
}
