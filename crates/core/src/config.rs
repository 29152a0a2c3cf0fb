//! Resolved runtime configuration
//!
//! [`Config`] combines a parsed `molecule.yml` with the location it was loaded
//! from and the command-line arguments, and derives the scenario paths and the
//! reserved `MOLECULE_*` environment that every dependency manager receives.

use std::fs;
use std::path::{Path, PathBuf};

use crate::configs::{parse_molecule_config, DependencyConfig, MoleculeFileConfig};
use crate::types::{Env, MoleculeError, MoleculeResult};

pub const MOLECULE_FILE_NAME: &str = "molecule.yml";

/// Command-line arguments that influence scenario behavior
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub debug: bool,
}

/// Directory-scoped paths belonging to one scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub directory: PathBuf,
    pub ephemeral_directory: PathBuf,
}

impl Scenario {
    pub fn inventory_file(&self) -> PathBuf {
        self.ephemeral_directory.join("ansible_inventory.yml")
    }

    pub fn instance_config(&self) -> PathBuf {
        self.ephemeral_directory.join("instance_config.yml")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub project_directory: PathBuf,
    pub molecule_file: PathBuf,
    pub args: CliArgs,
    pub scenario: Scenario,
    pub dependency: DependencyConfig,
    pub driver_name: String,
}

impl Config {
    /// Read and resolve the `molecule.yml` at `molecule_file`
    pub fn load(
        molecule_file: &Path,
        project_directory: &Path,
        args: CliArgs,
    ) -> MoleculeResult<Self> {
        let content = fs::read_to_string(molecule_file).map_err(|e| {
            MoleculeError::Config(format!(
                "Failed to read {}: {}",
                molecule_file.display(),
                e
            ))
        })?;

        let file_config = parse_molecule_config(&content).map_err(|e| {
            MoleculeError::Config(format!(
                "Failed to parse {}: {}",
                molecule_file.display(),
                e
            ))
        })?;

        Ok(Self::from_file_config(
            file_config,
            molecule_file,
            project_directory,
            args,
        ))
    }

    pub fn from_file_config(
        file_config: MoleculeFileConfig,
        molecule_file: &Path,
        project_directory: &Path,
        args: CliArgs,
    ) -> Self {
        let directory = molecule_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let name = file_config.scenario.name.clone().unwrap_or_else(|| {
            directory
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("default")
                .to_string()
        });

        let ephemeral_directory = ephemeral_directory(project_directory, &name);

        tracing::debug!(
            scenario = %name,
            directory = %directory.display(),
            ephemeral = %ephemeral_directory.display(),
            "resolved scenario"
        );

        Self {
            project_directory: project_directory.to_path_buf(),
            molecule_file: molecule_file.to_path_buf(),
            args,
            scenario: Scenario {
                name,
                directory,
                ephemeral_directory,
            },
            dependency: file_config.dependency,
            driver_name: file_config.driver.name,
        }
    }

    pub fn debug(&self) -> bool {
        self.args.debug
    }

    /// The reserved environment exported to every external tool
    pub fn env(&self) -> Env {
        let entries = [
            ("MOLECULE_DEBUG", self.debug().to_string()),
            ("MOLECULE_FILE", display(&self.molecule_file)),
            ("MOLECULE_INVENTORY_FILE", display(&self.scenario.inventory_file())),
            (
                "MOLECULE_EPHEMERAL_DIRECTORY",
                display(&self.scenario.ephemeral_directory),
            ),
            ("MOLECULE_SCENARIO_DIRECTORY", display(&self.scenario.directory)),
            ("MOLECULE_PROJECT_DIRECTORY", display(&self.project_directory)),
            ("MOLECULE_INSTANCE_CONFIG", display(&self.scenario.instance_config())),
            ("MOLECULE_DEPENDENCY_NAME", self.dependency.name.clone()),
            ("MOLECULE_DRIVER_NAME", self.driver_name.clone()),
            ("MOLECULE_SCENARIO_NAME", self.scenario.name.clone()),
        ];

        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// `<tmp>/molecule/<project dir name>/<scenario name>`
fn ephemeral_directory(project_directory: &Path, scenario_name: &str) -> PathBuf {
    let project_name = project_directory
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project");

    std::env::temp_dir()
        .join("molecule")
        .join(project_name)
        .join(scenario_name)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scenario_paths_derive_from_molecule_file() {
        let config = Config::from_file_config(
            MoleculeFileConfig::default(),
            Path::new("/work/project/molecule/default/molecule.yml"),
            Path::new("/work/project"),
            CliArgs::default(),
        );

        assert_eq!(config.scenario.name, "default");
        assert_eq!(
            config.scenario.directory,
            PathBuf::from("/work/project/molecule/default")
        );
        assert!(config
            .scenario
            .ephemeral_directory
            .ends_with("molecule/project/default"));
        assert!(config
            .scenario
            .inventory_file()
            .ends_with("default/ansible_inventory.yml"));
        assert!(config
            .scenario
            .instance_config()
            .ends_with("default/instance_config.yml"));
    }

    #[test]
    fn explicit_scenario_name_wins_over_directory() {
        let mut file_config = MoleculeFileConfig::default();
        file_config.scenario.name = Some("upgrade".to_string());

        let config = Config::from_file_config(
            file_config,
            Path::new("/work/project/molecule/default/molecule.yml"),
            Path::new("/work/project"),
            CliArgs::default(),
        );

        assert_eq!(config.scenario.name, "upgrade");
        assert!(config.scenario.ephemeral_directory.ends_with("project/upgrade"));
    }

    #[test]
    fn env_contains_reserved_keys() {
        let config = Config::from_file_config(
            MoleculeFileConfig::default(),
            Path::new("/work/project/molecule/default/molecule.yml"),
            Path::new("/work/project"),
            CliArgs { debug: true },
        );
        let env = config.env();

        for key in [
            "MOLECULE_FILE",
            "MOLECULE_INVENTORY_FILE",
            "MOLECULE_SCENARIO_DIRECTORY",
            "MOLECULE_INSTANCE_CONFIG",
        ] {
            assert!(env.contains_key(key), "missing {key}");
        }
        assert_eq!(env["MOLECULE_DEBUG"], "true");
        assert_eq!(env["MOLECULE_DEPENDENCY_NAME"], "galaxy");
        assert_eq!(env["MOLECULE_DRIVER_NAME"], "docker");
        assert_eq!(
            env["MOLECULE_FILE"],
            "/work/project/molecule/default/molecule.yml"
        );
    }

    #[test]
    fn load_reads_and_parses_file() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let scenario_dir = temp_dir.path().join("molecule").join("default");
        fs::create_dir_all(&scenario_dir).unwrap();
        let molecule_file = scenario_dir.join(MOLECULE_FILE_NAME);
        fs::write(&molecule_file, "dependency:\n  name: gilt\n").unwrap();

        let config = Config::load(&molecule_file, temp_dir.path(), CliArgs::default()).unwrap();

        assert_eq!(config.dependency.name, "gilt");
        assert_eq!(config.scenario.directory, scenario_dir);
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = tempdir().expect("tempdir should be created");
        let missing = temp_dir.path().join(MOLECULE_FILE_NAME);

        let err = Config::load(&missing, temp_dir.path(), CliArgs::default()).unwrap_err();
        assert!(matches!(err, MoleculeError::Config(msg) if msg.contains("Failed to read")));
    }
}
