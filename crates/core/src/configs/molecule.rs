use serde::{Deserialize, Serialize};

use crate::configs::dependency::DependencyConfig;
use crate::types::MoleculeResult;

pub const DEFAULT_DRIVER_NAME: &str = "docker";

/// The parts of `molecule.yml` the orchestrator reads.
///
/// Other top-level sections (`platforms`, `provisioner`, `verifier`, ...) are
/// accepted and ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct MoleculeFileConfig {
    #[serde(default)]
    pub dependency: DependencyConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DriverConfig {
    #[serde(default = "default_driver_name")]
    pub name: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: default_driver_name(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    /// Falls back to the scenario directory name when absent.
    pub name: Option<String>,
}

fn default_driver_name() -> String {
    DEFAULT_DRIVER_NAME.to_string()
}

pub fn parse_molecule_config(yaml_str: &str) -> MoleculeResult<MoleculeFileConfig> {
    if yaml_str.trim().is_empty() {
        return Ok(MoleculeFileConfig::default());
    }
    let config: MoleculeFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}
