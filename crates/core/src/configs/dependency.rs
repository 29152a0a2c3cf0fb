use serde::{Deserialize, Serialize};

use crate::types::{Env, Options};

pub const DEFAULT_DEPENDENCY_NAME: &str = "galaxy";

/// The `dependency` section of `molecule.yml`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DependencyConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub options: Options,
    #[serde(default)]
    pub env: Env,
    /// Command line for the `shell` dependency manager.
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            enabled: default_enabled(),
            options: Options::new(),
            env: Env::new(),
            command: None,
        }
    }
}

fn default_name() -> String {
    DEFAULT_DEPENDENCY_NAME.to_string()
}

fn default_enabled() -> bool {
    true
}
