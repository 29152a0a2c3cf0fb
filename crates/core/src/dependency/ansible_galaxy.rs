//! `ansible-galaxy install` driven by a scenario's `requirements.yml`.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;
use crate::dependency::DependencyDriver;
use crate::execution::render_flags;
use crate::types::{MoleculeError, MoleculeResult, Options};

pub const NAME: &str = "galaxy";
pub const EXECUTABLE: &str = "ansible-galaxy";
pub const REQUIREMENTS_FILE_NAME: &str = "requirements.yml";

const ROLE_FILE_OPTION: &str = "role-file";
const ROLES_PATH_OPTION: &str = "roles-path";

#[derive(Debug, Default, Clone, Copy)]
pub struct AnsibleGalaxy;

impl AnsibleGalaxy {
    /// `<scenario dir>/requirements.yml`
    pub fn default_role_file(config: &Config) -> PathBuf {
        config.scenario.directory.join(REQUIREMENTS_FILE_NAME)
    }

    /// `<ephemeral dir>/roles`
    pub fn roles_path(config: &Config) -> PathBuf {
        config.scenario.ephemeral_directory.join("roles")
    }
}

impl DependencyDriver for AnsibleGalaxy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        EXECUTABLE
    }

    fn default_options(&self, config: &Config) -> Options {
        let mut options = Options::new();
        options.insert("force".to_string(), Value::Bool(true));
        options.insert(
            ROLE_FILE_OPTION.to_string(),
            Value::String(Self::default_role_file(config).display().to_string()),
        );
        options.insert(
            ROLES_PATH_OPTION.to_string(),
            Value::String(Self::roles_path(config).display().to_string()),
        );
        options
    }

    fn debug_options(&self) -> Options {
        let mut options = Options::new();
        options.insert("verbose".to_string(), Value::Bool(true));
        options
    }

    fn arguments(&self, _config: &Config, options: &Options) -> MoleculeResult<Vec<String>> {
        let mut args = vec!["install".to_string()];
        args.extend(render_flags(options));
        Ok(args)
    }

    fn requirements_file(&self, config: &Config, options: &Options) -> Option<PathBuf> {
        let path = option_path(options, ROLE_FILE_OPTION)
            .unwrap_or_else(|| Self::default_role_file(config));
        Some(path)
    }

    fn prepare(&self, config: &Config, options: &Options) -> MoleculeResult<()> {
        let roles_path =
            option_path(options, ROLES_PATH_OPTION).unwrap_or_else(|| Self::roles_path(config));

        fs::create_dir_all(&roles_path).map_err(|e| {
            MoleculeError::Config(format!(
                "Failed to create roles path {}: {}",
                roles_path.display(),
                e
            ))
        })
    }
}

fn option_path(options: &Options, key: &str) -> Option<PathBuf> {
    options.get(key).and_then(Value::as_str).map(PathBuf::from)
}
