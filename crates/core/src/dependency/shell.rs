//! Arbitrary shell command given as `dependency.command`.

use std::path::PathBuf;

use crate::config::Config;
use crate::dependency::DependencyDriver;
use crate::types::{MoleculeError, MoleculeResult, Options};

pub const NAME: &str = "shell";

#[derive(Debug, Default, Clone, Copy)]
pub struct Shell;

impl DependencyDriver for Shell {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        "sh"
    }

    fn default_options(&self, _config: &Config) -> Options {
        Options::new()
    }

    fn arguments(&self, config: &Config, _options: &Options) -> MoleculeResult<Vec<String>> {
        let command = config
            .dependency
            .command
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                MoleculeError::Config(
                    "The shell dependency requires 'dependency.command'".to_string(),
                )
            })?;

        Ok(vec!["-c".to_string(), command.to_string()])
    }

    fn requirements_file(&self, _config: &Config, _options: &Options) -> Option<PathBuf> {
        None
    }
}
