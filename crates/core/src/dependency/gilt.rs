//! [gilt](https://github.com/metacloud/gilt) overlays repositories described in
//! a scenario-local `gilt.yml`.

use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;
use crate::dependency::DependencyDriver;
use crate::execution::{render_flag, render_flags};
use crate::types::{MoleculeResult, Options};

pub const NAME: &str = "gilt";
pub const CONFIG_FILE_NAME: &str = "gilt.yml";

const CONFIG_OPTION: &str = "config";
const SUBCOMMAND: &str = "overlay";

#[derive(Debug, Default, Clone, Copy)]
pub struct Gilt;

impl Gilt {
    /// `<scenario dir>/gilt.yml`
    pub fn config_file(config: &Config) -> PathBuf {
        config.scenario.directory.join(CONFIG_FILE_NAME)
    }
}

impl DependencyDriver for Gilt {
    fn name(&self) -> &'static str {
        NAME
    }

    fn executable(&self) -> &'static str {
        NAME
    }

    fn default_options(&self, config: &Config) -> Options {
        let mut options = Options::new();
        options.insert(
            CONFIG_OPTION.to_string(),
            Value::String(Self::config_file(config).display().to_string()),
        );
        options
    }

    fn debug_options(&self) -> Options {
        let mut options = Options::new();
        options.insert("debug".to_string(), Value::Bool(true));
        options
    }

    // `--config` always goes last, right before the subcommand.
    fn arguments(&self, config: &Config, options: &Options) -> MoleculeResult<Vec<String>> {
        let mut flags = options.clone();
        let config_file = match flags.remove(CONFIG_OPTION) {
            Some(value @ (Value::String(_) | Value::Number(_))) => value,
            _ => Value::String(Self::config_file(config).display().to_string()),
        };

        let mut args = render_flags(&flags);
        args.extend(render_flag(CONFIG_OPTION, &config_file));
        args.push(SUBCOMMAND.to_string());
        Ok(args)
    }

    fn requirements_file(&self, config: &Config, _options: &Options) -> Option<PathBuf> {
        Some(Self::config_file(config))
    }
}
