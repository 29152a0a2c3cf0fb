//! Dependency manager adapters
//!
//! A scenario's `dependency` section names an external tool that fetches the
//! roles and collections the scenario needs before it runs. [`Dependency`]
//! turns that section into a single command line and runs it; the tool-specific
//! parts (binary, defaults, argument layout, requirements file) come from a
//! [`DependencyDriver`].
//!
//! Option precedence, lowest to highest:
//!
//! 1. the driver's [`DependencyDriver::default_options`]
//! 2. `dependency.options` from `molecule.yml`
//! 3. the driver's [`DependencyDriver::debug_options`], when `--debug` is set
//!
//! Environment precedence is the driver's default environment (the reserved
//! `MOLECULE_*` keys) overlaid with `dependency.env`.

pub mod ansible_galaxy;
pub mod gilt;
pub mod shell;

use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;
use crate::execution::{CommandRunner, Invocation};
use crate::logger::Reporter;
use crate::platform::ExecutableLookup;
use crate::results::{DependencyOutcome, SkipReason};
use crate::types::{Env, MoleculeError, MoleculeResult, Options};

pub use ansible_galaxy::AnsibleGalaxy;
pub use gilt::Gilt;
pub use shell::Shell;

pub const COMPLETED_MESSAGE: &str = "Dependency completed successfully.";

/// Tool-specific half of a dependency adapter
pub trait DependencyDriver {
    /// Identifier used in `dependency.name`
    fn name(&self) -> &'static str;

    /// Binary looked up on `PATH` when baking
    fn executable(&self) -> &'static str;

    fn default_options(&self, config: &Config) -> Options;

    /// Options added on top of everything else when running with `--debug`
    fn debug_options(&self) -> Options {
        Options::new()
    }

    fn default_env(&self, config: &Config) -> Env {
        config.env()
    }

    /// Arguments following the binary, built from the merged options
    fn arguments(&self, config: &Config, options: &Options) -> MoleculeResult<Vec<String>>;

    /// File whose presence gates execution; `None` means nothing is required
    fn requirements_file(&self, config: &Config, options: &Options) -> Option<PathBuf>;

    /// Hook run right before the command is executed
    fn prepare(&self, _config: &Config, _options: &Options) -> MoleculeResult<()> {
        Ok(())
    }
}

/// Look up the driver registered under `name`
pub fn driver_for(name: &str) -> MoleculeResult<Box<dyn DependencyDriver>> {
    match name {
        gilt::NAME => Ok(Box::new(Gilt)),
        ansible_galaxy::NAME => Ok(Box::new(AnsibleGalaxy)),
        shell::NAME => Ok(Box::new(Shell)),
        other => Err(MoleculeError::UnknownDependency(other.to_string())),
    }
}

/// Right-biased recursive merge: keys in `overlay` win, nested maps are merged
pub fn merge_options(base: &Options, overlay: &Options) -> Options {
    let mut merged = base.clone();
    for (key, value) in overlay {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                *existing = merge_options(existing, incoming);
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Right-biased environment merge
pub fn merge_env(base: &Env, overlay: &Env) -> Env {
    let mut merged = base.clone();
    merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// A dependency adapter bound to one scenario configuration
pub struct Dependency<'a> {
    config: &'a Config,
    driver: Box<dyn DependencyDriver>,
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    lookup: ExecutableLookup,
    invocation: Option<Invocation>,
}

impl<'a> Dependency<'a> {
    pub fn new(
        config: &'a Config,
        driver: Box<dyn DependencyDriver>,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            driver,
            runner,
            reporter,
            lookup: ExecutableLookup::System,
            invocation: None,
        }
    }

    /// Build the adapter named by `dependency.name`
    pub fn from_config(
        config: &'a Config,
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
    ) -> MoleculeResult<Self> {
        let driver = driver_for(&config.dependency.name)?;
        Ok(Self::new(config, driver, runner, reporter))
    }

    /// Resolve binaries somewhere other than the process `PATH`
    pub fn with_lookup(mut self, lookup: ExecutableLookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn name(&self) -> &'static str {
        self.driver.name()
    }

    pub fn enabled(&self) -> bool {
        self.config.dependency.enabled
    }

    pub fn default_options(&self) -> Options {
        self.driver.default_options(self.config)
    }

    pub fn options(&self) -> Options {
        let options = merge_options(&self.default_options(), &self.config.dependency.options);
        if self.config.debug() {
            merge_options(&options, &self.driver.debug_options())
        } else {
            options
        }
    }

    pub fn default_env(&self) -> Env {
        self.driver.default_env(self.config)
    }

    pub fn env(&self) -> Env {
        merge_env(&self.default_env(), &self.config.dependency.env)
    }

    /// The most recently baked invocation, if any
    pub fn invocation(&self) -> Option<&Invocation> {
        self.invocation.as_ref()
    }

    /// Resolve the binary and build the command line, replacing any previous one
    pub fn bake(&mut self) -> MoleculeResult<&Invocation> {
        let options = self.options();
        let program = self.lookup.resolve(self.driver.executable())?;
        let args = self.driver.arguments(self.config, &options)?;
        let invocation = Invocation::new(program, args, self.env());

        tracing::debug!(
            dependency = self.name(),
            command = %invocation,
            "baked dependency command"
        );

        Ok(self.invocation.insert(invocation))
    }

    pub fn has_requirements_file(&self) -> bool {
        match self.driver.requirements_file(self.config, &self.options()) {
            Some(path) => path.is_file(),
            None => true,
        }
    }

    /// Run the dependency manager once.
    ///
    /// Disabled dependencies and missing requirements files are reported as
    /// warnings and skipped. A failing command is returned as
    /// [`MoleculeError::CommandFailed`] with the child's exit code.
    pub fn execute(&mut self) -> MoleculeResult<DependencyOutcome> {
        if !self.enabled() {
            return Ok(self.skip(SkipReason::Disabled));
        }

        if !self.has_requirements_file() {
            return Ok(self.skip(SkipReason::MissingRequirements));
        }

        let invocation = match &self.invocation {
            Some(invocation) => invocation.clone(),
            None => self.bake()?.clone(),
        };

        self.driver.prepare(self.config, &self.options())?;
        self.runner.run(&invocation, self.config.debug())?;

        self.reporter.success(COMPLETED_MESSAGE);
        Ok(DependencyOutcome::Completed)
    }

    fn skip(&self, reason: SkipReason) -> DependencyOutcome {
        tracing::debug!(dependency = self.name(), ?reason, "skipping dependency");
        self.reporter.warn(reason.message());
        DependencyOutcome::Skipped(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            _ => Options::new(),
        }
    }

    #[test]
    fn merge_is_right_biased() {
        let merged = merge_options(
            &options(json!({"config": "a.yml", "keep": 1})),
            &options(json!({"config": "b.yml", "foo": "bar"})),
        );
        assert_eq!(
            Value::Object(merged),
            json!({"config": "b.yml", "keep": 1, "foo": "bar"})
        );
    }

    #[test]
    fn merge_recurses_into_nested_maps() {
        let merged = merge_options(
            &options(json!({"extra": {"a": 1, "b": 2}})),
            &options(json!({"extra": {"b": 3}})),
        );
        assert_eq!(Value::Object(merged), json!({"extra": {"a": 1, "b": 3}}));
    }

    #[test]
    fn env_overrides_win() {
        let base: Env = [("A".to_string(), "1".to_string())].into();
        let overlay: Env = [
            ("A".to_string(), "2".to_string()),
            ("B".to_string(), "3".to_string()),
        ]
        .into();
        let merged = merge_env(&base, &overlay);
        assert_eq!(merged["A"], "2");
        assert_eq!(merged["B"], "3");
    }

    #[test]
    fn driver_lookup_by_name() {
        assert_eq!(driver_for("gilt").unwrap().name(), "gilt");
        assert_eq!(driver_for("galaxy").unwrap().name(), "galaxy");
        assert_eq!(driver_for("shell").unwrap().name(), "shell");
        assert!(matches!(
            driver_for("pip"),
            Err(MoleculeError::UnknownDependency(name)) if name == "pip"
        ));
    }
}
