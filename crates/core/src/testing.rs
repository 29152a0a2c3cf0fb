//! Test doubles and fixtures shared by unit tests.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::{CliArgs, Config, MOLECULE_FILE_NAME};
use crate::execution::{CommandRunner, Invocation};
use crate::logger::Reporter;
use crate::platform::ExecutableLookup;
use crate::types::{MoleculeError, MoleculeResult};

/// Records every invocation instead of spawning it
#[derive(Debug, Default)]
pub(crate) struct FakeRunner {
    calls: RefCell<Vec<(Invocation, bool)>>,
    exit_code: Option<i32>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every run fails with `exit_code`
    pub(crate) fn failing(exit_code: i32) -> Self {
        Self {
            calls: RefCell::default(),
            exit_code: Some(exit_code),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(Invocation, bool)> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation, debug: bool) -> MoleculeResult<()> {
        self.calls.borrow_mut().push((invocation.clone(), debug));
        match self.exit_code {
            Some(exit_code) => Err(MoleculeError::CommandFailed {
                command: invocation.to_string(),
                exit_code,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Warn,
    Success,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn messages_at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(Level::Warn, message);
    }

    fn success(&self, message: &str) {
        self.record(Level::Success, message);
    }
}

/// A project with a single `default` scenario in a temporary directory
pub(crate) struct ScenarioFixture {
    _temp_dir: TempDir,
    pub(crate) project_directory: PathBuf,
    pub(crate) scenario_directory: PathBuf,
    pub(crate) bin_directory: PathBuf,
}

impl ScenarioFixture {
    pub(crate) fn new(molecule_yml: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("tempdir should be created");
        let project_directory = temp_dir.path().join("project");
        let scenario_directory = project_directory.join("molecule").join("default");
        let bin_directory = temp_dir.path().join("bin");

        fs::create_dir_all(&scenario_directory).expect("scenario directory should be created");
        fs::create_dir_all(&bin_directory).expect("bin directory should be created");
        fs::write(scenario_directory.join(MOLECULE_FILE_NAME), molecule_yml)
            .expect("molecule.yml should be written");

        Self {
            _temp_dir: temp_dir,
            project_directory,
            scenario_directory,
            bin_directory,
        }
    }

    pub(crate) fn config(&self, args: CliArgs) -> Config {
        Config::load(
            &self.scenario_directory.join(MOLECULE_FILE_NAME),
            &self.project_directory,
            args,
        )
        .expect("fixture config should load")
    }

    pub(crate) fn write_scenario_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.scenario_directory.join(name);
        fs::write(&path, contents).expect("scenario file should be written");
        path
    }

    /// Resolves binaries only from the fixture's `bin` directory
    pub(crate) fn lookup(&self) -> ExecutableLookup {
        ExecutableLookup::search_path(&self.bin_directory)
    }

    #[cfg(unix)]
    pub(crate) fn install_executable(&self, name: &str, exit_code: i32) -> PathBuf {
        fake_executable(&self.bin_directory, name, exit_code)
    }
}

/// Write a shell script named `name` into `dir` that exits with `exit_code`
#[cfg(unix)]
pub(crate) fn fake_executable(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\nexit {}\n", exit_code))
        .expect("fake executable should be written");
    make_executable(&path);
    path
}

#[cfg(unix)]
pub(crate) fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("permissions should be set");
}
