//! Executable resolution for external dependency managers

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::types::{MoleculeError, MoleculeResult};

/// Where to look for an external tool's binary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExecutableLookup {
    /// Search the process `PATH`, like a shell would
    #[default]
    System,
    /// Search an explicit `PATH`-style list of directories
    SearchPath(OsString),
}

impl ExecutableLookup {
    pub fn search_path(paths: impl Into<OsString>) -> Self {
        Self::SearchPath(paths.into())
    }

    /// Resolve `name` to an absolute path of an executable file
    pub fn resolve(&self, name: &str) -> MoleculeResult<PathBuf> {
        let result = match self {
            ExecutableLookup::System => which::which(name),
            ExecutableLookup::SearchPath(paths) => {
                which::which_in(name, Some(paths), Path::new("."))
            }
        };

        result.map_err(|source| MoleculeError::ExecutableNotFound {
            name: name.to_string(),
            source,
        })
    }
}
