use std::collections::BTreeMap;

use thiserror::Error;

/// The main error type for molecule operations
#[derive(Debug, Error)]
pub enum MoleculeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Unknown dependency manager '{0}' (expected one of: galaxy, gilt, shell)")]
    UnknownDependency(String),

    #[error("Executable '{name}' not found: {source}")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed with exit code {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },
}

impl MoleculeError {
    /// Process exit code to terminate with when this error reaches the top level.
    ///
    /// Subprocess failures forward the child's status verbatim.
    pub fn exit_code(&self) -> i32 {
        match self {
            MoleculeError::CommandFailed { exit_code, .. } => *exit_code,
            _ => 1,
        }
    }
}

/// Result type alias for molecule operations
pub type MoleculeResult<T> = Result<T, MoleculeError>;

/// Command-line option values handed to a dependency manager, keyed by flag name
pub type Options = serde_json::Map<String, serde_json::Value>;

/// Environment variables handed to a dependency manager
pub type Env = BTreeMap<String, String>;
