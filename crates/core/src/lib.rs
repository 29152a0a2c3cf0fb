//! Molecule Core Library
//!
//! Core library for the molecule test orchestrator. It resolves scenario
//! configuration and drives the external dependency managers (gilt,
//! ansible-galaxy, shell) that prepare a scenario before it runs.
//!
//! ## Architecture
//!
//! - [`scenario_manager`] - High-level scenario loading and dependency execution
//! - [`dependency`] - Dependency adapters and their tool-specific drivers
//! - [`execution`] - Baked invocations and the command runner port
//! - [`logger`] - User-facing status reporting port
//! - [`config`] - Resolved runtime configuration and scenario paths
//! - [`configs`] - `molecule.yml` parsing
//! - [`platform`] - Executable lookup
//! - [`results`] - Outcome types for dependency operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use molecule_core::config::CliArgs;
//! use molecule_core::execution::SystemCommandRunner;
//! use molecule_core::logger::ConsoleReporter;
//! use molecule_core::{ScenarioManager, ScenarioManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> molecule_core::types::MoleculeResult<()> {
//! let manager = ScenarioManager::new(ScenarioManagerConfig {
//!     project_directory: PathBuf::from("."),
//!     scenario_name: "default".to_string(),
//!     args: CliArgs { debug: false },
//! })?;
//!
//! let outcome = manager.run_dependency(&SystemCommandRunner::new(), &ConsoleReporter::new())?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod configs;
pub mod dependency;
pub mod execution;
pub mod logger;
pub mod platform;
pub mod results;
pub mod scenario_manager;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the main types for easier usage
pub use scenario_manager::{ScenarioManager, ScenarioManagerConfig};
pub use types::{MoleculeError, MoleculeResult};
