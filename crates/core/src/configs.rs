//! Configuration file models
//!
//! Serde models for the sections of a scenario's `molecule.yml` that the
//! dependency step reads. Everything else in the file is ignored.

pub mod dependency;
pub mod molecule;

pub use dependency::DependencyConfig;
pub use molecule::{parse_molecule_config, DriverConfig, MoleculeFileConfig, ScenarioConfig};
