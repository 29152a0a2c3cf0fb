use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use molecule_core::MoleculeError;
use tracing_subscriber::EnvFilter;

mod commands;

/// Molecule - test orchestration for Ansible roles and collections
#[derive(Parser)]
#[command(name = "molecule")]
#[command(about = "Test orchestration for Ansible roles and collections")]
#[command(version)]
struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    project_directory: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the role's dependencies
    Dependency {
        /// Name of the scenario to target
        #[arg(short, long, default_value = "default")]
        scenario_name: String,
    },
    /// List the project's scenarios
    List,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "ERROR:".red().bold(), err);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Dependency { scenario_name } => {
            commands::dependency::execute(cli.project_directory, scenario_name, cli.debug)
        }
        Commands::List => commands::list::execute(&cli.project_directory),
    }
}

/// Subprocess failures terminate with the child's own exit code
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<MoleculeError>()
        .map(MoleculeError::exit_code)
        .unwrap_or(1)
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "molecule_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MOLECULE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
