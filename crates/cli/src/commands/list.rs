use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use molecule_core::ScenarioManager;

pub fn execute(project_directory: &Path) -> Result<()> {
    let scenarios = ScenarioManager::list_scenarios(project_directory)
        .context("Failed to list scenarios")?;

    println!("{}", "Scenarios".bold().underline());

    if scenarios.is_empty() {
        println!("  {}", "No scenarios found".dimmed());
        return Ok(());
    }

    for scenario in scenarios {
        let dependency = if scenario.dependency_enabled {
            scenario.dependency_name.cyan()
        } else {
            format!("{} (disabled)", scenario.dependency_name).dimmed()
        };
        let directory = scenario
            .directory
            .strip_prefix(project_directory)
            .unwrap_or(&scenario.directory);
        println!(
            "{} {} {} {}",
            scenario.name.blue().bold(),
            "dependency:".bright_black(),
            dependency,
            format!("({})", directory.display()).dimmed()
        );
    }

    Ok(())
}
