// src/commands/integrations.rs
//! Integration management commands

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use ionbridge::{
    create_from_name, AddOptions, Integration, IntegrationDeps, IntegrationName,
    PersonalizationDetails, Project, TaskChain,
};

fn integration_for(project_dir: &str, name: &str, tasks: TaskChain) -> Result<Box<dyn Integration>> {
    let deps = IntegrationDeps::new(PathBuf::from(project_dir), tasks);
    Ok(create_from_name(deps, name)?)
}

/// List known integrations with their configured state
pub fn cmd_integrations_list(project_dir: &str) -> Result<()> {
    let project = Project::load(project_dir)?;

    println!("Integrations:");
    for name in IntegrationName::ALL {
        let state = match project.integration_config(name.as_str()) {
            None => "not configured",
            Some(config) if config.is_enabled() => "enabled",
            Some(_) => "disabled",
        };
        let integration = integration_for(project_dir, name.as_str(), TaskChain::silent())?;
        println!("  {:<12} [{state:<14}] {}", name, integration.summary());
    }
    Ok(())
}

/// Download and merge an integration into the project, then enable it
pub fn cmd_integrations_add(
    name: &str,
    project_dir: &str,
    overwrite: bool,
    quiet: bool,
) -> Result<()> {
    info!("Adding integration {} to {}", name, project_dir);

    let tasks = if quiet { TaskChain::log() } else { TaskChain::cli() };
    let mut integration = integration_for(project_dir, name, tasks)?;

    let mut created: Vec<PathBuf> = Vec::new();
    let options = AddOptions {
        conflict_handler: Some(Box::new(move |path: &Path, _: &fs::Metadata| {
            if overwrite {
                println!("  overwrite {}", path.display());
            } else {
                println!("  keep      {}", path.display());
            }
            Ok(overwrite)
        })),
        on_file_create: Some(Box::new(|relative: &Path| {
            created.push(relative.to_path_buf());
        })),
    };

    integration.add(options)?;

    for relative in &created {
        println!("  create    {}", relative.display());
    }

    let project = Project::load(project_dir)?;
    if let Some(project_name) = project.config().name.clone() {
        integration.personalize(&PersonalizationDetails {
            name: project_name,
            app_id: project.config().app_id.clone(),
        })?;
    }

    println!("Added integration: {}", name);
    Ok(())
}

/// Enable an integration
pub fn cmd_integrations_enable(name: &str, project_dir: &str) -> Result<()> {
    info!("Enabling integration: {}", name);
    let integration = integration_for(project_dir, name, TaskChain::silent())?;
    integration.enable()?;
    println!("Enabled integration: {}", name);
    Ok(())
}

/// Disable an integration
pub fn cmd_integrations_disable(name: &str, project_dir: &str) -> Result<()> {
    info!("Disabling integration: {}", name);
    let integration = integration_for(project_dir, name, TaskChain::silent())?;
    integration.disable()?;
    println!("Disabled integration: {}", name);
    Ok(())
}
