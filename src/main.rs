// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, IntegrationsCommand};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Integrations { command } => match command {
            IntegrationsCommand::List { project } => commands::cmd_integrations_list(&project),
            IntegrationsCommand::Add {
                name,
                project,
                overwrite,
                quiet,
            } => commands::cmd_integrations_add(&name, &project, overwrite, quiet),
            IntegrationsCommand::Enable { name, project } => {
                commands::cmd_integrations_enable(&name, &project)
            }
            IntegrationsCommand::Disable { name, project } => {
                commands::cmd_integrations_disable(&name, &project)
            }
        },
    }
}
