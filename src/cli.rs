// src/cli.rs
//! CLI definitions for ionbridge
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ionbridge")]
#[command(version)]
#[command(about = "Attach third-party platform integrations to an app project", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage project integrations
    Integrations {
        #[command(subcommand)]
        command: IntegrationsCommand,
    },
}

#[derive(Subcommand)]
pub enum IntegrationsCommand {
    /// List known integrations and their configured state
    List {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Download an integration, merge it into the project, and enable it
    Add {
        /// Integration name (capacitor, cordova, enterprise)
        name: String,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Overwrite existing project files on conflict (default: keep)
        #[arg(long)]
        overwrite: bool,

        /// Log progress instead of rendering progress bars
        #[arg(long)]
        quiet: bool,
    },

    /// Enable an integration in project config
    Enable {
        /// Integration name
        name: String,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Disable an integration in project config
    Disable {
        /// Integration name
        name: String,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: String,
    },
}
