// src/lib.rs

//! ionbridge
//!
//! Integration installer for Ionic-style app projects. An integration is an
//! optional third-party platform bridge attached to a project; adding one
//! runs a staged pipeline:
//!
//! - Staging: reset a per-integration directory under the OS temp root
//! - Download: stream the packaged tarball through gzip + tar into staging
//! - Conflicts: ask the caller which colliding files may be overwritten
//! - Merge: copy the surviving staged tree into the project
//! - Enable: persist the enable flag in the project's `ionic.config.json`
//!
//! Every stage completes before the next starts; any I/O failure aborts the
//! rest of the pipeline and surfaces to the caller.

mod error;
pub mod integrations;
pub mod progress;
pub mod project;

pub use error::{Error, Result};
pub use integrations::{
    create_from_name, AddOptions, AddStage, Blacklist, Integration, IntegrationDeps,
    IntegrationName, PersonalizationDetails,
};
pub use progress::{CliProgress, LogProgress, ProgressTracker, SilentProgress, TaskChain};
pub use project::{IntegrationConfig, Project, ProjectConfig, SslConfig, PROJECT_CONFIG_FILE};
