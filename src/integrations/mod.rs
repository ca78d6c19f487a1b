// src/integrations/mod.rs

//! Integration registry and lifecycle
//!
//! An integration is an optional capability module attachable to a project
//! (e.g. a native-platform bridge). The closed set of kinds is modeled as
//! `IntegrationName` plus one `Integration` implementation per kind,
//! constructed through [`create_from_name`].
//!
//! The `add` operation is the staged pipeline: reset staging, download and
//! extract the archive, resolve conflicts against the project tree, merge
//! the survivors, then enable the integration in project config. Every stage
//! fully completes before the next starts; any I/O failure is terminal and
//! propagates to the caller with no partial-state cleanup.

pub mod capacitor;
mod conflicts;
pub mod cordova;
pub mod enterprise;
mod fetch;
mod merge;
mod staging;

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

pub use capacitor::CapacitorIntegration;
pub use conflicts::{resolve_conflicts, Blacklist, ConflictHandler};
pub use cordova::CordovaIntegration;
pub use enterprise::EnterpriseIntegration;
pub use fetch::fetch_archive;
pub use merge::{merge_tree, OnFileCreate};
pub use staging::{StagingDir, STAGING_DIR_PREFIX};

use crate::error::{Error, Result};
use crate::progress::TaskChain;
use crate::project::{IntegrationConfig, Project};

/// The closed set of recognized integration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationName {
    Capacitor,
    Cordova,
    Enterprise,
}

impl IntegrationName {
    /// Every recognized kind, in display order
    pub const ALL: [IntegrationName; 3] = [
        IntegrationName::Capacitor,
        IntegrationName::Cordova,
        IntegrationName::Enterprise,
    ];

    /// Canonical lowercase name (identity key in config and staging paths)
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationName::Capacitor => "capacitor",
            IntegrationName::Cordova => "cordova",
            IntegrationName::Enterprise => "enterprise",
        }
    }

    /// Parse a user-supplied name, failing with the bad name attached
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "capacitor" => Ok(IntegrationName::Capacitor),
            "cordova" => Ok(IntegrationName::Cordova),
            "enterprise" => Ok(IntegrationName::Enterprise),
            _ => Err(Error::IntegrationNotFound(name.to_string())),
        }
    }
}

impl fmt::Display for IntegrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IntegrationName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Stages of the `add` pipeline, in execution order
///
/// Surfaced in logs; any I/O failure aborts the remaining stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStage {
    Staging,
    Downloading,
    ResolvingConflicts,
    Merging,
    Enabling,
}

impl fmt::Display for AddStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddStage::Staging => "staging",
            AddStage::Downloading => "downloading",
            AddStage::ResolvingConflicts => "resolving conflicts",
            AddStage::Merging => "merging",
            AddStage::Enabling => "enabling",
        };
        f.write_str(s)
    }
}

/// Shared dependencies injected into every integration instance
pub struct IntegrationDeps {
    /// Root of the project being augmented
    pub project_dir: PathBuf,
    /// Root under which staging directories are created; the OS temp root
    /// unless overridden
    pub staging_root: PathBuf,
    /// Sequential task reporter; single writer, one task in flight
    pub tasks: TaskChain,
}

impl IntegrationDeps {
    pub fn new(project_dir: PathBuf, tasks: TaskChain) -> Self {
        Self {
            project_dir,
            staging_root: env::temp_dir(),
            tasks,
        }
    }

    /// Stage under `root` instead of the OS temp root
    pub fn with_staging_root(mut self, root: PathBuf) -> Self {
        self.staging_root = root;
        self
    }
}

/// Project details used to customize newly added files
#[derive(Debug, Clone)]
pub struct PersonalizationDetails {
    pub name: String,
    pub app_id: Option<String>,
}

/// Caller-tunable hooks for one `add` run
///
/// Without a conflict handler no existing file is ever overwritten; without
/// a creation callback new files are merged silently.
#[derive(Default)]
pub struct AddOptions<'a> {
    pub conflict_handler: Option<Box<dyn FnMut(&Path, &fs::Metadata) -> Result<bool> + 'a>>,
    pub on_file_create: Option<Box<dyn FnMut(&Path) + 'a>>,
}

/// One integration kind attached to a project
///
/// Lifecycle operations (`config`, `enable`, `disable`) and the `add`
/// pipeline are shared; variants contribute identity, metadata, the archive
/// location, and optional personalization.
pub trait Integration {
    /// Identity key of this integration
    fn name(&self) -> IntegrationName;

    /// One-line human description
    fn summary(&self) -> &'static str;

    /// Location of the packaged archive; `None` means there is nothing to
    /// download and `add` is a no-op
    fn archive_url(&self) -> Option<&'static str> {
        None
    }

    fn deps(&self) -> &IntegrationDeps;

    fn deps_mut(&mut self) -> &mut IntegrationDeps;

    /// Stored project config for this integration, or `None` when never
    /// configured
    fn config(&self) -> Result<Option<IntegrationConfig>> {
        let project = Project::load(&self.deps().project_dir)?;
        Ok(project.integration_config(self.name().as_str()).cloned())
    }

    /// Mark this integration enabled in project config
    ///
    /// Only an explicit `enabled: false` is flipped to `true`; a
    /// never-configured integration is stored as an empty record, keeping
    /// "never configured" distinct from "explicitly enabled".
    fn enable(&self) -> Result<()> {
        let name = self.name();
        let mut project = Project::load(&self.deps().project_dir)?;

        let mut config = project
            .integration_config(name.as_str())
            .cloned()
            .unwrap_or_default();
        if config.enabled == Some(false) {
            config.enabled = Some(true);
        }

        project.set_integration_config(name.as_str(), config);
        project.refresh_integrations()
    }

    /// Mark this integration explicitly disabled in project config
    fn disable(&self) -> Result<()> {
        let name = self.name();
        let mut project = Project::load(&self.deps().project_dir)?;

        let mut config = project
            .integration_config(name.as_str())
            .cloned()
            .unwrap_or_default();
        config.enabled = Some(false);

        project.set_integration_config(name.as_str(), config);
        project.refresh_integrations()
    }

    /// Customize newly added files using project details. Base behavior is a
    /// no-op; variants may override.
    fn personalize(&self, _details: &PersonalizationDetails) -> Result<()> {
        Ok(())
    }

    /// Download, merge, and enable this integration
    ///
    /// No archive means immediate success with zero side effects. Otherwise
    /// the pipeline runs staging, download/extract, conflict resolution,
    /// merge, and enable, in that order; the config is never marked enabled
    /// if any earlier stage fails.
    fn add(&mut self, mut options: AddOptions<'_>) -> Result<()> {
        let name = self.name();
        let Some(url) = self.archive_url() else {
            debug!("integration {name} has no archive, nothing to add");
            return Ok(());
        };

        let project_dir = self.deps().project_dir.clone();
        let ssl_verify = Project::load(&project_dir)?.ssl_verify();

        debug!("add {name}: {}", AddStage::Staging);
        let staging = StagingDir::create_in(&self.deps().staging_root, name)?;

        debug!("add {name}: {}", AddStage::Downloading);
        {
            let task = self
                .deps_mut()
                .tasks
                .next(&format!("Downloading integration {name}"));
            fetch_archive(url, staging.path(), ssl_verify, task)?;
        }
        self.deps_mut().tasks.end();

        debug!("add {name}: {}", AddStage::ResolvingConflicts);
        let blacklist = resolve_conflicts(
            staging.path(),
            &project_dir,
            options.conflict_handler.as_deref_mut(),
        )?;

        debug!("add {name}: {}", AddStage::Merging);
        merge_tree(
            staging.path(),
            &project_dir,
            &blacklist,
            options.on_file_create.as_deref_mut(),
        )?;

        debug!("add {name}: {}", AddStage::Enabling);
        self.enable()
    }
}

impl fmt::Debug for dyn Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integration")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

/// Construct the integration variant matching `name`
///
/// Unrecognized names fail with [`Error::IntegrationNotFound`] carrying the
/// bad name.
pub fn create_from_name(deps: IntegrationDeps, name: &str) -> Result<Box<dyn Integration>> {
    let integration: Box<dyn Integration> = match IntegrationName::from_name(name)? {
        IntegrationName::Capacitor => Box::new(CapacitorIntegration::new(deps)),
        IntegrationName::Cordova => Box::new(CordovaIntegration::new(deps)),
        IntegrationName::Enterprise => Box::new(EnterpriseIntegration::new(deps)),
    };
    Ok(integration)
}
