// src/integrations/staging.rs

//! Staging store for downloaded integration archives
//!
//! Each integration gets a dedicated directory under the OS temp root,
//! derived solely from the integration name. The directory is reset at the
//! start of every `add` so extraction always lands in a clean tree, and is
//! left behind on success for OS temp cleanup to collect.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::IntegrationName;
use crate::error::{Error, Result};

/// Staging directory name prefix under the OS temp root
pub const STAGING_DIR_PREFIX: &str = "ionic-integration-";

/// A freshly reset staging directory for one integration
///
/// The path carries no uniqueness token, so two concurrent installs of the
/// same integration race on the same directory. The pipeline assumes at most
/// one `add` in flight per integration name.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Deterministic staging path for an integration name under the OS temp
    /// root
    pub fn path_for(name: IntegrationName) -> PathBuf {
        Self::path_in(&env::temp_dir(), name)
    }

    /// Deterministic staging path for an integration name under `root`
    pub fn path_in(root: &Path, name: IntegrationName) -> PathBuf {
        root.join(format!("{STAGING_DIR_PREFIX}{name}"))
    }

    /// Destroy any previous staging tree under `root` and recreate it empty
    pub fn create_in(root: &Path, name: IntegrationName) -> Result<Self> {
        let path = Self::path_in(root, name);

        if path.exists() {
            debug!("removing stale staging directory {}", path.display());
            fs::remove_dir_all(&path).map_err(|e| {
                Error::IoError(format!(
                    "failed to remove staging directory {}: {e}",
                    path.display()
                ))
            })?;
        }

        fs::create_dir_all(&path).map_err(|e| {
            Error::IoError(format!(
                "failed to create staging directory {}: {e}",
                path.display()
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o777))?;
        }

        debug!("staging directory ready at {}", path.display());
        Ok(Self { path })
    }

    /// Location of the staging tree
    pub fn path(&self) -> &Path {
        &self.path
    }
}
