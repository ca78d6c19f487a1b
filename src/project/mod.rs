// src/project/mod.rs

//! Project handle and persisted configuration
//!
//! A project is a directory containing an `ionic.config.json` document. The
//! document owns the integration map: one `IntegrationConfig` record per
//! integration name. Records are mutated only through the integration
//! lifecycle operations (enable/disable) and committed back to disk with
//! `refresh_integrations()`.
//!
//! Config writes are read-modify-write with no optimistic-concurrency check;
//! concurrent writers on the same project can lose updates (last writer wins).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the project configuration document
pub const PROJECT_CONFIG_FILE: &str = "ionic.config.json";

/// Persisted per-integration record
///
/// An absent `enabled` key means the integration was added but never
/// explicitly toggled; readers treat that as enabled. "Never configured"
/// (no record at all) is distinct from "explicitly enabled".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Explicit enable/disable flag; absent = default (enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl IntegrationConfig {
    /// Whether this integration is considered enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// TLS policy applied to integration archive downloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslConfig {
    /// Verify server certificates (default true)
    #[serde(default = "default_ssl_verify")]
    pub verify: bool,
}

fn default_ssl_verify() -> bool {
    true
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

/// The `ionic.config.json` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Human-readable project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Reverse-domain application id (used by personalization)
    #[serde(rename = "appId", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// TLS policy for downloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslConfig>,

    /// Integration name -> persisted record. At most one record per name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub integrations: BTreeMap<String, IntegrationConfig>,
}

/// Handle on a project directory with its loaded configuration
#[derive(Debug, Clone)]
pub struct Project {
    dir: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Load a project from a directory
    ///
    /// A missing config document yields an empty default; it is created on
    /// the first `refresh_integrations()`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(PROJECT_CONFIG_FILE);

        let config = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                Error::ConfigError(format!("failed to read {}: {e}", path.display()))
            })?;
            serde_json::from_str(&raw)
                .map_err(|e| Error::ParseError(format!("{}: {e}", path.display())))?
        } else {
            debug!("no {} in {}, starting empty", PROJECT_CONFIG_FILE, dir.display());
            ProjectConfig::default()
        };

        Ok(Self { dir, config })
    }

    /// Project directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the config document
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(PROJECT_CONFIG_FILE)
    }

    /// The live in-memory configuration
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Mutable access to the live configuration
    pub fn config_mut(&mut self) -> &mut ProjectConfig {
        &mut self.config
    }

    /// Stored record for an integration, or `None` when never configured
    pub fn integration_config(&self, name: &str) -> Option<&IntegrationConfig> {
        self.config.integrations.get(name)
    }

    /// Insert or replace the record for an integration
    pub fn set_integration_config(&mut self, name: &str, config: IntegrationConfig) {
        self.config.integrations.insert(name.to_string(), config);
    }

    /// Whether downloads should verify server certificates
    pub fn ssl_verify(&self) -> bool {
        self.config.ssl.as_ref().map(|s| s.verify).unwrap_or(true)
    }

    /// Commit the in-memory configuration and re-derive integration-dependent
    /// project state
    ///
    /// The document is written atomically: serialized to a sibling temp file,
    /// then renamed over the target.
    pub fn refresh_integrations(&self) -> Result<()> {
        let path = self.config_path();
        let raw = serde_json::to_string_pretty(&self.config)
            .map_err(|e| Error::ConfigError(format!("failed to serialize project config: {e}")))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, raw).map_err(|e| {
            Error::ConfigError(format!("failed to write {}: {e}", temp_path.display()))
        })?;
        fs::rename(&temp_path, &path).map_err(|e| {
            Error::ConfigError(format!(
                "failed to move {} to {}: {e}",
                temp_path.display(),
                path.display()
            ))
        })?;

        debug!("wrote {}", path.display());
        Ok(())
    }
}
