// src/integrations/cordova.rs

//! Cordova integration
//!
//! Ships as a packaged tarball holding the Cordova scaffolding (config.xml,
//! resources). Overrides `personalize` to stamp the project name and app id
//! into a freshly merged config.xml.

use std::fs;

use regex::Regex;
use tracing::info;

use super::{Integration, IntegrationDeps, IntegrationName, PersonalizationDetails};
use crate::error::Result;

/// Packaged Cordova scaffolding archive
pub const CORDOVA_ARCHIVE_URL: &str =
    "https://d2ql0qc7j8u4b2.cloudfront.net/integration-cordova.tar.gz";

/// Bridge to the Apache Cordova native build tool
pub struct CordovaIntegration {
    deps: IntegrationDeps,
}

impl CordovaIntegration {
    pub fn new(deps: IntegrationDeps) -> Self {
        Self { deps }
    }
}

impl Integration for CordovaIntegration {
    fn name(&self) -> IntegrationName {
        IntegrationName::Cordova
    }

    fn summary(&self) -> &'static str {
        "Target native iOS and Android devices with Apache Cordova"
    }

    fn archive_url(&self) -> Option<&'static str> {
        Some(CORDOVA_ARCHIVE_URL)
    }

    fn deps(&self) -> &IntegrationDeps {
        &self.deps
    }

    fn deps_mut(&mut self) -> &mut IntegrationDeps {
        &mut self.deps
    }

    /// Rewrite the widget name and id in the merged config.xml
    fn personalize(&self, details: &PersonalizationDetails) -> Result<()> {
        let config_xml = self.deps.project_dir.join("config.xml");
        if !config_xml.exists() {
            return Ok(());
        }

        let contents = fs::read_to_string(&config_xml)?;

        let name_re = Regex::new(r"<name>[^<]*</name>").expect("invalid name pattern");
        let mut updated = name_re
            .replace(&contents, regex::NoExpand(&format!("<name>{}</name>", details.name)))
            .into_owned();

        if let Some(app_id) = &details.app_id {
            let id_re = Regex::new(r#"(<widget[^>]*\bid=")[^"]*(")"#).expect("invalid id pattern");
            let replacement = format!("${{1}}{app_id}${{2}}");
            updated = id_re.replace(&updated, replacement.as_str()).into_owned();
        }

        if updated != contents {
            fs::write(&config_xml, updated)?;
            info!("Personalized {} for {}", config_xml.display(), details.name);
        }

        Ok(())
    }
}
