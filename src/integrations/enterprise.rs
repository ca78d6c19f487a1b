// src/integrations/enterprise.rs

//! Enterprise integration
//!
//! Packaged premium scaffolding; archive-backed with no personalization.

use super::{Integration, IntegrationDeps, IntegrationName};

/// Packaged enterprise scaffolding archive
pub const ENTERPRISE_ARCHIVE_URL: &str =
    "https://d2ql0qc7j8u4b2.cloudfront.net/integration-enterprise.tar.gz";

/// Premium platform features and support tooling
pub struct EnterpriseIntegration {
    deps: IntegrationDeps,
}

impl EnterpriseIntegration {
    pub fn new(deps: IntegrationDeps) -> Self {
        Self { deps }
    }
}

impl Integration for EnterpriseIntegration {
    fn name(&self) -> IntegrationName {
        IntegrationName::Enterprise
    }

    fn summary(&self) -> &'static str {
        "Premium platform features and support for mission-critical apps"
    }

    fn archive_url(&self) -> Option<&'static str> {
        Some(ENTERPRISE_ARCHIVE_URL)
    }

    fn deps(&self) -> &IntegrationDeps {
        &self.deps
    }

    fn deps_mut(&mut self) -> &mut IntegrationDeps {
        &mut self.deps
    }
}
