// src/integrations/capacitor.rs

//! Capacitor integration
//!
//! Capacitor ships through the project's npm dependencies rather than a
//! packaged archive, so there are no files to download or merge; `add` only
//! records the integration in project config through the shared lifecycle.

use super::{Integration, IntegrationDeps, IntegrationName};

/// Bridge to Capacitor native runtimes
pub struct CapacitorIntegration {
    deps: IntegrationDeps,
}

impl CapacitorIntegration {
    pub fn new(deps: IntegrationDeps) -> Self {
        Self { deps }
    }
}

impl Integration for CapacitorIntegration {
    fn name(&self) -> IntegrationName {
        IntegrationName::Capacitor
    }

    fn summary(&self) -> &'static str {
        "Target native iOS and Android with Capacitor (managed through npm)"
    }

    fn deps(&self) -> &IntegrationDeps {
        &self.deps
    }

    fn deps_mut(&mut self) -> &mut IntegrationDeps {
        &mut self.deps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::TaskChain;
    use tempfile::TempDir;

    #[test]
    fn test_capacitor_has_no_archive() {
        let temp = TempDir::new().unwrap();
        let deps = IntegrationDeps::new(temp.path().to_path_buf(), TaskChain::silent());
        let integration = CapacitorIntegration::new(deps);
        assert!(integration.archive_url().is_none());
    }
}
