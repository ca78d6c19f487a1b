// tests/lifecycle.rs

//! Integration lifecycle: factory, enable/disable semantics, and the
//! persisted config document.

mod common;

use std::fs;

use common::{deps_for, empty_project, setup_project};
use ionbridge::{create_from_name, Error, Integration, Project, PROJECT_CONFIG_FILE};

#[test]
fn unknown_names_fail_with_the_bad_name() {
    let project = empty_project();
    for bad in ["flutter", "Cordova", "cordova ", ""] {
        let err = create_from_name(deps_for(project.path()), bad).unwrap_err();
        match err {
            Error::IntegrationNotFound(name) => assert_eq!(name, bad),
            other => panic!("expected IntegrationNotFound for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn config_is_absent_until_configured() {
    let project = empty_project();
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();
    assert!(integration.config().unwrap().is_none());
}

#[test]
fn enable_on_never_configured_stores_an_empty_record() {
    let project = empty_project();
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();

    integration.enable().unwrap();

    // the record exists but does not explicitly claim enabled: true
    let stored = integration.config().unwrap().unwrap();
    assert_eq!(stored.enabled, None);
    assert!(stored.is_enabled());

    let raw = fs::read_to_string(project.path().join(PROJECT_CONFIG_FILE)).unwrap();
    assert!(raw.contains("cordova"));
    assert!(!raw.contains("enabled"));
}

#[test]
fn enable_flips_an_explicit_false_to_true() {
    let project = setup_project(r#"{ "integrations": { "cordova": { "enabled": false } } }"#);
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();

    integration.enable().unwrap();

    let stored = integration.config().unwrap().unwrap();
    assert_eq!(stored.enabled, Some(true));
}

#[test]
fn enable_is_idempotent() {
    let project = empty_project();
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();

    integration.enable().unwrap();
    let once = fs::read_to_string(project.path().join(PROJECT_CONFIG_FILE)).unwrap();

    integration.enable().unwrap();
    let twice = fs::read_to_string(project.path().join(PROJECT_CONFIG_FILE)).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn disable_always_results_in_enabled_false() {
    // never configured
    let project = empty_project();
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();
    integration.disable().unwrap();
    assert_eq!(integration.config().unwrap().unwrap().enabled, Some(false));

    // previously enabled
    let project = setup_project(r#"{ "integrations": { "cordova": { "enabled": true } } }"#);
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();
    integration.disable().unwrap();
    assert_eq!(integration.config().unwrap().unwrap().enabled, Some(false));

    // already disabled
    integration.disable().unwrap();
    assert_eq!(integration.config().unwrap().unwrap().enabled, Some(false));
}

#[test]
fn enable_preserves_other_integrations() {
    let project = setup_project(
        r#"{ "name": "myapp", "integrations": { "enterprise": { "enabled": false } } }"#,
    );
    let integration = create_from_name(deps_for(project.path()), "cordova").unwrap();

    integration.enable().unwrap();

    let reloaded = Project::load(project.path()).unwrap();
    assert_eq!(reloaded.config().name.as_deref(), Some("myapp"));
    assert_eq!(
        reloaded.integration_config("enterprise").unwrap().enabled,
        Some(false)
    );
    assert!(reloaded.integration_config("cordova").is_some());
}
