//! Integration tests for Settings config loading
//!
//! These tests use explicit config files in temp directories; they do not
//! exercise the global XDG file or `BOXOFFICE_*` env vars, which share
//! process-wide state.

use std::fs;

use tempfile::TempDir;

use boxoffice::config::Settings;

#[test]
fn given_no_config_when_loading_then_compiled_defaults() {
    // Act
    let settings = Settings::load(None).expect("load settings");

    // Assert
    assert_eq!(settings.fee, 10_000);
    assert_eq!(settings.tickets, 100);
    assert_eq!(settings.till, 0);
}

#[test]
fn given_explicit_config_when_loading_then_file_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("boxoffice.toml");
    fs::write(&path, "fee = 5000\ntickets = 2\n").unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert - specified keys override, missing keys keep defaults
    assert_eq!(settings.fee, 5_000);
    assert_eq!(settings.tickets, 2);
    assert_eq!(settings.till, 0);
}

#[test]
fn given_missing_explicit_config_when_loading_then_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.toml");

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(result.is_err());
}
