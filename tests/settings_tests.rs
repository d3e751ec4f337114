//! Settings store tests against the real filesystem.

use std::fs;

use card_round::core::{GameSettings, SettingsStore};
use card_round::SettingsError;
use tempfile::TempDir;

/// Test a missing file falls back to defaults and writes them out.
#[test]
fn test_missing_file_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let loaded = store.load_or_default();
    assert!(loaded.used_defaults());
    assert!(matches!(loaded.fallback, Some(SettingsError::NotFound(_))));
    assert_eq!(loaded.settings, GameSettings::default());

    // The defaults are now on disk and load cleanly.
    assert_eq!(store.load().unwrap(), GameSettings::default());
}

/// Test saved custom settings are read back unchanged.
#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let settings = GameSettings {
        minimum_victory_score_total: 11,
        required_victory_score_lead: 0,
        victory_score_lead_must_be_exact: true,
        ..GameSettings::default()
    };
    store.save(&settings).unwrap();

    let loaded = store.load_or_default();
    assert!(!loaded.used_defaults());
    assert_eq!(loaded.settings, settings);
}

/// Test a corrupt file is reported and replaced with the defaults.
#[test]
fn test_corrupt_file_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    let store = SettingsStore::new(&path);

    let loaded = store.load_or_default();
    assert!(matches!(loaded.fallback, Some(SettingsError::Parse(_))));
    assert_eq!(store.load().unwrap(), GameSettings::default());
}

/// Test a file from another schema version is not partially applied.
#[test]
fn test_other_version_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut value = serde_json::to_value(GameSettings::default()).unwrap();
    value["version"] = serde_json::json!(7);
    value["minimum_victory_score_total"] = serde_json::json!(99);
    fs::write(&path, value.to_string()).unwrap();

    let loaded = SettingsStore::new(&path).load_or_default();
    assert!(matches!(
        loaded.fallback,
        Some(SettingsError::UnsupportedVersion { found: 7, .. })
    ));
    assert_eq!(loaded.settings.minimum_victory_score_total, 21);
}

/// Test that saving refuses settings that fail validation.
#[test]
fn test_save_rejects_invalid() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));
    let settings = GameSettings {
        player_count_minimum: 0,
        ..GameSettings::default()
    };

    assert!(matches!(store.save(&settings), Err(SettingsError::Invalid(_))));
    assert!(!store.path().exists());
}
