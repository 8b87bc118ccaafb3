#![forbid(unsafe_code)]
#![cfg(feature = "state-persistence")]

//! Settings file storage through the facade.

use sbui::{BrowserSettings, Error, SortKey, ToolboxPage, load_settings, save_settings};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_settings(dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, BrowserSettings::default());
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("browser.json");

    let mut settings = BrowserSettings::default();
    settings.set("br_sort", "2").unwrap();
    settings.set("br_filter_ping", "120").unwrap();
    settings.set("br_filter_exclude_types", "ctf,dm").unwrap();
    settings.toolbox_page = ToolboxPage::Friends;
    settings.server_address = "10.0.0.1:8303".into();
    save_settings(&path, &settings).unwrap();

    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_ne!(loaded.sort.key, SortKey::default());
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("nested").join("browser.json");
    save_settings(&path, &BrowserSettings::default()).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_is_a_settings_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("browser.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_settings(&path), Err(Error::Settings(_))));
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("browser.json");
    std::fs::write(&path, r#"{ "server_address": "1.2.3.4:8303" }"#).unwrap();
    let loaded = load_settings(&path).unwrap();
    assert_eq!(loaded.server_address, "1.2.3.4:8303");
    assert_eq!(loaded.filter, BrowserSettings::default().filter);
}
