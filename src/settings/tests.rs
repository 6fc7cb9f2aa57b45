use super::*;

use std::{env, fs, process};

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.locale, "en");
    assert_eq!(settings.dump, DumpFormat::None);
    assert!(!settings.all_errors);
}

#[test]
fn test_load_settings_override() {
    let path = env::temp_dir().join(format!("catc-settings-{}.toml", process::id()));
    fs::write(&path, "locale = \"de-CH\"\ndump = \"json\"\n").unwrap();
    let settings = Settings::load(Some(&path));
    fs::remove_file(&path).unwrap();

    let settings = settings.unwrap();
    assert_eq!(settings.locale, "de-CH");
    assert_eq!(settings.dump, DumpFormat::Json);
    assert!(!settings.all_errors);
}

#[test]
fn test_load_settings_missing_file() {
    let path = env::temp_dir().join("catc-settings-does-not-exist.toml");
    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn test_load_settings_invalid_value() {
    let path = env::temp_dir().join(format!("catc-settings-invalid-{}.toml", process::id()));
    fs::write(&path, "dump = \"yaml\"\n").unwrap();
    let settings = Settings::load(Some(&path));
    fs::remove_file(&path).unwrap();
    assert!(settings.is_err());
}
