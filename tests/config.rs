use stardo::config::Config;
use stardo::constants::{CARD_DEFAULT_WIDTH, TICK_RATE_DEFAULT_MS};
use stardo::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert!(!config.ui.start_dark);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert_eq!(config.ui.card_width, CARD_DEFAULT_WIDTH);
    assert_eq!(config.ui.tick_rate_ms, TICK_RATE_DEFAULT_MS);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Card narrower than the minimum should fail
    config.ui.card_width = 10;
    assert!(config.validate().is_err());

    // Reset and test an out-of-range tick
    config.ui.card_width = 60;
    config.ui.tick_rate_ms = 5;
    assert!(config.validate().is_err());

    config.ui.tick_rate_ms = 5000;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("start_dark = false"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[ui]
start_dark = true
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(config.ui.start_dark);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    // Unspecified values fall back to defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.card_width, CARD_DEFAULT_WIDTH);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.start_dark, default_config.ui.start_dark);
    assert_eq!(config.ui.card_width, default_config.ui.card_width);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = std::env::temp_dir().join("stardo_test_invalid_config");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[ui]\ncard_width = 500\n").unwrap();

    let result = Config::load_from_file(&path);
    assert!(result.is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("stardo_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# stardo Configuration File"));

    // The generated file loads back into a valid config
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.card_width, CARD_DEFAULT_WIDTH);

    let _ = fs::remove_dir_all(&temp_dir);
}
