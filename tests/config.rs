//! Configuration system tests
//!
//! Tests for config paths, site config serialization, and theme loading.

use campus::config_paths;
use campus::theme::{Color, EditorTheme, ThemePreference, ThemeVariant, DARK_YAML, LIGHT_YAML};
use campus::SiteConfig;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_campus() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("campus"));
}

#[test]
fn test_config_dir_uses_dot_config_on_unix() {
    #[cfg(not(target_os = "windows"))]
    {
        if std::env::var_os("XDG_CONFIG_HOME").is_some() {
            return;
        }
        let dir = config_paths::config_dir().unwrap();
        assert!(
            dir.to_string_lossy().contains(".config"),
            "Expected .config in path, got: {}",
            dir.display()
        );
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_history_path_ends_with_json() {
    let path = config_paths::history_path().unwrap();
    assert!(path.to_string_lossy().ends_with("history.json"));
}

#[test]
fn test_themes_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let themes = config_paths::themes_dir().unwrap();
    assert!(themes.starts_with(&config));
}

// ========================================================================
// Site Config Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = SiteConfig::default();
    assert_eq!(config.theme, ThemePreference::System);
    assert!(config.last_route.is_none());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = SiteConfig {
        theme: ThemePreference::Dark,
        last_route: Some("/css/selectors".to_string()),
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_tolerates_partial_yaml() {
    let parsed: SiteConfig = serde_yaml::from_str("theme: dark\n").unwrap();
    assert_eq!(parsed.theme, ThemePreference::Dark);
    assert!(parsed.last_route.is_none());
}

// ========================================================================
// Theme Tests
// ========================================================================

#[test]
fn test_embedded_themes_are_valid() {
    assert!(EditorTheme::from_yaml(DARK_YAML).is_ok());
    assert!(EditorTheme::from_yaml(LIGHT_YAML).is_ok());
}

#[test]
fn test_preference_resolves_against_system_scheme() {
    assert_eq!(ThemePreference::System.resolve(true), ThemeVariant::Dark);
    assert_eq!(ThemePreference::System.resolve(false), ThemeVariant::Light);
    assert_eq!(ThemePreference::Dark.resolve(false), ThemeVariant::Dark);
}

#[test]
fn test_broken_theme_yaml_is_an_error() {
    assert!(EditorTheme::from_yaml("not a theme").is_err());
    assert!(EditorTheme::from_yaml(
        "version: 1\nname: Bad\neditor:\n  background: \"#XYZXYZ\"\n  foreground: \"#000000\"\n  cursor: \"#000000\"\n"
    )
    .is_err());
}

#[test]
fn test_fallback_theme_matches_hex_parsing() {
    let fallback = EditorTheme::fallback_dark();
    assert_eq!(fallback.background, Color::from_hex("#1E1E1E").unwrap());
}

#[test]
fn test_theme_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.yaml");
    std::fs::write(&path, DARK_YAML).unwrap();

    let theme = campus::theme::from_file(&path).unwrap();
    assert_eq!(theme.name, "Campus Dark");
}

#[test]
fn test_missing_theme_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(campus::theme::from_file(&missing).is_err());
}
