//! Site configuration persistence
//!
//! Stores user preferences in `~/.config/campus/config.yaml`

use serde::{Deserialize, Serialize};

use crate::theme::ThemePreference;

/// Preferences that persist across sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Theme preference (dark/light/system)
    #[serde(default)]
    pub theme: ThemePreference,
    /// Last route visited, restored on next launch
    #[serde(default)]
    pub last_route: Option<String>,
}

impl SiteConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.theme, ThemePreference::System);
        assert!(config.last_route.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SiteConfig {
            theme: ThemePreference::Dark,
            last_route: Some("/css/selectors".to_string()),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: SiteConfig = serde_yaml::from_str("theme: light\n").unwrap();
        assert_eq!(parsed.theme, ThemePreference::Light);
        assert!(parsed.last_route.is_none());
    }
}
