//! Playground theme system
//!
//! The site's theme preference is an external signal (dark/light/system);
//! this module resolves it to a concrete editor color theme. Themes are
//! YAML-based, with compile-time embedded defaults and optional user
//! overrides from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/campus/themes/{variant}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::path::Path;

use serde::{Deserialize, Serialize};

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// The externally-provided theme preference signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Follow the platform color scheme
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve the preference against the platform scheme
    pub fn resolve(&self, system_prefers_dark: bool) -> ThemeVariant {
        match self {
            ThemePreference::Dark => ThemeVariant::Dark,
            ThemePreference::Light => ThemeVariant::Light,
            ThemePreference::System => {
                if system_prefers_dark {
                    ThemeVariant::Dark
                } else {
                    ThemeVariant::Light
                }
            }
        }
    }
}

/// A concrete theme choice after resolving `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Stable identifier, also the theme file stem
    pub fn id(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    fn embedded_yaml(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => DARK_YAML,
            ThemeVariant::Light => LIGHT_YAML,
        }
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        // Byte-indexed slicing below requires ASCII; anything else is not a
        // hex color anyway.
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    pub editor: EditorColorsData,
}

/// Editor colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct EditorColorsData {
    pub background: String,
    pub foreground: String,
    pub cursor: String,
    #[serde(default)]
    pub selection: Option<String>,
    #[serde(default)]
    pub diagnostic: Option<String>,
}

/// Resolved editor theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct EditorTheme {
    pub name: String,
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    /// Background color for selected text
    pub selection: Color,
    /// Underline color for diagnostics
    pub diagnostic: Color,
}

impl EditorTheme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let default_selection = Color::rgb(0x26, 0x4F, 0x78);
        let default_diagnostic = Color::rgb(0xF4, 0x47, 0x47);

        Ok(EditorTheme {
            name: data.name,
            background: Color::from_hex(&data.editor.background)?,
            foreground: Color::from_hex(&data.editor.foreground)?,
            cursor: Color::from_hex(&data.editor.cursor)?,
            selection: data
                .editor
                .selection
                .as_ref()
                .map(|s| Color::from_hex(s))
                .transpose()?
                .unwrap_or(default_selection),
            diagnostic: data
                .editor
                .diagnostic
                .as_ref()
                .map(|s| Color::from_hex(s))
                .transpose()?
                .unwrap_or(default_diagnostic),
        })
    }

    /// Hardcoded dark theme, used if YAML parsing ever fails
    pub fn fallback_dark() -> Self {
        Self {
            name: "Dark".to_string(),
            background: Color::rgb(0x1E, 0x1E, 0x1E),
            foreground: Color::rgb(0xD4, 0xD4, 0xD4),
            cursor: Color::rgb(0xFF, 0xFF, 0xFF),
            selection: Color::rgb(0x26, 0x4F, 0x78),
            diagnostic: Color::rgb(0xF4, 0x47, 0x47),
        }
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<EditorTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    EditorTheme::from_yaml(&content)
}

/// Load theme for a variant with priority: user override → embedded
pub fn load_theme(variant: ThemeVariant) -> EditorTheme {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", variant.id()));
        if user_path.exists() {
            match from_file(&user_path) {
                Ok(theme) => {
                    tracing::info!("Loaded user theme from {}", user_path.display());
                    return theme;
                }
                Err(e) => {
                    tracing::warn!("Ignoring broken user theme {}: {}", user_path.display(), e);
                }
            }
        }
    }

    EditorTheme::from_yaml(variant.embedded_yaml()).unwrap_or_else(|e| {
        tracing::error!("Embedded {} theme failed to parse: {}", variant.id(), e);
        EditorTheme::fallback_dark()
    })
}
