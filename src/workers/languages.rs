//! Language identification
//!
//! Maps file extensions to language IDs and provides language metadata.
//! The set of supported languages is closed: everything the playground does
//! not recognize degrades to `PlainText` and, downstream, to the fallback
//! worker.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    // Markup / styles
    Html,
    Css,
    // Script-like
    JavaScript,
    TypeScript,
    // Config / data
    Json,
    Yaml,
    Toml,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "js" | "mjs" | "cjs" => LanguageId::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => LanguageId::TypeScript,
            "json" | "jsonc" => LanguageId::Json,
            "yaml" | "yml" => LanguageId::Yaml,
            "toml" => LanguageId::Toml,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Json => "JSON",
            LanguageId::Yaml => "YAML",
            LanguageId::Toml => "TOML",
        }
    }

    /// Check if this language has grammar-backed analysis support
    pub fn has_analysis(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(LanguageId::from_extension("html"), LanguageId::Html);
        assert_eq!(LanguageId::from_extension("HTM"), LanguageId::Html);
        assert_eq!(LanguageId::from_extension("css"), LanguageId::Css);
        assert_eq!(LanguageId::from_extension("js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_extension("mjs"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_extension("ts"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_extension("tsx"), LanguageId::TypeScript);
        assert_eq!(LanguageId::from_extension("yml"), LanguageId::Yaml);
        assert_eq!(LanguageId::from_extension("txt"), LanguageId::PlainText);
        assert_eq!(LanguageId::from_extension("unknown"), LanguageId::PlainText);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LanguageId::from_path(Path::new("styles/site.css")),
            LanguageId::Css
        );
        assert_eq!(
            LanguageId::from_path(Path::new("/examples/demo.html")),
            LanguageId::Html
        );
        assert_eq!(
            LanguageId::from_path(Path::new("snippet.ts")),
            LanguageId::TypeScript
        );
        assert_eq!(
            LanguageId::from_path(Path::new("no_extension")),
            LanguageId::PlainText
        );
    }
}
