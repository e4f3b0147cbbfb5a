//! Content collection loading
//!
//! The lesson forest comes from a YAML content collection produced by the
//! authoring pipeline. The core treats it as read-only input: loaded once at
//! startup, ordering honored as document order, never mutated.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::tree::LessonNode;

/// The full lesson forest, one root per course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub courses: Vec<LessonNode>,
}

impl Collection {
    pub fn new(courses: Vec<LessonNode>) -> Self {
        Self { courses }
    }

    /// Parse a collection from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse content collection")
    }

    /// Load a collection from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content collection: {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Find a course root by its slug
    pub fn course(&self, course_id: &str) -> Option<&LessonNode> {
        self.courses
            .iter()
            .find(|c| super::tree::course_matches(&c.path, course_id))
    }
}
