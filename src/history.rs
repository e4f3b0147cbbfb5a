//! Persistent lesson visit history
//!
//! Tracks lessons the reader has opened and persists them to disk.
//! Entries are stored in MRU (most recently visited) order with a
//! capacity limit.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Maximum number of entries to keep
const MAX_ENTRIES: usize = 50;

/// A single entry in the visit history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEntry {
    /// Route path of the lesson
    pub path: String,
    /// Timestamp when last visited (Unix epoch seconds)
    pub visited_at: u64,
    /// Number of visits (for ranking)
    #[serde(default)]
    pub visit_count: u32,
}

impl VisitEntry {
    /// Create a new entry for the current time
    pub fn new(path: String) -> Self {
        Self {
            path,
            visited_at: now_epoch_secs(),
            visit_count: 1,
        }
    }

    /// Update entry for a repeat visit
    pub fn touch(&mut self) {
        self.visited_at = now_epoch_secs();
        self.visit_count += 1;
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent visit history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitHistory {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Visit entries, most recent first
    pub entries: Vec<VisitEntry>,
}

impl VisitHistory {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load history from disk
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::history_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save history to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::history_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        crate::config_paths::ensure_all_config_dirs();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Record a visit (or update if already present)
    pub fn visit(&mut self, path: &str) {
        if let Some(idx) = self.find_index(path) {
            // Update existing entry and move to front
            self.entries[idx].touch();
            let entry = self.entries.remove(idx);
            self.entries.insert(0, entry);
        } else {
            self.entries.insert(0, VisitEntry::new(path.to_string()));
        }

        // Enforce capacity limit
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recently visited path, if any
    pub fn last_visited(&self) -> Option<&str> {
        self.entries.first().map(|e| e.path.as_str())
    }

    fn find_index(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_and_retrieve() {
        let mut history = VisitHistory::default();
        history.visit("/css/selectors");

        assert_eq!(history.entries.len(), 1);
        assert_eq!(history.last_visited(), Some("/css/selectors"));
    }

    #[test]
    fn test_revisit_moves_to_front() {
        let mut history = VisitHistory::default();
        history.visit("/css/selectors");
        history.visit("/css/box-model");
        history.visit("/css/selectors");

        assert_eq!(history.last_visited(), Some("/css/selectors"));
        assert_eq!(history.entries.len(), 2); // No duplicate
        assert_eq!(history.entries[0].visit_count, 2);
    }

    #[test]
    fn test_capacity_limit_keeps_most_recent() {
        let mut history = VisitHistory::default();
        for i in 0..100 {
            history.visit(&format!("/js/lesson-{}", i));
        }

        assert_eq!(history.entries.len(), MAX_ENTRIES);
        assert_eq!(history.last_visited(), Some("/js/lesson-99"));
        assert_eq!(history.entries[MAX_ENTRIES - 1].path, "/js/lesson-50");
    }

    #[test]
    fn test_clear() {
        let mut history = VisitHistory::default();
        history.visit("/css/selectors");
        history.clear();
        assert!(history.entries.is_empty());
        assert_eq!(history.last_visited(), None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut history = VisitHistory {
            version: VisitHistory::CURRENT_VERSION,
            ..Default::default()
        };
        history.visit("/css/selectors");
        history.visit("/js/variables");

        let json = serde_json::to_string(&history).unwrap();
        let loaded: VisitHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.entries.len(), 2);
        assert_eq!(loaded.last_visited(), Some("/js/variables"));
    }
}
