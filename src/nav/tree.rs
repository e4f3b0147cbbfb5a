//! Sidebar derivation and prev/next links
//!
//! Pure functions over the lesson forest: no caching, no mutation. The whole
//! derivation is recomputed whenever the active course or path changes, and
//! repeated calls with the same inputs produce identical output in identical
//! order. Document order is the single source of ordering truth; nothing
//! here re-sorts.

use serde::Deserialize;

/// One node in the hierarchical course/lesson content tree
///
/// Immutable for the lifetime of a session; loaded once from the content
/// collection. One root per course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonNode {
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub children: Vec<LessonNode>,
}

impl LessonNode {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<LessonNode>) -> Self {
        self.children = children;
        self
    }
}

/// A renderable sidebar row derived from a lesson node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    pub to: String,
}

/// Adjacent-lesson links for the footer controls
///
/// A `None` side renders as a disabled control, never a broken link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrevNext<'a> {
    pub prev: Option<&'a SidebarEntry>,
    pub next: Option<&'a SidebarEntry>,
}

impl PrevNext<'_> {
    pub const NONE: PrevNext<'static> = PrevNext {
        prev: None,
        next: None,
    };
}

/// Ordered sidebar entries for a course
///
/// Finds the root whose path sits under `/{course_id}` and flattens its
/// children depth-first in document order. An unknown course yields an empty
/// sidebar; a course page with no lessons is valid and renders with empty
/// navigation.
pub fn sidebar_for(forest: &[LessonNode], course_id: &str) -> Vec<SidebarEntry> {
    let Some(root) = forest
        .iter()
        .find(|node| course_matches(&node.path, course_id))
    else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for child in &root.children {
        flatten_into(child, &mut entries);
    }
    entries
}

/// Whether a root path belongs to a course: `/{course_id}` exactly, or
/// `/{course_id}/...`. A plain prefix test would let `/css-advanced` shadow
/// `/css`.
pub(crate) fn course_matches(path: &str, course_id: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    let Some(tail) = rest.strip_prefix(course_id) else {
        return false;
    };
    tail.is_empty() || tail.starts_with('/')
}

fn flatten_into(node: &LessonNode, out: &mut Vec<SidebarEntry>) {
    out.push(SidebarEntry {
        label: node.title.clone(),
        to: node.path.clone(),
    });
    for child in &node.children {
        flatten_into(child, out);
    }
}

/// Position of the entry whose target equals the current path
pub fn active_index_of(sidebar: &[SidebarEntry], current_path: &str) -> Option<usize> {
    sidebar.iter().position(|entry| entry.to == current_path)
}

/// Adjacent entries around the active one
///
/// With no active entry both sides are `None`; at either boundary the
/// missing side is `None`.
pub fn prev_next(sidebar: &[SidebarEntry], active: Option<usize>) -> PrevNext<'_> {
    let Some(index) = active else {
        return PrevNext::NONE;
    };
    PrevNext {
        prev: index.checked_sub(1).and_then(|i| sidebar.get(i)),
        next: sidebar.get(index + 1),
    }
}
