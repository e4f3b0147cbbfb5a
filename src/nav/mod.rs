//! Course navigation
//!
//! Derives the sidebar and prev/next lesson links for the course currently
//! being read. Input is the lesson forest from the content collection and
//! the active course slug from the route; output is a flat, ordered list of
//! renderable entries. Everything here is a pure function of its inputs.

mod content;
mod tree;

pub use content::Collection;
pub use tree::{active_index_of, prev_next, sidebar_for, LessonNode, PrevNext, SidebarEntry};
