//! Current route state
//!
//! The route collaborator owns actual navigation; the core only reads the
//! current path (and its course segment) and asks for pushes via
//! [`crate::commands::Cmd::PushRoute`].

/// Route of the playground view
pub const PLAYGROUND_ROUTE: &str = "/playground";

/// The path currently being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First path segment, used as the course identifier
    ///
    /// `/css/selectors/basics` → `Some("css")`; the root path and the
    /// playground route have no course.
    pub fn course_slug(&self) -> Option<&str> {
        let segment = self.path.strip_prefix('/')?.split('/').next()?;
        if segment.is_empty() || self.path == PLAYGROUND_ROUTE {
            return None;
        }
        Some(segment)
    }

    pub fn is_playground(&self) -> bool {
        self.path == PLAYGROUND_ROUTE
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new("/")
    }
}
