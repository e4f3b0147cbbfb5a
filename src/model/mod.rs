//! Application model - the complete client state of the site
//!
//! This module contains all the state types following the Elm Architecture
//! pattern: one model, mutated only by update functions, with side effects
//! expressed as commands.

pub mod buffer;
pub mod context;
pub mod route;

pub use buffer::CodeBuffer;
pub use context::AppContext;
pub use route::{Route, PLAYGROUND_ROUTE};

use crate::config::SiteConfig;
use crate::history::VisitHistory;
use crate::nav::{self, Collection, PrevNext, SidebarEntry};
use crate::session::SessionManager;
use crate::theme::EditorTheme;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Shared services (code buffer, worker cache)
    pub ctx: AppContext,
    /// The lesson forest, loaded once and read-only thereafter
    pub collection: Collection,
    /// Current route path
    pub route: Route,
    /// Sidebar entries for the active course, recomputed on route change
    pub sidebar: Vec<SidebarEntry>,
    /// Persisted preferences
    pub config: SiteConfig,
    /// Latest platform color-scheme signal
    pub system_prefers_dark: bool,
    /// Resolved editor theme
    pub editor_theme: EditorTheme,
    /// Live editor sessions
    pub sessions: SessionManager,
    /// Visited lessons, most recent first
    pub history: VisitHistory,
}

impl AppModel {
    /// Create a new application model over a lesson collection
    pub fn new(collection: Collection, config: SiteConfig, system_prefers_dark: bool) -> Self {
        let variant = config.theme.resolve(system_prefers_dark);
        let editor_theme = crate::theme::load_theme(variant);

        let mut model = Self {
            ctx: AppContext::new(),
            collection,
            route: Route::default(),
            sidebar: Vec::new(),
            config,
            system_prefers_dark,
            editor_theme,
            sessions: SessionManager::new(),
            history: VisitHistory::load(),
        };
        model.recompute_sidebar();
        model
    }

    /// Rebuild the sidebar for the course in the current route
    ///
    /// Pure derivation from (collection, route); called on every route
    /// change. A route outside any course leaves the sidebar empty.
    pub fn recompute_sidebar(&mut self) {
        self.sidebar = match self.route.course_slug() {
            Some(course) => nav::sidebar_for(&self.collection.courses, course),
            None => Vec::new(),
        };
    }

    /// Index of the sidebar entry matching the current path
    pub fn active_index(&self) -> Option<usize> {
        nav::active_index_of(&self.sidebar, self.route.path())
    }

    /// Prev/next lesson links around the active entry
    pub fn prev_next(&self) -> PrevNext<'_> {
        nav::prev_next(&self.sidebar, self.active_index())
    }
}
