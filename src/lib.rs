//! Campus - client core for an educational content site
//!
//! This crate provides the state and logic behind the site's two active
//! subsystems: the playground editor (sessions, shared code buffer, language
//! workers) and course navigation (sidebar, prev/next links), implemented as
//! an Elm Architecture core driven by a host shell.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod history;
pub mod logging;
pub mod messages;
pub mod model;
pub mod nav;
pub mod session;
pub mod theme;
pub mod update;
pub mod workers;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SiteConfig;
pub use messages::Msg;
pub use model::{AppContext, AppModel};
pub use session::{SessionId, SessionManager};
pub use theme::{EditorTheme, ThemePreference};
pub use workers::LanguageId;
