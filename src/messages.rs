//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::session::{Container, SessionId};
use crate::theme::ThemePreference;
use crate::workers::{AnalysisEvent, LanguageId};

/// Editor session lifecycle messages
#[derive(Debug, Clone)]
pub enum SessionMsg {
    /// Create an editor against a container (deferred if detached)
    Create {
        container: Container,
        language: LanguageId,
    },
    /// A deferred container is now part of the page
    ContainerAttached(SessionId),
    /// The user changed the editor text
    Edited { id: SessionId, text: String },
    /// A background analysis finished
    AnalysisCompleted(AnalysisEvent),
    /// Navigation away from the editor view
    Dispose(SessionId),
}

/// Navigation messages
#[derive(Debug, Clone)]
pub enum NavMsg {
    /// The route collaborator reports a new current path
    RouteChanged(String),
}

/// Theme signal messages
#[derive(Debug, Clone)]
pub enum ThemeMsg {
    /// The user picked a preference (dark/light/system)
    PreferenceChanged(ThemePreference),
    /// The platform color scheme flipped
    SystemSchemeChanged { prefers_dark: bool },
}

/// Shared code buffer messages
#[derive(Debug, Clone)]
pub enum BufferMsg {
    /// Seed the playground buffer; optionally navigate to the playground
    Set { text: String, navigate: bool },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Session(SessionMsg),
    Nav(NavMsg),
    Theme(ThemeMsg),
    Buffer(BufferMsg),
}
