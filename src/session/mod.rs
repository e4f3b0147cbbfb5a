//! Editor session lifecycle
//!
//! Owns the visual editor instances bound to host containers. Each session
//! walks a one-way state machine:
//!
//! ```text
//! Unmounted → Mounting → Ready → Disposed
//! ```
//!
//! `Mounting → Ready` happens once the container is attached and the language
//! worker resolves; `Ready → Disposed` happens on navigation away. There is
//! no way back from `Disposed`: route re-entry creates a fresh session, and
//! state survives only through the shared code buffer.
//!
//! Workers are fire-and-forget: a session becomes `Ready` without waiting for
//! its first analysis, and stale analyses (older revision than the session's
//! current text) are discarded on arrival.

use std::collections::HashMap;
use std::sync::Arc;

use ropey::Rope;

use crate::model::AppContext;
use crate::theme::EditorTheme;
use crate::workers::{default_resolver, AnalysisEvent, Diagnostic, LanguageId, LanguageWorker};

/// Opaque identifier for one editor session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Lifecycle phase of one editor instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created but `create` has not run yet
    Unmounted,
    /// Waiting for the container to attach
    Mounting,
    /// Editing; worker wired, theme applied
    Ready,
    /// Terminal; a fresh session is required to edit again
    Disposed,
}

/// The host surface an editor renders into
///
/// Containers are re-created on every route entry, so a session never
/// outlives its container. `attached` mirrors whether the surface is part of
/// the live page yet; creation against a detached container is deferred, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    attached: bool,
}

impl Container {
    /// A container that is already part of the page
    pub fn attached() -> Self {
        Self { attached: true }
    }

    /// A container that exists but has not been inserted yet
    pub fn detached() -> Self {
        Self { attached: false }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

/// One live editor instance
#[derive(Debug)]
pub struct EditorSession {
    pub id: SessionId,
    pub state: SessionState,
    pub container: Container,
    pub language: LanguageId,
    /// Editor text, seeded from the shared code buffer on mount
    text: Rope,
    /// Bumped on every edit; analyses carrying an older value are stale
    revision: u64,
    pub theme: EditorTheme,
    /// Resolved on mount completion; absent while `Mounting`
    worker: Option<Arc<LanguageWorker>>,
    /// Latest non-stale analysis results
    pub diagnostics: Vec<Diagnostic>,
    pub completions: Vec<String>,
}

impl EditorSession {
    /// Current editor text
    pub fn text(&self) -> String {
        self.text.to_string()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn worker(&self) -> Option<&Arc<LanguageWorker>> {
        self.worker.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    fn request_analysis(&self) {
        if let Some(worker) = &self.worker {
            worker.analyze(self.id, self.revision, self.text.to_string(), self.language);
        }
    }
}

/// Creates, mounts, and disposes editor sessions
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, EditorSession>,
    next_id: u64,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor session against a container
    ///
    /// Seeds the text from the shared code buffer and applies the active
    /// theme. If the container is attached, the session mounts immediately
    /// and comes back `Ready`; otherwise it stays `Mounting` until
    /// [`SessionManager::attach`] reports the container live.
    ///
    /// Also installs the worker resolution hook, exactly once per
    /// application lifetime; repeated `create` calls never re-register it.
    pub fn create(
        &mut self,
        container: Container,
        language: LanguageId,
        ctx: &mut AppContext,
        theme: &EditorTheme,
    ) -> SessionId {
        if ctx.workers.register_resolver(default_resolver) {
            tracing::debug!("Installed default worker resolver");
        }

        let id = SessionId(self.next_id);
        self.next_id += 1;

        let mut session = EditorSession {
            id,
            state: SessionState::Unmounted,
            container,
            language,
            text: ctx.code_buffer.rope().clone(),
            revision: 0,
            theme: theme.clone(),
            worker: None,
            diagnostics: Vec::new(),
            completions: Vec::new(),
        };

        session.state = SessionState::Mounting;
        if session.container.is_attached() {
            Self::complete_mount(&mut session, ctx);
        } else {
            tracing::debug!("Deferring mount of {:?}: container not attached", id);
        }

        self.sessions.insert(id, session);
        id
    }

    /// Report that a session's container is now part of the page
    ///
    /// Finishes a deferred mount. No-op for sessions already `Ready` or
    /// `Disposed`.
    pub fn attach(&mut self, id: SessionId, ctx: &mut AppContext) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        session.container = Container::attached();
        if session.state == SessionState::Mounting {
            Self::complete_mount(session, ctx);
        }
    }

    fn complete_mount(session: &mut EditorSession, ctx: &mut AppContext) {
        session.worker = Some(ctx.workers.resolve(session.language));
        session.state = SessionState::Ready;
        session.request_analysis();
        tracing::info!(
            "Session {:?} ready ({})",
            session.id,
            session.language.display_name()
        );
    }

    /// Replace a session's text
    ///
    /// Bumps the revision and queues a fresh analysis; any in-flight
    /// analysis for an older revision will be discarded on arrival.
    pub fn edit(&mut self, id: SessionId, text: &str) {
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        if session.state == SessionState::Disposed {
            return;
        }
        session.text = Rope::from_str(text);
        session.revision += 1;
        session.request_analysis();
    }

    /// Apply a completed background analysis
    ///
    /// Results for a revision older than the session's current one are
    /// dropped. Returns whether the session was updated.
    pub fn apply_analysis(&mut self, event: AnalysisEvent) -> bool {
        let Some(session) = self.sessions.get_mut(&event.session) else {
            tracing::debug!("Analysis for unknown session {:?}", event.session);
            return false;
        };
        if session.state == SessionState::Disposed {
            return false;
        }
        if event.revision < session.revision {
            tracing::debug!(
                "Discarding stale analysis for {:?} (rev {} < {})",
                event.session,
                event.revision,
                session.revision
            );
            return false;
        }
        session.diagnostics = event.analysis.diagnostics;
        session.completions = event.analysis.completions;
        true
    }

    /// Re-apply a theme to every live session, without remounting
    pub fn apply_theme(&mut self, theme: &EditorTheme) {
        for session in self.sessions.values_mut() {
            if session.state != SessionState::Disposed {
                session.theme = theme.clone();
            }
        }
    }

    /// Dispose a session
    ///
    /// Terminal: the session keeps its id but accepts no further edits,
    /// analyses, or mounts. Returns the final text so callers can stash it
    /// back in the shared buffer if they want it to survive.
    pub fn dispose(&mut self, id: SessionId) -> Option<String> {
        let session = self.sessions.get_mut(&id)?;
        if session.state == SessionState::Disposed {
            return None;
        }
        session.state = SessionState::Disposed;
        session.worker = None;
        session.diagnostics.clear();
        session.completions.clear();
        Some(session.text.to_string())
    }

    pub fn get(&self, id: SessionId) -> Option<&EditorSession> {
        self.sessions.get(&id)
    }

    /// Sessions currently in `Ready`
    pub fn ready_count(&self) -> usize {
        self.sessions
            .values()
            .filter(|s| s.state == SessionState::Ready)
            .count()
    }
}
