//! Language worker routing
//!
//! Maps a [`LanguageId`] to the background service that backs editing
//! features for it. Workers are expensive to spin up, so the router creates
//! them lazily on first request per category and caches the handle for the
//! process lifetime; editor remounts keep hitting the same instances.

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use super::languages::LanguageId;
use super::service::{AnalysisEvent, LanguageWorker};

/// Worker categories
///
/// A closed set: every language maps to exactly one category, and everything
/// unrecognized lands on `Fallback` (word completions only, no diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    /// HTML
    Markup,
    /// CSS
    Styles,
    /// JavaScript and TypeScript share one service
    Script,
    /// JSON / YAML / TOML
    Data,
    /// Everything else
    Fallback,
}

impl WorkerKind {
    pub fn label(&self) -> &'static str {
        match self {
            WorkerKind::Markup => "markup",
            WorkerKind::Styles => "styles",
            WorkerKind::Script => "script",
            WorkerKind::Data => "data",
            WorkerKind::Fallback => "fallback",
        }
    }
}

/// Resolution hook: maps a language to its worker category
pub type ResolverHook = fn(LanguageId) -> WorkerKind;

/// The default resolution table
pub fn default_resolver(id: LanguageId) -> WorkerKind {
    match id {
        LanguageId::Html => WorkerKind::Markup,
        LanguageId::Css => WorkerKind::Styles,
        LanguageId::JavaScript | LanguageId::TypeScript => WorkerKind::Script,
        LanguageId::Json | LanguageId::Yaml | LanguageId::Toml => WorkerKind::Data,
        LanguageId::PlainText => WorkerKind::Fallback,
    }
}

/// Routes languages to cached background workers
///
/// Lives inside the application context; all mutation happens on the update
/// loop, so no locking is needed.
#[derive(Debug)]
pub struct WorkerRouter {
    /// One worker per category, created on first request
    cache: HashMap<WorkerKind, Arc<LanguageWorker>>,
    /// Installed resolution hook (at most one per application lifetime)
    resolver: Option<ResolverHook>,
    /// Outbox shared by every spawned worker
    events: Sender<AnalysisEvent>,
}

impl WorkerRouter {
    pub fn new(events: Sender<AnalysisEvent>) -> Self {
        Self {
            cache: HashMap::new(),
            resolver: None,
            events,
        }
    }

    /// Install the resolution hook
    ///
    /// Idempotent: the first registration wins and later calls are no-ops.
    /// Returns whether this call installed the hook.
    pub fn register_resolver(&mut self, hook: ResolverHook) -> bool {
        if self.resolver.is_some() {
            tracing::debug!("Worker resolver already registered, ignoring");
            return false;
        }
        self.resolver = Some(hook);
        true
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Resolve the worker for a language
    ///
    /// Never fails: unknown or plain-text languages get the fallback worker.
    /// Repeated calls for the same category return the same handle.
    pub fn resolve(&mut self, id: LanguageId) -> Arc<LanguageWorker> {
        let kind = self.resolver.unwrap_or(default_resolver)(id);

        if let Some(worker) = self.cache.get(&kind) {
            return Arc::clone(worker);
        }

        tracing::info!("Spawning {} worker (first request)", kind.label());
        let worker = LanguageWorker::spawn(kind, self.events.clone());
        self.cache.insert(kind, Arc::clone(&worker));
        worker
    }

    /// Number of workers spawned so far
    pub fn spawned_count(&self) -> usize {
        self.cache.len()
    }
}
