//! Background language service workers
//!
//! Each worker owns a dedicated thread with tree-sitter parsers for the
//! languages in its category. Requests are fire-and-forget: the core sends an
//! [`AnalysisRequest`] over a channel and keeps going; results come back as
//! [`AnalysisEvent`]s on a shared outbox that the host drains into messages.
//! A slow or dead worker therefore never blocks the editor session.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use tree_sitter::{Node, Parser};

use super::languages::LanguageId;
use super::router::WorkerKind;
use crate::session::SessionId;

/// Cap on completion candidates extracted from a single analysis pass
const MAX_COMPLETIONS: usize = 200;

/// A single analysis finding (parse error or missing node)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line of the problem (0-indexed)
    pub line: usize,
    /// Column of the problem (0-indexed, bytes)
    pub column: usize,
    pub message: String,
}

/// Result of one background analysis pass
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub language: LanguageId,
    /// Parse problems, in document order
    pub diagnostics: Vec<Diagnostic>,
    /// Word-based completion candidates, first occurrence order
    pub completions: Vec<String>,
}

/// Completed analysis routed back to the update loop
#[derive(Debug, Clone)]
pub struct AnalysisEvent {
    pub session: SessionId,
    pub revision: u64,
    pub analysis: Analysis,
}

struct AnalysisRequest {
    session: SessionId,
    revision: u64,
    source: String,
    language: LanguageId,
}

/// Handle to one background language service
///
/// Cheap to clone via `Arc`; the router hands out the same `Arc` for every
/// request in a category, so handle identity is stable across editor
/// remounts.
pub struct LanguageWorker {
    kind: WorkerKind,
    requests: Sender<AnalysisRequest>,
}

impl LanguageWorker {
    /// Spawn the worker thread for a category
    ///
    /// Completed analyses are posted to `events`; the thread exits when the
    /// last request sender is dropped.
    pub fn spawn(kind: WorkerKind, events: Sender<AnalysisEvent>) -> Arc<Self> {
        let (tx, rx) = mpsc::channel();

        let spawned = thread::Builder::new()
            .name(format!("lang-worker-{}", kind.label()))
            .spawn(move || worker_loop(kind, rx, events));
        if let Err(e) = spawned {
            // The handle stays usable; requests are simply never answered,
            // which the session treats the same as a slow worker.
            tracing::warn!("Failed to spawn {} worker thread: {}", kind.label(), e);
        }

        Arc::new(Self { kind, requests: tx })
    }

    pub fn kind(&self) -> WorkerKind {
        self.kind
    }

    /// Queue an analysis pass (never blocks, never fails visibly)
    pub fn analyze(&self, session: SessionId, revision: u64, source: String, language: LanguageId) {
        let request = AnalysisRequest {
            session,
            revision,
            source,
            language,
        };
        if self.requests.send(request).is_err() {
            tracing::warn!(
                "{} worker is gone, dropping analysis request for {:?}",
                self.kind.label(),
                session
            );
        }
    }
}

impl std::fmt::Debug for LanguageWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageWorker")
            .field("kind", &self.kind)
            .finish()
    }
}

fn worker_loop(kind: WorkerKind, rx: Receiver<AnalysisRequest>, events: Sender<AnalysisEvent>) {
    // Parsers are created lazily per language and reused for the lifetime of
    // the thread (tree-sitter parsers are !Sync, so they live here).
    let mut parsers: HashMap<LanguageId, Parser> = HashMap::new();

    while let Ok(request) = rx.recv() {
        let analysis = run_analysis(kind, &mut parsers, &request);
        let event = AnalysisEvent {
            session: request.session,
            revision: request.revision,
            analysis,
        };
        if events.send(event).is_err() {
            // Host went away, nothing left to report to.
            break;
        }
    }

    tracing::debug!("{} worker thread exiting", kind.label());
}

fn run_analysis(
    kind: WorkerKind,
    parsers: &mut HashMap<LanguageId, Parser>,
    request: &AnalysisRequest,
) -> Analysis {
    let mut analysis = Analysis {
        language: request.language,
        diagnostics: Vec::new(),
        completions: completion_words(&request.source),
    };

    // The fallback worker (and languages outside this worker's category)
    // provide word completions only.
    let Some(grammar) = grammar_for(kind, request.language) else {
        return analysis;
    };

    let parser = match parsers.entry(request.language) {
        std::collections::hash_map::Entry::Occupied(e) => e.into_mut(),
        std::collections::hash_map::Entry::Vacant(e) => {
            let mut parser = Parser::new();
            if let Err(err) = parser.set_language(&grammar) {
                tracing::error!(
                    "Failed to set grammar for {:?}: {}",
                    request.language,
                    err
                );
                return analysis;
            }
            e.insert(parser)
        }
    };

    match parser.parse(&request.source, None) {
        Some(tree) => {
            collect_error_nodes(tree.root_node(), &mut analysis.diagnostics);
        }
        None => {
            tracing::warn!(
                "Parse produced no tree for {:?} ({} bytes)",
                request.language,
                request.source.len()
            );
        }
    }

    analysis
}

/// Grammar for a language, restricted to the worker's own category
fn grammar_for(kind: WorkerKind, language: LanguageId) -> Option<tree_sitter::Language> {
    match (kind, language) {
        (WorkerKind::Markup, LanguageId::Html) => Some(tree_sitter_html::LANGUAGE.into()),
        (WorkerKind::Styles, LanguageId::Css) => Some(tree_sitter_css::LANGUAGE.into()),
        (WorkerKind::Script, LanguageId::JavaScript) => {
            Some(tree_sitter_javascript::LANGUAGE.into())
        }
        (WorkerKind::Script, LanguageId::TypeScript) => {
            Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        }
        (WorkerKind::Data, LanguageId::Json) => Some(tree_sitter_json::LANGUAGE.into()),
        (WorkerKind::Data, LanguageId::Yaml) => Some(tree_sitter_yaml::language()),
        (WorkerKind::Data, LanguageId::Toml) => Some(tree_sitter_toml_ng::LANGUAGE.into()),
        _ => None,
    }
}

/// Walk the tree and record error/missing nodes in document order
fn collect_error_nodes(root: Node, out: &mut Vec<Diagnostic>) {
    let mut cursor = root.walk();
    let mut descending = true;

    loop {
        let node = cursor.node();
        if descending {
            if node.is_error() {
                let pos = node.start_position();
                out.push(Diagnostic {
                    line: pos.row,
                    column: pos.column,
                    message: "syntax error".to_string(),
                });
            } else if node.is_missing() {
                let pos = node.start_position();
                out.push(Diagnostic {
                    line: pos.row,
                    column: pos.column,
                    message: format!("missing {}", node.kind()),
                });
            }
        }

        // Only recurse below nodes that carry an error somewhere
        if descending && node.has_error() && cursor.goto_first_child() {
            descending = true;
        } else if cursor.goto_next_sibling() {
            descending = true;
        } else if cursor.goto_parent() {
            descending = false;
        } else {
            break;
        }
    }
}

/// Extract word-based completion candidates from source text
///
/// First-occurrence order, deduplicated, short tokens skipped. This is the
/// "basics" every worker (including the fallback) offers.
fn completion_words(source: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for word in source.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
        if word.len() < 3 || word.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            continue;
        }
        if seen.insert(word.to_string()) {
            words.push(word.to_string());
            if words.len() >= MAX_COMPLETIONS {
                break;
            }
        }
    }

    words
}
