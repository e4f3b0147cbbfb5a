//! Language workers for the playground editor
//!
//! Provides tree-sitter backed editing support with:
//! - Language detection from file extensions
//! - Routing from language to a cached background worker per category
//! - Analysis (parse diagnostics, word completions) off the main thread
//!
//! ## Architecture
//!
//! ```text
//! Session mount/edit → LanguageWorker::analyze (channel send)
//!                    → (worker thread, tree-sitter parse)
//!                    → AnalysisEvent on the context outbox
//!                    → Msg::Session(AnalysisCompleted)
//! ```
//!
//! Workers are opaque, fire-and-forget resources: their absence or delay
//! never blocks an editor session from becoming ready.

mod languages;
mod router;
mod service;

pub use languages::LanguageId;
pub use router::{default_resolver, ResolverHook, WorkerKind, WorkerRouter};
pub use service::{Analysis, AnalysisEvent, Diagnostic, LanguageWorker};
