//! Application context
//!
//! The explicitly constructed home of everything that used to be "module
//! global" in sites like this: the shared code buffer and the worker cache.
//! Built once at startup, owned by [`crate::model::AppModel`], never torn
//! down during a session; consumers receive it by reference instead of
//! reaching for ambient state.

use std::sync::mpsc::{self, Receiver};

use super::buffer::CodeBuffer;
use crate::workers::{AnalysisEvent, WorkerRouter};

/// Long-lived shared services for the whole application
#[derive(Debug)]
pub struct AppContext {
    /// The single in-flight playground source slot
    pub code_buffer: CodeBuffer,
    /// Lazily-spawned, cached language workers
    pub workers: WorkerRouter,
    /// Outbox end for completed worker analyses
    analysis_events: Receiver<AnalysisEvent>,
}

impl AppContext {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            code_buffer: CodeBuffer::new(),
            workers: WorkerRouter::new(tx),
            analysis_events: rx,
        }
    }

    /// Drain one completed analysis, if any arrived
    ///
    /// The host calls this from its event loop and feeds the result back in
    /// as `Msg::Session(AnalysisCompleted)`. Non-blocking by design: the
    /// core never waits on a worker.
    pub fn poll_analysis(&self) -> Option<AnalysisEvent> {
        self.analysis_events.try_recv().ok()
    }

    /// Block until the next analysis arrives (test support)
    ///
    /// Production code polls; tests use this to deterministically wait for a
    /// worker round-trip.
    pub fn wait_analysis(&self) -> Option<AnalysisEvent> {
        self.analysis_events.recv().ok()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
