//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The core never executes them itself: the host (the page shell) interprets
//! each variant against its own collaborators, which keeps update functions
//! pure and testable.

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-render the affected views
    Render,
    /// Ask the route collaborator to navigate to a path
    PushRoute(String),
    /// Persist the current configuration to disk
    PersistConfig,
    /// Multiple commands, executed in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine optional commands into one, dropping the `None`s
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut flat: Vec<Cmd> = Vec::new();
        for cmd in cmds.into_iter().flatten() {
            match cmd {
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => Some(Cmd::Batch(flat)),
        }
    }

    /// Whether this command (or any batched member) matches a predicate
    pub fn contains(&self, pred: impl Fn(&Cmd) -> bool + Copy) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(pred)),
            other => pred(other),
        }
    }
}
