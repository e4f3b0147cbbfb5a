//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each handler
//! mutates the model and optionally returns a command for the host to
//! execute; nothing here performs I/O directly.

mod buffer;
mod nav;
mod session;
mod theme;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use buffer::update_buffer;
pub use nav::update_nav;
pub use session::update_session;
pub use theme::update_theme;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Session(m) => session::update_session(model, m),
        Msg::Nav(m) => nav::update_nav(model, m),
        Msg::Theme(m) => theme::update_theme(model, m),
        Msg::Buffer(m) => buffer::update_buffer(model, m),
    }
}
