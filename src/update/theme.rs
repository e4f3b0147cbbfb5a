//! Theme signal update handlers
//!
//! Applies preference and platform-scheme changes to the resolved editor
//! theme and pushes it into live sessions without remounting them.

use crate::commands::Cmd;
use crate::messages::ThemeMsg;
use crate::model::AppModel;
use crate::theme::load_theme;

/// Handle theme messages
pub fn update_theme(model: &mut AppModel, msg: ThemeMsg) -> Option<Cmd> {
    match msg {
        ThemeMsg::PreferenceChanged(pref) => {
            if model.config.theme == pref {
                return None;
            }
            model.config.theme = pref;
            reapply(model);
            Cmd::batch([Some(Cmd::Render), Some(Cmd::PersistConfig)])
        }

        ThemeMsg::SystemSchemeChanged { prefers_dark } => {
            if model.system_prefers_dark == prefers_dark {
                return None;
            }
            model.system_prefers_dark = prefers_dark;

            // Only the "system" preference tracks the platform scheme.
            if model.config.theme != crate::theme::ThemePreference::System {
                return None;
            }
            reapply(model);
            Some(Cmd::Render)
        }
    }
}

fn reapply(model: &mut AppModel) {
    let variant = model.config.theme.resolve(model.system_prefers_dark);
    model.editor_theme = load_theme(variant);
    model.sessions.apply_theme(&model.editor_theme);
    tracing::info!("Theme switched to {}", model.editor_theme.name);
}
