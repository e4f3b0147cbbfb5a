//! Editor session update handlers
//!
//! Bridges session lifecycle messages to the session manager, including the
//! stale-analysis discard that keeps background results from clobbering
//! newer edits.

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::AppModel;

/// Handle session messages
pub fn update_session(model: &mut AppModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::Create {
            container,
            language,
        } => {
            let id = model.sessions.create(
                container,
                language,
                &mut model.ctx,
                &model.editor_theme,
            );
            tracing::debug!("Created session {:?}", id);
            Some(Cmd::Render)
        }

        SessionMsg::ContainerAttached(id) => {
            model.sessions.attach(id, &mut model.ctx);
            Some(Cmd::Render)
        }

        SessionMsg::Edited { id, text } => {
            model.sessions.edit(id, &text);
            None
        }

        SessionMsg::AnalysisCompleted(event) => {
            if model.sessions.apply_analysis(event) {
                Some(Cmd::Render)
            } else {
                None
            }
        }

        SessionMsg::Dispose(id) => {
            // State survives only through the shared buffer: stash the final
            // text so the next mount on the playground route picks it up.
            if let Some(text) = model.sessions.dispose(id) {
                model.ctx.code_buffer.set(&text);
                Some(Cmd::Render)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::nav::Collection;
    use crate::session::{Container, SessionId, SessionState};
    use crate::workers::{Analysis, AnalysisEvent, LanguageId};

    fn test_model() -> AppModel {
        AppModel::new(Collection::default(), SiteConfig::default(), true)
    }

    fn create(model: &mut AppModel, container: Container) -> SessionId {
        update_session(
            model,
            SessionMsg::Create {
                container,
                language: LanguageId::JavaScript,
            },
        );
        SessionId(0)
    }

    #[test]
    fn test_create_then_attach_completes_deferred_mount() {
        let mut model = test_model();
        let id = create(&mut model, Container::detached());
        assert_eq!(model.sessions.get(id).unwrap().state, SessionState::Mounting);

        update_session(&mut model, SessionMsg::ContainerAttached(id));
        assert_eq!(model.sessions.get(id).unwrap().state, SessionState::Ready);
    }

    #[test]
    fn test_dispose_stashes_text_in_buffer() {
        let mut model = test_model();
        let id = create(&mut model, Container::attached());
        update_session(
            &mut model,
            SessionMsg::Edited {
                id,
                text: "let kept = true;".to_string(),
            },
        );

        update_session(&mut model, SessionMsg::Dispose(id));
        assert_eq!(model.ctx.code_buffer.get(), "let kept = true;");

        // A second dispose finds nothing to do.
        let cmd = update_session(&mut model, SessionMsg::Dispose(id));
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_stale_analysis_produces_no_render() {
        let mut model = test_model();
        let id = create(&mut model, Container::attached());
        update_session(
            &mut model,
            SessionMsg::Edited {
                id,
                text: "edit one".to_string(),
            },
        );

        let stale = AnalysisEvent {
            session: id,
            revision: 0,
            analysis: Analysis::default(),
        };
        let cmd = update_session(&mut model, SessionMsg::AnalysisCompleted(stale));
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_fresh_analysis_is_applied() {
        let mut model = test_model();
        let id = create(&mut model, Container::attached());

        let event = AnalysisEvent {
            session: id,
            revision: 0,
            analysis: Analysis {
                language: LanguageId::JavaScript,
                diagnostics: Vec::new(),
                completions: vec!["console".to_string()],
            },
        };
        let cmd = update_session(&mut model, SessionMsg::AnalysisCompleted(event));
        assert_eq!(cmd, Some(Cmd::Render));
        assert_eq!(
            model.sessions.get(id).unwrap().completions,
            vec!["console"]
        );
    }
}
