//! Shared code buffer update handlers

use crate::commands::Cmd;
use crate::messages::BufferMsg;
use crate::model::{AppModel, PLAYGROUND_ROUTE};

/// Handle code buffer messages
pub fn update_buffer(model: &mut AppModel, msg: BufferMsg) -> Option<Cmd> {
    match msg {
        BufferMsg::Set { text, navigate } => {
            // The write happens before the route push is even requested, so
            // any editor mounting after the navigation observes this text.
            model.ctx.code_buffer.set(&text);
            tracing::debug!("Code buffer seeded ({} bytes)", text.len());

            if navigate {
                Some(Cmd::PushRoute(PLAYGROUND_ROUTE.to_string()))
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

    fn test_model() -> AppModel {
        AppModel::new(Collection::default(), SiteConfig::default(), true)
    }

    #[test]
    fn test_set_without_navigate() {
        let mut model = test_model();
        let cmd = update_buffer(
            &mut model,
            BufferMsg::Set {
                text: "body { color: red }".to_string(),
                navigate: false,
            },
        );
        assert_eq!(cmd, None);
        assert_eq!(model.ctx.code_buffer.get(), "body { color: red }");
    }

    #[test]
    fn test_set_with_navigate_pushes_playground_route() {
        let mut model = test_model();
        let cmd = update_buffer(
            &mut model,
            BufferMsg::Set {
                text: "console.log(1)".to_string(),
                navigate: true,
            },
        );
        assert_eq!(cmd, Some(Cmd::PushRoute(PLAYGROUND_ROUTE.to_string())));
        assert_eq!(model.ctx.code_buffer.get(), "console.log(1)");
    }
}
