//! Navigation update handlers

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::{AppModel, Route};

/// Handle navigation messages
pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::RouteChanged(path) => {
            if model.route.path() == path {
                return None;
            }

            model.route = Route::new(path.clone());
            model.recompute_sidebar();

            // Lesson pages go into the visit history; the playground and the
            // landing page do not.
            if model.route.course_slug().is_some() {
                model.history.visit(&path);
            }
            model.config.last_route = Some(path);

            tracing::debug!(
                "Route changed to {} ({} sidebar entries, active {:?})",
                model.route.path(),
                model.sidebar.len(),
                model.active_index()
            );

            Cmd::batch([Some(Cmd::Render), Some(Cmd::PersistConfig)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::nav::{Collection, LessonNode};

    fn test_model() -> AppModel {
        let collection = Collection::new(vec![LessonNode::new("CSS", "/css").with_children(vec![
            LessonNode::new("Selectors", "/css/selectors"),
            LessonNode::new("Box Model", "/css/box-model"),
            LessonNode::new("Flexbox", "/css/flexbox"),
        ])]);
        AppModel::new(collection, SiteConfig::default(), true)
    }

    #[test]
    fn test_route_change_recomputes_sidebar_and_links() {
        let mut model = test_model();
        let cmd = update_nav(
            &mut model,
            NavMsg::RouteChanged("/css/box-model".to_string()),
        );

        assert!(cmd.is_some());
        assert_eq!(model.active_index(), Some(1));
        let links = model.prev_next();
        assert_eq!(links.prev.map(|e| e.to.as_str()), Some("/css/selectors"));
        assert_eq!(links.next.map(|e| e.to.as_str()), Some("/css/flexbox"));
    }

    #[test]
    fn test_unchanged_route_is_a_noop() {
        let mut model = test_model();
        update_nav(&mut model, NavMsg::RouteChanged("/css/flexbox".to_string()));
        let visits = model.history.entries.len();

        let cmd = update_nav(&mut model, NavMsg::RouteChanged("/css/flexbox".to_string()));
        assert_eq!(cmd, None);
        assert_eq!(model.history.entries.len(), visits);
    }

    #[test]
    fn test_unknown_course_renders_empty_sidebar() {
        let mut model = test_model();
        update_nav(
            &mut model,
            NavMsg::RouteChanged("/nonexistent/intro".to_string()),
        );
        assert!(model.sidebar.is_empty());
        assert_eq!(model.active_index(), None);
        assert!(model.prev_next().prev.is_none());
        assert!(model.prev_next().next.is_none());
    }

    #[test]
    fn test_lesson_visits_are_recorded() {
        let mut model = test_model();
        update_nav(
            &mut model,
            NavMsg::RouteChanged("/css/selectors".to_string()),
        );
        update_nav(&mut model, NavMsg::RouteChanged("/playground".to_string()));

        // Only the lesson route lands in history.
        assert_eq!(model.history.last_visited(), Some("/css/selectors"));
        assert_eq!(model.config.last_route.as_deref(), Some("/playground"));
    }
}
