//! Application state
//!
//! `AppState` composes the canonical tree, the editing-session state machine
//! and the form buffer, and carries the orchestration logic that the UI
//! panels call into. Everything here is plain data, so the whole editing
//! flow is testable without a window.

pub mod form;
pub mod session;
pub mod tree;

pub use form::ComponentForm;
pub use session::{FormMode, Session};
pub use tree::TreeState;

use model::ModelComponent;
use tracing::{info, warn};

/// Which side panels are shown
pub struct PanelVisibility {
    pub graph: bool,
    pub inspector: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            graph: true,
            inspector: true,
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub tree: TreeState,
    pub session: Session,
    pub form: ComponentForm,
    pub panels: PanelVisibility,
}

impl AppState {
    /// Graph node click
    pub fn select_component(&mut self, id: String) {
        self.session.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.session.close();
    }

    /// Toolbar "Add Component": blank form, no target parent
    pub fn begin_add(&mut self) {
        self.form.reset();
        self.session.open_add_form();
    }

    /// Inspector "Add Child": blank form targeting the selected component
    pub fn begin_add_child(&mut self) {
        if self.session.selected_id().is_some() {
            self.form.reset();
            self.session.open_add_child_form();
        }
    }

    /// Inspector "Edit": form prefilled from the selected component
    pub fn begin_edit(&mut self) {
        let Some(id) = self.session.selected_id() else {
            return;
        };
        let Some(component) = self.tree.find(id) else {
            warn!(id, "edit requested for unknown component");
            return;
        };
        let component = component.clone();
        self.form.load(&component);
        self.session.open_edit_form();
    }

    pub fn cancel_form(&mut self) {
        self.session.close();
        self.form.reset();
    }

    /// Apply the open form: create a component or replace the edited one
    pub fn submit_form(&mut self) {
        match self.session.form_mode().cloned() {
            Some(FormMode::Add) => self.submit_add(),
            Some(FormMode::Edit { id }) => self.submit_edit(&id),
            None => return,
        }
        self.session.close();
        self.form.reset();
    }

    fn submit_add(&mut self) {
        let id = uuid::Uuid::new_v4().to_string();
        let parent_id = self.session.target_parent().map(str::to_string);
        let component = self.form.build_component(id, parent_id.clone(), vec![]);

        match parent_id {
            Some(parent) => {
                if let Err(err) = self.tree.add_child(&parent, component) {
                    warn!(%err, "discarding submitted component");
                }
            }
            None => self.tree.add_root(component),
        }
    }

    fn submit_edit(&mut self, id: &str) {
        let Some(existing) = self.tree.find(id) else {
            warn!(id, "edited component vanished, discarding form");
            return;
        };
        // id, children and recorded parent survive the edit verbatim
        let children = existing.children.clone();
        let parent_id = existing.parent_id.clone();
        let replacement = self
            .form
            .build_component(id.to_string(), parent_id, children);
        self.tree.update(&replacement);
    }

    /// Delete the selected component and everything beneath it
    pub fn delete_selected(&mut self) {
        let Some(id) = self.session.selected_id().map(str::to_string) else {
            return;
        };
        info!(id, "deleting subtree");
        self.tree.delete(&id);
        self.session.close();
    }

    /// Display name of the selected component, if it still exists
    pub fn selected_name(&self) -> Option<String> {
        let id = self.session.selected_id()?;
        self.tree.find(id).map(ModelComponent::display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::PrimitiveType;

    fn add_named_root(state: &mut AppState, name: &str, kind: PrimitiveType) -> String {
        state.begin_add();
        state.form.name = name.to_string();
        state.form.set_kind(kind);
        state.submit_form();
        state
            .tree
            .forest()
            .last()
            .map(|c| c.id.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_flow_creates_root_component() {
        let mut state = AppState::default();
        add_named_root(&mut state, "Jar", PrimitiveType::Cylinder);

        assert_eq!(state.tree.component_count(), 1);
        assert_eq!(state.tree.forest()[0].name, "Jar");
        assert_eq!(state.session, Session::Idle);
    }

    #[test]
    fn test_add_child_flow_nests_under_selection() {
        let mut state = AppState::default();
        let jar_id = add_named_root(&mut state, "Jar", PrimitiveType::Cylinder);

        state.select_component(jar_id.clone());
        state.begin_add_child();
        state.form.name = "Lid".to_string();
        state.submit_form();

        let jar = state.tree.find(&jar_id).unwrap();
        assert_eq!(jar.children.len(), 1);
        assert_eq!(jar.children[0].name, "Lid");
        assert_eq!(jar.children[0].parent_id.as_deref(), Some(jar_id.as_str()));
    }

    #[test]
    fn test_edit_preserves_id_children_and_parent() {
        let mut state = AppState::default();
        state.tree.add_root(crate::fixtures::jar_with_lid());

        state.select_component("Jar".to_string());
        state.begin_edit();
        assert_eq!(state.form.name, "Jar");
        state.form.name = "Big Jar".to_string();
        state.form.position = [0.0, 2.0, 0.0];
        state.submit_form();

        let jar = state.tree.find("Jar").unwrap();
        assert_eq!(jar.name, "Big Jar");
        assert_eq!(jar.position, [0.0, 2.0, 0.0]);
        assert_eq!(jar.children.len(), 1);
        assert_eq!(jar.children[0].id, "Lid");
    }

    #[test]
    fn test_edit_cannot_change_type() {
        // the form's type selector is disabled in edit mode; loading seeds it
        let mut state = AppState::default();
        state.tree.add_root(crate::fixtures::jar_with_lid());
        state.select_component("Jar".to_string());
        state.begin_edit();
        assert_eq!(state.form.kind, PrimitiveType::Cylinder);
    }

    #[test]
    fn test_delete_selected_removes_subtree_and_selection() {
        let mut state = AppState::default();
        state.tree.add_root(crate::fixtures::jar_with_lid());
        state.select_component("Jar".to_string());

        state.delete_selected();

        assert!(state.tree.is_empty());
        assert_eq!(state.session, Session::Idle);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut state = AppState::default();
        state.tree.add_root(crate::fixtures::jar_with_lid());
        let before = state.tree.version();
        state.delete_selected();
        assert_eq!(state.tree.version(), before);
    }

    #[test]
    fn test_cancel_form_discards_input() {
        let mut state = AppState::default();
        state.begin_add();
        state.form.name = "Never Added".to_string();
        state.cancel_form();

        assert!(state.tree.is_empty());
        assert_eq!(state.form.name, "");
        assert_eq!(state.session, Session::Idle);
    }

    #[test]
    fn test_submit_against_deleted_parent_keeps_forest() {
        let mut state = AppState::default();
        let jar_id = add_named_root(&mut state, "Jar", PrimitiveType::Cylinder);

        state.select_component(jar_id.clone());
        state.begin_add_child();
        // parent disappears while the form is open
        state.tree.delete(&jar_id);
        state.form.name = "Orphan".to_string();
        state.submit_form();

        assert!(state.tree.is_empty());
        assert_eq!(state.session, Session::Idle);
    }

    #[test]
    fn test_selected_name_tracks_tree() {
        let mut state = AppState::default();
        state.tree.add_root(crate::fixtures::jar_with_lid());
        state.select_component("Lid".to_string());
        assert_eq!(state.selected_name().as_deref(), Some("Lid"));
        state.tree.delete("Jar");
        assert!(state.selected_name().is_none());
    }
}
