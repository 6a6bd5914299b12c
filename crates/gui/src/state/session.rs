//! Editing-session state machine
//!
//! The current target parent for a subsequent add is derived from this
//! state, never read back from the advisory `parent_id` stored on nodes.

/// What the open form is doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

/// Editing-session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Idle,
    ComponentSelected {
        id: String,
    },
    FormOpen {
        mode: FormMode,
        target_parent: Option<String>,
    },
}

impl Session {
    /// Selected component id, if any
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Session::ComponentSelected { id } => Some(id),
            _ => None,
        }
    }

    /// Parent id a submitted Add would attach to
    pub fn target_parent(&self) -> Option<&str> {
        match self {
            Session::ComponentSelected { id } => Some(id),
            Session::FormOpen { target_parent, .. } => target_parent.as_deref(),
            Session::Idle => None,
        }
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self, Session::FormOpen { .. })
    }

    pub fn form_mode(&self) -> Option<&FormMode> {
        match self {
            Session::FormOpen { mode, .. } => Some(mode),
            _ => None,
        }
    }

    /// Graph node click: select and record the id as current target parent
    pub fn select(&mut self, id: String) {
        *self = Session::ComponentSelected { id };
    }

    /// "Open form" intent: clears selection and target parent
    pub fn open_add_form(&mut self) {
        *self = Session::FormOpen {
            mode: FormMode::Add,
            target_parent: None,
        };
    }

    /// "Add child" intent; no-op unless a component is selected
    pub fn open_add_child_form(&mut self) {
        if let Session::ComponentSelected { id } = self {
            *self = Session::FormOpen {
                mode: FormMode::Add,
                target_parent: Some(id.clone()),
            };
        }
    }

    /// "Edit" intent; no-op unless a component is selected
    pub fn open_edit_form(&mut self) {
        if let Session::ComponentSelected { id } = self {
            *self = Session::FormOpen {
                mode: FormMode::Edit { id: id.clone() },
                target_parent: None,
            };
        }
    }

    /// Submit or cancel: back to idle
    pub fn close(&mut self) {
        *self = Session::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_idle() {
        let s = Session::default();
        assert_eq!(s, Session::Idle);
        assert!(s.selected_id().is_none());
        assert!(s.target_parent().is_none());
    }

    #[test]
    fn test_select_records_target_parent() {
        let mut s = Session::default();
        s.select("a".to_string());
        assert_eq!(s.selected_id(), Some("a"));
        assert_eq!(s.target_parent(), Some("a"));
    }

    #[test]
    fn test_open_form_clears_selection_and_target() {
        let mut s = Session::default();
        s.select("a".to_string());
        s.open_add_form();
        assert!(s.selected_id().is_none());
        assert!(s.target_parent().is_none());
        assert_eq!(s.form_mode(), Some(&FormMode::Add));
    }

    #[test]
    fn test_add_child_keeps_target() {
        let mut s = Session::default();
        s.select("a".to_string());
        s.open_add_child_form();
        assert_eq!(s.target_parent(), Some("a"));
        assert_eq!(s.form_mode(), Some(&FormMode::Add));
    }

    #[test]
    fn test_add_child_requires_selection() {
        let mut s = Session::default();
        s.open_add_child_form();
        assert_eq!(s, Session::Idle);
    }

    #[test]
    fn test_edit_targets_selected() {
        let mut s = Session::default();
        s.select("a".to_string());
        s.open_edit_form();
        assert_eq!(
            s.form_mode(),
            Some(&FormMode::Edit {
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_close_returns_to_idle() {
        let mut s = Session::default();
        s.select("a".to_string());
        s.open_edit_form();
        s.close();
        assert_eq!(s, Session::Idle);
    }

    #[test]
    fn test_click_while_form_open_selects() {
        let mut s = Session::default();
        s.open_add_form();
        s.select("b".to_string());
        assert_eq!(s.selected_id(), Some("b"));
        assert!(!s.is_form_open());
    }
}
