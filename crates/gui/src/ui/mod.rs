//! UI panels

pub mod form_window;
pub mod graph_panel;
pub mod inspector;
pub mod status_bar;
pub mod toolbar;
