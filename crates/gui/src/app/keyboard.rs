//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape — close the form, otherwise clear selection
        if i.key_pressed(egui::Key::Escape) {
            if state.session.is_form_open() {
                state.cancel_form();
            } else {
                state.clear_selection();
            }
        }
        // Delete — remove selected component and its subtree
        if i.key_pressed(egui::Key::Delete) && !state.session.is_form_open() {
            state.delete_selected();
        }
    });
}
