//! Status bar with component count and selection summary

use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("Components: {}", state.tree.component_count()));

        ui.separator();

        match state.selected_name() {
            Some(name) => ui.weak(format!("Selected: {name}")),
            None => ui.weak("Nothing selected"),
        };

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.session.is_form_open() {
                ui.weak("Editing…");
            }
        });
    });
}
