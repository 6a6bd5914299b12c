//! Toolbar actions and UI

use egui::Ui;

use crate::fixtures;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button("＋ Add Component")
            .on_hover_text("Open the component form (root level)")
            .clicked()
        {
            state.begin_add();
        }

        if ui
            .button("🍦 Add Ice Cream")
            .on_hover_text("Insert the sample cone + scoop group")
            .clicked()
        {
            state.tree.add_root(fixtures::ice_cream_group());
        }

        ui.separator();

        ui.toggle_value(&mut state.panels.graph, "Graph");
        ui.toggle_value(&mut state.panels.inspector, "Inspector");
    });
}
