//! Inspector panel for the selected component

use egui::{RichText, Ui};

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Inspector");
    ui.separator();

    let Some(component) = state
        .session
        .selected_id()
        .and_then(|id| state.tree.find(id))
        .cloned()
    else {
        ui.weak("Click a node in the graph to inspect it.");
        return;
    };

    egui::Grid::new("inspector_grid")
        .num_columns(2)
        .spacing([10.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.label(component.display_name());
            ui.end_row();

            ui.label("Type");
            ui.label(component.kind.label());
            ui.end_row();

            ui.label("Children");
            ui.label(component.children.len().to_string());
            ui.end_row();

            ui.label("Id");
            ui.add(egui::Label::new(RichText::new(&component.id).small()).truncate());
            ui.end_row();
        });

    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        if ui.button("Add Child").clicked() {
            state.begin_add_child();
        }
        if ui.button("Edit").clicked() {
            state.begin_edit();
        }
        if ui
            .button(RichText::new("Delete").color(egui::Color32::from_rgb(230, 100, 100)))
            .clicked()
        {
            state.delete_selected();
        }
        if ui.button("Cancel").clicked() {
            state.clear_selection();
        }
    });
}
