//! Add/Edit component dialog
//!
//! Renders the form buffer from state/form.rs; all conversions (degrees,
//! hex colors, sparse dimensions) happen in the buffer on submit.

use model::PrimitiveType;

use crate::state::{AppState, FormMode};

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let Some(mode) = state.session.form_mode().cloned() else {
        return;
    };
    let editing = matches!(mode, FormMode::Edit { .. });
    let title = if editing {
        "Edit Component"
    } else {
        "Add Component"
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            if let Some(parent) = state.session.target_parent() {
                if !editing {
                    let parent_name = state
                        .tree
                        .find(parent)
                        .map(|c| c.display_name())
                        .unwrap_or_else(|| parent.to_string());
                    ui.weak(format!("Child of: {parent_name}"));
                    ui.add_space(4.0);
                }
            }

            egui::Grid::new("component_form_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut state.form.name);
                    ui.end_row();

                    ui.label("Type");
                    let mut kind = state.form.kind;
                    ui.add_enabled_ui(!editing, |ui| {
                        egui::ComboBox::from_id_salt("component_kind")
                            .selected_text(kind.label())
                            .show_ui(ui, |ui| {
                                for candidate in PrimitiveType::ALL {
                                    ui.selectable_value(&mut kind, candidate, candidate.label());
                                }
                            });
                    });
                    state.form.set_kind(kind);
                    ui.end_row();

                    dimension_rows(ui, state);

                    ui.label("Position");
                    vec3_row(ui, &mut state.form.position, 0.1);
                    ui.end_row();

                    ui.label("Rotation °");
                    vec3_row(ui, &mut state.form.rotation_deg, 1.0);
                    ui.end_row();

                    ui.label("Color");
                    ui.color_edit_button_srgb(&mut state.form.color);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let label = if editing { "Save" } else { "Add" };
                if ui.button(label).clicked() {
                    submit = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if submit {
        state.submit_form();
    } else if cancel {
        state.cancel_form();
    }
}

fn dimension_rows(ui: &mut egui::Ui, state: &mut AppState) {
    let kind = state.form.kind;
    let dims = &mut state.form.dims;
    match kind {
        PrimitiveType::Box => {
            scalar_row(ui, "Width", &mut dims.width);
            scalar_row(ui, "Height", &mut dims.height);
            scalar_row(ui, "Depth", &mut dims.depth);
        }
        PrimitiveType::Sphere | PrimitiveType::Circle => {
            scalar_row(ui, "Radius", &mut dims.radius);
        }
        PrimitiveType::Cylinder => {
            scalar_row(ui, "Radius top", &mut dims.radius_top);
            scalar_row(ui, "Radius bottom", &mut dims.radius_bottom);
            scalar_row(ui, "Height", &mut dims.height);
        }
        PrimitiveType::Cone => {
            scalar_row(ui, "Radius", &mut dims.radius);
            scalar_row(ui, "Height", &mut dims.height);
        }
        PrimitiveType::Capsule => {
            scalar_row(ui, "Radius", &mut dims.radius);
            scalar_row(ui, "Length", &mut dims.length);
        }
        PrimitiveType::Group => {}
    }
}

fn scalar_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.label(label);
    ui.add(
        egui::DragValue::new(value)
            .speed(0.05)
            .range(0.01..=1000.0),
    );
    ui.end_row();
}

fn vec3_row(ui: &mut egui::Ui, values: &mut [f64; 3], speed: f64) {
    ui.horizontal(|ui| {
        for (axis, value) in ["x", "y", "z"].iter().zip(values.iter_mut()) {
            ui.label(*axis);
            ui.add(egui::DragValue::new(value).speed(speed));
        }
    });
}
