//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{form_window, graph_panel::GraphPanel, inspector, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct EditorApp {
    state: AppState,
    viewport: ViewportPanel,
    graph: GraphPanel,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        styles::configure_styles(&cc.egui_ctx);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        Self {
            state: AppState::default(),
            viewport,
            graph: GraphPanel::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: node graph ───────────────────────────
        if self.state.panels.graph {
            egui::SidePanel::left("graph_panel")
                .default_width(420.0)
                .width_range(220.0..=700.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    self.graph.show(ui, &mut self.state);
                });
        }

        // ── Right panel: inspector ───────────────────────────
        if self.state.panels.inspector {
            egui::SidePanel::right("inspector_panel")
                .default_width(240.0)
                .width_range(180.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    inspector::show(ui, &mut self.state);
                });
        }

        // ── Add/Edit dialog ──────────────────────────────────
        form_window::show(ctx, &mut self.state);

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &self.state);
            });
    }
}
