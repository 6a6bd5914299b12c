//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
mod scene_cache;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;
use scene_cache::SceneCache;

const BACKGROUND_COLOR: [u8; 3] = [26, 26, 30];

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    scene_cache: SceneCache,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            scene_cache: SceneCache::default(),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    pub fn show(&mut self, ui: &mut Ui, state: &AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ──────────────────────────────────
        if response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt))
        {
            let delta = response.drag_delta();
            self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
        }

        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x * 0.01, delta.y * 0.01);
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        // ── Re-derive render objects on tree or selection change ──
        let tree_version = state.tree.version();
        let selected = state.session.selected_id();
        if !self.scene_cache.is_valid(tree_version, selected) {
            self.scene_cache
                .rebuild(state.tree.forest(), selected, tree_version);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect);
        self.draw_overlays(ui, rect, state);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let objects = self.scene_cache.objects().to_vec();
        let version = self.scene_cache.rebuild_count();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = ArcBallCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.sync_from_scene(gl, &objects, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        bg_color: BACKGROUND_COLOR,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.tree.is_empty() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Add a component to get started",
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgb(120, 120, 130),
            );
        }

        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 20.0),
            egui::Align2::CENTER_BOTTOM,
            "middle/alt drag: orbit · right drag: pan · wheel: zoom",
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(100, 100, 110),
        );
    }
}
