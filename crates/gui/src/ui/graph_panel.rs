//! Node-graph panel
//!
//! Draws the component tree as a left-to-right node graph: one card per
//! component, bezier edges from parent to child. Node positions come from
//! the deterministic layout; dragging a card stores a local offset that is
//! purely cosmetic and never touches the model.

use std::collections::HashMap;

use egui::{Color32, Pos2, Rect, Stroke, Ui, Vec2};

use crate::graph::{self, GraphNode};
use crate::state::AppState;

const NODE_SIZE: Vec2 = Vec2::new(140.0, 36.0);
const CANVAS_MARGIN: Vec2 = Vec2::new(24.0, 24.0);

pub struct GraphPanel {
    /// Cosmetic per-node drag offsets, keyed by component id
    drag_offsets: HashMap<String, Vec2>,
}

impl GraphPanel {
    pub fn new() -> Self {
        Self {
            drag_offsets: HashMap::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        ui.heading("Components");
        ui.separator();

        let nodes = graph::graph_nodes(state.tree.forest());
        let edges = graph::graph_edges(state.tree.forest());

        // Offsets for deleted components would otherwise accumulate forever
        self.drag_offsets
            .retain(|id, _| nodes.iter().any(|n| &n.id == id));

        if nodes.is_empty() {
            ui.weak("No components yet.");
            return;
        }

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let origin = ui.cursor().min + CANVAS_MARGIN;
                let canvas = canvas_size(&nodes, &self.drag_offsets);
                let (canvas_rect, _) =
                    ui.allocate_exact_size(canvas + CANVAS_MARGIN * 2.0, egui::Sense::hover());
                let painter = ui.painter_at(canvas_rect);

                let node_rect = |node: &GraphNode, offsets: &HashMap<String, Vec2>| {
                    let offset = offsets.get(&node.id).copied().unwrap_or(Vec2::ZERO);
                    Rect::from_min_size(
                        origin + Vec2::new(node.pos[0], node.pos[1]) + offset,
                        NODE_SIZE,
                    )
                };

                // Edges first, under the cards
                for edge in &edges {
                    let source = nodes.iter().find(|n| n.id == edge.source);
                    let target = nodes.iter().find(|n| n.id == edge.target);
                    if let (Some(source), Some(target)) = (source, target) {
                        let from = node_rect(source, &self.drag_offsets).right_center();
                        let to = node_rect(target, &self.drag_offsets).left_center();
                        draw_edge(&painter, from, to);
                    }
                }

                for node in &nodes {
                    let rect = node_rect(node, &self.drag_offsets);
                    let response = ui.interact(
                        rect,
                        ui.id().with(&node.id),
                        egui::Sense::click_and_drag(),
                    );

                    if response.dragged() {
                        let offset = self.drag_offsets.entry(node.id.clone()).or_default();
                        *offset += response.drag_delta();
                    }
                    if response.clicked() {
                        state.select_component(node.id.clone());
                    }

                    let selected = state.session.selected_id() == Some(node.id.as_str());
                    draw_node(&painter, rect, &node.label, selected, response.hovered());
                }
            });
    }
}

fn canvas_size(nodes: &[GraphNode], offsets: &HashMap<String, Vec2>) -> Vec2 {
    let mut size = Vec2::ZERO;
    for node in nodes {
        let offset = offsets.get(&node.id).copied().unwrap_or(Vec2::ZERO);
        size.x = size.x.max(node.pos[0] + offset.x + NODE_SIZE.x);
        size.y = size.y.max(node.pos[1] + offset.y + NODE_SIZE.y);
    }
    size
}

fn draw_edge(painter: &egui::Painter, from: Pos2, to: Pos2) {
    let bend = ((to.x - from.x).abs() * 0.5).max(20.0);
    let shape = egui::epaint::CubicBezierShape::from_points_stroke(
        [
            from,
            from + Vec2::new(bend, 0.0),
            to - Vec2::new(bend, 0.0),
            to,
        ],
        false,
        Color32::TRANSPARENT,
        Stroke::new(1.5, Color32::from_rgb(110, 110, 125)),
    );
    painter.add(shape);
}

fn draw_node(painter: &egui::Painter, rect: Rect, label: &str, selected: bool, hovered: bool) {
    let fill = if selected {
        Color32::from_rgb(40, 80, 140)
    } else if hovered {
        Color32::from_rgb(55, 55, 64)
    } else {
        Color32::from_rgb(45, 45, 52)
    };
    let stroke = if selected {
        Stroke::new(1.5, Color32::from_rgb(120, 170, 240))
    } else {
        Stroke::new(1.0, Color32::from_rgb(80, 80, 92))
    };

    painter.rect(rect, 4.0, fill, stroke, egui::StrokeKind::Inside);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(13.0),
        Color32::from_rgb(220, 220, 228),
    );
}
