//! Scene projection: rebuild a 3D scene graph from the component tree
//!
//! The whole scene is torn down and re-derived on every tree change; trees
//! stay small in an editor, so no incremental diffing. Camera and GL state
//! live in the viewport and survive rebuilds.

use glam::{EulerRot, Mat4, Vec3};
use model::ModelComponent;

use crate::geometry::{self, MeshData};

/// Highlight color for the selected component's mesh
pub const SELECTION_COLOR: [f32; 3] = [1.0, 0.62, 0.25];

/// One node of the derived scene graph.
///
/// Grouping components carry no mesh; every node's children are instanced
/// beneath it regardless of its type, so nested transforms accumulate.
pub struct SceneNode {
    pub id: String,
    /// Local transform relative to the parent node
    pub transform: Mat4,
    pub mesh: Option<MeshData>,
    pub children: Vec<SceneNode>,
}

/// Flattened renderable: mesh plus its world matrix
#[derive(Clone)]
pub struct RenderObject {
    pub id: String,
    pub mesh: MeshData,
    pub model: Mat4,
}

/// Build the scene graph for the forest, tinting the selected component
pub fn build_scene(forest: &[ModelComponent], selected: Option<&str>) -> Vec<SceneNode> {
    forest.iter().map(|c| build_node(c, selected)).collect()
}

fn build_node(component: &ModelComponent, selected: Option<&str>) -> SceneNode {
    let mesh = geometry::resolve_shape(component.kind, &component.dimensions).map(|shape| {
        let color = if selected == Some(component.id.as_str()) {
            SELECTION_COLOR
        } else {
            geometry::component_color(component.color.as_deref())
        };
        geometry::shape_mesh(&shape, color)
    });

    SceneNode {
        id: component.id.clone(),
        transform: local_transform(component),
        mesh,
        children: component
            .children
            .iter()
            .map(|c| build_node(c, selected))
            .collect(),
    }
}

/// Local transform of a component: translation then XYZ euler rotation
pub fn local_transform(component: &ModelComponent) -> Mat4 {
    let [tx, ty, tz] = component.position;
    let [rx, ry, rz] = component.rotation;
    Mat4::from_translation(Vec3::new(tx as f32, ty as f32, tz as f32))
        * Mat4::from_euler(EulerRot::XYZ, rx as f32, ry as f32, rz as f32)
}

/// Bake world matrices for the GL renderer
pub fn flatten_scene(nodes: &[SceneNode]) -> Vec<RenderObject> {
    let mut out = Vec::new();
    for node in nodes {
        flatten_node(node, Mat4::IDENTITY, &mut out);
    }
    out
}

fn flatten_node(node: &SceneNode, parent: Mat4, out: &mut Vec<RenderObject>) {
    let world = parent * node.transform;
    if let Some(ref mesh) = node.mesh {
        out.push(RenderObject {
            id: node.id.clone(),
            mesh: mesh.clone(),
            model: world,
        });
    }
    for child in &node.children {
        flatten_node(child, world, out);
    }
}
