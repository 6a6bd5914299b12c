//! Integration tests for the graph and scene projections.

use model::{ModelComponent, PrimitiveType};
use prism_gui_lib::fixtures;
use prism_gui_lib::graph::{graph_nodes, NODE_SPACING_X, NODE_SPACING_Y};
use prism_gui_lib::scene::{build_scene, flatten_scene};

#[test]
fn test_graph_layout_is_deterministic() {
    let mut root = fixtures::named("r", "Root", PrimitiveType::Group);
    root.children = vec![
        fixtures::named("a", "A", PrimitiveType::Box),
        fixtures::named("b", "B", PrimitiveType::Sphere),
    ];
    let forest = vec![root];

    let first = graph_nodes(&forest);
    let second = graph_nodes(&forest);
    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.pos, y.pos);
    }
}

#[test]
fn test_graph_positions_follow_depth_and_sibling_index() {
    let mut root = fixtures::named("r", "Root", PrimitiveType::Group);
    root.children = vec![
        fixtures::named("a", "A", PrimitiveType::Box),
        fixtures::named("b", "B", PrimitiveType::Sphere),
    ];
    let nodes = graph_nodes(&[root]);

    let pos = |id: &str| nodes.iter().find(|n| n.id == id).unwrap().pos;
    assert_eq!(pos("r"), [0.0, 0.0]);
    assert_eq!(pos("a"), [NODE_SPACING_X, 0.0]);
    assert_eq!(pos("b"), [NODE_SPACING_X, NODE_SPACING_Y]);
}

#[test]
fn test_graph_labels_fall_back_to_type_and_id() {
    let forest = vec![ModelComponent::new("abc", PrimitiveType::Capsule)];
    let nodes = graph_nodes(&forest);
    assert_eq!(nodes[0].label, "Capsule-abc");
}

#[test]
fn test_every_primitive_type_renders_with_defaults() {
    let forest: Vec<ModelComponent> = PrimitiveType::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| ModelComponent::new(format!("p{i}"), *kind))
        .collect();

    let objects = flatten_scene(&build_scene(&forest, None));
    // every type except Group yields a mesh
    assert_eq!(objects.len(), PrimitiveType::ALL.len() - 1);
    for object in &objects {
        assert!(object.mesh.triangle_count() > 0);
        assert!(object.mesh.bounds().is_some());
    }
}

#[test]
fn test_scene_respects_group_transform_for_grandchildren() {
    let mut outer = fixtures::named("outer", "Outer", PrimitiveType::Group);
    let mut inner = fixtures::named("inner", "Inner", PrimitiveType::Group);
    let mut leaf = fixtures::named("leaf", "Leaf", PrimitiveType::Box);

    outer.position = [1.0, 0.0, 0.0];
    inner.position = [0.0, 2.0, 0.0];
    leaf.position = [0.0, 0.0, 3.0];
    inner.children = vec![leaf];
    outer.children = vec![inner];

    let objects = flatten_scene(&build_scene(&[outer], None));
    assert_eq!(objects.len(), 1);
    let origin = objects[0].model.transform_point3(glam::Vec3::ZERO);
    assert!((origin - glam::Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
}
