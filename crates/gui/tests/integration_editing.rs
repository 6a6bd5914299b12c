//! Integration tests for the editing flow.
//!
//! Drives the session controller end-to-end: form -> tree -> projections,
//! the way the panels do at runtime.

use model::PrimitiveType;
use prism_gui_lib::fixtures;
use prism_gui_lib::graph::{graph_edges, graph_nodes};
use prism_gui_lib::scene::{build_scene, flatten_scene};
use prism_gui_lib::state::AppState;

fn submit_named(state: &mut AppState, name: &str, kind: PrimitiveType) {
    state.form.name = name.to_string();
    state.form.set_kind(kind);
    state.submit_form();
}

fn last_root_id(state: &AppState) -> String {
    state
        .tree
        .forest()
        .last()
        .map(|c| c.id.clone())
        .unwrap_or_default()
}

#[test]
fn test_add_child_end_to_end() {
    let mut state = AppState::default();

    state.begin_add();
    submit_named(&mut state, "Jar", PrimitiveType::Cylinder);
    let jar_id = last_root_id(&state);

    state.select_component(jar_id.clone());
    state.begin_add_child();
    submit_named(&mut state, "Lid", PrimitiveType::Box);

    // Tree: one root, one nested child
    let jar = state.tree.find(&jar_id).unwrap();
    assert_eq!(jar.children.len(), 1);
    let lid_id = jar.children[0].id.clone();

    // Graph projection: two nodes, one edge parent -> child
    let nodes = graph_nodes(state.tree.forest());
    let edges = graph_edges(state.tree.forest());
    assert_eq!(nodes.len(), 2);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id, format!("{jar_id}-{lid_id}"));
    assert_eq!(edges[0].source, jar_id);
    assert_eq!(edges[0].target, lid_id);

    // Scene projection: both primitives produce meshes
    let objects = flatten_scene(&build_scene(state.tree.forest(), None));
    assert_eq!(objects.len(), 2);
}

#[test]
fn test_delete_removes_subtree_from_all_projections() {
    let mut state = AppState::default();
    state.tree.add_root(fixtures::jar_with_lid());
    state.tree.add_root(fixtures::named("solo", "Solo", PrimitiveType::Sphere));

    state.select_component("Jar".to_string());
    state.delete_selected();

    assert_eq!(state.tree.component_count(), 1);
    assert!(state.tree.find("Lid").is_none());

    let nodes = graph_nodes(state.tree.forest());
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, "solo");
    assert!(graph_edges(state.tree.forest()).is_empty());

    let objects = flatten_scene(&build_scene(state.tree.forest(), None));
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].id, "solo");
}

#[test]
fn test_edit_flows_through_scene_projection() {
    let mut state = AppState::default();
    state.begin_add();
    submit_named(&mut state, "Ball", PrimitiveType::Sphere);
    let id = last_root_id(&state);

    state.select_component(id.clone());
    state.begin_edit();
    state.form.dims.radius = 2.0;
    state.form.position = [3.0, 0.0, 0.0];
    state.submit_form();

    let objects = flatten_scene(&build_scene(state.tree.forest(), None));
    assert_eq!(objects.len(), 1);
    let origin = objects[0].model.transform_point3(glam::Vec3::ZERO);
    assert!((origin.x - 3.0).abs() < 1e-5);
    let (min, max) = objects[0].mesh.bounds().unwrap();
    assert!((max[1] - 2.0).abs() < 1e-2);
    assert!((min[1] + 2.0).abs() < 1e-2);
}

#[test]
fn test_ice_cream_sample_projects_fully() {
    let mut state = AppState::default();
    state.tree.add_root(fixtures::ice_cream_group());

    let nodes = graph_nodes(state.tree.forest());
    let edges = graph_edges(state.tree.forest());
    assert_eq!(nodes.len(), 3);
    assert_eq!(edges.len(), 2);

    // group renders nothing itself; cone and scoop do
    let objects = flatten_scene(&build_scene(state.tree.forest(), None));
    assert_eq!(objects.len(), 2);
}

#[test]
fn test_selection_survives_unrelated_mutation() {
    let mut state = AppState::default();
    state.tree.add_root(fixtures::jar_with_lid());
    state.select_component("Lid".to_string());

    state.tree.add_root(fixtures::named("x", "X", PrimitiveType::Box));

    assert_eq!(state.session.selected_id(), Some("Lid"));
    assert_eq!(state.selected_name().as_deref(), Some("Lid"));
}
