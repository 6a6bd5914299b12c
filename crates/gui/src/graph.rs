//! Graph projection: flat node/edge lists derived from the component tree
//!
//! Re-derived wholesale whenever the tree changes; manual node drag offsets
//! belong to the graph panel, not to this projection.

use model::ModelComponent;

/// Horizontal spacing per tree depth level
pub const NODE_SPACING_X: f32 = 180.0;
/// Vertical spacing per sibling index
pub const NODE_SPACING_Y: f32 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    /// Layout position: x keyed by depth, y by local sibling index
    pub pos: [f32; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    /// Composite id `"{parent}-{child}"`
    pub id: String,
    pub source: String,
    pub target: String,
}

/// One entry per component, DFS over the whole forest
pub fn graph_nodes(forest: &[ModelComponent]) -> Vec<GraphNode> {
    let mut nodes = Vec::new();
    collect_nodes(forest, 0, &mut nodes);
    nodes
}

fn collect_nodes(forest: &[ModelComponent], depth: u32, out: &mut Vec<GraphNode>) {
    for (index, component) in forest.iter().enumerate() {
        out.push(GraphNode {
            id: component.id.clone(),
            label: component.display_name(),
            pos: [depth as f32 * NODE_SPACING_X, index as f32 * NODE_SPACING_Y],
        });
        collect_nodes(&component.children, depth + 1, out);
    }
}

/// One entry per parent->child relationship, every level of the forest
pub fn graph_edges(forest: &[ModelComponent]) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    collect_edges(forest, &mut edges);
    edges
}

fn collect_edges(forest: &[ModelComponent], out: &mut Vec<GraphEdge>) {
    for parent in forest {
        for child in &parent.children {
            out.push(GraphEdge {
                id: format!("{}-{}", parent.id, child.id),
                source: parent.id.clone(),
                target: child.id.clone(),
            });
        }
        collect_edges(&parent.children, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::tree::find_by_id;
    use model::PrimitiveType;

    fn comp(id: &str, name: &str) -> ModelComponent {
        let mut c = ModelComponent::new(id, PrimitiveType::Box);
        c.name = name.to_string();
        c
    }

    fn nested_forest() -> Vec<ModelComponent> {
        let mut group = comp("g", "Group");
        group.children = vec![comp("c1", "First"), comp("c2", "Second")];
        vec![group, comp("r2", "Root 2")]
    }

    #[test]
    fn test_nodes_cover_all_components() {
        let forest = nested_forest();
        let nodes = graph_nodes(&forest);
        assert_eq!(nodes.len(), 4);
        let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["g", "c1", "c2", "r2"]);
    }

    #[test]
    fn test_layout_positions() {
        let forest = nested_forest();
        let nodes = graph_nodes(&forest);
        assert_eq!(nodes[0].pos, [0.0, 0.0]); // g: depth 0, index 0
        assert_eq!(nodes[1].pos, [NODE_SPACING_X, 0.0]); // c1: depth 1, index 0
        assert_eq!(nodes[2].pos, [NODE_SPACING_X, NODE_SPACING_Y]); // c2: depth 1, index 1
        // sibling index is local to each children listing
        assert_eq!(nodes[3].pos, [0.0, NODE_SPACING_Y]); // r2: depth 0, index 1
    }

    #[test]
    fn test_edges_per_parent_child_pair() {
        let forest = nested_forest();
        let edges = graph_edges(&forest);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].id, "g-c1");
        assert_eq!(edges[0].source, "g");
        assert_eq!(edges[0].target, "c1");
        assert_eq!(edges[1].id, "g-c2");
    }

    #[test]
    fn test_round_trip_every_node_resolves() {
        let forest = nested_forest();
        for node in graph_nodes(&forest) {
            let comp = find_by_id(&forest, &node.id).expect("projected id must resolve");
            assert_eq!(comp.id, node.id);
            assert_eq!(comp.display_name(), node.label);
        }
    }

    #[test]
    fn test_empty_forest() {
        assert!(graph_nodes(&[]).is_empty());
        assert!(graph_edges(&[]).is_empty());
    }
}
