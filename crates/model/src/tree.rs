//! Pure operations on the component forest
//!
//! Every operation leaves its input unchanged and returns a new forest
//! (replace-whole-tree semantics). Traversal is pre-order depth-first;
//! first match wins, which is moot while ids stay unique.

use thiserror::Error;

use crate::ModelComponent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("parent component not found: {id}")]
    ParentNotFound { id: String },
}

/// Append `child` to the children of the node with `parent_id`.
///
/// A missing parent is surfaced instead of silently dropping the new node.
pub fn add_child(
    forest: &[ModelComponent],
    parent_id: &str,
    child: ModelComponent,
) -> Result<Vec<ModelComponent>, TreeError> {
    if !contains(forest, parent_id) {
        return Err(TreeError::ParentNotFound {
            id: parent_id.to_string(),
        });
    }
    Ok(insert_child(forest, parent_id, &child))
}

fn insert_child(
    forest: &[ModelComponent],
    parent_id: &str,
    child: &ModelComponent,
) -> Vec<ModelComponent> {
    forest
        .iter()
        .map(|node| {
            let mut node = node.clone();
            if node.id == parent_id {
                node.children.push(child.clone());
            } else {
                node.children = insert_child(&node.children, parent_id, child);
            }
            node
        })
        .collect()
}

/// Replace, anywhere in the forest, the node whose id equals `updated.id`
/// with `updated` verbatim — including whatever children it carries, so
/// callers must carry prior children forward explicitly.
pub fn update_node(forest: &[ModelComponent], updated: &ModelComponent) -> Vec<ModelComponent> {
    forest
        .iter()
        .map(|node| {
            if node.id == updated.id {
                updated.clone()
            } else {
                let mut node = node.clone();
                node.children = update_node(&node.children, updated);
                node
            }
        })
        .collect()
}

/// Remove, at every level, any node whose id equals `id` together with its
/// entire subtree. Deleting an absent id returns an equal forest.
pub fn delete_subtree(forest: &[ModelComponent], id: &str) -> Vec<ModelComponent> {
    forest
        .iter()
        .filter(|node| node.id != id)
        .map(|node| {
            let mut node = node.clone();
            node.children = delete_subtree(&node.children, id);
            node
        })
        .collect()
}

/// Resolve an id back to its component (DFS, first match)
pub fn find_by_id<'a>(forest: &'a [ModelComponent], id: &str) -> Option<&'a ModelComponent> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn contains(forest: &[ModelComponent], id: &str) -> bool {
    find_by_id(forest, id).is_some()
}

/// Total number of components, descendants included
pub fn count(forest: &[ModelComponent]) -> usize {
    forest.iter().map(|n| 1 + count(&n.children)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveType;

    fn comp(id: &str) -> ModelComponent {
        ModelComponent::new(id, PrimitiveType::Box)
    }

    fn comp_with_children(id: &str, children: Vec<ModelComponent>) -> ModelComponent {
        let mut c = ModelComponent::new(id, PrimitiveType::Group);
        c.children = children;
        c
    }

    fn sample_forest() -> Vec<ModelComponent> {
        vec![
            comp_with_children("a", vec![comp("a1"), comp_with_children("a2", vec![comp("a2x")])]),
            comp("b"),
        ]
    }

    #[test]
    fn test_add_child_to_root_node() {
        let forest = sample_forest();
        let out = add_child(&forest, "b", comp("b1")).unwrap();
        let b = find_by_id(&out, "b").unwrap();
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].id, "b1");
        // input untouched
        assert!(find_by_id(&forest, "b").unwrap().children.is_empty());
    }

    #[test]
    fn test_add_child_deep() {
        let forest = sample_forest();
        let out = add_child(&forest, "a2x", comp("leaf")).unwrap();
        assert_eq!(find_by_id(&out, "a2x").unwrap().children[0].id, "leaf");
    }

    #[test]
    fn test_add_child_missing_parent_is_reported() {
        let forest = sample_forest();
        let err = add_child(&forest, "nope", comp("orphan")).unwrap_err();
        assert_eq!(
            err,
            TreeError::ParentNotFound {
                id: "nope".to_string()
            }
        );
        assert_eq!(count(&forest), 5);
    }

    #[test]
    fn test_update_node_replaces_verbatim() {
        let forest = sample_forest();
        let mut updated = comp("a1");
        updated.name = "renamed".to_string();
        updated.position = [1.0, 2.0, 3.0];
        let out = update_node(&forest, &updated);
        let got = find_by_id(&out, "a1").unwrap();
        assert_eq!(got.name, "renamed");
        assert_eq!(got.position, [1.0, 2.0, 3.0]);
        // siblings and structure unchanged
        assert_eq!(count(&out), count(&forest));
        assert_eq!(find_by_id(&out, "a2x").unwrap().id, "a2x");
    }

    #[test]
    fn test_update_node_supplied_children_win() {
        let forest = sample_forest();
        // replace "a2" without carrying its children forward: they are lost
        let updated = comp("a2");
        let out = update_node(&forest, &updated);
        assert!(find_by_id(&out, "a2x").is_none());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let forest = sample_forest();
        let out = update_node(&forest, &comp("ghost"));
        assert_eq!(out, forest);
    }

    #[test]
    fn test_delete_subtree_removes_descendants() {
        let forest = sample_forest();
        let out = delete_subtree(&forest, "a2");
        assert!(find_by_id(&out, "a2").is_none());
        assert!(find_by_id(&out, "a2x").is_none());
        assert!(find_by_id(&out, "a1").is_some());
    }

    #[test]
    fn test_delete_root_node() {
        let forest = sample_forest();
        let out = delete_subtree(&forest, "a");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn test_delete_absent_id_is_idempotent() {
        let forest = sample_forest();
        let out = delete_subtree(&forest, "nope");
        assert_eq!(out, forest);
    }

    #[test]
    fn test_find_by_id_first_match_dfs() {
        let forest = sample_forest();
        assert_eq!(find_by_id(&forest, "a2x").unwrap().id, "a2x");
        assert!(find_by_id(&forest, "zzz").is_none());
    }

    #[test]
    fn test_count() {
        assert_eq!(count(&sample_forest()), 5);
        assert_eq!(count(&[]), 0);
    }
}
