//! Canonical tree state
//!
//! Wraps the pure forest operations: every mutation swaps in a whole new
//! forest and bumps a monotonically increasing version counter that the
//! projections and GPU caches key off.

use model::{ModelComponent, TreeError};

#[derive(Default)]
pub struct TreeState {
    forest: Vec<ModelComponent>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl TreeState {
    pub fn forest(&self) -> &[ModelComponent] {
        &self.forest
    }

    /// Current tree version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Total number of components, descendants included
    pub fn component_count(&self) -> usize {
        model::count(&self.forest)
    }

    pub fn find(&self, id: &str) -> Option<&ModelComponent> {
        model::find_by_id(&self.forest, id)
    }

    /// Append a component at the forest root
    pub fn add_root(&mut self, component: ModelComponent) {
        let mut forest = self.forest.clone();
        forest.push(component);
        self.replace(forest);
    }

    /// Append a component under `parent_id`
    pub fn add_child(&mut self, parent_id: &str, component: ModelComponent) -> Result<(), TreeError> {
        let forest = model::add_child(&self.forest, parent_id, component)?;
        self.replace(forest);
        Ok(())
    }

    /// Replace the node matching `component.id` verbatim
    pub fn update(&mut self, component: &ModelComponent) {
        let forest = model::update_node(&self.forest, component);
        self.replace(forest);
    }

    /// Excise the subtree rooted at `id`
    pub fn delete(&mut self, id: &str) {
        let forest = model::delete_subtree(&self.forest, id);
        self.replace(forest);
    }

    fn replace(&mut self, forest: Vec<ModelComponent>) {
        self.forest = forest;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use model::PrimitiveType;

    #[test]
    fn test_version_bumps_on_every_mutation() {
        let mut t = TreeState::default();
        assert_eq!(t.version(), 0);
        t.add_root(ModelComponent::new("a", PrimitiveType::Box));
        assert_eq!(t.version(), 1);
        t.delete("a");
        assert_eq!(t.version(), 2);
    }

    #[test]
    fn test_add_child_missing_parent_keeps_forest() {
        let mut t = TreeState::default();
        t.add_root(ModelComponent::new("a", PrimitiveType::Box));
        let before = t.version();
        let err = t.add_child("ghost", ModelComponent::new("b", PrimitiveType::Box));
        assert!(err.is_err());
        assert_eq!(t.component_count(), 1);
        assert_eq!(t.version(), before);
    }

    #[test]
    fn test_component_count_includes_descendants() {
        let mut t = TreeState::default();
        t.add_root(fixtures::jar_with_lid());
        assert_eq!(t.component_count(), 2);
    }
}
